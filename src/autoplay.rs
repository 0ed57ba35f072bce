// Autoplay attempt orchestration: Idle -> Attempting -> {Playing | Blocked}.
// Every play request carries an AttemptId; settlements for anything but the
// in-flight attempt are stale and dropped. The fallback timer is tracked by
// token so a late timer can never re-show the play affordance.

use log::{debug, warn};

use crate::policy::{AutoplayDecision, PlaybackPolicy, RejectionAction};
use crate::types::*;

/// Marker for a play request that started playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playing;

/// A play request that did not start playback, with the reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blocked(pub BlockReason);

/// Settlement of one `play()` call.
pub type PlayOutcome = Result<Playing, Blocked>;

pub struct AutoplayOrchestrator {
    policy: PlaybackPolicy,
    phase: AutoplayPhase,
    started: bool,
    paused: bool,
    play_button_visible: bool,
    auto_attempted: bool,
    in_flight: Option<(AttemptId, AttemptOrigin)>,
    last_attempt: AttemptId,
    fallback: Option<TimerToken>,
    next_token: u32,
    fallback_delay_ms: u64,
}

impl AutoplayOrchestrator {
    pub fn new(policy: PlaybackPolicy, fallback_delay_ms: u64) -> Self {
        AutoplayOrchestrator {
            policy,
            phase: AutoplayPhase::Idle,
            started: false,
            paused: true,
            play_button_visible: false,
            auto_attempted: false,
            in_flight: None,
            last_attempt: AttemptId::default(),
            fallback: None,
            next_token: 0,
            fallback_delay_ms,
        }
    }

    pub fn phase(&self) -> AutoplayPhase {
        self.phase
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn play_button_visible(&self) -> bool {
        self.play_button_visible
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// The attempt awaiting settlement, if any.
    pub fn in_flight(&self) -> Option<(AttemptId, AttemptOrigin)> {
        self.in_flight
    }

    pub fn fallback_token(&self) -> Option<TimerToken> {
        self.fallback
    }

    /// Arm the fallback timer. No-op once started or while a timer is armed.
    pub fn arm_fallback(&mut self, out: &mut Vec<HostCommand>) {
        if self.started || self.fallback.is_some() {
            return;
        }
        self.next_token = self.next_token.wrapping_add(1);
        let token = TimerToken::new(self.next_token);
        self.fallback = Some(token);
        out.push(HostCommand::ScheduleFallback {
            token,
            delay_ms: self.fallback_delay_ms,
        });
    }

    fn cancel_fallback(&mut self, out: &mut Vec<HostCommand>) {
        if let Some(token) = self.fallback.take() {
            out.push(HostCommand::CancelFallback { token });
        }
    }

    fn issue(&mut self, origin: AttemptOrigin, muted: bool, out: &mut Vec<HostCommand>) -> AttemptId {
        let attempt = self.last_attempt.next();
        self.last_attempt = attempt;
        self.in_flight = Some((attempt, origin));
        self.phase = AutoplayPhase::Attempting { attempt, origin };
        out.push(HostCommand::RequestPlay { attempt, muted });
        attempt
    }

    fn show_play_button(&mut self, out: &mut Vec<HostCommand>) {
        if !self.play_button_visible {
            self.play_button_visible = true;
            out.push(HostCommand::ShowPlayButton);
        }
    }

    /// First readiness signal starts a muted automatic attempt.
    pub fn on_ready(&mut self, signal: Readiness, out: &mut Vec<HostCommand>) {
        if matches!(self.phase, AutoplayPhase::Attempting { .. } | AutoplayPhase::Playing) {
            return;
        }
        match self.policy.on_ready(signal, self.auto_attempted, self.started) {
            AutoplayDecision::AttemptMuted => {
                self.auto_attempted = true;
                let attempt = self.issue(AttemptOrigin::Automatic, true, out);
                debug!("autoplay: {:?} -> muted attempt {}", signal, attempt.as_u32());
            }
            AutoplayDecision::Skip => {}
        }
    }

    /// Manual play tap. Supersedes any in-flight automatic attempt.
    /// Returns the new attempt, or `None` when playback already started.
    pub fn on_tap(&mut self, out: &mut Vec<HostCommand>) -> Option<AttemptId> {
        if self.started {
            return None;
        }
        self.cancel_fallback(out);
        let muted = self.policy.manual_attempt_muted();
        let attempt = self.issue(AttemptOrigin::Manual, muted, out);
        debug!("autoplay: manual attempt {}", attempt.as_u32());
        Some(attempt)
    }

    /// Apply the settlement of `attempt`. Returns the origin when playback
    /// started, so the caller can commit gesture side effects together.
    pub fn settle(
        &mut self,
        attempt: AttemptId,
        outcome: PlayOutcome,
        out: &mut Vec<HostCommand>,
    ) -> Option<AttemptOrigin> {
        let origin = match self.in_flight {
            Some((current, origin)) if current == attempt => origin,
            _ => {
                debug!("autoplay: dropping stale settlement for attempt {}", attempt.as_u32());
                return None;
            }
        };
        self.in_flight = None;
        self.cancel_fallback(out);

        match outcome {
            Ok(Playing) => {
                self.commit_playing(out);
                debug!("autoplay: attempt {} playing ({:?})", attempt.as_u32(), origin);
                Some(origin)
            }
            Err(Blocked(reason)) => {
                if self.started {
                    return None;
                }
                self.phase = AutoplayPhase::Blocked;
                match self.policy.on_rejection(origin, reason) {
                    RejectionAction::ShowManualControl => {
                        debug!("autoplay: attempt {} blocked ({:?})", attempt.as_u32(), reason);
                    }
                    RejectionAction::KeepManualControl => {
                        warn!("manual playback failed: {:?}", reason);
                    }
                }
                self.show_play_button(out);
                None
            }
        }
    }

    fn commit_playing(&mut self, out: &mut Vec<HostCommand>) {
        self.phase = AutoplayPhase::Playing;
        self.started = true;
        self.paused = false;
        if self.play_button_visible {
            self.play_button_visible = false;
            out.push(HostCommand::HidePlayButton);
        }
    }

    /// The element started playing on its own account (native controls,
    /// `autoplay` attribute, or a settlement the host never reported).
    /// An in-flight attempt stays current so its settlement still lands.
    pub fn on_played(&mut self, out: &mut Vec<HostCommand>) {
        self.cancel_fallback(out);
        if !self.started {
            debug!("autoplay: element reported play without a settled attempt");
        }
        self.commit_playing(out);
    }

    pub fn on_paused(&mut self) {
        self.paused = true;
    }

    /// Fallback timer fired. Only the armed token counts.
    pub fn on_fallback(&mut self, token: TimerToken, out: &mut Vec<HostCommand>) {
        if self.fallback != Some(token) {
            debug!("autoplay: ignoring stale fallback timer {}", token.as_u32());
            return;
        }
        self.fallback = None;
        if self.started || !self.paused {
            return;
        }
        let automatic_or_idle = match self.phase {
            AutoplayPhase::Idle => true,
            AutoplayPhase::Attempting { origin, .. } => origin == AttemptOrigin::Automatic,
            AutoplayPhase::Playing | AutoplayPhase::Blocked => false,
        };
        if automatic_or_idle {
            // An in-flight automatic attempt may still resolve and hide the button.
            self.phase = AutoplayPhase::Blocked;
            debug!("autoplay: {:?}", BlockReason::FallbackTimeout);
            self.show_play_button(out);
        }
    }

    /// Component unmounted: drop the timer and forget any in-flight attempt.
    pub fn teardown(&mut self, out: &mut Vec<HostCommand>) {
        self.cancel_fallback(out);
        self.in_flight = None;
    }
}
