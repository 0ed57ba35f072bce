// PlaybackSession: the single state object a hosting page keeps for one media element.
// Host event handlers only call `handle`; they never flip flags directly.
// Invariants: `started` and `revealed` are monotonic, and `started` implies the
// manual play affordance is hidden for the rest of the session.

use log::{debug, info};

use crate::autoplay::{AutoplayOrchestrator, Blocked, Playing};
use crate::config::PlaybackConfig;
use crate::mute::MuteToggle;
use crate::policy::PlaybackPolicy;
use crate::reveal::RevealGate;
use crate::types::*;

pub struct PlaybackSession {
    config: PlaybackConfig,
    orchestrator: AutoplayOrchestrator,
    reveal: RevealGate,
    mute: MuteToggle,
    current_time: Timestamp,
    ready: bool,
    mounted: bool,
    torn_down: bool,
}

impl PlaybackSession {
    pub fn new(config: PlaybackConfig) -> Self {
        let policy = PlaybackPolicy::new(config.autoplay);
        PlaybackSession {
            orchestrator: AutoplayOrchestrator::new(policy, config.fallback_delay_ms),
            reveal: RevealGate::new(Timestamp::from_micros(config.reveal_threshold_us)),
            mute: MuteToggle::new(config.mute_toggle),
            current_time: Timestamp::default(),
            ready: false,
            mounted: false,
            torn_down: false,
            config,
        }
    }

    /// The page mounted its media element. Arms the autoplay fallback timer.
    pub fn mount(&mut self) -> Vec<HostCommand> {
        let mut out = Vec::new();
        if self.mounted || self.torn_down {
            return out;
        }
        self.mounted = true;
        self.orchestrator.arm_fallback(&mut out);
        out
    }

    /// Apply one host event and return the commands it produced.
    pub fn handle(&mut self, event: MediaEvent) -> Vec<HostCommand> {
        let mut out = Vec::new();
        if self.torn_down {
            debug!("session: ignoring {:?} after teardown", event);
            return out;
        }

        match event {
            MediaEvent::Ready { signal } => {
                self.ready = true;
                self.orchestrator.on_ready(signal, &mut out);
            }
            MediaEvent::PlayResolved { attempt } => {
                if let Some(origin) = self.orchestrator.settle(attempt, Ok(Playing), &mut out) {
                    self.ready = true;
                    if origin == AttemptOrigin::Manual {
                        self.mute.unlock_audio();
                    }
                }
            }
            MediaEvent::PlayRejected { attempt, reason } => {
                let manual =
                    self.orchestrator.in_flight() == Some((attempt, AttemptOrigin::Manual));
                self.orchestrator
                    .settle(attempt, Err(Blocked(reason)), &mut out);
                // The host unmuted the element for the gesture attempt; put it back.
                if manual && self.mute.muted() {
                    out.push(HostCommand::SetMuted { muted: true });
                }
            }
            MediaEvent::TimeUpdate { current_time_secs } => {
                self.current_time = Timestamp::from_secs_f64(current_time_secs);
                if self.reveal.observe(self.current_time) {
                    info!("session: reveal at {:.2}s", self.current_time.as_secs());
                    out.push(HostCommand::Reveal);
                }
            }
            MediaEvent::Played => {
                self.ready = true;
                self.orchestrator.on_played(&mut out);
            }
            MediaEvent::Paused => {
                // Pause never re-shows the play affordance once playback started.
                self.orchestrator.on_paused();
                debug!("session: paused (started={})", self.orchestrator.started());
            }
            MediaEvent::FallbackElapsed { token } => {
                self.orchestrator.on_fallback(token, &mut out);
            }
            MediaEvent::PlayTapped => {
                self.orchestrator.on_tap(&mut out);
            }
            MediaEvent::MuteTapped => {
                match self.mute.toggle(self.ready, self.orchestrator.started()) {
                    Some(muted) => out.push(HostCommand::SetMuted { muted }),
                    None => debug!("session: mute toggle unavailable"),
                }
            }
        }

        out
    }

    /// Apply a batch of events in order.
    pub fn handle_batch(&mut self, events: Vec<MediaEvent>) -> Vec<HostCommand> {
        events.into_iter().flat_map(|event| self.handle(event)).collect()
    }

    /// The page unmounted. Cancels the fallback timer; later events are ignored.
    pub fn teardown(&mut self) -> Vec<HostCommand> {
        let mut out = Vec::new();
        if self.torn_down {
            return out;
        }
        self.torn_down = true;
        self.orchestrator.teardown(&mut out);
        out
    }

    pub fn muted(&self) -> bool {
        self.mute.muted()
    }

    pub fn started(&self) -> bool {
        self.orchestrator.started()
    }

    pub fn play_button_visible(&self) -> bool {
        self.orchestrator.play_button_visible()
    }

    pub fn revealed(&self) -> bool {
        self.reveal.revealed()
    }

    pub fn current_time(&self) -> Timestamp {
        self.current_time
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            muted: self.muted(),
            started: self.started(),
            play_button_visible: self.play_button_visible(),
            revealed: self.revealed(),
            current_time_secs: self.current_time.as_secs(),
            phase: self.orchestrator.phase(),
            skip_visible: self.config.skip_affordance,
            mute_toggle_available: self.mute.available(self.ready, self.started()),
        }
    }
}
