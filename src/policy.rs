// Playback policy: decides whether and how to attempt autoplay, and what a
// rejection means for the UI. Pure functions; never touches session state.
// Mobile browsers only allow autoplay while muted, so every automatic attempt is muted.

use crate::types::{AttemptOrigin, BlockReason, Readiness};

/// Decision for a readiness signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayDecision {
    /// Ask the host to start playback with audio silenced.
    AttemptMuted,
    /// Do nothing.
    Skip,
}

/// UI consequence of a rejected play request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionAction {
    /// First failure: present the manual play affordance.
    ShowManualControl,
    /// Manual retry failed: leave the affordance up and wait for another tap.
    KeepManualControl,
}

#[derive(Debug, Clone, Copy)]
pub struct PlaybackPolicy {
    autoplay: bool,
}

impl PlaybackPolicy {
    pub fn new(autoplay: bool) -> Self {
        PlaybackPolicy { autoplay }
    }

    /// Evaluate a readiness signal. Only the first signal of a session may
    /// trigger an automatic attempt, and never once playback has started.
    pub fn on_ready(&self, _signal: Readiness, auto_attempted: bool, started: bool) -> AutoplayDecision {
        if !self.autoplay || auto_attempted || started {
            AutoplayDecision::Skip
        } else {
            AutoplayDecision::AttemptMuted
        }
    }

    pub fn on_rejection(&self, origin: AttemptOrigin, _reason: BlockReason) -> RejectionAction {
        match origin {
            AttemptOrigin::Automatic => RejectionAction::ShowManualControl,
            AttemptOrigin::Manual => RejectionAction::KeepManualControl,
        }
    }

    /// A manual tap both starts playback and unlocks audio.
    pub fn manual_attempt_muted(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_readiness_attempts_muted() {
        let policy = PlaybackPolicy::new(true);
        assert_eq!(
            policy.on_ready(Readiness::CanPlay, false, false),
            AutoplayDecision::AttemptMuted
        );
    }

    #[test]
    fn repeated_readiness_skips() {
        let policy = PlaybackPolicy::new(true);
        assert_eq!(
            policy.on_ready(Readiness::LoadedMetadata, true, false),
            AutoplayDecision::Skip
        );
        assert_eq!(
            policy.on_ready(Readiness::CanPlay, false, true),
            AutoplayDecision::Skip
        );
    }

    #[test]
    fn autoplay_disabled_skips() {
        let policy = PlaybackPolicy::new(false);
        assert_eq!(
            policy.on_ready(Readiness::CanPlay, false, false),
            AutoplayDecision::Skip
        );
    }

    #[test]
    fn rejection_by_origin() {
        let policy = PlaybackPolicy::new(true);
        assert_eq!(
            policy.on_rejection(AttemptOrigin::Automatic, BlockReason::AutoplayDenied),
            RejectionAction::ShowManualControl
        );
        assert_eq!(
            policy.on_rejection(AttemptOrigin::Manual, BlockReason::MediaError),
            RejectionAction::KeepManualControl
        );
        assert!(!policy.manual_attempt_muted());
    }
}
