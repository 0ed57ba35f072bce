// Mute/unmute toggle. Orthogonal to the autoplay state machine.

/// Audio state of the media element as committed by the session.
pub struct MuteToggle {
    muted: bool,
    enabled: bool,
}

impl MuteToggle {
    /// Sessions begin muted: autoplay is only permitted without sound.
    pub fn new(enabled: bool) -> Self {
        MuteToggle {
            muted: true,
            enabled,
        }
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a tap would do anything right now.
    pub fn available(&self, ready: bool, started: bool) -> bool {
        self.enabled && ready && started
    }

    /// Flip audio state. Returns the new `muted` value, or `None` when the
    /// toggle is unavailable.
    pub fn toggle(&mut self, ready: bool, started: bool) -> Option<bool> {
        if !self.available(ready, started) {
            return None;
        }
        self.muted = !self.muted;
        Some(self.muted)
    }

    /// Manual play succeeded with sound.
    pub fn unlock_audio(&mut self) {
        self.muted = false;
    }
}
