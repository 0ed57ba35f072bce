// Playback configuration passed from JS as JSON.
// Defaults are the canonical intro/animal video page behavior.

use serde::{Deserialize, Serialize};

use crate::error::PlaybackError;

/// Shortest fallback window the host may configure.
pub const MIN_FALLBACK_DELAY_MS: u64 = 1_000;
/// Longest fallback window the host may configure.
pub const MAX_FALLBACK_DELAY_MS: u64 = 1_500;

/// Playback behavior settings for one media page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Attempt muted autoplay on the first readiness signal.
    #[serde(default = "default_true")]
    pub autoplay: bool,
    /// Position at which the primary continue control is revealed (microseconds).
    #[serde(default = "default_reveal_threshold")]
    pub reveal_threshold_us: u64,
    /// Delay before an unstarted, paused element shows the manual play affordance.
    #[serde(default = "default_fallback_delay")]
    pub fallback_delay_ms: u64,
    /// Offer the mute/unmute control once playback started.
    #[serde(default = "default_true")]
    pub mute_toggle: bool,
    /// Show an always-visible skip control next to the gated continue control.
    #[serde(default)]
    pub skip_affordance: bool,
}

fn default_true() -> bool {
    true
}

fn default_reveal_threshold() -> u64 {
    5_000_000 // 5s
}

fn default_fallback_delay() -> u64 {
    MAX_FALLBACK_DELAY_MS
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        PlaybackConfig {
            autoplay: true,
            reveal_threshold_us: default_reveal_threshold(),
            fallback_delay_ms: default_fallback_delay(),
            mute_toggle: true,
            skip_affordance: false,
        }
    }
}

impl PlaybackConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, PlaybackError> {
        let config: PlaybackConfig = serde_json::from_str(json)
            .map_err(|e| PlaybackError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PlaybackError> {
        if self.reveal_threshold_us == 0 {
            return Err(PlaybackError::InvalidConfig(
                "reveal_threshold_us must be greater than zero".to_string(),
            ));
        }
        if !(MIN_FALLBACK_DELAY_MS..=MAX_FALLBACK_DELAY_MS).contains(&self.fallback_delay_ms) {
            return Err(PlaybackError::InvalidConfig(format!(
                "fallback_delay_ms must be within {}..={}, got {}",
                MIN_FALLBACK_DELAY_MS, MAX_FALLBACK_DELAY_MS, self.fallback_delay_ms
            )));
        }
        Ok(())
    }
}
