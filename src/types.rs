// Strong typing over strings. Newtypes for media positions, attempt ids, and timer tokens.
// Wire types exchanged with the JS host live here.

use serde::{Deserialize, Serialize};

/// Media position in microseconds. Newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    pub fn from_micros(us: u64) -> Self {
        Timestamp(us)
    }

    /// Convert an `HTMLMediaElement.currentTime` reading.
    /// Negative and non-finite readings collapse to zero; the fractional
    /// microsecond is truncated so `>=` comparisons never fire early.
    pub fn from_secs_f64(secs: f64) -> Self {
        if !secs.is_finite() || secs <= 0.0 {
            return Timestamp(0);
        }
        Timestamp((secs * 1_000_000.0) as u64)
    }

    pub fn as_micros(&self) -> u64 {
        self.0
    }

    pub fn as_secs(&self) -> f64 {
        self.0 as f64 / 1_000_000.0
    }
}

/// Identifies one `play()` request handed to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct AttemptId(u32);

impl AttemptId {
    pub fn new(id: u32) -> Self {
        AttemptId(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    pub fn next(&self) -> Self {
        AttemptId(self.0.wrapping_add(1))
    }
}

/// Handle for the autoplay fallback timer scheduled by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TimerToken(u32);

impl TimerToken {
    pub fn new(token: u32) -> Self {
        TimerToken(token)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

/// Which media readiness notification the host observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Readiness {
    /// `loadedmetadata`
    LoadedMetadata,
    /// `canplay`
    CanPlay,
}

/// Why a play request did not start playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BlockReason {
    /// Platform autoplay policy refused (`NotAllowedError`).
    AutoplayDenied,
    /// Resource could not be decoded or fetched (`NotSupportedError`).
    MediaError,
    /// Request interrupted by a later `pause()` or a source change (`AbortError`).
    Aborted,
    /// Fallback timer elapsed while still paused.
    FallbackTimeout,
    #[default]
    Unknown,
}

impl BlockReason {
    /// Classify a DOMException `name` from a rejected `play()` promise.
    pub fn from_error_name(name: &str) -> Self {
        match name {
            "NotAllowedError" => BlockReason::AutoplayDenied,
            "NotSupportedError" => BlockReason::MediaError,
            "AbortError" => BlockReason::Aborted,
            _ => BlockReason::Unknown,
        }
    }
}

/// Where a play request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttemptOrigin {
    /// Issued by the engine on the first readiness signal.
    Automatic,
    /// Issued because the user tapped the play affordance.
    Manual,
}

/// Autoplay orchestration phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutoplayPhase {
    Idle,
    Attempting {
        attempt: AttemptId,
        origin: AttemptOrigin,
    },
    Playing,
    Blocked,
}

/// Event reported by the JS host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MediaEvent {
    /// Media element reached metadata-loaded or can-play readiness.
    Ready { signal: Readiness },
    /// The `play()` promise for `attempt` resolved.
    PlayResolved { attempt: AttemptId },
    /// The `play()` promise for `attempt` rejected.
    PlayRejected {
        attempt: AttemptId,
        #[serde(default)]
        reason: BlockReason,
    },
    /// `timeupdate` tick.
    TimeUpdate { current_time_secs: f64 },
    /// Element `play` event, whoever started it (native controls included).
    Played,
    /// Element `pause` event.
    Paused,
    /// A scheduled fallback timer fired.
    FallbackElapsed { token: TimerToken },
    /// User tapped the manual play affordance.
    PlayTapped,
    /// User tapped the mute toggle.
    MuteTapped,
}

/// Instruction for the JS host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HostCommand {
    /// Set `muted` on the element, call `play()`, and report the settlement
    /// back with the same `attempt`.
    RequestPlay { attempt: AttemptId, muted: bool },
    SetMuted { muted: bool },
    ScheduleFallback { token: TimerToken, delay_ms: u64 },
    CancelFallback { token: TimerToken },
    ShowPlayButton,
    HidePlayButton,
    /// Show the primary continue control.
    Reveal,
}

/// Batch of events from JS (minimizes JS↔WASM crossings).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventBatch {
    pub events: Vec<MediaEvent>,
}

/// Observable session state returned to JS after every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub muted: bool,
    pub started: bool,
    pub play_button_visible: bool,
    pub revealed: bool,
    pub current_time_secs: f64,
    pub phase: AutoplayPhase,
    pub skip_visible: bool,
    pub mute_toggle_available: bool,
}

/// Result of one engine call: commands to run, then the new state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineOutput {
    pub commands: Vec<HostCommand>,
    pub snapshot: SessionSnapshot,
}
