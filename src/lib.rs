// marmoom_playback: Al Marmoom exhibition Rust/WASM engine
// Autoplay, reveal, and mute state transitions live here; JS is plumbing.

mod autoplay;
mod catalog;
mod config;
mod error;
mod gallery;
mod i18n;
mod logging;
mod media;
mod mute;
mod policy;
mod reveal;
mod session;
mod types;

use log::LevelFilter;
use wasm_bindgen::prelude::*;

pub use autoplay::{AutoplayOrchestrator, Blocked, PlayOutcome, Playing};
pub use catalog::{
    animals, ar_page_animal, ar_page_record, find, intro_video, intro_video_source,
    video_page_animal, video_page_record, AnimalRecord, AnimalView, IntroVideo, MediaChoice,
    SubtitleTrack, FEATURED_ANIMAL_ID,
};
pub use config::{PlaybackConfig, MAX_FALLBACK_DELAY_MS, MIN_FALLBACK_DELAY_MS};
pub use error::PlaybackError;
pub use gallery::{GalleryPage, GalleryPager, Swipe, WasmGalleryPager, PAGE_SIZE};
pub use i18n::{page_labels, status_label, Language, Localized, PageLabels};
pub use logging::init_logging;
pub use media::{attempt_play, attempt_play_js, PlayReport};
pub use mute::MuteToggle;
pub use policy::{AutoplayDecision, PlaybackPolicy, RejectionAction};
pub use reveal::RevealGate;
pub use session::PlaybackSession;
pub use types::*;

/// Initialize panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    init_logging(LevelFilter::Info);
}

/// Adjust the console log level (`"off"`, `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`).
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter = logging::parse_level(level).ok_or_else(|| {
        JsValue::from_str(&format!("Unknown log level: {}", level))
    })?;
    init_logging(filter);
    Ok(())
}

/// Playback controller for one media element, exposed to JavaScript.
/// Every call returns `{ commands, snapshot }` JSON; JS executes the commands
/// in order and reports what the element does back through `handle_events`.
#[wasm_bindgen]
pub struct PlaybackEngine {
    session: PlaybackSession,
}

#[wasm_bindgen]
impl PlaybackEngine {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<PlaybackEngine, JsValue> {
        let config = PlaybackConfig::from_json(config_json)?;
        Ok(PlaybackEngine {
            session: PlaybackSession::new(config),
        })
    }

    /// Call once the page mounted its media element.
    pub fn mount(&mut self) -> Result<String, JsValue> {
        let commands = self.session.mount();
        self.output(commands)
    }

    /// Apply a batch of media events: `{ "events": [ { "type": ... }, ... ] }`.
    /// This is the main entry point, designed as a batch call to reduce JS↔WASM overhead.
    pub fn handle_events(&mut self, events_json: &str) -> Result<String, JsValue> {
        let batch: EventBatch = serde_json::from_str(events_json)
            .map_err(|e| PlaybackError::InvalidEvent(e.to_string()))?;
        let commands = self.session.handle_batch(batch.events);
        self.output(commands)
    }

    /// Current state without applying anything.
    pub fn snapshot(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.session.snapshot())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Call on unmount. Returns the timer cancellation to perform.
    pub fn teardown(&mut self) -> Result<String, JsValue> {
        let commands = self.session.teardown();
        self.output(commands)
    }

    /// Hint under the video while the continue control is hidden, or `undefined`.
    pub fn status_label(&self, lang: &str) -> Result<Option<String>, JsValue> {
        let lang: Language = lang.parse()?;
        Ok(status_label(lang, &self.session.snapshot()).map(str::to_string))
    }
}

impl PlaybackEngine {
    fn output(&self, commands: Vec<HostCommand>) -> Result<String, JsValue> {
        let output = EngineOutput {
            commands,
            snapshot: self.session.snapshot(),
        };
        serde_json::to_string(&output)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> EngineOutput {
        serde_json::from_str(json).expect("engine output is valid JSON")
    }

    #[test]
    fn engine_creation_works() {
        let engine = PlaybackEngine::new(r#"{"fallback_delay_ms":1000}"#);
        assert!(engine.is_ok());
    }

    #[test]
    fn engine_round_trip_autoplay_blocked_then_manual() {
        let mut engine = PlaybackEngine::new("{}").expect("default config");

        let mounted = parse(&engine.mount().expect("mount"));
        assert!(matches!(
            mounted.commands[0],
            HostCommand::ScheduleFallback { delay_ms: 1500, .. }
        ));

        let out = parse(
            &engine
                .handle_events(r#"{"events":[{"type":"Ready","signal":"CanPlay"}]}"#)
                .expect("ready"),
        );
        assert_eq!(
            out.commands,
            vec![HostCommand::RequestPlay {
                attempt: AttemptId::new(1),
                muted: true,
            }]
        );

        let out = parse(
            &engine
                .handle_events(
                    r#"{"events":[
                        {"type":"PlayRejected","attempt":1,"reason":"AutoplayDenied"},
                        {"type":"PlayTapped"},
                        {"type":"PlayResolved","attempt":2},
                        {"type":"TimeUpdate","current_time_secs":5.1}
                    ]}"#,
                )
                .expect("batch"),
        );
        assert!(out.commands.contains(&HostCommand::Reveal));
        assert!(out.snapshot.started);
        assert!(!out.snapshot.muted);
        assert!(!out.snapshot.play_button_visible);
        assert!(out.snapshot.revealed);
        assert_eq!(engine.status_label("en").expect("valid language"), None);
    }

    #[test]
    fn engine_teardown_cancels_fallback() {
        let mut engine = PlaybackEngine::new("{}").expect("default config");
        engine.mount().expect("mount");
        let out = parse(&engine.teardown().expect("teardown"));
        assert!(matches!(
            out.commands.as_slice(),
            [HostCommand::CancelFallback { .. }]
        ));
    }

    #[test]
    fn status_label_before_start() {
        let engine = PlaybackEngine::new("{}").expect("default config");
        assert_eq!(
            engine.status_label("en").expect("valid language"),
            Some("Click play to start video".to_string())
        );
        let snapshot: SessionSnapshot =
            serde_json::from_str(&engine.snapshot().expect("snapshot")).expect("valid json");
        assert_eq!(snapshot.phase, AutoplayPhase::Idle);
    }

    // Note: invalid config/event JSON errors are JsValue-backed and only
    // observable on wasm32; see tests/web.rs and PlaybackConfig tests.
}
