// Browser tests for the JS-facing surface. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use marmoom_playback::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlMediaElement;

wasm_bindgen_test_configure!(run_in_browser);

fn message(err: wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_default()
}

#[wasm_bindgen_test]
fn invalid_config_surfaces_message() {
    let err = PlaybackEngine::new(r#"{"fallback_delay_ms":5000}"#)
        .err()
        .expect("out-of-range delay is rejected");
    assert!(message(err).contains("fallback_delay_ms"));
}

#[wasm_bindgen_test]
fn invalid_event_batch_is_rejected_without_state_change() {
    let mut engine = PlaybackEngine::new("{}").expect("default config");
    let before = engine.snapshot().expect("snapshot");
    let err = engine
        .handle_events(r#"{"events":[{"type":"Explode"}]}"#)
        .err()
        .expect("unknown event type");
    assert!(message(err).starts_with("Invalid media event"));
    assert_eq!(engine.snapshot().expect("snapshot"), before);
}

#[wasm_bindgen_test]
fn unknown_language_is_rejected() {
    let err = intro_video_source("fr").err().expect("unsupported");
    assert_eq!(message(err), "Unsupported language: fr");
}

#[wasm_bindgen_test]
fn gallery_dot_out_of_range() {
    let mut pager = WasmGalleryPager::new("en").expect("valid language");
    let err = pager.go_to(7).err().expect("out of range");
    assert!(message(err).contains("out of range"));
    assert_eq!(pager.page(), 0);
}

#[wasm_bindgen_test]
fn log_level_names() {
    assert!(set_log_level("debug").is_ok());
    assert!(set_log_level("chatty").is_err());
}

fn unplayable_video() -> HtmlMediaElement {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("browser document");
    let video: HtmlMediaElement = document
        .create_element("video")
        .expect("video element")
        .dyn_into()
        .expect("HTMLMediaElement");
    // Not a media resource, so the pending play() rejects with NotSupportedError.
    video.set_src("data:text/plain,not-a-video");
    video
}

#[wasm_bindgen_test]
async fn attempt_play_reports_blocked_and_keeps_mute() {
    let video = unplayable_video();
    let report = attempt_play_js(video.clone(), true)
        .await
        .expect("report")
        .as_string()
        .expect("JSON string");
    let report: PlayReport = serde_json::from_str(&report).expect("valid report");
    assert!(matches!(report, PlayReport::Blocked { .. }));
    assert!(video.muted());
    assert!(video.paused());
}

#[wasm_bindgen_test]
async fn attempt_play_maps_error_name() {
    let video = unplayable_video();
    let outcome = attempt_play(&video, true).await;
    assert_eq!(outcome, Err(Blocked(BlockReason::MediaError)));
}
