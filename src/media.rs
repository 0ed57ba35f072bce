// Media resource handle: one `play()` call on an HTMLMediaElement, settled as a PlayOutcome.
// The session never calls this; JS runs it for each RequestPlay command and
// reports the result back as PlayResolved / PlayRejected.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlMediaElement;

use crate::autoplay::{Blocked, PlayOutcome, Playing};
use crate::types::BlockReason;

/// JSON shape of a settled play request handed back to JS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum PlayReport {
    Playing,
    Blocked { reason: BlockReason },
}

impl From<PlayOutcome> for PlayReport {
    fn from(outcome: PlayOutcome) -> Self {
        match outcome {
            Ok(Playing) => PlayReport::Playing,
            Err(Blocked(reason)) => PlayReport::Blocked { reason },
        }
    }
}

fn classify_rejection(err: &JsValue) -> BlockReason {
    js_sys::Reflect::get(err, &JsValue::from_str("name"))
        .ok()
        .and_then(|name| name.as_string())
        .map(|name| BlockReason::from_error_name(&name))
        .unwrap_or_default()
}

/// Set the mute flag and request playback. Autoplay refusal comes back as
/// `Err(Blocked(AutoplayDenied))`, never as a thrown exception.
pub async fn attempt_play(element: &HtmlMediaElement, muted: bool) -> PlayOutcome {
    element.set_muted(muted);
    let promise = match element.play() {
        Ok(promise) => promise,
        Err(err) => return Err(Blocked(classify_rejection(&err))),
    };
    match JsFuture::from(promise).await {
        Ok(_) => Ok(Playing),
        Err(err) => {
            let reason = classify_rejection(&err);
            log::debug!("media: play() rejected ({:?})", reason);
            Err(Blocked(reason))
        }
    }
}

/// JS entry point: `await attemptPlay(video, true)` resolves to a
/// `{"status":"Playing"}` or `{"status":"Blocked","reason":...}` JSON string.
#[wasm_bindgen(js_name = attemptPlay)]
pub async fn attempt_play_js(element: HtmlMediaElement, muted: bool) -> Result<JsValue, JsValue> {
    let report = PlayReport::from(attempt_play(&element, muted).await);
    serde_json::to_string(&report)
        .map(|json| JsValue::from_str(&json))
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_from_outcome() {
        assert_eq!(PlayReport::from(Ok(Playing)), PlayReport::Playing);
        assert_eq!(
            PlayReport::from(Err(Blocked(BlockReason::AutoplayDenied))),
            PlayReport::Blocked {
                reason: BlockReason::AutoplayDenied
            }
        );
    }

    #[test]
    fn report_json_shape() {
        let json = serde_json::to_string(&PlayReport::Blocked {
            reason: BlockReason::MediaError,
        })
        .expect("serializes");
        assert_eq!(json, r#"{"status":"Blocked","reason":"MediaError"}"#);
    }
}
