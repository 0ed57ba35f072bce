// Exhibition languages and the labels the media pages show.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::error::PlaybackError;
use crate::types::SessionSnapshot;

/// Route language. English is the default locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ar];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Ar)
    }

    /// Value for the `dir` attribute.
    pub fn dir(&self) -> &'static str {
        if self.is_rtl() {
            "rtl"
        } else {
            "ltr"
        }
    }
}

impl FromStr for Language {
    type Err = PlaybackError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ar" => Ok(Language::Ar),
            other => Err(PlaybackError::UnsupportedLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A string available in both exhibition languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Localized {
    pub en: &'static str,
    pub ar: &'static str,
}

impl Localized {
    pub const fn new(en: &'static str, ar: &'static str) -> Self {
        Localized { en, ar }
    }

    pub fn get(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.en,
            Language::Ar => self.ar,
        }
    }
}

pub const START_JOURNEY: Localized = Localized::new("Start Journey", "ابدأ الرحلة");
pub const PLAYING_VIDEO: Localized = Localized::new("Playing video...", "جارٍ تشغيل الفيديو...");
pub const TAP_TO_PLAY: Localized =
    Localized::new("Click play to start video", "انقر فوق تشغيل لبدء الفيديو");
pub const VIDEO_COMING_SOON: Localized = Localized::new("Video Coming Soon", "الفيديو قريباً");
pub const VIEW_IN_AR: Localized = Localized::new("VIEW IN AR", "عرض في AR");
pub const INTRO_CAPTION: Localized = Localized::new(
    "Welcome message by Ali Bin Thalith",
    "رسالة ترحيبية من علي بن ثالث",
);
pub const INTRO_SUBCAPTION: Localized = Localized::new(
    "Quick species insight + invite to watch",
    "نظرة سريعة على الأنواع + دعوة للمشاهدة",
);
pub const RESERVE_NAME: Localized = Localized::new(
    "Al Marmoom Desert Conservation Reserve",
    "محمية المرموم الصحراوية",
);

/// Hint under the intro video while the continue control is still hidden.
/// `None` once revealed: the continue button takes its place.
pub fn status_label(lang: Language, snapshot: &SessionSnapshot) -> Option<&'static str> {
    if snapshot.revealed {
        return None;
    }
    let label = if snapshot.started {
        PLAYING_VIDEO
    } else {
        TAP_TO_PLAY
    };
    Some(label.get(lang))
}

/// Every media-page label resolved for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLabels {
    pub dir: &'static str,
    pub start_journey: &'static str,
    pub playing_video: &'static str,
    pub tap_to_play: &'static str,
    pub video_coming_soon: &'static str,
    pub view_in_ar: &'static str,
    pub intro_caption: &'static str,
    pub intro_subcaption: &'static str,
    pub reserve_name: &'static str,
}

impl PageLabels {
    pub fn new(lang: Language) -> Self {
        PageLabels {
            dir: lang.dir(),
            start_journey: START_JOURNEY.get(lang),
            playing_video: PLAYING_VIDEO.get(lang),
            tap_to_play: TAP_TO_PLAY.get(lang),
            video_coming_soon: VIDEO_COMING_SOON.get(lang),
            view_in_ar: VIEW_IN_AR.get(lang),
            intro_caption: INTRO_CAPTION.get(lang),
            intro_subcaption: INTRO_SUBCAPTION.get(lang),
            reserve_name: RESERVE_NAME.get(lang),
        }
    }
}

/// Labels for a route language, as JSON.
#[wasm_bindgen(js_name = pageLabels)]
pub fn page_labels(lang: &str) -> Result<String, JsValue> {
    let lang: Language = lang.parse()?;
    serde_json::to_string(&PageLabels::new(lang))
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AutoplayPhase;

    fn snapshot(started: bool, revealed: bool) -> SessionSnapshot {
        SessionSnapshot {
            muted: true,
            started,
            play_button_visible: !started,
            revealed,
            current_time_secs: 0.0,
            phase: AutoplayPhase::Idle,
            skip_visible: false,
            mute_toggle_available: false,
        }
    }

    #[test]
    fn parses_route_codes() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!("AR".parse::<Language>().unwrap(), Language::Ar);
        assert!(matches!(
            "fr".parse::<Language>(),
            Err(PlaybackError::UnsupportedLanguage(_))
        ));
    }

    #[test]
    fn arabic_is_rtl() {
        assert_eq!(Language::Ar.dir(), "rtl");
        assert_eq!(Language::En.dir(), "ltr");
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn page_labels_resolve_per_language() {
        let labels = PageLabels::new(Language::Ar);
        assert_eq!(labels.dir, "rtl");
        assert_eq!(labels.start_journey, "ابدأ الرحلة");
        let json = page_labels("en").expect("valid language");
        assert!(json.contains(r#""start_journey":"Start Journey""#));
        assert!(json.contains(r#""intro_subcaption":"Quick species insight + invite to watch""#));
        assert_eq!(labels.intro_subcaption, "نظرة سريعة على الأنواع + دعوة للمشاهدة");
    }

    #[test]
    fn status_label_follows_session() {
        assert_eq!(
            status_label(Language::En, &snapshot(false, false)),
            Some("Click play to start video")
        );
        assert_eq!(
            status_label(Language::Ar, &snapshot(true, false)),
            Some("جارٍ تشغيل الفيديو...")
        );
        assert_eq!(status_label(Language::En, &snapshot(true, true)), None);
    }
}
