// Static exhibition catalog: animal records, media sources, AR embeds.
// Read-only, compiled in. Lookups by id fall back to the featured animal the
// way the exhibition pages always have.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::PlaybackError;
use crate::i18n::{Language, Localized};

/// Animal shown when an id has no media of its own (or is unknown).
pub const FEATURED_ANIMAL_ID: u32 = 5;

const AR_EXPERIENCE_URL: &str = "https://webxr.run/06LeM1AzARYJP";

/// One exhibited animal. Names keep their grid line breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimalRecord {
    pub id: u32,
    pub name: Localized,
    pub scientific_name: Option<&'static str>,
    pub icon: &'static str,
    pub video_path: Option<&'static str>,
    pub placeholder_image: Option<&'static str>,
    pub ar_embed_url: Option<&'static str>,
}

/// What the animal video page renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "src")]
pub enum MediaChoice {
    Video(&'static str),
    Placeholder(&'static str),
}

impl AnimalRecord {
    const fn new(id: u32, en: &'static str, ar: &'static str, icon: &'static str) -> Self {
        AnimalRecord {
            id,
            name: Localized::new(en, ar),
            scientific_name: None,
            icon,
            video_path: None,
            placeholder_image: None,
            ar_embed_url: None,
        }
    }

    /// Label for the gallery grid (keeps line breaks).
    pub fn grid_label(&self, lang: Language) -> &'static str {
        self.name.get(lang)
    }

    /// Single-line name for headings and iframe titles.
    pub fn display_name(&self, lang: Language) -> String {
        self.name.get(lang).split('\n').collect::<Vec<_>>().join(" ")
    }

    /// A video wins over a placeholder image.
    pub fn media(&self) -> Option<MediaChoice> {
        self.video_path
            .map(MediaChoice::Video)
            .or_else(|| self.placeholder_image.map(MediaChoice::Placeholder))
    }
}

const fn with_media(
    mut record: AnimalRecord,
    scientific_name: Option<&'static str>,
    video_path: Option<&'static str>,
    placeholder_image: Option<&'static str>,
) -> AnimalRecord {
    record.scientific_name = scientific_name;
    record.video_path = video_path;
    record.placeholder_image = placeholder_image;
    record.ar_embed_url = Some(AR_EXPERIENCE_URL);
    record
}

static ANIMALS: [AnimalRecord; 24] = [
    with_media(
        AnimalRecord::new(1, "WHITE-TAILED\nLAPWING", "الزقزاق\nأبيض الذيل", "/animals/AL MARMOOM_ICONS_12.png"),
        Some("VANELLUS LEUCURUS"),
        None,
        Some("https://images.unsplash.com/photo-1535083783855-76ae62b2914e?w=800"),
    ),
    AnimalRecord::new(2, "WATER RAIL", "مرعة\nالماء", "/animals/AL MARMOOM_ICONS_13.png"),
    AnimalRecord::new(3, "BLUE\nTHROATED\nWAGTAIL", "الذعرة\nزرقاء الحلق", "/animals/AL MARMOOM_ICONS_14.png"),
    AnimalRecord::new(4, "PURPLE\nSUNBIRD", "الطنان\nالأرجواني", "/animals/AL MARMOOM_ICONS_15.png"),
    with_media(
        AnimalRecord::new(5, "EURASIAN\nSTONE-CURLEW", "الكروان\nالأوراسي", "/animals/AL MARMOOM_ICONS_16.png"),
        Some("BURHINUS OEDICNEMUS"),
        Some("/videos/en/Stone-curlew_videomain.mp4"),
        None,
    ),
    AnimalRecord::new(6, "HOUBARA\nBUSTARD", "الحبارى", "/animals/AL MARMOOM_ICONS_17.png"),
    AnimalRecord::new(7, "LITTLE\nGREBE", "الغطاس\nالصغير", "/animals/AL MARMOOM_ICONS_18.png"),
    AnimalRecord::new(8, "WESTERN GREAT\nEGRET", "البلشون\nالأبيض الكبير", "/animals/AL MARMOOM_ICONS_19.png"),
    AnimalRecord::new(9, "HOOPOE", "الهدهد", "/animals/AL MARMOOM_ICONS_20.png"),
    AnimalRecord::new(10, "THE YELLOW\nWAGTAIL", "الذعرة\nالصفراء", "/animals/AL MARMOOM_ICONS_21.png"),
    AnimalRecord::new(11, "THE ARABIAN\nGREEN BEE-EATER", "الوروار الأخضر\nالعربي", "/animals/AL MARMOOM_ICONS_22.png"),
    AnimalRecord::new(12, "IRAQI\nSANDGROUSE", "القطا\nالعراقي", "/animals/AL MARMOOM_ICONS_23.png"),
    AnimalRecord::new(13, "DESERT\nEAGLE OWL", "بومة النسر\nالصحراوية", "/animals/AL MARMOOM_ICONS_6.png"),
    AnimalRecord::new(14, "LITTLE\nOWL", "البومة\nالصغيرة", "/animals/AL MARMOOM_ICONS_7.png"),
    AnimalRecord::new(15, "RUPPELS\nFOX", "ثعلب\nروبل", "/animals/AL MARMOOM_ICONS_8.png"),
    AnimalRecord::new(16, "GERBILLUS\nCHEESMANI", "جربوع\nتشيزماني", "/animals/AL MARMOOM_ICONS_9.png"),
    AnimalRecord::new(17, "HEDGEHOG", "القنفذ", "/animals/AL MARMOOM_ICONS_10.png"),
    AnimalRecord::new(18, "DESERT\nHARE", "أرنب\nالصحراء", "/animals/AL MARMOOM_ICONS_11.png"),
    with_media(
        AnimalRecord::new(19, "ARABIAN\nORYX", "المها\nالعربي", "/animals/AL MARMOOM_ICONS_24.png"),
        None,
        None,
        Some("https://images.unsplash.com/photo-1564349683136-77e08dba1ef7?w=800"),
    ),
    AnimalRecord::new(20, "DORCAS\nGAZELLE", "غزال\nالدركاس", "/animals/AL MARMOOM_ICONS_1.png"),
    AnimalRecord::new(21, "FROG\nHEADED LIZARD", "سحلية\nرأس الضفدع", "/animals/AL MARMOOM_ICONS_2.png"),
    AnimalRecord::new(22, "SANDFISH\nLIZARD", "سحلية\nالسمكة الرملية", "/animals/AL MARMOOM_ICONS_3.png"),
    AnimalRecord::new(23, "SPINY TAILED\nLIZARD", "الضب\nشوكي الذيل", "/animals/AL MARMOOM_ICONS_4.png"),
    AnimalRecord::new(24, "DORCAS\nGAZELLE", "غزال\nالدركاس", "/animals/AL MARMOOM_ICONS_5.png"),
];

/// All animals in gallery order.
pub fn animals() -> &'static [AnimalRecord] {
    &ANIMALS
}

pub fn find(id: u32) -> Option<&'static AnimalRecord> {
    ANIMALS.iter().find(|a| a.id == id)
}

fn featured() -> &'static AnimalRecord {
    // The featured id is part of the static table.
    &ANIMALS[(FEATURED_ANIMAL_ID - 1) as usize]
}

/// Record for the animal video page. Ids without a video or placeholder show
/// the featured animal instead.
pub fn video_page_record(id: u32) -> &'static AnimalRecord {
    match find(id) {
        Some(record) if record.media().is_some() => record,
        _ => {
            log::debug!("catalog: no media for animal {}, showing featured", id);
            featured()
        }
    }
}

/// Record for the AR page. Ids without an embed use the featured animal's.
pub fn ar_page_record(id: u32) -> &'static AnimalRecord {
    match find(id) {
        Some(record) if record.ar_embed_url.is_some() => record,
        _ => featured(),
    }
}

/// One `<track>` element for the intro video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubtitleTrack {
    pub src_lang: &'static str,
    pub src: String,
    pub label: &'static str,
    pub default: bool,
}

/// Sources for the intro video element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntroVideo {
    pub src: String,
    pub mime: &'static str,
    pub subtitles: Vec<SubtitleTrack>,
}

/// Intro video per language; the active language's subtitles are the default track.
pub fn intro_video(lang: Language) -> IntroVideo {
    let subtitles = Language::ALL
        .iter()
        .map(|&track_lang| SubtitleTrack {
            src_lang: track_lang.code(),
            src: format!("/videos/subtitles/intro-{}.vtt", track_lang.code()),
            label: match track_lang {
                Language::En => "English",
                Language::Ar => "العربية",
            },
            default: track_lang == lang,
        })
        .collect();

    IntroVideo {
        src: format!("/videos/{}/intro.mp4", lang.code()),
        mime: "video/mp4",
        subtitles,
    }
}

/// Language-resolved view of a record, as handed to JS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimalView {
    pub id: u32,
    pub name: String,
    pub grid_label: &'static str,
    pub scientific_name: Option<&'static str>,
    pub icon: &'static str,
    pub media: Option<MediaChoice>,
    pub ar_embed_url: Option<&'static str>,
    pub dir: &'static str,
}

impl AnimalView {
    pub fn new(record: &AnimalRecord, lang: Language) -> Self {
        AnimalView {
            id: record.id,
            name: record.display_name(lang),
            grid_label: record.grid_label(lang),
            scientific_name: record.scientific_name,
            icon: record.icon,
            media: record.media(),
            ar_embed_url: record.ar_embed_url,
            dir: lang.dir(),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, PlaybackError> {
    Ok(serde_json::to_string(value)?)
}

// =============================================================================
// WASM Bindings
// =============================================================================

/// Intro video sources for a route language, as JSON.
#[wasm_bindgen(js_name = introVideoSource)]
pub fn intro_video_source(lang: &str) -> Result<String, JsValue> {
    let lang: Language = lang.parse()?;
    Ok(to_json(&intro_video(lang))?)
}

/// Animal video page data (with featured fallback), as JSON.
#[wasm_bindgen(js_name = videoPageAnimal)]
pub fn video_page_animal(id: u32, lang: &str) -> Result<String, JsValue> {
    let lang: Language = lang.parse()?;
    Ok(to_json(&AnimalView::new(video_page_record(id), lang))?)
}

/// AR page data (with featured fallback), as JSON.
#[wasm_bindgen(js_name = arPageAnimal)]
pub fn ar_page_animal(id: u32, lang: &str) -> Result<String, JsValue> {
    let lang: Language = lang.parse()?;
    Ok(to_json(&AnimalView::new(ar_page_record(id), lang))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_ids_are_gallery_order() {
        for (index, record) in animals().iter().enumerate() {
            assert_eq!(record.id as usize, index + 1);
        }
        assert_eq!(featured().id, FEATURED_ANIMAL_ID);
    }

    #[test]
    fn featured_has_video() {
        let record = video_page_record(FEATURED_ANIMAL_ID);
        assert_eq!(
            record.media(),
            Some(MediaChoice::Video("/videos/en/Stone-curlew_videomain.mp4"))
        );
        assert_eq!(record.scientific_name, Some("BURHINUS OEDICNEMUS"));
    }

    #[test]
    fn placeholder_animal_keeps_its_record() {
        let record = video_page_record(1);
        assert_eq!(record.id, 1);
        assert!(matches!(record.media(), Some(MediaChoice::Placeholder(_))));
    }

    #[test]
    fn missing_media_falls_back_to_featured() {
        assert_eq!(video_page_record(9).id, FEATURED_ANIMAL_ID);
        assert_eq!(video_page_record(404).id, FEATURED_ANIMAL_ID);
        assert_eq!(ar_page_record(404).id, FEATURED_ANIMAL_ID);
        assert_eq!(ar_page_record(19).id, 19);
    }

    #[test]
    fn oryx_has_no_scientific_name() {
        let record = ar_page_record(19);
        assert_eq!(record.display_name(Language::En), "ARABIAN ORYX");
        assert_eq!(record.scientific_name, None);
        assert!(record.ar_embed_url.is_some());
    }

    #[test]
    fn display_name_joins_lines() {
        let record = find(11).expect("bee-eater");
        assert_eq!(record.display_name(Language::En), "THE ARABIAN GREEN BEE-EATER");
        assert_eq!(record.grid_label(Language::En), "THE ARABIAN\nGREEN BEE-EATER");
    }

    #[test]
    fn intro_video_per_language() {
        let intro = intro_video(Language::Ar);
        assert_eq!(intro.src, "/videos/ar/intro.mp4");
        assert_eq!(intro.subtitles.len(), 2);
        let default: Vec<_> = intro.subtitles.iter().filter(|t| t.default).collect();
        assert_eq!(default.len(), 1);
        assert_eq!(default[0].src, "/videos/subtitles/intro-ar.vtt");
    }

    #[test]
    fn video_page_json_for_js() {
        let json = video_page_animal(5, "en").expect("valid lookup");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["name"], "EURASIAN STONE-CURLEW");
        assert_eq!(value["media"]["kind"], "Video");
        assert_eq!(value["dir"], "ltr");
    }

    // Note: unknown-language errors only surface as JsValue on wasm32;
    // Language parsing errors are covered in i18n tests.
}
