// Paginated animal gallery: swipe and dot navigation over the catalog.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::catalog::{self, AnimalRecord, AnimalView};
use crate::error::PlaybackError;
use crate::i18n::Language;

/// Animals per gallery page (3 columns x 4 rows).
pub const PAGE_SIZE: usize = 12;

/// Horizontal travel (CSS px) a touch must cover to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved left: next page.
    Next,
    /// Finger moved right: previous page.
    Previous,
}

impl Swipe {
    /// Classify a touch from its start and end x coordinates.
    pub fn from_touch(start_x: f64, end_x: f64) -> Option<Swipe> {
        let travel = start_x - end_x;
        if travel > SWIPE_THRESHOLD_PX {
            Some(Swipe::Next)
        } else if -travel > SWIPE_THRESHOLD_PX {
            Some(Swipe::Previous)
        } else {
            None
        }
    }
}

/// Current page over a fixed list of animals.
pub struct GalleryPager {
    animals: &'static [AnimalRecord],
    page: usize,
}

impl GalleryPager {
    pub fn new(animals: &'static [AnimalRecord]) -> Self {
        GalleryPager { animals, page: 0 }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        self.animals.len().div_ceil(PAGE_SIZE).max(1)
    }

    pub fn current(&self) -> &'static [AnimalRecord] {
        let start = (self.page * PAGE_SIZE).min(self.animals.len());
        let end = (start + PAGE_SIZE).min(self.animals.len());
        &self.animals[start..end]
    }

    /// Dot navigation.
    pub fn go_to(&mut self, index: usize) -> Result<(), PlaybackError> {
        let page_count = self.page_count();
        if index >= page_count {
            return Err(PlaybackError::PageOutOfRange { index, page_count });
        }
        self.page = index;
        Ok(())
    }

    /// Apply a swipe, clamped at the first and last page. Returns whether the page changed.
    pub fn swipe(&mut self, swipe: Swipe) -> bool {
        let before = self.page;
        match swipe {
            Swipe::Next if self.page + 1 < self.page_count() => self.page += 1,
            Swipe::Previous if self.page > 0 => self.page -= 1,
            _ => {}
        }
        self.page != before
    }

    /// Finish a touch gesture.
    pub fn touch(&mut self, start_x: f64, end_x: f64) -> bool {
        match Swipe::from_touch(start_x, end_x) {
            Some(swipe) => self.swipe(swipe),
            None => false,
        }
    }
}

/// Page state as handed to JS.
#[derive(Debug, Clone, Serialize)]
pub struct GalleryPage {
    pub page: usize,
    pub page_count: usize,
    pub animals: Vec<AnimalView>,
}

// =============================================================================
// WASM Bindings
// =============================================================================

/// WASM-exposed gallery pager for the animals page.
#[wasm_bindgen(js_name = GalleryPager)]
pub struct WasmGalleryPager {
    inner: GalleryPager,
    lang: Language,
}

#[wasm_bindgen(js_class = GalleryPager)]
impl WasmGalleryPager {
    #[wasm_bindgen(constructor)]
    pub fn new(lang: &str) -> Result<WasmGalleryPager, JsValue> {
        Ok(WasmGalleryPager {
            inner: GalleryPager::new(catalog::animals()),
            lang: lang.parse()?,
        })
    }

    pub fn page(&self) -> usize {
        self.inner.page()
    }

    pub fn page_count(&self) -> usize {
        self.inner.page_count()
    }

    pub fn go_to(&mut self, index: usize) -> Result<(), JsValue> {
        Ok(self.inner.go_to(index)?)
    }

    /// Returns `true` when the page changed.
    pub fn touch(&mut self, start_x: f64, end_x: f64) -> bool {
        self.inner.touch(start_x, end_x)
    }

    /// Current page as JSON: `{ page, page_count, animals: [...] }`.
    pub fn current_json(&self) -> Result<String, JsValue> {
        let page = GalleryPage {
            page: self.inner.page(),
            page_count: self.inner.page_count(),
            animals: self
                .inner
                .current()
                .iter()
                .map(|record| AnimalView::new(record, self.lang))
                .collect(),
        };
        serde_json::to_string(&page)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}
