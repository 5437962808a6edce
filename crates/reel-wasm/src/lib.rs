//! WebAssembly bindings for the Reel engine.
//!
//! This crate provides a JavaScript/TypeScript API over the layout, flow
//! and catalog crates. The host UI stays on the JavaScript side; only data
//! crosses the boundary.
//!
//! ## Example
//!
//! ```js
//! import { ReelEngine } from 'reel-engine';
//!
//! const engine = new ReelEngine();
//! engine.setVerticalSpacing(8);
//!
//! // Lay out topic chips against the container width
//! const chips = [{ width: 90, height: 32 }, { width: 120, height: 32 }];
//! const size = engine.measure(chips, 360);
//! const frames = engine.place(chips, 360);
//!
//! // Start a viewing session from a tapped title
//! const path = engine.learningPath('Understanding Derivatives');
//! console.log(path.clips[path.startIndex].fileStem); // "derivatives"
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;

use reel_catalog::{subtopics, Category, ClipCatalog};
use reel_core::{Point, Size};
use reel_layout::WrapLayout;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
}

/// One clip of a serialized learning path.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClipDto {
    title: &'static str,
    file_stem: &'static str,
}

/// A serialized learning path.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct PathDto {
    clips: Vec<ClipDto>,
    start_index: usize,
}

/// A serialized browse category.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoryDto {
    label: &'static str,
    icon: &'static str,
    subtopics: &'static [&'static str],
}

/// The main Reel engine interface for JavaScript.
#[wasm_bindgen]
pub struct ReelEngine {
    catalog: ClipCatalog,
    layout: WrapLayout,
}

#[wasm_bindgen]
impl ReelEngine {
    /// Create an engine with the standard catalog.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            catalog: ClipCatalog::standard(),
            layout: WrapLayout::new(),
        }
    }

    /// Get the version of the engine.
    #[wasm_bindgen(js_name = version)]
    pub fn version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    /// Set the gap between wrapped rows.
    #[wasm_bindgen(js_name = setVerticalSpacing)]
    pub fn set_vertical_spacing(&mut self, spacing: f64) {
        self.layout = self.layout.with_vertical_spacing(spacing);
    }

    /// Measure the bounding size of `items` (an array of
    /// `{width, height}`) against `maxWidth`.
    #[wasm_bindgen(js_name = measure)]
    pub fn measure(&self, items: JsValue, max_width: f64) -> Result<JsValue, JsError> {
        let items: Vec<Size> = serde_wasm_bindgen::from_value(items)
            .map_err(|e| JsError::new(&format!("Invalid items: {e}")))?;
        let size = self
            .layout
            .measure(&items, max_width)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(serde_wasm_bindgen::to_value(&size)?)
    }

    /// Place `items` against `maxWidth`, returning an array of
    /// `{x, y, width, height}` frames.
    #[wasm_bindgen(js_name = place)]
    pub fn place(&self, items: JsValue, max_width: f64) -> Result<JsValue, JsError> {
        let items: Vec<Size> = serde_wasm_bindgen::from_value(items)
            .map_err(|e| JsError::new(&format!("Invalid items: {e}")))?;
        let placements = self
            .layout
            .place(&items, Point::ZERO, max_width)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(serde_wasm_bindgen::to_value(&placements)?)
    }

    /// Materialize the learning path for a free-text title as
    /// `{clips: [{title, fileStem}], startIndex}`.
    ///
    /// Titles nothing resolves to start the path at the catalog's default
    /// clip.
    #[wasm_bindgen(js_name = learningPath)]
    pub fn learning_path(&self, title: &str) -> Result<JsValue, JsError> {
        let path = learning_path_dto(&self.catalog, title)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(serde_wasm_bindgen::to_value(&path)?)
    }

    /// Resolve a free-text title to a video file stem, if any clip matches.
    #[wasm_bindgen(js_name = resolveTitle)]
    pub fn resolve_title(&self, title: &str) -> Option<String> {
        self.catalog
            .resolve_title(title)
            .and_then(|id| self.catalog.entry(id))
            .map(|entry| entry.file_stem.to_string())
    }

    /// The browse categories as `[{label, icon, subtopics}]`.
    #[wasm_bindgen(js_name = categories)]
    pub fn categories(&self) -> Result<JsValue, JsError> {
        let categories: Vec<CategoryDto> = Category::ALL
            .iter()
            .map(|&category| CategoryDto {
                label: category.label(),
                icon: category.icon(),
                subtopics: subtopics(category),
            })
            .collect();
        Ok(serde_wasm_bindgen::to_value(&categories)?)
    }
}

impl Default for ReelEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn learning_path_dto(catalog: &ClipCatalog, title: &str) -> Result<PathDto, reel_core::FlowError> {
    let start = catalog
        .resolve_title(title)
        .unwrap_or_else(|| catalog.default_clip());
    let flow = catalog.learning_path(start)?;

    let mut clips = Vec::with_capacity(flow.len());
    for &id in flow.nodes() {
        let entry = catalog
            .entry(id)
            .ok_or_else(|| reel_core::FlowError::UnknownNode {
                node: format!("{id:?}"),
            })?;
        clips.push(ClipDto {
            title: entry.title,
            file_stem: entry.file_stem,
        });
    }

    Ok(PathDto {
        clips,
        start_index: flow.start_index(),
    })
}
