//! WASM API for the fretboard visualizer
//!
//! This module provides the JavaScript-facing API. JavaScript drives the
//! selectors and pointer events through these functions; the module owns
//! all state and returns complete display lists, so the canvas renderer
//! never does theory or layout work.

use wasm_bindgen::prelude::*;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Mutex;
use thiserror::Error;

use crate::layout::display_list::{DisplayList, DisplayListBuilder};
use crate::layout::forms;
use crate::layout::geometry::{BoardGeometry, BoardMetrics};
use crate::models::fretboard::FretPoint;
use crate::models::library;
use crate::models::pitch::tension_label;
use crate::models::selection::SelectionState;
use crate::models::settings::{Settings, KEY_LABELS};

// WASM-owned application state (canonical source of truth)
lazy_static! {
    static ref APP: Mutex<AppState> = Mutex::new(AppState::new());
}

// Logging macros for WASM
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

macro_rules! wasm_info {
    ($($arg:tt)*) => {
        info(&format!("[WASM] {}", format!($($arg)*)))
    };
}

macro_rules! wasm_error {
    ($($arg:tt)*) => {
        error(&format!("[WASM] {}", format!($($arg)*)))
    };
}

/// Errors for vocabulary strings that are not in the closed selector
/// lists. The core itself never fails; these only guard the boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unknown key label: {0}")]
    UnknownKey(String),
    #[error("unknown scale name: {0}")]
    UnknownScale(String),
    #[error("unknown triad name: {0}")]
    UnknownTriad(String),
    #[error("unknown tension name: {0}")]
    UnknownTension(String),
    #[error("unknown inversion name: {0}")]
    UnknownInversion(String),
    #[error("unknown form name: {0}")]
    UnknownForm(String),
}

impl From<ApiError> for JsValue {
    fn from(err: ApiError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// What a pointer click resolved to, reported back for the click label.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ClickInfo {
    pub string: u8,
    pub fret: u8,
    /// Note spelling at the clicked cell.
    pub note_label: String,
    /// Scale-degree label relative to the current tonic.
    pub degree_label: String,
}

/// Response to a pointer event: the click result (when in bounds) plus
/// the full redraw.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PointerResponse {
    pub click: Option<ClickInfo>,
    pub display: DisplayList,
}

/// Complete visualizer state plus the derived overlay point sets.
///
/// Derived sets are rebuilt whole on every settings change; they are
/// pure functions of the settings, kept here only so the click path
/// does not recompute them.
pub struct AppState {
    settings: Settings,
    selection: SelectionState,
    geometry: BoardGeometry,
    scale_points: BTreeSet<FretPoint>,
    chord_points: BTreeSet<FretPoint>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        let mut state = Self {
            settings: Settings::default(),
            selection: SelectionState::new(),
            geometry: BoardGeometry::new(BoardMetrics::default()),
            scale_points: BTreeSet::new(),
            chord_points: BTreeSet::new(),
        };
        state.refresh();
        state
    }

    /// Recompute both derived overlays from the current settings.
    fn refresh(&mut self) {
        self.scale_points = self.settings.scale_points();
        self.chord_points = self.settings.chord_points();
    }

    /// Change the key. Manual highlights are tied to the old tonic, so
    /// they are cleared.
    pub fn set_key(&mut self, label: &str) -> Result<(), ApiError> {
        if !KEY_LABELS.contains(&label) {
            return Err(ApiError::UnknownKey(label.to_string()));
        }
        self.settings.set_key(label);
        self.selection.clear();
        self.refresh();
        Ok(())
    }

    pub fn set_scale(&mut self, name: Option<&str>) -> Result<(), ApiError> {
        if let Some(name) = name {
            if library::scale_intervals(name).is_none() {
                return Err(ApiError::UnknownScale(name.to_string()));
            }
        }
        self.settings.scale = name.map(str::to_string);
        self.refresh();
        Ok(())
    }

    pub fn set_triad(&mut self, name: Option<&str>) -> Result<(), ApiError> {
        if let Some(name) = name {
            if library::triad_intervals(name).is_none() {
                return Err(ApiError::UnknownTriad(name.to_string()));
            }
        }
        self.settings.chord.triad = name.map(str::to_string);
        self.refresh();
        Ok(())
    }

    pub fn set_tension(&mut self, name: Option<&str>) -> Result<(), ApiError> {
        if let Some(name) = name {
            if library::tension_intervals(name).is_none() {
                return Err(ApiError::UnknownTension(name.to_string()));
            }
        }
        self.settings.chord.tension = name.map(str::to_string);
        self.refresh();
        Ok(())
    }

    pub fn set_inversion(&mut self, name: &str) -> Result<(), ApiError> {
        if library::inversion_index(name).is_none() {
            return Err(ApiError::UnknownInversion(name.to_string()));
        }
        self.settings.chord.inversion = name.to_string();
        self.refresh();
        Ok(())
    }

    pub fn set_form(&mut self, name: Option<&str>) -> Result<(), ApiError> {
        if let Some(name) = name {
            if !forms::is_form_name(name) {
                return Err(ApiError::UnknownForm(name.to_string()));
            }
        }
        self.settings.form = name.map(str::to_string);
        Ok(())
    }

    /// Handle a pointer-down at canvas coordinates.
    ///
    /// In-bounds clicks toggle the clicked note's whole pitch-class
    /// group and report the cell; out-of-bounds clicks change nothing.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> Option<ClickInfo> {
        let point = self.geometry.hit_test(x, y)?;
        let pc = point.pitch_class();
        self.selection.toggle(pc);
        Some(ClickInfo {
            string: point.string,
            fret: point.fret,
            note_label: pc.spelled(),
            degree_label: tension_label(pc.interval_from(self.settings.tonic)).to_string(),
        })
    }

    /// Build the complete display list for the current state.
    pub fn display_list(&self) -> DisplayList {
        DisplayListBuilder::new(&self.geometry).build(
            &self.settings,
            &self.selection,
            &self.scale_points,
            &self.chord_points,
        )
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    pub fn scale_points(&self) -> &BTreeSet<FretPoint> {
        &self.scale_points
    }

    pub fn chord_points(&self) -> &BTreeSet<FretPoint> {
        &self.chord_points
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        wasm_error!("Serialization error: {}", e);
        JsValue::from_str(&format!("Serialization error: {}", e))
    })
}

fn names_to_array(names: &[&str]) -> js_sys::Array {
    names.iter().map(|name| JsValue::from_str(name)).collect()
}

// ============================================================================
// Vocabulary getters (combo-box population)
// ============================================================================

/// The 12 key labels.
#[wasm_bindgen(js_name = keyLabels)]
pub fn key_labels() -> js_sys::Array {
    names_to_array(&KEY_LABELS)
}

/// The 13 scale names.
#[wasm_bindgen(js_name = scaleNames)]
pub fn scale_names() -> js_sys::Array {
    names_to_array(&library::scale_names())
}

/// The 9 triad names.
#[wasm_bindgen(js_name = triadNames)]
pub fn triad_names() -> js_sys::Array {
    names_to_array(&library::triad_names())
}

/// The 13 tension names.
#[wasm_bindgen(js_name = tensionNames)]
pub fn tension_names() -> js_sys::Array {
    names_to_array(&library::tension_names())
}

/// The 4 inversion names, "Root" first.
#[wasm_bindgen(js_name = inversionNames)]
pub fn inversion_names() -> js_sys::Array {
    names_to_array(&library::inversion_names())
}

/// The 5 form group names.
#[wasm_bindgen(js_name = formNames)]
pub fn form_names() -> js_sys::Array {
    names_to_array(&forms::form_names())
}

// ============================================================================
// Settings mutation (each returns the full redraw)
// ============================================================================

/// Change the key. Clears manual highlights and recomputes overlays.
#[wasm_bindgen(js_name = setKey)]
pub fn set_key(label: &str) -> Result<JsValue, JsValue> {
    wasm_info!("setKey: {}", label);
    let mut app = APP.lock().unwrap();
    app.set_key(label)?;
    to_js(&app.display_list())
}

/// Select a scale by name, or pass `null` to clear it.
#[wasm_bindgen(js_name = setScale)]
pub fn set_scale(name: Option<String>) -> Result<JsValue, JsValue> {
    wasm_info!("setScale: {:?}", name);
    let mut app = APP.lock().unwrap();
    app.set_scale(name.as_deref())?;
    to_js(&app.display_list())
}

/// Select a triad by name, or pass `null` to clear the chord.
#[wasm_bindgen(js_name = setTriad)]
pub fn set_triad(name: Option<String>) -> Result<JsValue, JsValue> {
    wasm_info!("setTriad: {:?}", name);
    let mut app = APP.lock().unwrap();
    app.set_triad(name.as_deref())?;
    to_js(&app.display_list())
}

/// Select a tension by name, or pass `null` to clear it.
#[wasm_bindgen(js_name = setTension)]
pub fn set_tension(name: Option<String>) -> Result<JsValue, JsValue> {
    wasm_info!("setTension: {:?}", name);
    let mut app = APP.lock().unwrap();
    app.set_tension(name.as_deref())?;
    to_js(&app.display_list())
}

/// Select an inversion by name ("Root", "1st", "2nd", "3rd").
#[wasm_bindgen(js_name = setInversion)]
pub fn set_inversion(name: &str) -> Result<JsValue, JsValue> {
    wasm_info!("setInversion: {}", name);
    let mut app = APP.lock().unwrap();
    app.set_inversion(name)?;
    to_js(&app.display_list())
}

/// Select a form color group by name, or pass `null` for all forms.
#[wasm_bindgen(js_name = setForm)]
pub fn set_form(name: Option<String>) -> Result<JsValue, JsValue> {
    wasm_info!("setForm: {:?}", name);
    let mut app = APP.lock().unwrap();
    app.set_form(name.as_deref())?;
    to_js(&app.display_list())
}

// ============================================================================
// Pointer input and rendering
// ============================================================================

/// Handle a pointer-down at canvas coordinates. Returns the click info
/// (null when out of bounds) together with the full redraw.
#[wasm_bindgen(js_name = pointerDown)]
pub fn pointer_down(x: f32, y: f32) -> Result<JsValue, JsValue> {
    let mut app = APP.lock().unwrap();
    let click = app.pointer_down(x, y);
    if let Some(info) = &click {
        wasm_info!(
            "pointerDown: string {} fret {} -> {}",
            info.string,
            info.fret,
            info.note_label
        );
    }
    to_js(&PointerResponse {
        click,
        display: app.display_list(),
    })
}

/// Build the display list for the current state without mutating it.
#[wasm_bindgen(js_name = renderState)]
pub fn render_state() -> Result<JsValue, JsValue> {
    let app = APP.lock().unwrap();
    to_js(&app.display_list())
}

/// The current display list as pretty-printed JSON, for debugging the
/// renderer contract.
#[wasm_bindgen(js_name = exportDisplayList)]
pub fn export_display_list() -> Result<String, JsValue> {
    let app = APP.lock().unwrap();
    serde_json::to_string_pretty(&app.display_list())
        .map_err(|e| JsValue::from_str(&format!("JSON export error: {}", e)))
}
