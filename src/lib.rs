//! Fretboard Visualizer WASM Module
//!
//! Music-theory and geometry engine for a 6-string, 12-fret fretboard
//! diagram. JavaScript owns the canvas and the combo boxes; this module
//! owns pitch-class arithmetic, scale/chord resolution, board geometry,
//! and selection state, and hands back fully positioned display lists.

pub mod models;
pub mod layout;
pub mod api;

// Re-export commonly used types
pub use models::pitch::PitchClass;
pub use models::fretboard::FretPoint;
pub use models::settings::Settings;
pub use models::selection::SelectionState;
pub use layout::{BoardGeometry, BoardMetrics, DisplayList};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Fretboard visualizer WASM module initialized");
}
