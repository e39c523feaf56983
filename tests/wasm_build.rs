//! WASM build test
//!
//! This module tests that the WASM module can be built and that the
//! state machine and display-list pipeline work on the wasm32 target.

#![cfg(target_arch = "wasm32")]

use fretboard_wasm::api::AppState;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_state_creation() {
    let app = AppState::new();
    assert_eq!(app.settings().key_label, "C (Am)");
}

#[wasm_bindgen_test]
fn test_vocabulary_arrays() {
    assert_eq!(fretboard_wasm::api::key_labels().length(), 12);
    assert_eq!(fretboard_wasm::api::scale_names().length(), 13);
    assert_eq!(fretboard_wasm::api::triad_names().length(), 9);
}

#[wasm_bindgen_test]
fn test_display_list_builds() {
    let mut app = AppState::new();
    app.set_scale(Some("Major (Ionian)")).unwrap();
    app.set_triad(Some("M")).unwrap();

    let display = app.display_list();
    assert_eq!(display.scale_cells.len(), 48);
    assert_eq!(display.chord_cells.len(), 21);
    assert_eq!(display.board.string_lines.len(), 6);
}

#[wasm_bindgen_test]
fn test_pointer_toggle() {
    let mut app = AppState::new();
    let (x, y) = app.geometry().cell_center(fretboard_wasm::FretPoint::new(0, 0));
    let info = app.pointer_down(x, y);
    assert!(info.is_some());
    assert!(!app.selection().is_empty());
}
