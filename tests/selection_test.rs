// Whole-pitch-class-group toggle semantics

use fretboard_wasm::models::fretboard::{self, FretPoint};
use fretboard_wasm::models::pitch::PitchClass;
use fretboard_wasm::models::selection::SelectionState;

#[test]
fn test_toggle_activates_every_occurrence_of_the_note() {
    let mut selection = SelectionState::new();
    let e = PitchClass::new(4);
    selection.toggle(e);

    let group = fretboard::points_for_pitch_class(e);
    // E appears twice on each open-E string and once everywhere else
    assert_eq!(group.len(), 8);
    assert_eq!(selection.points(), &group);
    assert!(selection.contains(FretPoint::new(0, 0)));
    assert!(selection.contains(FretPoint::new(0, 12)));
    assert!(selection.contains(FretPoint::new(1, 5)));
}

#[test]
fn test_toggle_is_an_involution() {
    let mut selection = SelectionState::new();
    let a = PitchClass::new(9);

    selection.toggle(a);
    assert!(!selection.is_empty());
    selection.toggle(a);
    assert!(selection.is_empty());
}

#[test]
fn test_toggling_one_group_leaves_others_alone() {
    let mut selection = SelectionState::new();
    selection.toggle(PitchClass::new(4));
    selection.toggle(PitchClass::new(9));
    let both = selection.points().len();

    selection.toggle(PitchClass::new(4));
    let a_group = fretboard::points_for_pitch_class(PitchClass::new(9));
    assert_eq!(selection.points(), &a_group);
    assert!(selection.points().len() < both);
}

#[test]
fn test_clear_removes_everything() {
    let mut selection = SelectionState::new();
    selection.toggle(PitchClass::new(0));
    selection.toggle(PitchClass::new(7));
    selection.clear();
    assert!(selection.is_empty());
}
