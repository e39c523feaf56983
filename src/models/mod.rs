//! Models module for the fretboard visualizer
//!
//! This module contains the music-theory core: pitch-class arithmetic,
//! the static scale/chord tables, chord resolution, the fretboard
//! coordinate map, and the user-facing settings and selection state.

pub mod pitch;
pub mod library;
pub mod chord;
pub mod fretboard;
pub mod selection;
pub mod settings;

// Re-export commonly used types
pub use pitch::{key_label_to_tonic, note_name_to_pc, tension_label, PitchClass};
pub use chord::{resolve_chord, ChordSelection, ResolvedChord};
pub use fretboard::{pitch_class_at, FretPoint, MAX_FRET, STRING_COUNT};
pub use selection::SelectionState;
pub use settings::{Settings, KEY_LABELS};
