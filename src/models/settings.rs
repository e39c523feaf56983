//! Active key, scale, and chord settings
//!
//! One plain value holds everything the selectors control. Every derived
//! point set is a pure function of this value plus the static theory
//! tables, and is always rebuilt whole; nothing is incrementally
//! patched, so derived state can never go stale.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::chord::{resolve_chord, ChordSelection, ResolvedChord};
use super::fretboard::{self, FretPoint};
use super::library;
use super::pitch::{key_label_to_tonic, PitchClass};

/// The 12 key labels offered by the key selector. Each names a major key
/// and its relative minor, with enharmonic alternates joined by `/`.
pub const KEY_LABELS: [&str; 12] = [
    "C (Am)",
    "G (Em)",
    "D (Bm)",
    "A (F#m)",
    "E (C#m)",
    "B (G#m)",
    "F# / Gb (D#m / Ebm)",
    "Db / C# (Bbm / A#m)",
    "Ab / G# (Fm)",
    "Eb / D# (Cm)",
    "Bb / A# (Gm)",
    "F (Dm)",
];

/// Everything the selectors control.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Settings {
    /// Selected key label, one of [`KEY_LABELS`].
    pub key_label: String,
    /// Tonic pitch class derived from the key label.
    pub tonic: PitchClass,
    /// Selected scale name; `None` shows no scale overlay.
    pub scale: Option<String>,
    /// Chord triad/tension/inversion selection.
    pub chord: ChordSelection,
    /// Selected recommended-form color group; `None` shows all forms.
    pub form: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            key_label: KEY_LABELS[0].to_string(),
            tonic: key_label_to_tonic(KEY_LABELS[0]),
            scale: None,
            chord: ChordSelection::default(),
            form: None,
        }
    }
}

impl Settings {
    /// Change the key, retonicizing from the label.
    pub fn set_key(&mut self, label: &str) {
        self.key_label = label.to_string();
        self.tonic = key_label_to_tonic(label);
    }

    /// Pitch classes the active scale allows; empty when none selected.
    pub fn scale_allowed(&self) -> BTreeSet<PitchClass> {
        match self.scale.as_deref().and_then(library::scale_intervals) {
            Some(intervals) => intervals
                .iter()
                .map(|&i| self.tonic.transpose(i as i32))
                .collect(),
            None => BTreeSet::new(),
        }
    }

    /// Board cells the active scale lights up.
    pub fn scale_points(&self) -> BTreeSet<FretPoint> {
        fretboard::points_for_pitch_classes(&self.scale_allowed())
    }

    /// Resolve the active chord against the current tonic.
    pub fn resolved_chord(&self) -> ResolvedChord {
        resolve_chord(&self.chord, self.tonic)
    }

    /// Board cells the active chord lights up.
    pub fn chord_points(&self) -> BTreeSet<FretPoint> {
        fretboard::points_for_pitch_classes(&self.resolved_chord().allowed)
    }
}
