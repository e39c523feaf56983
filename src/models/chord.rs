//! Chord resolution
//!
//! Combines a triad with an optional tension into the chord's allowed
//! pitch-class set, builds the display name, and resolves the bass note
//! for the requested inversion.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::library;
use super::pitch::PitchClass;

/// The chord controls as selected in the UI.
///
/// `None` for triad or tension is the "(none)" sentinel. The inversion
/// always carries a name; "Root" is the neutral choice.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChordSelection {
    pub triad: Option<String>,
    pub tension: Option<String>,
    pub inversion: String,
}

impl Default for ChordSelection {
    fn default() -> Self {
        Self {
            triad: None,
            tension: None,
            inversion: "Root".to_string(),
        }
    }
}

/// A fully resolved chord against a tonic.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedChord {
    /// Pitch classes the chord allows on the board, normalized.
    pub allowed: BTreeSet<PitchClass>,
    /// Display name, e.g. `"Am7"` or `"C/E"`. Empty for the neutral
    /// "no chord" state.
    pub name: String,
    /// Bass pitch class for the requested inversion. `None` when no
    /// chord is selected.
    pub bass: Option<PitchClass>,
}

impl ResolvedChord {
    /// The neutral state when no triad is selected.
    pub fn none() -> Self {
        Self {
            allowed: BTreeSet::new(),
            name: String::new(),
            bass: None,
        }
    }

    /// True when no triad is selected.
    pub fn is_none(&self) -> bool {
        self.allowed.is_empty()
    }

    /// Comma-joined spellings of the allowed notes, ascending pitch class.
    pub fn note_summary(&self) -> String {
        self.allowed
            .iter()
            .map(|pc| pc.spelled())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Resolve the selected chord against a tonic.
///
/// The allowed set is `{ (tonic + i) mod 12 }` over the union of the
/// triad and tension intervals. The name concatenates the root spelling,
/// the triad suffix (`M` contributes nothing, `m` contributes `m`, every
/// other triad its literal name), the tension's literal name, and a
/// `/bass` suffix when the inversion is not root position.
pub fn resolve_chord(selection: &ChordSelection, tonic: PitchClass) -> ResolvedChord {
    let triad_name = match selection.triad.as_deref() {
        Some(name) => name,
        None => return ResolvedChord::none(),
    };

    let triad = library::triad_intervals(triad_name).unwrap_or(&[0]);
    let tension = selection
        .tension
        .as_deref()
        .and_then(library::tension_intervals)
        .unwrap_or(&[]);

    let intervals: BTreeSet<u8> = triad.iter().chain(tension.iter()).copied().collect();
    let allowed: BTreeSet<PitchClass> = intervals
        .iter()
        .map(|&i| tonic.transpose(i as i32))
        .collect();

    let mut name = tonic.spelled();
    match triad_name {
        "M" => {}
        "m" => name.push('m'),
        other => name.push_str(other),
    }
    if let Some(tension_name) = selection.tension.as_deref() {
        name.push_str(tension_name);
    }

    let ordinal = library::inversion_index(&selection.inversion).unwrap_or(0);
    let bass = bass_for_inversion(&allowed, tonic, ordinal);
    if ordinal > 0 {
        if let Some(bass_pc) = bass {
            name.push('/');
            name.push_str(&bass_pc.spelled());
        }
    }

    ResolvedChord {
        allowed,
        name,
        bass,
    }
}

/// Bass pitch class for an inversion ordinal over a chord's tones.
///
/// The chord tones are reduced to their sorted unique offsets from the
/// tonic; ordinal 0 is the tonic itself, ordinal `k` picks the k-th
/// smallest offset, clamped to the highest one available. An empty
/// chord has no bass.
pub fn bass_for_inversion(
    allowed: &BTreeSet<PitchClass>,
    tonic: PitchClass,
    ordinal: usize,
) -> Option<PitchClass> {
    if allowed.is_empty() {
        return None;
    }
    if ordinal == 0 {
        return Some(tonic);
    }

    let offsets: BTreeSet<u8> = allowed.iter().map(|pc| pc.interval_from(tonic)).collect();
    let offsets: Vec<u8> = offsets.into_iter().collect();
    let index = ordinal.min(offsets.len() - 1);
    Some(tonic.transpose(offsets[index] as i32))
}
