//! Pitch-class arithmetic and note spelling
//!
//! Everything here works in twelve-tone equal temperament: a pitch class
//! is one of the 12 equivalence classes of notes under octave
//! equivalence, numbered 0-11 with C = 0. All arithmetic is mod 12.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sharp spellings of the 12 pitch classes, C = 0.
pub const NOTE_SHARP: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat spellings of the 12 pitch classes, C = 0.
pub const NOTE_FLAT: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Scale-degree labels by semitone distance from the tonic. This is a
/// fixed display table (chord-tension spelling), not a computed label.
const DEGREE_LABELS: [&str; 12] = [
    "R", "b9", "9", "#9", "3", "11", "#11", "5", "b13", "13", "b7", "7",
];

/// A pitch class, always stored reduced mod 12.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Create a pitch class from any semitone value, reducing mod 12.
    pub fn new(semitones: i32) -> Self {
        PitchClass(semitones.rem_euclid(12) as u8)
    }

    /// The underlying value in [0, 11].
    pub fn value(self) -> u8 {
        self.0
    }

    /// Transpose by a (possibly negative) number of semitones.
    pub fn transpose(self, semitones: i32) -> Self {
        PitchClass::new(self.0 as i32 + semitones)
    }

    /// Semitone distance upward from `tonic` to this pitch class, in [0, 11].
    pub fn interval_from(self, tonic: PitchClass) -> u8 {
        (self.0 + 12 - tonic.0) % 12
    }

    /// Display spelling: `"C#/Db"` when the sharp and flat names differ,
    /// a single name for naturals.
    pub fn spelled(self) -> String {
        let sharp = NOTE_SHARP[self.0 as usize];
        let flat = NOTE_FLAT[self.0 as usize];
        if sharp == flat {
            sharp.to_string()
        } else {
            format!("{}/{}", sharp, flat)
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.spelled())
    }
}

/// Parse a note name: a letter A-G (case-insensitive) followed by an
/// optional `#` or `b` accidental.
///
/// Empty or unrecognized letters fall back to C. The selector
/// vocabularies are closed, so the fallback is a defensive default
/// rather than an error path.
pub fn note_name_to_pc(name: &str) -> PitchClass {
    let name = name.trim();
    let mut chars = name.chars();

    let base = match chars.next().map(|c| c.to_ascii_uppercase()) {
        Some('C') => 0,
        Some('D') => 2,
        Some('E') => 4,
        Some('F') => 5,
        Some('G') => 7,
        Some('A') => 9,
        Some('B') => 11,
        _ => 0,
    };

    let accidental: String = chars.collect();
    let accidental = accidental.trim();
    let offset = if accidental == "#" {
        1
    } else if accidental.eq_ignore_ascii_case("b") {
        -1
    } else {
        0
    };

    PitchClass::new(base + offset)
}

/// Derive the tonic from a key label such as `"C (Am)"` or
/// `"F# / Gb (D#m / Ebm)"`.
///
/// The major part is everything before the `(`; when it carries
/// enharmonic alternates joined by `/`, the first name wins.
pub fn key_label_to_tonic(label: &str) -> PitchClass {
    let major_part = match label.split_once('(') {
        Some((major, _)) => major,
        None => label,
    };
    let first_name = match major_part.split_once('/') {
        Some((first, _)) => first,
        None => major_part,
    };
    note_name_to_pc(first_name.trim())
}

/// Split a key label into its major name and relative-minor name, for
/// the key hint shown next to the selector.
pub fn split_key_label(label: &str) -> (String, Option<String>) {
    match label.split_once('(') {
        Some((major, rest)) => {
            let minor = match rest.split_once(')') {
                Some((inner, _)) => inner.trim().to_string(),
                None => rest.trim().to_string(),
            };
            let minor = if minor.is_empty() { None } else { Some(minor) };
            (major.trim().to_string(), minor)
        }
        None => (label.trim().to_string(), None),
    }
}

/// Scale-degree label for a semitone distance from the tonic.
pub fn tension_label(semitones: u8) -> &'static str {
    DEGREE_LABELS[(semitones % 12) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accidental_parsing() {
        assert_eq!(note_name_to_pc("C#").value(), 1);
        assert_eq!(note_name_to_pc("Db").value(), 1);
        assert_eq!(note_name_to_pc("Cb").value(), 11);
        // Lowercase letter and accidental both accepted
        assert_eq!(note_name_to_pc("f#").value(), 6);
        assert_eq!(note_name_to_pc("BB").value(), 10);
    }

    #[test]
    fn test_unknown_letter_defaults_to_c() {
        assert_eq!(note_name_to_pc("").value(), 0);
        assert_eq!(note_name_to_pc("H").value(), 0);
        assert_eq!(note_name_to_pc("  ").value(), 0);
    }

    #[test]
    fn test_spelling_collapses_naturals() {
        assert_eq!(PitchClass::new(0).spelled(), "C");
        assert_eq!(PitchClass::new(6).spelled(), "F#/Gb");
        assert_eq!(PitchClass::new(16).value(), 4);
        assert_eq!(PitchClass::new(-1).value(), 11);
    }
}
