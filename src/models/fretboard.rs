//! Fretboard coordinate map
//!
//! Fixed standard tuning, 6 strings by 13 fret positions (open string
//! plus 12 frets). Point sets are always produced by a dense scan of the
//! whole board; at 78 cells there is nothing worth caching or indexing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::pitch::PitchClass;

/// Number of strings. String 0 is the topmost (high E).
pub const STRING_COUNT: u8 = 6;

/// Highest fret shown, inclusive. Fret 0 is the open string.
pub const MAX_FRET: u8 = 12;

/// Open-string pitch classes, string 0 (top) through string 5 (bottom):
/// E, B, G, D, A, E.
pub const OPEN_STRING_PCS: [u8; 6] = [4, 11, 7, 2, 9, 4];

/// A single cell on the board: (string, fret).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FretPoint {
    pub string: u8,
    pub fret: u8,
}

impl FretPoint {
    pub fn new(string: u8, fret: u8) -> Self {
        Self { string, fret }
    }

    /// The pitch class sounding at this cell.
    pub fn pitch_class(self) -> PitchClass {
        pitch_class_at(self.string, self.fret)
    }
}

/// Pitch class at (string, fret): the open-string pitch raised one
/// semitone per fret.
pub fn pitch_class_at(string: u8, fret: u8) -> PitchClass {
    PitchClass::new(OPEN_STRING_PCS[string as usize] as i32 + fret as i32)
}

/// Every cell on the board whose pitch class is in `allowed`.
pub fn points_for_pitch_classes(allowed: &BTreeSet<PitchClass>) -> BTreeSet<FretPoint> {
    let mut points = BTreeSet::new();
    if allowed.is_empty() {
        return points;
    }
    for string in 0..STRING_COUNT {
        for fret in 0..=MAX_FRET {
            if allowed.contains(&pitch_class_at(string, fret)) {
                points.insert(FretPoint::new(string, fret));
            }
        }
    }
    points
}

/// Every cell on the board sounding a single pitch class. This is the
/// group a manual click toggles as a whole.
pub fn points_for_pitch_class(pc: PitchClass) -> BTreeSet<FretPoint> {
    let mut points = BTreeSet::new();
    for string in 0..STRING_COUNT {
        for fret in 0..=MAX_FRET {
            if pitch_class_at(string, fret) == pc {
                points.insert(FretPoint::new(string, fret));
            }
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_strings_match_tuning() {
        for string in 0..STRING_COUNT {
            assert_eq!(
                pitch_class_at(string, 0).value(),
                OPEN_STRING_PCS[string as usize]
            );
        }
    }

    #[test]
    fn test_twelfth_fret_repeats_open_string() {
        for string in 0..STRING_COUNT {
            assert_eq!(pitch_class_at(string, 12), pitch_class_at(string, 0));
        }
    }

    #[test]
    fn test_chromatic_set_covers_whole_board() {
        let all: BTreeSet<PitchClass> = (0..12).map(PitchClass::new).collect();
        let points = points_for_pitch_classes(&all);
        assert_eq!(points.len(), 6 * 13);
    }
}
