//! Static scale, triad, tension, and inversion tables
//!
//! All tables are built once at first use and never mutated. Interval
//! sets are normalized on construction: reduced mod 12, deduplicated,
//! and sorted ascending, so membership tests are order-independent.
//!
//! Entry order matters to the UI (it is the combo-box order), so the
//! tables are ordered vectors rather than hash maps; every table is
//! small enough that lookup by linear scan is fine.

use once_cell::sync::Lazy;

/// A named set of semitone offsets from the tonic.
#[derive(Clone, Debug)]
pub struct IntervalSet {
    pub name: &'static str,
    pub intervals: Vec<u8>,
}

fn normalize(raw: &[i32]) -> Vec<u8> {
    let mut intervals: Vec<u8> = raw.iter().map(|i| i.rem_euclid(12) as u8).collect();
    intervals.sort_unstable();
    intervals.dedup();
    intervals
}

fn build(entries: &[(&'static str, &[i32])]) -> Vec<IntervalSet> {
    entries
        .iter()
        .map(|&(name, raw)| IntervalSet {
            name,
            intervals: normalize(raw),
        })
        .collect()
}

/// The 13 scale definitions: the seven diatonic modes plus harmonic
/// minor, melodic minor, and its common altered variants.
static SCALES: Lazy<Vec<IntervalSet>> = Lazy::new(|| {
    build(&[
        ("Major (Ionian)", &[0, 2, 4, 5, 7, 9, 11]),
        ("Dorian", &[0, 2, 3, 5, 7, 9, 10]),
        ("Phrygian", &[0, 1, 3, 5, 7, 8, 10]),
        ("Lydian", &[0, 2, 4, 6, 7, 9, 11]),
        ("Mixolydian", &[0, 2, 4, 5, 7, 9, 10]),
        ("Natural Minor (Aeolian)", &[0, 2, 3, 5, 7, 8, 10]),
        ("Locrian", &[0, 1, 3, 5, 6, 8, 10]),
        ("Harmonic Minor", &[0, 2, 3, 5, 7, 8, 11]),
        ("Melodic Minor (Asc)", &[0, 2, 3, 5, 7, 9, 11]),
        ("Lydian Dominant", &[0, 2, 4, 6, 7, 9, 10]),
        ("Mixolydian b6", &[0, 2, 4, 5, 7, 8, 10]),
        ("Locrian #2", &[0, 2, 3, 5, 6, 8, 10]),
        ("Altered (Super Locrian)", &[0, 1, 3, 4, 6, 8, 10]),
    ])
});

/// The 9 triad definitions. `5` is the two-tone power chord; `add9` and
/// `madd9` carry the added ninth in the base set.
static TRIADS: Lazy<Vec<IntervalSet>> = Lazy::new(|| {
    build(&[
        ("M", &[0, 4, 7]),
        ("m", &[0, 3, 7]),
        ("dim", &[0, 3, 6]),
        ("aug", &[0, 4, 8]),
        ("sus2", &[0, 2, 7]),
        ("sus4", &[0, 5, 7]),
        ("5", &[0, 7]),
        ("add9", &[0, 4, 7, 2]),
        ("madd9", &[0, 3, 7, 2]),
    ])
});

/// The 13 tension definitions: extra offsets merged into the triad.
static TENSIONS: Lazy<Vec<IntervalSet>> = Lazy::new(|| {
    build(&[
        ("6", &[9]),
        ("7", &[10]),
        ("maj7", &[11]),
        ("9", &[2, 10]),
        ("maj9", &[2, 11]),
        ("11", &[5, 10]),
        ("13", &[9, 10]),
        ("6/9", &[2, 9]),
        ("7b9", &[1, 10]),
        ("7#9", &[3, 10]),
        ("7#11", &[6, 10]),
        ("7b13", &[8, 10]),
        ("alt (b9 #9 b5 #5)", &[1, 3, 6, 8, 10]),
    ])
});

/// Inversion names and their ordinal: the index of the chord-tone
/// offset that becomes the bass.
const INVERSIONS: [(&str, usize); 4] = [("Root", 0), ("1st", 1), ("2nd", 2), ("3rd", 3)];

/// Scale names in combo-box order.
pub fn scale_names() -> Vec<&'static str> {
    SCALES.iter().map(|s| s.name).collect()
}

/// Interval set for a scale name.
pub fn scale_intervals(name: &str) -> Option<&'static [u8]> {
    SCALES
        .iter()
        .find(|s| s.name == name)
        .map(|s| s.intervals.as_slice())
}

/// Triad names in combo-box order.
pub fn triad_names() -> Vec<&'static str> {
    TRIADS.iter().map(|t| t.name).collect()
}

/// Interval set for a triad name.
pub fn triad_intervals(name: &str) -> Option<&'static [u8]> {
    TRIADS
        .iter()
        .find(|t| t.name == name)
        .map(|t| t.intervals.as_slice())
}

/// Tension names in combo-box order.
pub fn tension_names() -> Vec<&'static str> {
    TENSIONS.iter().map(|t| t.name).collect()
}

/// Extra interval offsets for a tension name.
pub fn tension_intervals(name: &str) -> Option<&'static [u8]> {
    TENSIONS
        .iter()
        .find(|t| t.name == name)
        .map(|t| t.intervals.as_slice())
}

/// Inversion names in combo-box order.
pub fn inversion_names() -> Vec<&'static str> {
    INVERSIONS.iter().map(|&(name, _)| name).collect()
}

/// Ordinal for an inversion name (0 = root position).
pub fn inversion_index(name: &str) -> Option<usize> {
    INVERSIONS
        .iter()
        .find(|&&(n, _)| n == name)
        .map(|&(_, idx)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(scale_names().len(), 13);
        assert_eq!(triad_names().len(), 9);
        assert_eq!(tension_names().len(), 13);
        assert_eq!(inversion_names().len(), 4);
    }

    #[test]
    fn test_normalization_dedups_and_sorts() {
        assert_eq!(normalize(&[7, 0, 4, 4, 12]), vec![0, 4, 7]);
        assert_eq!(normalize(&[-1, 13]), vec![1, 11]);
    }

    #[test]
    fn test_add9_triad_keeps_declaration_intent() {
        // Declared as [0, 4, 7, 2]; stored sorted
        assert_eq!(triad_intervals("add9"), Some(&[0, 2, 4, 7][..]));
    }
}
