//! Manually toggled cells
//!
//! Manual selection operates at pitch-class granularity: clicking any
//! occurrence of a note toggles every occurrence of that note across
//! the whole board, never a single cell.

use std::collections::BTreeSet;

use super::fretboard::{self, FretPoint};
use super::pitch::PitchClass;

/// The set of manually highlighted cells.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    points: BTreeSet<FretPoint>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the whole group of cells sounding `pc`: if any of them is
    /// currently active the entire group is removed, otherwise the
    /// entire group is added.
    pub fn toggle(&mut self, pc: PitchClass) {
        let group = fretboard::points_for_pitch_class(pc);
        if group.iter().any(|point| self.points.contains(point)) {
            for point in &group {
                self.points.remove(point);
            }
        } else {
            self.points.extend(group);
        }
    }

    /// Drop every manual highlight. Called when the key changes.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, point: FretPoint) -> bool {
        self.points.contains(&point)
    }

    pub fn points(&self) -> &BTreeSet<FretPoint> {
        &self.points
    }
}
