//! Equal-tempered fretboard geometry
//!
//! Fret spacing follows the equal-tempered string-length model: fret n
//! sits at ratio `1 - 2^(-n/12)` of the scale length, so successive
//! frets are progressively closer together. Ratios are normalized so the
//! 12th fret boundary lands exactly on the right edge of the board.
//!
//! The inverse mapping (pixel to cell) is nearest-center, not
//! containment: a click resolves to the string whose row center and the
//! fret whose column center are closest, whether or not it falls inside
//! the drawn rectangle. Clicks outside the board rectangle resolve to
//! nothing.

use serde::{Deserialize, Serialize};

use crate::models::fretboard::{FretPoint, MAX_FRET, STRING_COUNT};

/// Horizontal inset of the open-string column on both sides.
const OPEN_PAD_X: f32 = 12.0;

/// Vertical inset applied inside each cell.
const CELL_PAD_Y: f32 = 2.0;

/// Cells taller than this are shrunk to it, centered.
const MAX_CELL_H: f32 = 40.0;

/// Final floor on cell height after all clamps.
const MIN_CELL_H: f32 = 10.0;

/// Fixed pixel dimensions of the drawn board.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct BoardMetrics {
    /// Outer canvas margin.
    pub margin: f32,
    /// Width of the fretted board (nut to 12th fret).
    pub board_w: f32,
    /// Height between the top and bottom strings.
    pub board_h: f32,
    /// Width of the open-string column left of the nut.
    pub open_w: f32,
    /// Vertical padding above/below the board inside the canvas.
    pub outer_pad_y: f32,
    /// How far the extreme strings' cells extend past the board edge.
    pub extend_out: f32,
}

impl Default for BoardMetrics {
    fn default() -> Self {
        Self {
            margin: 20.0,
            board_w: 1100.0,
            board_h: 260.0,
            open_w: 80.0,
            outer_pad_y: 40.0,
            extend_out: 22.0,
        }
    }
}

/// Fret boundary positions for a board starting at `x0` with the given
/// width, index 0 (the nut) through [`MAX_FRET`].
pub fn fret_positions(x0: f32, width: f32) -> Vec<f32> {
    let mut ratios = vec![0.0_f32];
    for n in 1..=MAX_FRET {
        ratios.push(1.0 - 1.0 / 2_f32.powf(n as f32 / 12.0));
    }
    let r_last = ratios[ratios.len() - 1];
    ratios.into_iter().map(|r| x0 + (r / r_last) * width).collect()
}

/// A pixel-space rectangle.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct CellRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl CellRect {
    pub fn center(&self) -> (f32, f32) {
        ((self.left + self.right) / 2.0, (self.top + self.bottom) / 2.0)
    }
}

/// Pre-computed pixel geometry for the whole board.
#[derive(Clone, Debug)]
pub struct BoardGeometry {
    metrics: BoardMetrics,
    /// Left edge of the open-string column.
    pub open_x0: f32,
    /// Left edge of the fretted board (the nut).
    pub x0: f32,
    /// Right edge of the board (12th fret boundary).
    pub x1: f32,
    /// Top string y.
    pub y0: f32,
    /// Bottom string y.
    pub y1: f32,
    /// Fret boundary xs, index 0 (= nut) through [`MAX_FRET`].
    pub fret_x: Vec<f32>,
    /// Row center y per string, string 0 at the top.
    pub string_y: Vec<f32>,
}

impl BoardGeometry {
    pub fn new(metrics: BoardMetrics) -> Self {
        let open_x0 = metrics.margin;
        let x0 = metrics.margin + metrics.open_w;
        let y0 = metrics.margin + metrics.outer_pad_y;
        let y1 = y0 + metrics.board_h;

        let fret_x = fret_positions(x0, metrics.board_w);
        let x1 = fret_x[fret_x.len() - 1];

        let string_y = (0..STRING_COUNT)
            .map(|s| y0 + metrics.board_h * s as f32 / (STRING_COUNT - 1) as f32)
            .collect();

        Self {
            metrics,
            open_x0,
            x0,
            x1,
            y0,
            y1,
            fret_x,
            string_y,
        }
    }

    pub fn metrics(&self) -> &BoardMetrics {
        &self.metrics
    }

    /// Full canvas width, open column and margins included.
    pub fn canvas_width(&self) -> f32 {
        self.metrics.board_w + self.metrics.open_w + self.metrics.margin * 2.0
    }

    /// Full canvas height, with room for the fret-number row below.
    pub fn canvas_height(&self) -> f32 {
        self.metrics.board_h + self.metrics.outer_pad_y * 2.0 + self.metrics.margin * 2.0 + 30.0
    }

    /// Horizontal center of a fret column. Fret 0 is the middle of the
    /// open-string column.
    pub fn fret_center_x(&self, fret: u8) -> f32 {
        if fret == 0 {
            self.x0 - self.metrics.open_w / 2.0
        } else {
            (self.fret_x[fret as usize - 1] + self.fret_x[fret as usize]) / 2.0
        }
    }

    /// Paintable x-range of a fret column: the span between the previous
    /// and current fret boundary, or the padded open column for fret 0.
    pub fn fret_cell_bounds_x(&self, fret: u8) -> (f32, f32) {
        if fret == 0 {
            (self.open_x0 + OPEN_PAD_X, self.x0 - OPEN_PAD_X)
        } else {
            (self.fret_x[fret as usize - 1], self.fret_x[fret as usize])
        }
    }

    /// Vertical cell bounds for a string row.
    ///
    /// The raw extent runs from the midpoint with the previous string to
    /// the midpoint with the next; the extreme strings extend outward by
    /// `extend_out` instead. The result is padded, shrunk to the maximum
    /// cell height (centered), clamped to the canvas's vertical bounds,
    /// and finally floored to a minimum height.
    pub fn string_cell_bounds_y(&self, string: u8) -> (f32, f32) {
        let s = string as usize;
        let last = STRING_COUNT as usize - 1;

        let (raw_top, raw_bottom) = if s == 0 {
            (
                self.y0 - self.metrics.extend_out,
                (self.string_y[0] + self.string_y[1]) / 2.0,
            )
        } else if s == last {
            (
                (self.string_y[last - 1] + self.string_y[last]) / 2.0,
                self.y1 + self.metrics.extend_out,
            )
        } else {
            (
                (self.string_y[s - 1] + self.string_y[s]) / 2.0,
                (self.string_y[s] + self.string_y[s + 1]) / 2.0,
            )
        };

        let mut top = raw_top + CELL_PAD_Y;
        let mut bottom = raw_bottom - CELL_PAD_Y;

        if bottom - top > MAX_CELL_H {
            let mid = (top + bottom) / 2.0;
            top = mid - MAX_CELL_H / 2.0;
            bottom = mid + MAX_CELL_H / 2.0;
        }

        let canvas_top = self.metrics.margin;
        let canvas_bottom = self.metrics.margin + self.metrics.outer_pad_y * 2.0 + self.metrics.board_h;
        if top < canvas_top {
            top = canvas_top;
        }
        if bottom > canvas_bottom {
            bottom = canvas_bottom;
        }
        if bottom <= top + MIN_CELL_H {
            bottom = top + MIN_CELL_H;
        }

        (top, bottom)
    }

    /// Pixel rectangle of a cell.
    pub fn cell_rect(&self, point: FretPoint) -> CellRect {
        let (left, right) = self.fret_cell_bounds_x(point.fret);
        let (top, bottom) = self.string_cell_bounds_y(point.string);
        CellRect {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Pixel center of a cell. The x matches [`Self::fret_center_x`].
    pub fn cell_center(&self, point: FretPoint) -> (f32, f32) {
        self.cell_rect(point).center()
    }

    /// Map a pixel coordinate back to a board cell.
    ///
    /// Returns `None` outside the board's drawn rectangle. Inside it,
    /// the nearest row center picks the string and the nearest column
    /// center picks the fret; anything left of the nut is the open
    /// string.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<FretPoint> {
        if x < self.open_x0 || x > self.x1 || y < self.y0 || y > self.y1 {
            return None;
        }

        let mut string = 0_u8;
        let mut best = f32::INFINITY;
        for (i, &sy) in self.string_y.iter().enumerate() {
            let d = (sy - y).abs();
            if d < best {
                best = d;
                string = i as u8;
            }
        }

        Some(FretPoint::new(string, self.x_to_fret(x)))
    }

    fn x_to_fret(&self, x: f32) -> u8 {
        if x < self.x0 {
            return 0;
        }
        let mut fret = 1_u8;
        let mut best = f32::INFINITY;
        for f in 1..=MAX_FRET {
            let d = (self.fret_center_x(f) - x).abs();
            if d < best {
                best = d;
                fret = f;
            }
        }
        fret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fret_positions_cover_board_exactly() {
        let positions = fret_positions(100.0, 1100.0);
        assert_eq!(positions.len(), 13);
        assert_eq!(positions[0], 100.0);
        assert_eq!(positions[12], 1200.0);
    }

    #[test]
    fn test_fret_spacing_shrinks() {
        let positions = fret_positions(0.0, 1100.0);
        for i in 1..positions.len() - 1 {
            let lower = positions[i] - positions[i - 1];
            let upper = positions[i + 1] - positions[i];
            assert!(
                lower > upper,
                "fret {} span should be wider than fret {}",
                i,
                i + 1
            );
        }
    }
}
