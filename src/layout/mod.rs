//! Pixel layout for the fretboard diagram
//!
//! Geometry converts logical (string, fret) coordinates into pixel
//! bounds and back; the display list packages every position, color,
//! and label so JavaScript renders without doing any layout math.

pub mod geometry;
pub mod forms;
pub mod display_list;

pub use geometry::{BoardGeometry, BoardMetrics, CellRect};
pub use forms::{chord_cell_colors, form_names, FormGroup, FORM_GROUPS};
pub use display_list::{BoardDisplay, DisplayList, DisplayListBuilder, OverlayCell};
