//! Display list for the canvas renderer
//!
//! This module defines the output structure returned to JavaScript. The
//! DisplayList contains all pre-calculated positions, dimensions, labels,
//! and colors needed to paint the board without any layout or theory
//! calculations on the JavaScript side.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::fretboard::{self, FretPoint, MAX_FRET, STRING_COUNT};
use crate::models::pitch::{split_key_label, tension_label};
use crate::models::selection::SelectionState;
use crate::models::settings::Settings;

use super::forms;
use super::geometry::{BoardGeometry, CellRect};

/// Fill color for scale overlay cells.
const SCALE_FILL: &str = "#555555";

/// Fill color for manually toggled cells.
const ACTIVE_FILL: &str = "#111111";

/// Board wood color.
const BOARD_FILL: &str = "#8b5a2b";

/// Inlay dot color.
const INLAY_FILL: &str = "ivory";

/// Frets that carry inlay dots and number labels.
const INLAY_FRETS: [u8; 5] = [3, 5, 7, 9, 12];

/// Top-level display list: static board furniture plus the three
/// independent overlays and the summary strings.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DisplayList {
    /// Board rectangle, fret/string lines, inlays, fret numbers.
    pub board: BoardDisplay,

    /// Root markers at every cell sounding the tonic.
    pub roots: Vec<RootMarker>,

    /// Scale overlay cells (uniform gray).
    pub scale_cells: Vec<OverlayCell>,

    /// Chord overlay cells, colored by form group.
    pub chord_cells: Vec<OverlayCell>,

    /// Manually toggled cells (near-black).
    pub active_cells: Vec<OverlayCell>,

    /// Major and relative-minor names from the key label.
    pub key_hint: KeyHint,

    /// Selected scale name and its resolved note names, when a scale is
    /// active.
    pub scale_summary: Option<ScaleSummary>,

    /// Resolved chord name and its note names, when a chord is active.
    pub chord_summary: Option<ChordSummary>,
}

/// Static board furniture, drawn before the overlays.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BoardDisplay {
    pub canvas_width: f32,
    pub canvas_height: f32,

    /// The wooden board rectangle (nut through 12th fret).
    pub rect: CellRect,

    /// Board fill color.
    pub fill: String,

    /// Nut line x (drawn heavier than the fret lines).
    pub nut_x: f32,
    pub nut_width: f32,

    /// Fret lines for frets 1 through 12.
    pub fret_lines: Vec<FretLine>,

    /// One line per string, top to bottom, gauge increasing downward.
    pub string_lines: Vec<StringLine>,

    /// Inlay dot centers; the 12th fret carries a doubled dot.
    pub inlays: Vec<InlayDot>,

    /// Fret number labels under the board.
    pub fret_numbers: Vec<FretNumber>,
}

/// A vertical fret line.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct FretLine {
    pub fret: u8,
    pub x: f32,
    pub width: f32,
}

/// A horizontal string line.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct StringLine {
    pub string: u8,
    pub y: f32,
    pub width: f32,
}

/// An inlay dot.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct InlayDot {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub fill: String,
}

/// A fret number label.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct FretNumber {
    pub fret: u8,
    pub x: f32,
    pub y: f32,
}

/// A root marker: a circle with an "R" at a tonic position.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct RootMarker {
    pub string: u8,
    pub fret: u8,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// One highlighted cell with its labels and colors.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OverlayCell {
    pub string: u8,
    pub fret: u8,

    /// Note spelling, e.g. `"C#/Db"`.
    pub note_label: String,

    /// Scale-degree label relative to the tonic, e.g. `"b7"`.
    pub degree_label: String,

    /// Painted rectangle, insets already applied.
    pub rect: CellRect,

    pub fill: String,
    pub text_color: String,
}

/// Major and relative-minor names for the key hint label.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct KeyHint {
    pub major: String,
    pub minor: Option<String>,
}

/// Scale summary for the hint label.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ScaleSummary {
    pub name: String,
    /// Comma-joined note spellings, ascending pitch class.
    pub notes: String,
}

/// Chord summary for the hint label.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ChordSummary {
    /// Resolved display name, e.g. `"Am7"` or `"C/E"`.
    pub name: String,
    /// Comma-joined note spellings, ascending pitch class.
    pub notes: String,
}

/// Builds a [`DisplayList`] from the current state and the board
/// geometry.
pub struct DisplayListBuilder<'a> {
    geometry: &'a BoardGeometry,
}

impl<'a> DisplayListBuilder<'a> {
    pub fn new(geometry: &'a BoardGeometry) -> Self {
        Self { geometry }
    }

    /// Assemble the complete display list.
    pub fn build(
        &self,
        settings: &Settings,
        selection: &SelectionState,
        scale_points: &BTreeSet<FretPoint>,
        chord_points: &BTreeSet<FretPoint>,
    ) -> DisplayList {
        let resolved = settings.resolved_chord();

        let scale_summary = settings.scale.as_ref().map(|name| ScaleSummary {
            name: name.clone(),
            notes: settings
                .scale_allowed()
                .iter()
                .map(|pc| pc.spelled())
                .collect::<Vec<_>>()
                .join(", "),
        });

        let chord_summary = if resolved.is_none() {
            None
        } else {
            Some(ChordSummary {
                notes: resolved.note_summary(),
                name: resolved.name,
            })
        };

        let (major, minor) = split_key_label(&settings.key_label);

        DisplayList {
            board: self.board_display(),
            roots: self.root_markers(settings),
            scale_cells: self.overlay_cells(settings, scale_points, |_, _| {
                (SCALE_FILL, "white")
            }),
            chord_cells: self.overlay_cells(settings, chord_points, |string, fret| {
                forms::chord_cell_colors(settings.form.as_deref(), string, fret)
            }),
            active_cells: self.overlay_cells(settings, selection.points(), |_, _| {
                (ACTIVE_FILL, "white")
            }),
            key_hint: KeyHint { major, minor },
            scale_summary,
            chord_summary,
        }
    }

    fn board_display(&self) -> BoardDisplay {
        let g = self.geometry;

        let fret_lines = (1..=MAX_FRET)
            .map(|fret| FretLine {
                fret,
                x: g.fret_x[fret as usize],
                width: if fret == MAX_FRET { 3.0 } else { 2.0 },
            })
            .collect();

        let string_lines = (0..STRING_COUNT)
            .map(|string| StringLine {
                string,
                y: g.string_y[string as usize],
                width: (string + 1) as f32,
            })
            .collect();

        let center_y = (g.y0 + g.y1) / 2.0;
        let mut inlays = Vec::new();
        for &fret in &INLAY_FRETS {
            let x = g.fret_center_x(fret);
            if fret == 12 {
                // Doubled dot above and below the center line
                for offset in [-48.0, 48.0] {
                    inlays.push(InlayDot {
                        x,
                        y: center_y + offset,
                        radius: 7.0,
                        fill: INLAY_FILL.to_string(),
                    });
                }
            } else {
                inlays.push(InlayDot {
                    x,
                    y: center_y,
                    radius: 7.0,
                    fill: INLAY_FILL.to_string(),
                });
            }
        }

        let fret_numbers = INLAY_FRETS
            .iter()
            .map(|&fret| FretNumber {
                fret,
                x: g.fret_center_x(fret),
                y: g.y1 + 14.0,
            })
            .collect();

        BoardDisplay {
            canvas_width: g.canvas_width(),
            canvas_height: g.canvas_height(),
            rect: CellRect {
                left: g.x0,
                top: g.y0,
                right: g.x1,
                bottom: g.y1,
            },
            fill: BOARD_FILL.to_string(),
            nut_x: g.x0,
            nut_width: 8.0,
            fret_lines,
            string_lines,
            inlays,
            fret_numbers,
        }
    }

    fn root_markers(&self, settings: &Settings) -> Vec<RootMarker> {
        fretboard::points_for_pitch_class(settings.tonic)
            .iter()
            .map(|point| RootMarker {
                string: point.string,
                fret: point.fret,
                x: self.geometry.fret_center_x(point.fret),
                y: self.geometry.string_y[point.string as usize],
                radius: 12.0,
            })
            .collect()
    }

    fn overlay_cells<F>(
        &self,
        settings: &Settings,
        points: &BTreeSet<FretPoint>,
        colors: F,
    ) -> Vec<OverlayCell>
    where
        F: Fn(u8, u8) -> (&'static str, &'static str),
    {
        points
            .iter()
            .map(|&point| {
                let pc = point.pitch_class();
                let degree = pc.interval_from(settings.tonic);
                let rect = self.geometry.cell_rect(point);
                let (fill, text_color) = colors(point.string, point.fret);
                OverlayCell {
                    string: point.string,
                    fret: point.fret,
                    note_label: pc.spelled(),
                    degree_label: tension_label(degree).to_string(),
                    // Painted slightly inside the logical cell bounds
                    rect: CellRect {
                        left: rect.left + 2.0,
                        top: rect.top + 1.0,
                        right: rect.right - 2.0,
                        bottom: rect.bottom - 1.0,
                    },
                    fill: fill.to_string(),
                    text_color: text_color.to_string(),
                }
            })
            .collect()
    }
}
