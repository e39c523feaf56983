// Equal-tempered fret spacing, cell bounds, and pixel round-trips

use fretboard_wasm::layout::geometry::{BoardGeometry, BoardMetrics};
use fretboard_wasm::models::fretboard::{FretPoint, MAX_FRET, STRING_COUNT};

fn geometry() -> BoardGeometry {
    BoardGeometry::new(BoardMetrics::default())
}

#[test]
fn test_fret_boundaries_strictly_increase() {
    let g = geometry();
    assert_eq!(g.fret_x.len(), MAX_FRET as usize + 1);
    for pair in g.fret_x.windows(2) {
        assert!(
            pair[0] < pair[1],
            "fret boundaries must strictly increase: {} then {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_last_fret_lands_on_right_edge() {
    let g = geometry();
    let metrics = *g.metrics();
    assert_eq!(g.fret_x[0], g.x0);
    assert_eq!(g.fret_x[MAX_FRET as usize], g.x0 + metrics.board_w);
    assert_eq!(g.x1, g.x0 + metrics.board_w);
}

#[test]
fn test_strings_evenly_spaced_top_to_bottom() {
    let g = geometry();
    assert_eq!(g.string_y.len(), STRING_COUNT as usize);
    assert_eq!(g.string_y[0], g.y0);
    assert_eq!(g.string_y[STRING_COUNT as usize - 1], g.y1);

    let spacing = g.metrics().board_h / (STRING_COUNT - 1) as f32;
    for (s, pair) in g.string_y.windows(2).enumerate() {
        let gap = pair[1] - pair[0];
        assert!(
            (gap - spacing).abs() < 1e-3,
            "strings {} and {} should be {} apart, got {}",
            s,
            s + 1,
            spacing,
            gap
        );
    }
}

#[test]
fn test_open_column_sits_left_of_nut() {
    let g = geometry();
    let (left, right) = g.fret_cell_bounds_x(0);
    assert!(left > g.open_x0);
    assert!(right < g.x0);
    assert_eq!(g.fret_center_x(0), g.x0 - g.metrics().open_w / 2.0);
}

#[test]
fn test_cell_heights_respect_clamps() {
    let g = geometry();
    let canvas_top = g.metrics().margin;
    let canvas_bottom = g.metrics().margin + g.metrics().outer_pad_y * 2.0 + g.metrics().board_h;
    for string in 0..STRING_COUNT {
        let (top, bottom) = g.string_cell_bounds_y(string);
        let height = bottom - top;
        assert!(height >= 10.0, "string {} cell too short: {}", string, height);
        assert!(height <= 40.0, "string {} cell too tall: {}", string, height);
        assert!(top >= canvas_top);
        assert!(bottom <= canvas_bottom);
    }
}

#[test]
fn test_cell_center_round_trips_through_hit_test() {
    let g = geometry();
    for string in 0..STRING_COUNT {
        for fret in 0..=MAX_FRET {
            let point = FretPoint::new(string, fret);
            let (x, y) = g.cell_center(point);
            assert_eq!(
                g.hit_test(x, y),
                Some(point),
                "center ({}, {}) of string {} fret {} should map back to itself",
                x,
                y,
                string,
                fret
            );
        }
    }
}

#[test]
fn test_anywhere_left_of_nut_is_the_open_string() {
    let g = geometry();
    let y = g.string_y[2];
    let hit = g.hit_test(g.x0 - 1.0, y);
    assert_eq!(hit, Some(FretPoint::new(2, 0)));
    let hit = g.hit_test(g.open_x0, y);
    assert_eq!(hit, Some(FretPoint::new(2, 0)));
}

#[test]
fn test_clicks_between_centers_pick_the_nearest() {
    let g = geometry();
    let y = g.string_y[0];
    // Just past the midpoint between fret 1 and fret 2 centers
    let c1 = g.fret_center_x(1);
    let c2 = g.fret_center_x(2);
    let mid = (c1 + c2) / 2.0;
    assert_eq!(g.hit_test(mid - 1.0, y), Some(FretPoint::new(0, 1)));
    assert_eq!(g.hit_test(mid + 1.0, y), Some(FretPoint::new(0, 2)));
}

#[test]
fn test_out_of_bounds_clicks_resolve_to_nothing() {
    let g = geometry();
    assert_eq!(g.hit_test(0.0, 0.0), None);
    assert_eq!(g.hit_test(g.open_x0 - 1.0, g.string_y[0]), None);
    assert_eq!(g.hit_test(g.x1 + 1.0, g.string_y[0]), None);
    assert_eq!(g.hit_test(g.fret_center_x(3), g.y0 - 1.0), None);
    assert_eq!(g.hit_test(g.fret_center_x(3), g.y1 + 1.0), None);
}
