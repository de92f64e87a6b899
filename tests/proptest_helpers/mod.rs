#![allow(dead_code)]

use boxmerge::ir::Rect;
use boxmerge::merge::{Slab, Span};
use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

// Rectangles on an integer grid inside GRID_MIN..GRID_MAX, so the
// brute-force area oracle can integrate over unit cells exactly.
pub const GRID_MIN: i32 = -12;
pub const GRID_MAX: i32 = 20;

pub fn arb_grid_rect() -> impl Strategy<Value = Rect> {
    (GRID_MIN..12, GRID_MIN..12, 0i32..8, 0i32..8).prop_map(|(x, y, w, h)| {
        Rect::from_corners(x as f64, y as f64, (x + w) as f64, (y + h) as f64)
    })
}

pub fn arb_grid_rects(max: usize) -> impl Strategy<Value = Vec<Rect>> {
    proptest::collection::vec(arb_grid_rect(), 1..max)
}

/// Union area by sampling the center of every unit cell in the grid
/// window. Exact for integer-cornered rectangles.
pub fn grid_union_area(rects: &[Rect]) -> f64 {
    let mut area = 0.0;
    for cell_x in GRID_MIN..GRID_MAX {
        for cell_y in GRID_MIN..GRID_MAX {
            let x = cell_x as f64 + 0.5;
            let y = cell_y as f64 + 0.5;
            let covered = rects
                .iter()
                .any(|r| x > r.xmin() && x < r.xmax() && y > r.ymin() && y < r.ymax());
            if covered {
                area += 1.0;
            }
        }
    }
    area
}

/// Total area covered by a sweep result: slab width times the summed
/// length of the slab's cross-section.
pub fn covered_area(slabs: &[Slab]) -> f64 {
    slabs
        .iter()
        .map(|slab| {
            let cross: f64 = slab.spans.iter().map(Span::len).sum();
            (slab.x_end - slab.x_start) * cross
        })
        .sum()
}
