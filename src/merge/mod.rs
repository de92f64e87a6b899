//! Category merging: sweep-line union collapsed to one bounding box.
//!
//! A merge gathers the rectangles of two categories, computes their
//! exact union with [`sweep`], converts every slab cell back into a
//! rectangle, and reduces those cells with [`enclosing`] to a single
//! rectangle stored under the new label.
//!
//! The collapse to one bounding rectangle is the contract, not an
//! accident: the published result of a merge is always a single box,
//! even when the union is several disconnected pieces. Callers that
//! need the true union shape should use [`sweep`] directly.

mod bounds;
mod sweep;

pub use bounds::enclosing;
pub use sweep::{sweep, Slab, Span};

use crate::error::BoxmergeError;
use crate::ir::{Dataset, Rect};

/// Merges two categories into one.
///
/// The rectangles under `category1` and `category2` (in that order) are
/// replaced by a single rectangle enclosing their union, appended under
/// `new_category`. If `new_category` already exists the result is added
/// to it; existing entries are never replaced.
///
/// The dataset is untouched on failure: both categories are looked up
/// and the whole computation runs before any mutation.
///
/// # Errors
/// - [`BoxmergeError::CategoryNotFound`] if either source label is
///   absent.
/// - [`BoxmergeError::EmptyRectangleSet`] if the union has no cells
///   (only possible with degenerate zero-extent input).
/// - [`BoxmergeError::DegenerateGeometry`] propagated from the sweep.
pub fn merge_categories(
    dataset: &mut Dataset,
    category1: &str,
    category2: &str,
    new_category: &str,
) -> Result<(), BoxmergeError> {
    let first = dataset
        .get(category1)
        .ok_or_else(|| BoxmergeError::CategoryNotFound(category1.to_string()))?;
    let second = dataset
        .get(category2)
        .ok_or_else(|| BoxmergeError::CategoryNotFound(category2.to_string()))?;

    let mut gathered = Vec::with_capacity(first.len() + second.len());
    gathered.extend_from_slice(first);
    gathered.extend_from_slice(second);

    let slabs = sweep(&gathered)?;
    let cells: Vec<Rect> = slabs
        .iter()
        .flat_map(|slab| {
            slab.spans
                .iter()
                .map(move |span| Rect::from_corners(slab.x_start, span.lo, slab.x_end, span.hi))
        })
        .collect();
    let merged = enclosing(&cells)?;

    dataset.take(category1);
    dataset.take(category2);
    dataset.insert(new_category, merged);
    Ok(())
}
