//! Sweep-line computation of the union of axis-aligned rectangles.
//!
//! The sweep walks rectangle edges left to right, maintaining the list
//! of y-intervals currently open. Between consecutive edge positions the
//! union's cross-section is constant, so each step emits one [`Slab`]
//! whose intervals are the coalesced active list.

use crate::error::BoxmergeError;
use crate::ir::Rect;

/// A y-interval in a slab's cross-section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub lo: f64,
    pub hi: f64,
}

impl Span {
    /// Returns the interval's length.
    #[inline]
    pub fn len(&self) -> f64 {
        self.hi - self.lo
    }
}

/// A vertical slice `[x_start, x_end)` of the union with a constant
/// cross-section of disjoint, non-touching y-intervals.
#[derive(Clone, Debug, PartialEq)]
pub struct Slab {
    pub x_start: f64,
    pub x_end: f64,
    pub spans: Vec<Span>,
}

// At equal x, Start must sort before End so that touching rectangles
// count as overlapping rather than gapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum EventKind {
    Start,
    End,
}

#[derive(Clone, Copy, Debug)]
struct Event {
    x: f64,
    kind: EventKind,
    span: Span,
}

/// Computes the union of a set of rectangles as a sequence of slabs.
///
/// Slabs come out in ascending x order. A slab may have zero width when
/// several edges share an x position; such slabs carry no area but keep
/// the cross-section bookkeeping exact.
///
/// # Errors
/// Returns [`BoxmergeError::DegenerateGeometry`] if a rectangle's right
/// edge does not find the interval its left edge opened. This cannot
/// happen for well-formed rectangles and indicates corrupted input
/// (e.g., NaN dimensions).
pub fn sweep(rects: &[Rect]) -> Result<Vec<Slab>, BoxmergeError> {
    let mut events = Vec::with_capacity(rects.len() * 2);
    for rect in rects {
        let span = Span {
            lo: rect.ymin(),
            hi: rect.ymax(),
        };
        events.push(Event {
            x: rect.xmin(),
            kind: EventKind::Start,
            span,
        });
        events.push(Event {
            x: rect.xmax(),
            kind: EventKind::End,
            span,
        });
    }
    events.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.kind.cmp(&b.kind)));

    let mut active: Vec<Span> = Vec::new();
    let mut slabs = Vec::new();
    let mut prev_x = match events.first() {
        Some(event) => event.x,
        None => return Ok(slabs),
    };

    for event in &events {
        if !active.is_empty() {
            slabs.push(Slab {
                x_start: prev_x,
                x_end: event.x,
                spans: coalesce(&active),
            });
        }

        match event.kind {
            EventKind::Start => active.push(event.span),
            EventKind::End => {
                // Remove exactly one occurrence: duplicate equal spans
                // from distinct rectangles are separate entries.
                let idx = active.iter().position(|s| *s == event.span).ok_or(
                    BoxmergeError::DegenerateGeometry {
                        lo: event.span.lo,
                        hi: event.span.hi,
                    },
                )?;
                active.remove(idx);
            }
        }

        prev_x = event.x;
    }

    Ok(slabs)
}

/// Merges overlapping or touching spans into the minimal disjoint set
/// covering the same extent.
fn coalesce(active: &[Span]) -> Vec<Span> {
    let mut sorted = active.to_vec();
    sorted.sort_by(|a, b| a.lo.total_cmp(&b.lo).then(a.hi.total_cmp(&b.hi)));

    let mut merged = Vec::with_capacity(sorted.len());
    let mut iter = sorted.into_iter();
    let mut current = match iter.next() {
        Some(span) => span,
        None => return merged,
    };

    for span in iter {
        if span.lo <= current.hi {
            current.hi = current.hi.max(span.hi);
        } else {
            merged.push(current);
            current = span;
        }
    }
    merged.push(current);
    merged
}
