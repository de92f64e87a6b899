//! Enclosing-rectangle reduction.

use crate::error::BoxmergeError;
use crate::ir::Rect;

/// Computes the smallest rectangle enclosing every input rectangle.
///
/// The result is invariant under reordering or duplication of the
/// inputs.
///
/// # Errors
/// Returns [`BoxmergeError::EmptyRectangleSet`] if `rects` is empty -
/// there is no meaningful enclosing rectangle of nothing.
pub fn enclosing(rects: &[Rect]) -> Result<Rect, BoxmergeError> {
    let first = rects.first().ok_or(BoxmergeError::EmptyRectangleSet)?;

    let mut min_x = first.xmin();
    let mut min_y = first.ymin();
    let mut max_x = first.xmax();
    let mut max_y = first.ymax();

    for rect in &rects[1..] {
        min_x = min_x.min(rect.xmin());
        min_y = min_y.min(rect.ymin());
        max_x = max_x.max(rect.xmax());
        max_y = max_y.max(rect.ymax());
    }

    Ok(Rect::from_corners(min_x, min_y, max_x, max_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_errors() {
        let err = enclosing(&[]).unwrap_err();
        assert!(matches!(err, BoxmergeError::EmptyRectangleSet));
    }

    #[test]
    fn test_single_rectangle_is_identity() {
        let rect = Rect::from_center(1.0, 2.0, 3.0, 4.0);
        assert_eq!(enclosing(&[rect]).unwrap(), rect);
    }

    #[test]
    fn test_disjoint_pair() {
        let rects = [
            Rect::from_center(0.0, 0.0, 2.0, 2.0),
            Rect::from_center(3.0, 0.0, 2.0, 2.0),
        ];
        let bounds = enclosing(&rects).unwrap();
        assert_eq!(bounds, Rect::from_center(1.5, 0.0, 5.0, 2.0));
    }

    #[test]
    fn test_invariant_under_permutation_and_duplication() {
        let a = Rect::from_center(0.0, 0.0, 2.0, 2.0);
        let b = Rect::from_center(5.0, -3.0, 1.0, 4.0);
        let c = Rect::from_center(-2.0, 1.0, 3.0, 1.0);

        let forward = enclosing(&[a, b, c]).unwrap();
        let reversed = enclosing(&[c, b, a]).unwrap();
        let duplicated = enclosing(&[a, a, b, c, c, b]).unwrap();

        assert_eq!(forward, reversed);
        assert_eq!(forward, duplicated);
    }

    #[test]
    fn test_encloses_every_input() {
        let rects = [
            Rect::from_center(0.0, 0.0, 2.0, 2.0),
            Rect::from_center(5.0, -3.0, 1.0, 4.0),
            Rect::from_center(-2.0, 1.0, 3.0, 1.0),
        ];
        let bounds = enclosing(&rects).unwrap();
        for rect in &rects {
            assert!(bounds.xmin() <= rect.xmin());
            assert!(bounds.xmax() >= rect.xmax());
            assert!(bounds.ymin() <= rect.ymin());
            assert!(bounds.ymax() >= rect.ymax());
        }
    }
}
