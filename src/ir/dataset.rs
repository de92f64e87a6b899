//! The category-to-rectangles store.

use crate::error::BoxmergeError;

use super::rect::Rect;

/// An ordered multimap from category label to rectangles.
///
/// Labels appear in first-insertion order and rectangles within a label
/// in insertion order. Order is preserved so that reading and rewriting
/// a CSV does not shuffle rows, but no operation assigns meaning to it.
///
/// Labels are opaque strings: `"007"` and `"7"` are distinct categories,
/// and neither is ever treated as a number. A label with no rectangles
/// does not exist - removing a category's last rectangle removes the
/// category.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    groups: Vec<Group>,
}

#[derive(Clone, Debug, PartialEq)]
struct Group {
    label: String,
    rects: Vec<Rect>,
}

impl Dataset {
    /// Creates an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of categories.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if the dataset has no categories.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns the total number of rectangles across all categories.
    pub fn rect_count(&self) -> usize {
        self.groups.iter().map(|g| g.rects.len()).sum()
    }

    /// Appends a rectangle under a label, creating the label if absent.
    pub fn insert(&mut self, label: impl Into<String>, rect: Rect) {
        let label = label.into();
        match self.groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.rects.push(rect),
            None => self.groups.push(Group {
                label,
                rects: vec![rect],
            }),
        }
    }

    /// Returns the rectangles under a label, if the label exists.
    pub fn get(&self, label: &str) -> Option<&[Rect]> {
        self.groups
            .iter()
            .find(|g| g.label == label)
            .map(|g| g.rects.as_slice())
    }

    /// Removes a label and returns its rectangles, if the label exists.
    pub fn take(&mut self, label: &str) -> Option<Vec<Rect>> {
        let idx = self.groups.iter().position(|g| g.label == label)?;
        Some(self.groups.remove(idx).rects)
    }

    /// Relabels a category.
    ///
    /// If `new` already exists, the old category's rectangles are
    /// appended to it (duplicate labels regroup to one category the same
    /// way rereading a CSV with repeated labels would).
    pub fn rename(&mut self, old: &str, new: &str) -> Result<(), BoxmergeError> {
        let idx = self
            .groups
            .iter()
            .position(|g| g.label == old)
            .ok_or_else(|| BoxmergeError::CategoryNotFound(old.to_string()))?;

        if old == new {
            return Ok(());
        }

        match self.groups.iter().position(|g| g.label == new) {
            Some(target) => {
                let rects = self.groups.remove(idx).rects;
                let target = if target > idx { target - 1 } else { target };
                self.groups[target].rects.extend(rects);
            }
            None => self.groups[idx].label = new.to_string(),
        }
        Ok(())
    }

    /// Iterates over `(label, rectangles)` pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Rect])> {
        self.groups
            .iter()
            .map(|g| (g.label.as_str(), g.rects.as_slice()))
    }

    /// Iterates over labels in label order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_rect(cx: f64) -> Rect {
        Rect::from_center(cx, 0.0, 1.0, 1.0)
    }

    #[test]
    fn test_insert_preserves_order() {
        let mut ds = Dataset::new();
        ds.insert("b", unit_rect(0.0));
        ds.insert("a", unit_rect(1.0));
        ds.insert("b", unit_rect(2.0));

        let labels: Vec<&str> = ds.labels().collect();
        assert_eq!(labels, vec!["b", "a"]);
        assert_eq!(ds.get("b").unwrap().len(), 2);
        assert_eq!(ds.get("b").unwrap()[1].center_x, 2.0);
    }

    #[test]
    fn test_take_removes_label() {
        let mut ds = Dataset::new();
        ds.insert("a", unit_rect(0.0));
        ds.insert("b", unit_rect(1.0));

        let taken = ds.take("a").unwrap();
        assert_eq!(taken.len(), 1);
        assert!(ds.get("a").is_none());
        assert_eq!(ds.len(), 1);

        assert!(ds.take("a").is_none());
    }

    #[test]
    fn test_rename_simple() {
        let mut ds = Dataset::new();
        ds.insert("old", unit_rect(0.0));
        ds.rename("old", "new").unwrap();
        assert!(ds.get("old").is_none());
        assert_eq!(ds.get("new").unwrap().len(), 1);
    }

    #[test]
    fn test_rename_into_existing_concatenates() {
        let mut ds = Dataset::new();
        ds.insert("a", unit_rect(0.0));
        ds.insert("b", unit_rect(1.0));
        ds.rename("a", "b").unwrap();

        assert_eq!(ds.len(), 1);
        let rects = ds.get("b").unwrap();
        assert_eq!(rects.len(), 2);
        // target keeps its own rectangles first
        assert_eq!(rects[0].center_x, 1.0);
        assert_eq!(rects[1].center_x, 0.0);
    }

    #[test]
    fn test_rename_missing_label_errors() {
        let mut ds = Dataset::new();
        ds.insert("a", unit_rect(0.0));
        let err = ds.rename("nope", "b").unwrap_err();
        assert!(matches!(err, BoxmergeError::CategoryNotFound(label) if label == "nope"));
    }

    #[test]
    fn test_rename_to_self_is_noop() {
        let mut ds = Dataset::new();
        ds.insert("a", unit_rect(0.0));
        ds.rename("a", "a").unwrap();
        assert_eq!(ds.get("a").unwrap().len(), 1);
    }

    #[test]
    fn test_numeric_looking_labels_stay_distinct() {
        let mut ds = Dataset::new();
        ds.insert("7", unit_rect(0.0));
        ds.insert("007", unit_rect(1.0));
        assert_eq!(ds.len(), 2);
    }
}
