//! Per-category JSON export.
//!
//! The export shape is an array of category summaries in corner form:
//!
//! ```json
//! [
//!   {
//!     "category_name": "0",
//!     "category_boxes": [[-1.0, -1.0, 1.0, 1.0]]
//!   }
//! ]
//! ```
//!
//! Boxes switch from the CSV's center/size form to `[min_x, min_y,
//! max_x, max_y]` here. Categories are sorted by label so the export is
//! deterministic regardless of dataset order.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::dataset::Dataset;
use crate::error::BoxmergeError;

/// One category's boxes in corner form.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryExport {
    pub category_name: String,
    pub category_boxes: Vec<[f64; 4]>,
}

/// Builds the export summary for every category in the dataset.
pub fn export_categories(dataset: &Dataset) -> Vec<CategoryExport> {
    let mut out: Vec<CategoryExport> = dataset
        .iter()
        .map(|(label, rects)| CategoryExport {
            category_name: label.to_string(),
            category_boxes: rects
                .iter()
                .map(|r| [r.xmin(), r.ymin(), r.xmax(), r.ymax()])
                .collect(),
        })
        .collect();

    out.sort_by(|a, b| a.category_name.cmp(&b.category_name));
    out
}

/// Writes the category export to a JSON file, pretty-printed.
pub fn write_export_json(path: &Path, dataset: &Dataset) -> Result<(), BoxmergeError> {
    let file = File::create(path).map_err(BoxmergeError::Io)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, &export_categories(dataset)).map_err(|source| {
        BoxmergeError::JsonWrite {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Writes the category export to a JSON string.
///
/// Useful for testing without file I/O.
pub fn to_export_json_string(dataset: &Dataset) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&export_categories(dataset))
}
