//! Box CSV reader and writer.
//!
//! The box CSV format is a headerless table with one rectangle per row:
//!
//! ```text
//! category,center_x,center_y,width,height
//! ```
//!
//! The `category` field is kept as an opaque string even when it looks
//! numeric. Rows with the same category accumulate into one category in
//! row order, so writing and rereading a dataset preserves its grouping.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::dataset::Dataset;
use super::rect::Rect;
use crate::error::BoxmergeError;

/// A single row in the box CSV format.
#[derive(Debug, Serialize, Deserialize)]
struct BoxRow {
    category: String,
    center_x: f64,
    center_y: f64,
    width: f64,
    height: f64,
}

/// Reads a dataset from a box CSV file.
///
/// # Errors
/// Returns an error if the file cannot be read or a row fails to parse.
pub fn read_csv(path: &Path) -> Result<Dataset, BoxmergeError> {
    let file = File::open(path).map_err(BoxmergeError::Io)?;
    let reader = BufReader::new(file);

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(reader);

    let mut dataset = Dataset::new();
    for result in csv_reader.deserialize() {
        let row: BoxRow = result.map_err(|source| BoxmergeError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        push_row(&mut dataset, row);
    }

    Ok(dataset)
}

/// Writes a dataset to a box CSV file, one row per rectangle.
///
/// Rows come out in dataset order (labels in first-insertion order,
/// rectangles in insertion order), so the output is deterministic.
pub fn write_csv(path: &Path, dataset: &Dataset) -> Result<(), BoxmergeError> {
    let file = File::create(path).map_err(BoxmergeError::Io)?;
    let writer = BufWriter::new(file);

    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    for row in dataset_rows(dataset) {
        csv_writer
            .serialize(&row)
            .map_err(|source| BoxmergeError::CsvWrite {
                path: path.to_path_buf(),
                source,
            })?;
    }

    csv_writer
        .into_inner()
        .map_err(|e| BoxmergeError::Io(e.into_error()))?
        .flush()
        .map_err(BoxmergeError::Io)?;

    Ok(())
}

/// Reads a dataset from a box CSV string.
///
/// Useful for testing without file I/O.
pub fn from_csv_str(csv_str: &str) -> Result<Dataset, BoxmergeError> {
    from_csv_slice(csv_str.as_bytes())
}

/// Reads a dataset from box CSV bytes.
///
/// Useful for fuzzing and processing raw bytes without requiring UTF-8
/// upfront.
pub fn from_csv_slice(bytes: &[u8]) -> Result<Dataset, BoxmergeError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(bytes);
    let dummy_path = Path::new("<bytes>");

    let mut dataset = Dataset::new();
    for result in csv_reader.deserialize() {
        let row: BoxRow = result.map_err(|source| BoxmergeError::CsvParse {
            path: dummy_path.to_path_buf(),
            source,
        })?;
        push_row(&mut dataset, row);
    }

    Ok(dataset)
}

/// Writes a dataset to a box CSV string.
///
/// Useful for testing without file I/O.
pub fn to_csv_string(dataset: &Dataset) -> Result<String, BoxmergeError> {
    let dummy_path = Path::new("<string>");

    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    for row in dataset_rows(dataset) {
        csv_writer
            .serialize(&row)
            .map_err(|source| BoxmergeError::CsvWrite {
                path: dummy_path.to_path_buf(),
                source,
            })?;
    }

    let bytes = csv_writer
        .into_inner()
        .map_err(|e| BoxmergeError::Io(e.into_error()))?;

    // The writer only ever receives UTF-8 input.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn push_row(dataset: &mut Dataset, row: BoxRow) {
    dataset.insert(
        row.category,
        Rect::from_center(row.center_x, row.center_y, row.width, row.height),
    );
}

fn dataset_rows(dataset: &Dataset) -> impl Iterator<Item = BoxRow> + '_ {
    dataset.iter().flat_map(|(label, rects)| {
        rects.iter().map(move |rect| BoxRow {
            category: label.to_string(),
            center_x: rect.center_x,
            center_y: rect.center_y,
            width: rect.width,
            height: rect.height,
        })
    })
}
