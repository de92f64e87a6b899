//! Data model and format I/O for boxmerge.
//!
//! The model is deliberately small: a [`Rect`] value type and a
//! [`Dataset`] multimap from category label to rectangles. The `io_*`
//! modules read and write the two on-disk shapes (box CSV in, category
//! JSON out).
//!
//! # Design Principles
//!
//! 1. **Opaque labels**: category labels are strings everywhere, never
//!    coerced to numbers, even when a whole file's labels look numeric.
//!
//! 2. **Permissive construction**: model types allow "invalid" data to
//!    be represented (e.g., negative widths), so that operations can
//!    report issues rather than panic during parsing.

mod dataset;
pub mod io_csv;
pub mod io_json;
mod rect;

// Re-export core types for convenient access
pub use dataset::Dataset;
pub use rect::Rect;
