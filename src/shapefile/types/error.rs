//! Custom error types for the shapefile-reader crate.

use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Every variant is terminal for the decode pass that produced it.
#[derive(Debug, Error)]
pub enum ShapefileError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// One of the files of the pair could not be opened.
    #[error("Error opening {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source ended before a fixed-width field was complete.
    #[error("Error reading {requested} bytes: Only read {read}")]
    ShortRead { requested: usize, read: usize },

    /// A read inside the record region would run past the length declared in the header.
    #[error("Error reading {requested} bytes: only {remaining} bytes remain in the record region")]
    RegionOverrun { requested: usize, remaining: u64 },

    /// The header does not start with the shapefile file code.
    #[error("Header magic number {0:08x} is invalid")]
    InvalidMagic(i32),

    /// The header names a shape type outside the fourteen known tags.
    #[error("Header Type {0} is invalid")]
    InvalidHeaderType(i32),

    /// The declared file length cannot even hold the header.
    #[error("Size in header {length} cannot be less than header size {minimum}")]
    HeaderTooShort { length: i64, minimum: u64 },

    /// A record carries a shape type outside the fourteen known tags.
    #[error("Shape type {shape_type} in record {record} is not valid")]
    InvalidShapeType { shape_type: i32, record: i32 },

    /// A record carries a known shape type this decoder does not implement.
    #[error("Shape type {shape_type} ({label}) in record {record} is not supported")]
    UnsupportedShapeType {
        shape_type: i32,
        label: &'static str,
        record: i32,
    },

    /// Strict mode only: the geometry did not consume the bytes its record header declared.
    #[error("Record {record} declares {declared} content bytes but its geometry consumed {consumed}")]
    RecordLengthMismatch {
        record: i32,
        declared: u64,
        consumed: u64,
    },
}

/// A convenience `Result` type alias using the crate's `ShapefileError` type.
pub type Result<T> = std::result::Result<T, ShapefileError>;
