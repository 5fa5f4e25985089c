//! Core data structures for shapefile format components.
//!
//! This module defines the fundamental types used throughout the library:
//! - The 100-byte file header shared by `.shp` and `.shx`
//! - Record framing in the `.shp` file
//! - Decoded geometries and their WKT rendering

use std::fmt;

use super::shape_type::ShapeType;

/// File code every shapefile header starts with.
pub const HEADER_MAGIC: i32 = 0x0000_270A;

/// Encoded size of the file header in bytes (nine 32-bit fields, eight doubles).
pub const HEADER_SIZE: u64 = 9 * 4 + 8 * 8;

/// Encoded size of a `.shp` record header in bytes.
pub const RECORD_HEADER_SIZE: u64 = 2 * 4;

/// Axis-aligned extent recorded in the file header.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

/// Z and M value ranges recorded in the file header.
///
/// Both are zero-filled for files without measured or 3D shapes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValueRange {
    pub z_min: f64,
    pub z_max: f64,
    pub m_min: f64,
    pub m_max: f64,
}

/// Validated file header.
///
/// Decoded once per opened file and kept for the duration of the pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub code: i32,
    /// Five reserved words; read to keep the cursor aligned, never checked.
    pub reserved: [i32; 5],
    /// Total file length in 16-bit words, header included.
    pub file_length: i32,
    pub version: i32,
    pub shape_type: ShapeType,
    pub bbox: BoundingBox,
    pub range: ValueRange,
}

impl Header {
    /// Total file length in bytes, header included.
    pub fn file_length_bytes(&self) -> u64 {
        u64::try_from(self.file_length).unwrap_or(0) * 2
    }

    /// Length in bytes of the record region following the header.
    pub fn record_region_bytes(&self) -> u64 {
        self.file_length_bytes().saturating_sub(HEADER_SIZE)
    }
}

/// Framing that precedes every record in the `.shp` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHeader {
    /// 1-based record number.
    pub number: i32,
    /// Length of the record content in 16-bit words.
    pub content_length: i32,
}

impl RecordHeader {
    pub fn content_length_bytes(&self) -> u64 {
        u64::try_from(self.content_length).unwrap_or(0) * 2
    }
}

/// A single point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A decoded geometry.
///
/// One case per shape type with a decoder; unsupported shape types never
/// produce a `Shape`.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Null,
    Point(Point),
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Null => ShapeType::Null,
            Shape::Point(_) => ShapeType::Point,
        }
    }

    /// Renders the geometry as Well-Known Text.
    ///
    /// The null shape has no WKT counterpart and renders as an empty collection.
    pub fn to_wkt(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Shape::Null => write!(f, "GEOMETRYCOLLECTION EMPTY"),
            Shape::Point(p) => write!(f, "POINT ({} {})", p.x, p.y),
        }
    }
}

/// A decoded `.shp` record: its framing plus the geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeRecord {
    pub header: RecordHeader,
    pub shape: Shape,
}

/// Knobs for a decode pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Fail a record whose geometry consumed a different number of bytes than
    /// its header declared. When off, the mismatch is only logged.
    pub strict_record_length: bool,
}

/// How a successful pass ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The record region was exhausted.
    Completed { records: usize },
    /// The consumer asked to stop after this many records.
    Stopped { records: usize },
}

impl ParseOutcome {
    pub fn records(&self) -> usize {
        match *self {
            ParseOutcome::Completed { records } | ParseOutcome::Stopped { records } => records,
        }
    }
}
