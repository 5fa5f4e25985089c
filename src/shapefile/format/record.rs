//! # Record Decoding
//!
//! Turns one length-framed entry of the `.shp` file into a [`ShapeRecord`].
//!
//! ```text
//! [4 bytes] Record number, 1-based (big-endian)
//! [4 bytes] Content length in 16-bit words (two big-endian halves)
//! [4 bytes] Shape type (little-endian)
//! [N bytes] Type-specific payload
//! ```
//!
//! Every read is charged to the caller's remaining-length accumulator so the
//! stream reader knows when the record region is exhausted.

use std::io::Read;
use log::{trace, warn};
use crate::shapefile::types::{
    error::{Result, ShapefileError},
    models::{ParseOptions, Point, RecordHeader, Shape, ShapeRecord},
    shape_type::ShapeType,
};
use crate::shapefile::utils;

/// Reads the 8-byte framing in front of a record.
pub fn read_record_header<R: Read>(reader: &mut R, remaining: &mut u64) -> Result<RecordHeader> {
    let number = utils::read_i32_be(reader, Some(&mut *remaining))?;
    let content_length = utils::read_i32_size_be(reader, Some(remaining))?;
    Ok(RecordHeader { number, content_length })
}

/// Reads the shape-type tag and dispatches to the matching geometry decoder.
///
/// Unknown tags fail as "not valid"; known tags without a decoder fail as
/// "not supported". Both errors name the enclosing record.
pub fn read_shape<R: Read>(reader: &mut R, record: &RecordHeader, remaining: &mut u64) -> Result<Shape> {
    let raw_type = utils::read_i32_le(reader, Some(&mut *remaining))?;
    let shape_type = ShapeType::from_code(raw_type).ok_or(ShapefileError::InvalidShapeType {
        shape_type: raw_type,
        record: record.number,
    })?;

    match shape_type {
        ShapeType::Null => Ok(Shape::Null),
        ShapeType::Point => read_point(reader, remaining).map(Shape::Point),
        ShapeType::Polyline
        | ShapeType::Polygon
        | ShapeType::MultiPoint
        | ShapeType::PointZ
        | ShapeType::PolylineZ
        | ShapeType::PolygonZ
        | ShapeType::MultiPointZ
        | ShapeType::PointM
        | ShapeType::PolylineM
        | ShapeType::PolygonM
        | ShapeType::MultiPointM
        | ShapeType::MultiPatch => Err(ShapefileError::UnsupportedShapeType {
            shape_type: raw_type,
            label: shape_type.label(),
            record: record.number,
        }),
    }
}

fn read_point<R: Read>(reader: &mut R, remaining: &mut u64) -> Result<Point> {
    let x = utils::read_f64_le(reader, Some(&mut *remaining))?;
    let y = utils::read_f64_le(reader, Some(remaining))?;
    Ok(Point { x, y })
}

/// Reads one full record: framing, shape-type tag and geometry.
///
/// The accumulator is decremented by the bytes actually decoded, not by the
/// declared content length. A disagreement between the two is an error under
/// [`ParseOptions::strict_record_length`] and a warning otherwise.
pub fn read_record<R: Read>(reader: &mut R, remaining: &mut u64, options: &ParseOptions) -> Result<ShapeRecord> {
    let header = read_record_header(reader, remaining)?;
    let before = *remaining;
    let shape = read_shape(reader, &header, remaining)?;

    let consumed = before - *remaining;
    let declared = header.content_length_bytes();
    trace!(
        "Record {}: {} ({} of {} content bytes)",
        header.number,
        shape.shape_type(),
        consumed,
        declared
    );
    if consumed != declared {
        if options.strict_record_length {
            return Err(ShapefileError::RecordLengthMismatch {
                record: header.number,
                declared,
                consumed,
            });
        }
        warn!(
            "Record {} declares {} content bytes but {} were decoded; framing of the next record may be off",
            header.number, declared, consumed
        );
    }

    Ok(ShapeRecord { header, shape })
}
