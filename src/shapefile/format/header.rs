//! Shapefile header parsing and validation.
//!
//! The `.shp` and `.shx` files of a pair both start with the same 100-byte
//! header. Validation happens in a fixed order (magic, shape type, length)
//! and stops at the first failing check.

use std::io::Read;
use log::{debug, trace};
use crate::shapefile::types::{
    error::{Result, ShapefileError},
    models::{BoundingBox, Header, ValueRange, HEADER_MAGIC, HEADER_SIZE},
    shape_type::ShapeType,
};
use crate::shapefile::utils;

/// Parses and validates a file header.
///
/// # Header Structure
/// ```text
/// [4 bytes]  File code 0x0000270A (big-endian)
/// [20 bytes] Five reserved words (big-endian, ignored)
/// [4 bytes]  File length in 16-bit words (two big-endian halves)
/// [4 bytes]  Version (little-endian)
/// [4 bytes]  Shape type (little-endian)
/// [32 bytes] Bounding box min-x, max-x, min-y, max-y (little-endian doubles)
/// [32 bytes] Z min/max, M min/max (little-endian doubles)
/// ```
///
/// The reader must be positioned at offset zero. Header reads are not charged
/// to any record-region accumulator.
pub fn parse<R: Read>(reader: &mut R) -> Result<Header> {
    let code = utils::read_i32_be(reader, None)?;
    let mut reserved = [0i32; 5];
    for word in reserved.iter_mut() {
        *word = utils::read_i32_be(reader, None)?;
    }
    let file_length = utils::read_i32_size_be(reader, None)?;
    let version = utils::read_i32_le(reader, None)?;
    let raw_type = utils::read_i32_le(reader, None)?;
    let bbox = BoundingBox {
        min_x: utils::read_f64_le(reader, None)?,
        max_x: utils::read_f64_le(reader, None)?,
        min_y: utils::read_f64_le(reader, None)?,
        max_y: utils::read_f64_le(reader, None)?,
    };
    let range = ValueRange {
        z_min: utils::read_f64_le(reader, None)?,
        z_max: utils::read_f64_le(reader, None)?,
        m_min: utils::read_f64_le(reader, None)?,
        m_max: utils::read_f64_le(reader, None)?,
    };
    trace!("Raw header: code={:#010x}, length={} words, version={}, type={}", code, file_length, version, raw_type);

    if code != HEADER_MAGIC {
        return Err(ShapefileError::InvalidMagic(code));
    }

    let shape_type = ShapeType::from_code(raw_type)
        .ok_or(ShapefileError::InvalidHeaderType(raw_type))?;

    let length_bytes = i64::from(file_length) * 2;
    if length_bytes < HEADER_SIZE as i64 {
        return Err(ShapefileError::HeaderTooShort {
            length: length_bytes,
            minimum: HEADER_SIZE,
        });
    }

    debug!(
        "Header: version={}, shape type={}, length={} bytes, bbox=[{}, {}, {}, {}]",
        version, shape_type, length_bytes, bbox.min_x, bbox.min_y, bbox.max_x, bbox.max_y
    );

    Ok(Header {
        code,
        reserved,
        file_length,
        version,
        shape_type,
        bbox,
        range,
    })
}
