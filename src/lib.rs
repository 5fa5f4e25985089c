//! # shapefile-reader
//!
//! A streaming decoder for ESRI Shapefile pairs (`.shp` geometry + `.shx` index).
//! Both headers are validated, then records are decoded one at a time and
//! handed to the caller.
//!
//! **Note:** Only the Null and Point shape types are decoded. Every other
//! recognized shape type fails with a "not supported" error.
pub mod shapefile;

// Re-export the main types for convenience
pub use shapefile::{
    Result,
    Shapefile,
    ShapefileError,
    ShapefileReader,
    iter::RecordIterator,
    types::{
        models::{
            BoundingBox,
            Header,
            ParseOptions,
            ParseOutcome,
            Point,
            RecordHeader,
            Shape,
            ShapeRecord,
            ValueRange,
            HEADER_MAGIC,
            HEADER_SIZE,
            RECORD_HEADER_SIZE,
        },
        shape_type::ShapeType,
    },
};
