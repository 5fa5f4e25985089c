//! File format parsing layer for shapefile pairs.
//!
//! This module provides the mid-level parsing layer that bridges between
//! raw byte reads and the high-level [`ShapefileReader`](crate::shapefile::reader::ShapefileReader).
//!
//! # Module Organization
//!
//! - [`header`]: Parses and validates the 100-byte header of either file
//! - [`record`]: Decodes record framing and dispatches geometry decoding
//! - [`index`]: Validates the `.shx` index file
//!
//! # Architecture
//!
//! ```text
//! .shx                     .shp
//! ┌─────────────────┐      ┌─────────────────┐
//! │  Header (100B)  │      │  Header (100B)  │ ← header::parse()
//! ├─────────────────┤      ├─────────────────┤
//! │  Offsets        │      │  Record 1       │ ← record::read_record()
//! │  (never read)   │      │  Record 2       │
//! │                 │      │  ...            │
//! └─────────────────┘      └─────────────────┘
//!   ↑ index::validate()
//! ```

pub mod header;
pub mod index;
pub mod record;
