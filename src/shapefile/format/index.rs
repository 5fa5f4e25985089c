//! # Index File Validation
//!
//! The `.shx` file is opened only to check that its header is well formed.
//! Its per-record offsets are never read: the geometry file is decoded
//! sequentially.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use log::info;
use crate::shapefile::types::error::{Result, ShapefileError};
use crate::shapefile::types::models::Header;
use super::header;

/// Opens the index file at `path`, decodes its header and closes it again.
///
/// Must succeed before the geometry file is opened.
pub fn validate(path: &Path) -> Result<Header> {
    info!("Validating index file: {}", path.display());
    let file = File::open(path).map_err(|source| ShapefileError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    header::parse(&mut BufReader::new(file))
}
