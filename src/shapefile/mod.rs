//! Core shapefile decoding module
//!
//! - [`types`]: errors, header and geometry models, the shape-type set
//! - [`format`]: header codec, record decoding, index validation
//! - [`iter`]: the record stream as an iterator
//! - [`reader`]: opening a pair and the callback-driven session

pub mod format;
pub mod iter;
pub mod reader;
pub mod types;
mod utils;

pub use reader::{Shapefile, ShapefileReader};
pub use types::error::{Result, ShapefileError};
