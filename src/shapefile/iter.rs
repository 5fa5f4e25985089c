//! Sequential access to the records of a `.shp` file.
//!
//! [`RecordIterator`] walks the record region that follows the header,
//! decoding one record per call to `next()`. The region's length comes from
//! the header and is tracked byte by byte; iteration ends when it reaches
//! zero.
//!
//! # Example
//! ```no_run
//! # use shapefile_reader::ShapefileReader;
//! let reader = ShapefileReader::open("data/cities.shp").unwrap();
//! for result in reader.records() {
//!     let record = result.unwrap();
//!     println!("{}: {}", record.header.number, record.shape);
//! }
//! ```

use std::io::Read;
use std::iter::FusedIterator;

use super::format::record;
use super::types::error::Result;
use super::types::models::{ParseOptions, ShapeRecord};

/// Iterator over decoded records.
///
/// Yields `Result<ShapeRecord>`. After the first error the iterator is
/// exhausted: the framing of anything past a bad record is undefined.
///
/// Created by [`ShapefileReader::records()`](crate::ShapefileReader::records).
pub struct RecordIterator<R: Read> {
    reader: R,
    remaining: u64,
    options: ParseOptions,
    failed: bool,
}

impl<R: Read> RecordIterator<R> {
    /// Wraps a reader positioned just past the file header.
    ///
    /// `region_len` is the number of record bytes the header declared.
    pub fn new(reader: R, region_len: u64, options: ParseOptions) -> Self {
        Self {
            reader,
            remaining: region_len,
            options,
            failed: false,
        }
    }

    /// Bytes of the record region not yet decoded.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl<R: Read> Iterator for RecordIterator<R> {
    type Item = Result<ShapeRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.remaining == 0 {
            return None;
        }

        match record::read_record(&mut self.reader, &mut self.remaining, &self.options) {
            Ok(record) => Some(Ok(record)),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: Read> FusedIterator for RecordIterator<R> {}
