use std::ffi::OsString;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use log::{debug, info};

use super::format::{header, index};
use super::iter::RecordIterator;
use super::types::error::{Result, ShapefileError};
use super::types::models::{Header, ParseOptions, ParseOutcome, Shape};

/// Extensions stripped from a caller-supplied path to find the pair's base name.
const RECOGNIZED_EXTENSIONS: [&str; 3] = ["shp", "shx", "dbf"];

/// Longest last-error message kept by a [`Shapefile`] session, in bytes.
pub const MAX_ERROR_LEN: usize = 255;

/// An opened shapefile pair with both headers validated.
///
/// The index file is validated and closed before the geometry file is
/// opened; the reader then owns only the geometry file handle.
#[derive(Debug)]
pub struct ShapefileReader {
    path_prefix: PathBuf,
    index_header: Header,
    header: Header,
    file: BufReader<File>,
    options: ParseOptions,
}

impl ShapefileReader {
    /// Open a shapefile pair with default options.
    ///
    /// # Arguments
    /// * `path` - Base name of the pair, or the path of any of its `.shp`, `.shx`
    ///   or `.dbf` files
    ///
    /// # Errors
    /// Returns an error if:
    /// - The `.shx` or `.shp` file cannot be opened
    /// - Either header has a bad magic number, an unknown shape type, or a
    ///   length smaller than the header itself
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_options(path, ParseOptions::default())
    }

    /// Open a shapefile pair with explicit decode options.
    pub fn with_options(path: impl AsRef<Path>, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        let path_prefix = path_prefix(path);
        let upper = uses_upper_case_extension(path);
        info!("Opening shapefile: {}", path_prefix.display());

        let index_header = index::validate(&sibling(&path_prefix, "shx", upper))?;

        let shp_path = sibling(&path_prefix, "shp", upper);
        let file = File::open(&shp_path).map_err(|source| ShapefileError::Open {
            path: shp_path.clone(),
            source,
        })?;
        let mut file = BufReader::new(file);
        let header = header::parse(&mut file)?;

        if header.shape_type != index_header.shape_type {
            debug!(
                "Index shape type {} differs from geometry shape type {}; the index is not consulted",
                index_header.shape_type, header.shape_type
            );
        }

        Ok(Self {
            path_prefix,
            index_header,
            header,
            file,
            options,
        })
    }

    /// Header of the `.shp` geometry file.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Header of the `.shx` index file.
    pub fn index_header(&self) -> &Header {
        &self.index_header
    }

    /// Base name the `.shx` and `.shp` paths were derived from.
    pub fn path_prefix(&self) -> &Path {
        &self.path_prefix
    }

    /// Consumes the reader and returns an iterator over its records.
    ///
    /// The geometry file is closed when the iterator is dropped.
    pub fn records(self) -> RecordIterator<BufReader<File>> {
        let region_len = self.header.record_region_bytes();
        RecordIterator::new(self.file, region_len, self.options)
    }

    /// Decodes every record and hands its geometry to `consumer`.
    ///
    /// The consumer returns `true` to continue and `false` to stop; no further
    /// bytes are read after it stops. The geometry is only borrowed for the
    /// duration of the call.
    pub fn for_each_shape<F>(self, mut consumer: F) -> Result<ParseOutcome>
    where
        F: FnMut(&Shape) -> bool,
    {
        let mut emitted = 0;
        for record in self.records() {
            let record = record?;
            emitted += 1;
            if !consumer(&record.shape) {
                info!("Pass stopped by consumer after {} records", emitted);
                return Ok(ParseOutcome::Stopped { records: emitted });
            }
        }
        info!("Pass completed: {} records", emitted);
        Ok(ParseOutcome::Completed { records: emitted })
    }
}

/// A decode session with callback delivery and a retrievable last error.
///
/// Each call to [`Shapefile::parse`] opens its own file handles, so a session
/// can be re-run over the same pair and yields the same sequence every time.
#[derive(Debug, Default)]
pub struct Shapefile {
    options: ParseOptions,
    last_error: Option<String>,
}

impl Shapefile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            options,
            last_error: None,
        }
    }

    /// Validates the pair at `path` and streams its shapes to `consumer`.
    ///
    /// On failure the error is returned and its message is also kept as the
    /// session's last error, replacing any previous one.
    pub fn parse<P, F>(&mut self, path: P, consumer: F) -> Result<ParseOutcome>
    where
        P: AsRef<Path>,
        F: FnMut(&Shape) -> bool,
    {
        let result = ShapefileReader::with_options(path, self.options)
            .and_then(|reader| reader.for_each_shape(consumer));
        if let Err(e) = &result {
            self.last_error = Some(truncate_message(e.to_string(), MAX_ERROR_LEN));
        }
        result
    }

    /// Message of the most recent failure, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

/// Strips a recognized extension from `path`; other paths are taken verbatim.
pub fn path_prefix(path: &Path) -> PathBuf {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if RECOGNIZED_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)) => {
            path.with_extension("")
        }
        _ => path.to_path_buf(),
    }
}

fn uses_upper_case_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| RECOGNIZED_EXTENSIONS.iter().any(|known| ext == known.to_ascii_uppercase()))
}

/// Appends `.ext` to the prefix without touching any dot already in its file name.
fn sibling(prefix: &Path, ext: &str, upper: bool) -> PathBuf {
    let mut name = OsString::from(prefix.as_os_str());
    name.push(".");
    if upper {
        name.push(ext.to_ascii_uppercase());
    } else {
        name.push(ext);
    }
    PathBuf::from(name)
}

fn truncate_message(mut message: String, max_len: usize) -> String {
    if message.len() > max_len {
        let mut end = max_len;
        while !message.is_char_boundary(end) {
            end -= 1;
        }
        message.truncate(end);
    }
    message
}
