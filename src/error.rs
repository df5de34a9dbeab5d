// src/error.rs

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias for stream construction and row extraction.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while opening or advancing a row stream.
///
/// End of input is not represented here; exhaustion is the `Ok(None)` arm of
/// [`RowStream::next_row`](crate::RowStream::next_row).
#[derive(Debug, Error)]
pub enum Error {
    /// Path-based construction could not open the source file.
    #[error("Error opening file: {}", path.display())]
    FileOpen {
        /// The path that failed to open.
        path: PathBuf,
        /// The underlying open failure.
        source: io::Error,
    },

    /// The source produced no first line to use as a header.
    #[error("error reading header")]
    HeaderRead,

    /// A data line's cell count did not match the header's column count.
    #[error("Number of items in row does not match header. {source_name}:L{line}")]
    RowArity {
        /// Diagnostic label for the input: the path for path-opened streams,
        /// empty when the caller supplied an unnamed reader.
        source_name: String,
        /// 1-based physical line number of the offending line.
        line: u64,
        /// The header's column count.
        expected: usize,
        /// The cell count actually found on the line.
        found: usize,
    },

    /// The underlying reader failed mid-stream.
    #[error("read error: {0}")]
    Io(#[from] io::Error),
}
