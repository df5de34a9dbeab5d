// src/reader/mod.rs

//! Streaming row reader: header capture at construction, one validated row
//! per advance.

mod builder;

pub use builder::RowStreamBuilder;

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::tokenize::split_line;

/// Ordered column names, as read from the first line of input.
pub type Header = Vec<String>;

/// One data line, keyed by column name. Keys iterate in name order.
///
/// If the header repeats a name, the rightmost column wins: its cell
/// overwrites the earlier one during insertion.
pub type Row = BTreeMap<String, String>;

/// A [`RowStream`] that owns the file handle it reads from.
pub type FileRowStream = RowStream<BufReader<File>>;

/// Forward-only reader over delimiter-separated lines.
///
/// The first line is consumed at construction and becomes the header; each
/// [`next_row`](Self::next_row) call consumes exactly one more line and
/// checks its cell count against the header. `RowStream` implements neither
/// `Clone` nor `Copy`: it drives a live input stream, and two owners
/// advancing the same stream would interleave reads. Move it, or hand out
/// `&mut`.
pub struct RowStream<R> {
    reader: R,
    delimiter: char,
    header: Header,
    source_name: Option<String>,
    /// Physical line number of the last line consumed. The header is line 1.
    line: u64,
    exhausted: bool,
    poisoned: bool,
}

impl FileRowStream {
    /// Open `path` with the default `,` delimiter and read its header.
    ///
    /// The returned stream owns the file handle and closes it on drop.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<FileRowStream> {
        RowStreamBuilder::new().from_path(path)
    }
}

impl<R: BufRead> RowStream<R> {
    /// Adopt an already-open `reader` with the default `,` delimiter and
    /// read its header.
    pub fn from_reader(reader: R) -> Result<Self> {
        RowStreamBuilder::new().from_reader(reader)
    }

    pub(crate) fn with_header(
        mut reader: R,
        delimiter: char,
        source_name: Option<String>,
    ) -> Result<Self> {
        let mut first = String::new();
        let n = reader
            .read_line(&mut first)
            .map_err(|_| Error::HeaderRead)?;
        if n == 0 {
            return Err(Error::HeaderRead);
        }
        strip_newline(&mut first);
        let header = split_line(&first, delimiter);

        debug!(
            columns = header.len(),
            source = source_name.as_deref().unwrap_or(""),
            "captured header"
        );

        Ok(Self {
            reader,
            delimiter,
            header,
            source_name,
            line: 1,
            exhausted: false,
            poisoned: false,
        })
    }

    /// Read, tokenize, and validate the next data line.
    ///
    /// Returns `Ok(None)` once the input is exhausted, and keeps returning
    /// it on every later call. A cell-count mismatch returns
    /// [`Error::RowArity`] once and poisons the stream: a line of the wrong
    /// width usually means the input is no longer the table the header
    /// promised, so no further rows are produced and
    /// [`is_healthy`](Self::is_healthy) reports `false` from then on.
    pub fn next_row(&mut self) -> Result<Option<Row>> {
        if self.exhausted || self.poisoned {
            return Ok(None);
        }

        let mut line = String::new();
        let n = match self.reader.read_line(&mut line) {
            Ok(n) => n,
            Err(err) => {
                self.poisoned = true;
                warn!(line = self.line + 1, "read failed mid-stream");
                return Err(Error::Io(err));
            }
        };
        if n == 0 {
            self.exhausted = true;
            trace!(lines = self.line, "input exhausted");
            return Ok(None);
        }
        self.line += 1;
        strip_newline(&mut line);

        let tokens = split_line(&line, self.delimiter);
        if tokens.len() != self.header.len() {
            self.poisoned = true;
            warn!(
                line = self.line,
                expected = self.header.len(),
                found = tokens.len(),
                "row width does not match header"
            );
            return Err(Error::RowArity {
                source_name: self.source_name.clone().unwrap_or_default(),
                line: self.line,
                expected: self.header.len(),
                found: tokens.len(),
            });
        }

        let mut row = Row::new();
        for (name, value) in self.header.iter().zip(tokens) {
            row.insert(name.clone(), value);
        }
        trace!(line = self.line, "row extracted");
        Ok(Some(row))
    }

    /// Column names captured from the first line of input.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Whether the stream can still produce rows: `false` once input is
    /// exhausted, after an I/O failure, or after a row width mismatch.
    pub fn is_healthy(&self) -> bool {
        !self.exhausted && !self.poisoned
    }

    /// Physical lines consumed so far, header included.
    pub fn line_number(&self) -> u64 {
        self.line
    }

    /// Diagnostic label for this input: the path for path-opened streams,
    /// otherwise whatever the builder was given.
    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    /// Borrowing iterator over the remaining rows.
    pub fn rows(&mut self) -> Rows<'_, R> {
        Rows { stream: self }
    }
}

/// Drop the terminator `read_line` leaves in place. Only `'\n'` is
/// stripped; CRLF input leaves the `'\r'` on the last cell — cell content
/// is opaque by contract.
fn strip_newline(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
    }
}

/// Iterator over the remaining rows of a borrowed [`RowStream`].
///
/// Yields `Err` at most once (the mismatch poisons the stream), then fuses.
pub struct Rows<'a, R> {
    stream: &'a mut RowStream<R>,
}

impl<R: BufRead> Iterator for Rows<'_, R> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        self.stream.next_row().transpose()
    }
}

/// Consuming iterator returned by [`RowStream::into_iter`].
pub struct IntoRows<R> {
    stream: RowStream<R>,
}

impl<R: BufRead> Iterator for IntoRows<R> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        self.stream.next_row().transpose()
    }
}

impl<R: BufRead> IntoIterator for RowStream<R> {
    type Item = Result<Row>;
    type IntoIter = IntoRows<R>;

    /// Consume the stream into an iterator, taking sole ownership.
    fn into_iter(self) -> Self::IntoIter {
        IntoRows { stream: self }
    }
}
