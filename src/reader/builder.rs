// src/reader/builder.rs

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::instrument;

use crate::error::{Error, Result};
use crate::reader::{FileRowStream, RowStream};

/// Configures and opens a [`RowStream`].
///
/// Set options first, then finish with [`from_path`](Self::from_path) or
/// [`from_reader`](Self::from_reader):
///
/// ```no_run
/// use rowstream::RowStreamBuilder;
///
/// # fn main() -> rowstream::Result<()> {
/// let stream = RowStreamBuilder::new()
///     .delimiter(';')
///     .from_path("prices.csv")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RowStreamBuilder {
    delimiter: char,
    source_name: Option<String>,
}

impl RowStreamBuilder {
    pub fn new() -> Self {
        Self {
            delimiter: ',',
            source_name: None,
        }
    }

    /// Delimiter separating cells on every line, header included.
    /// Defaults to `,`.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Label used in diagnostics. Reader-backed streams have no name of
    /// their own; path-backed streams default to the path.
    pub fn source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }

    /// Open `path` for reading and capture its header line.
    ///
    /// The stream owns the file handle; it closes when the stream drops.
    #[instrument(level = "debug", skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn from_path<P: AsRef<Path>>(self, path: P) -> Result<FileRowStream> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        let name = self
            .source_name
            .unwrap_or_else(|| path.display().to_string());
        RowStream::with_header(BufReader::new(file), self.delimiter, Some(name))
    }

    /// Adopt an already-open reader and capture its header line.
    ///
    /// The stream advances the reader but does not otherwise manage its
    /// lifetime.
    pub fn from_reader<R: BufRead>(self, reader: R) -> Result<RowStream<R>> {
        RowStream::with_header(reader, self.delimiter, self.source_name)
    }
}

impl Default for RowStreamBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn default_delimiter_is_comma() -> crate::Result<()> {
        let stream = RowStreamBuilder::default().from_reader(Cursor::new(b"x,y\n".to_vec()))?;
        assert_eq!(stream.header(), &vec!["x", "y"]);
        Ok(())
    }

    #[test]
    fn source_name_defaults_to_none_for_readers() -> crate::Result<()> {
        let stream = RowStreamBuilder::new().from_reader(Cursor::new(b"x\n".to_vec()))?;
        assert_eq!(stream.source_name(), None);
        Ok(())
    }
}
