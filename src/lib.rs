// src/lib.rs

//! Streaming reader for delimiter-separated text.
//!
//! The first line of input names the columns; every later line is one row,
//! validated to carry exactly as many cells as the header. Input is
//! consumed forward-only, one line per advance, so arbitrarily large files
//! stream in constant memory and a malformed row surfaces as an error the
//! moment it is read.
//!
//! Cells are opaque strings: there is no quoting, no escaping, and no type
//! inference. A delimiter inside a "quoted" field still separates cells.
//!
//! ```no_run
//! use rowstream::RowStream;
//!
//! # fn main() -> rowstream::Result<()> {
//! let mut stream = RowStream::from_path("trades.csv")?;
//! println!("columns: {:?}", stream.header());
//! while let Some(row) = stream.next_row()? {
//!     println!("{} @ {}", row["symbol"], row["price"]);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod reader;
pub mod tokenize;

pub use error::{Error, Result};
pub use reader::{FileRowStream, Header, IntoRows, Row, RowStream, RowStreamBuilder, Rows};
