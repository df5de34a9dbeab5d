// demos/read_rows.rs
//
// Stream a delimited file and print each labeled row:
//
//   cargo run --example read_rows -- path/to/file.csv

use anyhow::Result;
use rowstream::RowStreamBuilder;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "demos/trades.csv".to_string());

    let mut stream = RowStreamBuilder::new().from_path(&path)?;
    info!(path = %path, columns = ?stream.header(), "opened");

    while let Some(row) = stream.next_row()? {
        println!("{row:?}");
    }

    info!(lines = stream.line_number(), "done");
    Ok(())
}
