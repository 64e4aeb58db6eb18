// File: crates/rowplot-core/src/error.rs
// Summary: Error type shared by loading, parsing and rendering.

use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed delimited input: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row} is out of range (table has {rows} rows)")]
    RowOutOfRange { row: usize, rows: usize },

    #[error("row {row}, column {column}: {text:?} is not a number")]
    Number {
        row: usize,
        column: usize,
        text: String,
        #[source]
        source: ParseFloatError,
    },

    /// One x per y is required to draw a series.
    #[error("length mismatch: {x} x values against {y} y values")]
    LengthMismatch { x: usize, y: usize },

    #[error("invalid render size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    #[error("invalid argument: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PlotError>;
