// File: crates/rowplot-core/src/table.rs
// Summary: Delimited-text loader and decimal-separator-aware numeric row extraction.
// Notes:
// - Rows keep their on-disk order and may differ in length.
// - Column 0 of every row is a text label; the rest is numeric text.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::{PlotError, Result};

/// Fully materialized table of text fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

/// One row split into its label and parsed values.
#[derive(Clone, Debug, PartialEq)]
pub struct NumericRow {
    pub label: String,
    pub values: Vec<f64>,
}

impl Table {
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Read every record of `path`, split on `delimiter`.
    pub fn from_path(path: impl AsRef<Path>, delimiter: u8) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| PlotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file, delimiter)
    }

    /// Blank lines are kept as empty rows so row indices match line order.
    pub fn from_reader<R: io::Read>(mut reader: R, delimiter: u8) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data).map_err(csv::Error::from)?;

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(delimiter)
            .from_reader(data.as_slice());

        let mut rows = Vec::new();
        let mut record = csv::StringRecord::new();
        loop {
            // the reader skips blank lines silently; count them from where it stands
            let start = rdr.position().byte() as usize;
            rows.extend(std::iter::repeat_with(Vec::new).take(blank_lines_at(&data, start)));
            if !rdr.read_record(&mut record)? {
                break;
            }
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Result<&[String]> {
        self.rows
            .get(index)
            .map(Vec::as_slice)
            .ok_or(PlotError::RowOutOfRange { row: index, rows: self.rows.len() })
    }

    /// Split row `index` into label and numbers, normalizing `decimal_separator` to `.`.
    pub fn numeric_row(&self, index: usize, decimal_separator: char) -> Result<NumericRow> {
        let fields = self.row(index)?;
        let Some((label, rest)) = fields.split_first() else {
            return Ok(NumericRow { label: String::new(), values: Vec::new() });
        };

        let values = rest
            .iter()
            .enumerate()
            .map(|(i, text)| {
                parse_decimal(text, decimal_separator).map_err(|source| PlotError::Number {
                    row: index,
                    column: i + 1,
                    text: text.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(NumericRow { label: label.clone(), values })
    }
}

/// Empty lines starting at byte `start`. A `\n` completing a `\r\n` that
/// ended the previous record is not a line of its own.
fn blank_lines_at(data: &[u8], start: usize) -> usize {
    let mut i = start.min(data.len());
    if i > 0 && data[i - 1] == b'\r' && data.get(i) == Some(&b'\n') {
        i += 1;
    }
    let mut count = 0;
    while i < data.len() {
        match data[i] {
            b'\r' if data.get(i + 1) == Some(&b'\n') => i += 2,
            b'\r' | b'\n' => i += 1,
            _ => break,
        }
        count += 1;
    }
    count
}

/// Parse `text` as a float after replacing `decimal_separator` with `.`.
/// Surrounding whitespace is ignored.
pub fn parse_decimal(text: &str, decimal_separator: char) -> std::result::Result<f64, std::num::ParseFloatError> {
    if decimal_separator == '.' {
        text.trim().parse::<f64>()
    } else {
        text.replace(decimal_separator, ".").trim().parse::<f64>()
    }
}
