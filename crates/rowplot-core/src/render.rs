// File: crates/rowplot-core/src/render.rs
// Summary: Row renderer; plots one table row against the reference row and writes SVG.
// Notes:
// - The reference row is parsed once, when the renderer is built.
// - Every render builds a fresh `Chart`, so nothing carries over between calls.

use std::path::Path;

use log::debug;

use crate::chart::{Chart, RenderOptions, DEFAULT_MARGIN};
use crate::error::Result;
use crate::series::{Marker, Series, SeriesType};
use crate::table::Table;
use crate::ticks::scaled_formatter;
use crate::Axis;

/// Row holding the x coordinates shared by every chart.
pub const REFERENCE_ROW: usize = 1;
/// X axis label of every chart.
pub const X_LABEL: &str = "Pr(F1)";
/// The only x ticks drawn.
pub const X_TICKS: [f64; 2] = [0.0, 1.0];
/// Scale exponent that keeps the default y tick labels.
pub const UNSCALED: i32 = 1;

/// Numbers of the reference row, label dropped.
pub fn reference_series(table: &Table, decimal_separator: char) -> Result<Vec<f64>> {
    Ok(table.numeric_row(REFERENCE_ROW, decimal_separator)?.values)
}

pub struct RowRenderer {
    table: Table,
    reference: Vec<f64>,
    decimal_separator: char,
    options: RenderOptions,
}

impl RowRenderer {
    pub fn new(table: Table, decimal_separator: char) -> Result<Self> {
        let reference = reference_series(&table, decimal_separator)?;
        debug!("reference series: {} values", reference.len());
        Ok(Self { table, reference, decimal_separator, options: RenderOptions::default() })
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn reference(&self) -> &[f64] {
        &self.reference
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Chart for `row` without writing it anywhere.
    ///
    /// `scale_y != 1` switches the y tick labels to the scaled scientific form.
    pub fn build_chart(&self, row: usize, y_label: &str, scale_y: i32) -> Result<Chart> {
        let numeric = self.table.numeric_row(row, self.decimal_separator)?;
        debug!("row {row} ({}): {} values", numeric.label, numeric.values.len());

        let mut chart = Chart::new();
        chart.x_axis = Axis::new(X_LABEL, 0.0, 1.0).with_ticks(X_TICKS);
        chart.y_axis = Axis::new(y_label, 0.0, 1.0);
        if scale_y != UNSCALED {
            chart.y_axis = chart.y_axis.with_formatter(scaled_formatter(scale_y));
        }

        let series = Series::from_xy(SeriesType::Line, &self.reference, &numeric.values)?
            .with_marker(Marker::Circle);
        chart.add_series(series);
        chart.autoscale_axes(DEFAULT_MARGIN);
        Ok(chart)
    }

    /// Render `row` to `output` as SVG, overwriting any existing file.
    pub fn render_row(&self, row: usize, y_label: &str, output: impl AsRef<Path>, scale_y: i32) -> Result<()> {
        let chart = self.build_chart(row, y_label, scale_y)?;
        chart.render_to_svg(&self.options, output)
    }
}
