// File: crates/rowplot-core/src/series.rs
// Summary: XY series model; points keep the order they were given in.

use crate::error::{PlotError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,
    Scatter,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    None,
    Circle,
}

#[derive(Clone, Debug)]
pub struct Series {
    pub series_type: SeriesType,
    pub data_xy: Vec<(f64, f64)>,
    pub marker: Marker,
}

impl Series {
    pub fn with_data(series_type: SeriesType, data: Vec<(f64, f64)>) -> Self {
        Self { series_type, data_xy: data, marker: Marker::None }
    }

    /// Pair `xs[i]` with `ys[i]`. Both slices must have the same length.
    pub fn from_xy(series_type: SeriesType, xs: &[f64], ys: &[f64]) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(PlotError::LengthMismatch { x: xs.len(), y: ys.len() });
        }
        let data = xs.iter().copied().zip(ys.iter().copied()).collect();
        Ok(Self::with_data(series_type, data))
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    pub fn draws_line(&self) -> bool {
        matches!(self.series_type, SeriesType::Line)
    }

    /// Markers are implied for scatter series.
    pub fn draws_markers(&self) -> bool {
        self.marker != Marker::None || matches!(self.series_type, SeriesType::Scatter)
    }

    /// (min_x, max_x, min_y, max_y) over finite points, `None` when there are none.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        self.data_xy
            .iter()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .fold(None, |acc, &(x, y)| match acc {
                None => Some((x, x, y, y)),
                Some((x0, x1, y0, y1)) => Some((x0.min(x), x1.max(x), y0.min(y), y1.max(y))),
            })
    }
}
