// File: crates/rowplot-core/src/axis.rs
// Summary: Axis model with label, range, optional fixed ticks and tick label formatter.

use std::sync::Arc;

use crate::grid::nice_ticks;
use crate::ticks::{LabelFormatter, PrecLabelFormat};

/// Tick count aimed for when ticks are placed automatically.
pub const AUTO_TICK_TARGET: usize = 6;

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    /// Fixed tick positions; `None` places ticks automatically.
    pub ticks: Option<Vec<f64>>,
    /// Custom tick label formatter; `None` picks a precision from the tick step.
    pub formatter: Option<Arc<dyn LabelFormatter>>,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, ticks: None, formatter: None }
    }

    pub fn default_x() -> Self {
        Self::new("", 0.0, 1.0)
    }

    pub fn default_y() -> Self {
        Self::new("", 0.0, 1.0)
    }

    pub fn with_ticks(mut self, ticks: impl Into<Vec<f64>>) -> Self {
        self.ticks = Some(ticks.into());
        self
    }

    pub fn with_formatter(mut self, formatter: Arc<dyn LabelFormatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    pub fn has_custom_formatter(&self) -> bool {
        self.formatter.is_some()
    }

    /// Tick positions inside the current range, in ascending order.
    pub fn tick_positions(&self) -> Vec<f64> {
        let (lo, hi) = (self.min.min(self.max), self.min.max(self.max));
        let eps = (hi - lo).abs() * 1e-9;
        match &self.ticks {
            Some(fixed) => {
                let mut ticks: Vec<f64> = fixed
                    .iter()
                    .copied()
                    .filter(|t| *t >= lo - eps && *t <= hi + eps)
                    .collect();
                ticks.sort_by(f64::total_cmp);
                ticks
            }
            None => nice_ticks(lo, hi, AUTO_TICK_TARGET).0,
        }
    }

    /// Each visible tick with its label.
    pub fn tick_labels(&self) -> Vec<(f64, String)> {
        let positions = self.tick_positions();
        let default_fmt;
        let fmt: &dyn LabelFormatter = match &self.formatter {
            Some(f) => f.as_ref(),
            None => {
                default_fmt = PrecLabelFormat::for_step(min_gap(&positions));
                &default_fmt
            }
        };
        positions
            .iter()
            .enumerate()
            .map(|(pos, &v)| (v, fmt.format_label(v, pos)))
            .collect()
    }

    /// Widen the range so every fixed tick is visible.
    pub fn include_ticks(&mut self) {
        if let Some(fixed) = &self.ticks {
            for &t in fixed {
                self.min = self.min.min(t);
                self.max = self.max.max(t);
            }
        }
    }
}

fn min_gap(sorted: &[f64]) -> f64 {
    sorted
        .windows(2)
        .map(|w| (w[1] - w[0]).abs())
        .filter(|d| *d > 0.0)
        .fold(f64::INFINITY, f64::min)
}
