// File: crates/rowplot-core/src/lib.rs
// Summary: Core library entry point; exports table loading, tick formatting and SVG chart rendering.

pub mod error;
pub mod config;
pub mod table;
pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod scale;
pub mod theme;
pub mod text;
pub mod ticks;
pub mod render;

pub use error::{PlotError, Result};
pub use config::PlotConfig;
pub use table::{parse_decimal, NumericRow, Table};
pub use chart::{Chart, RenderOptions};
pub use series::{Marker, Series, SeriesType};
pub use axis::Axis;
pub use theme::Theme;
pub use text::TextShaper;
pub use ticks::{mathtext_to_plain, scaled_formatter, LabelFormatter, PrecLabelFormat, ScaledSciLabelFormat};
pub use render::{reference_series, RowRenderer};
