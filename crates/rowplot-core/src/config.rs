// File: crates/rowplot-core/src/config.rs
// Summary: Run configuration parsed from the command line, with defaults for every field.

use std::path::PathBuf;

use clap::Parser;

use crate::chart::RenderOptions;
use crate::error::{PlotError, Result};
use crate::theme;

pub const DEFAULT_INPUT: &str = "graph.csv";
pub const DEFAULT_OUTPUT: &str = "graph.svg";
pub const DEFAULT_ROW: usize = 2;
pub const DEFAULT_Y_LABEL: &str = "Pr(Hazard)";

/// Render one row of a delimited table against its reference row as an SVG line chart.
#[derive(Parser, Clone, Debug, PartialEq)]
#[command(name = "rowplot", author, version, about)]
pub struct PlotConfig {
    /// Delimited input table
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// SVG output path (written as SVG whatever the extension)
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Index of the row to plot
    #[arg(value_name = "ROW", default_value_t = DEFAULT_ROW)]
    pub row: usize,

    /// Y axis label
    #[arg(value_name = "Y_LABEL", default_value = DEFAULT_Y_LABEL)]
    pub y_label: String,

    /// Power-of-ten scale for y tick labels; 1 keeps plain labels
    #[arg(value_name = "SCALE", default_value_t = 1, allow_negative_numbers = true)]
    pub scale_y: i32,

    /// Field delimiter (one ASCII character, or "tab")
    #[arg(long, default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Decimal separator used by the numeric fields
    #[arg(long = "decimal", default_value = ".", value_parser = parse_single_char)]
    pub decimal_separator: char,

    /// Colour theme (light or dark)
    #[arg(long, default_value = "light", value_parser = parse_theme_name)]
    pub theme: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            row: DEFAULT_ROW,
            y_label: DEFAULT_Y_LABEL.to_string(),
            scale_y: 1,
            delimiter: b',',
            decimal_separator: '.',
            theme: "light".to_string(),
        }
    }
}

impl PlotConfig {
    /// Parse a full argument list (program name first) and validate it.
    pub fn try_from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cfg = Self::try_parse_from(args).map_err(|e| PlotError::Config(e.to_string()))?;
        cfg.validated()
    }

    /// Checks clap cannot express on single arguments.
    pub fn validated(self) -> Result<Self> {
        if self.delimiter as char == self.decimal_separator {
            return Err(PlotError::Config(format!(
                "delimiter and decimal separator are both {:?}",
                self.decimal_separator
            )));
        }
        Ok(self)
    }

    /// Render options for the selected theme.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            theme: theme::find(&self.theme).unwrap_or_default(),
            ..RenderOptions::default()
        }
    }
}

fn parse_single_char(value: &str) -> std::result::Result<char, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("expected exactly one character, got {value:?}")),
    }
}

fn parse_delimiter(value: &str) -> std::result::Result<u8, String> {
    let c = match value {
        "\\t" | "tab" => '\t',
        _ => parse_single_char(value)?,
    };
    if !c.is_ascii() {
        return Err(format!("delimiter must be ASCII, got {c:?}"));
    }
    Ok(c as u8)
}

fn parse_theme_name(value: &str) -> std::result::Result<String, String> {
    theme::find(value)
        .map(|t| t.name.to_string())
        .ok_or_else(|| {
            let names: Vec<_> = theme::presets().iter().map(|t| t.name).collect();
            format!("unknown theme {value:?} (expected one of {})", names.join(", "))
        })
}
