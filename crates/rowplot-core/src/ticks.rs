// File: crates/rowplot-core/src/ticks.rs
// Summary: Tick label formatters, including the fixed-exponent scientific formatter.

use std::fmt;
use std::sync::Arc;

use log::debug;

/// Turns a tick value into its label. `pos` is the tick's index along the axis.
pub trait LabelFormatter: fmt::Debug {
    fn format_label(&self, value: f64, pos: usize) -> String;
}

/// Fixed number of decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecLabelFormat(pub usize);

impl PrecLabelFormat {
    /// Enough decimals to tell apart ticks `step` apart.
    pub fn for_step(step: f64) -> Self {
        if !step.is_finite() || step <= 0.0 {
            return Self(2);
        }
        // smallest precision at which the step is integral: 0.25 -> 2, 0.2 -> 1
        let mut prec = 0usize;
        let mut scaled = step;
        while prec < 8 && (scaled - scaled.round()).abs() > 1e-9 * scaled.abs().max(1.0) {
            scaled *= 10.0;
            prec += 1;
        }
        Self(prec)
    }
}

impl LabelFormatter for PrecLabelFormat {
    fn format_label(&self, value: f64, _pos: usize) -> String {
        // avoid "-0.0"
        let value = if value == 0.0 { 0.0 } else { value };
        format!("{value:.*}", self.0)
    }
}

/// Multiplies by `10^exponent` and renders `$ v \times\ 10^{-exponent}$`.
///
/// The exponent label always carries a literal leading minus, whatever the
/// sign of `exponent`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledSciLabelFormat {
    exponent: i32,
    factor: f64,
}

impl ScaledSciLabelFormat {
    pub fn new(exponent: i32) -> Self {
        let factor = 10f64.powi(exponent);
        debug!("tick multiplier factor: {factor:?}");
        Self { exponent, factor }
    }

    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }
}

impl LabelFormatter for ScaledSciLabelFormat {
    fn format_label(&self, value: f64, _pos: usize) -> String {
        format!("$ {:.2} \\times\\ 10^{{-{}}}$", value * self.factor, self.exponent)
    }
}

/// Formatter factory for a y-axis scale exponent.
pub fn scaled_formatter(exponent: i32) -> Arc<dyn LabelFormatter> {
    Arc::new(ScaledSciLabelFormat::new(exponent))
}

/// Display form of a mathtext label: `$ 50.00 \times\ 10^{-2}$` -> `50.00 × 10⁻²`.
/// Labels not wrapped in `$` come back unchanged.
pub fn mathtext_to_plain(label: &str) -> String {
    let Some(inner) = label
        .strip_prefix('$')
        .and_then(|rest| rest.strip_suffix('$'))
    else {
        return label.to_string();
    };

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let mut cmd = String::new();
                while let Some(&n) = chars.peek() {
                    if !n.is_ascii_alphabetic() {
                        break;
                    }
                    cmd.push(n);
                    chars.next();
                }
                match cmd.as_str() {
                    // escaped char, e.g. "\ " is an explicit space
                    "" => {
                        if let Some(n) = chars.next() {
                            out.push(n);
                        }
                    }
                    "times" => out.push_str(" \u{00d7} "),
                    "cdot" => out.push_str(" \u{00b7} "),
                    "pi" => out.push('\u{03c0}'),
                    other => {
                        out.push('\\');
                        out.push_str(other);
                    }
                }
            }
            '^' => {
                let group = read_group(&mut chars);
                out.push_str(&superscript(&group));
            }
            // mathtext ignores bare spaces
            ' ' => {}
            _ => out.push(c),
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn read_group(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    match chars.next() {
        Some('{') => {
            let mut depth = 1;
            let mut group = String::new();
            for c in chars.by_ref() {
                match c {
                    '{' => depth += 1,
                    '}' => {
                        depth -= 1;
                        if depth == 0 {
                            break;
                        }
                    }
                    _ => {}
                }
                group.push(c);
            }
            group
        }
        Some(c) => c.to_string(),
        None => String::new(),
    }
}

fn superscript(text: &str) -> String {
    let mapped: Option<String> = text
        .chars()
        .map(|c| match c {
            '0' => Some('\u{2070}'),
            '1' => Some('\u{00b9}'),
            '2' => Some('\u{00b2}'),
            '3' => Some('\u{00b3}'),
            '4'..='9' => char::from_u32(0x2074 + (c as u32 - '4' as u32)),
            '-' => Some('\u{207b}'),
            '+' => Some('\u{207a}'),
            _ => None,
        })
        .collect();
    mapped.unwrap_or_else(|| format!("^({text})"))
}
