// File: crates/rowplot-core/tests/ticks.rs
// Purpose: Tick label formatters and mathtext display conversion.

use rowplot_core::{mathtext_to_plain, scaled_formatter, LabelFormatter, PrecLabelFormat, ScaledSciLabelFormat};

#[test]
fn exponent_zero_keeps_value() {
    let fmt = scaled_formatter(0);
    assert_eq!(fmt.format_label(1.0, 0), "$ 1.00 \\times\\ 10^{-0}$");
}

#[test]
fn exponent_two_multiplies_by_hundred() {
    let fmt = ScaledSciLabelFormat::new(2);
    assert_eq!(fmt.factor(), 100.0);
    assert_eq!(format!("{:?}", fmt.factor()), "100.0");
    assert_eq!(fmt.format_label(0.5, 0), "$ 50.00 \\times\\ 10^{-2}$");
}

#[test]
fn tick_position_is_ignored() {
    let fmt = scaled_formatter(3);
    assert_eq!(fmt.format_label(0.25, 0), fmt.format_label(0.25, 7));
}

#[test]
fn negative_exponent_keeps_literal_minus() {
    let fmt = ScaledSciLabelFormat::new(-1);
    assert_eq!(fmt.exponent(), -1);
    assert_eq!(fmt.format_label(20.0, 0), "$ 2.00 \\times\\ 10^{--1}$");
}

#[test]
fn precision_follows_step() {
    assert_eq!(PrecLabelFormat::for_step(0.2), PrecLabelFormat(1));
    assert_eq!(PrecLabelFormat::for_step(0.25), PrecLabelFormat(2));
    assert_eq!(PrecLabelFormat::for_step(5.0), PrecLabelFormat(0));
    assert_eq!(PrecLabelFormat::for_step(f64::INFINITY), PrecLabelFormat(2));
    assert_eq!(PrecLabelFormat(1).format_label(-0.0, 0), "0.0");
}

#[test]
fn mathtext_becomes_unicode() {
    assert_eq!(mathtext_to_plain("$ 50.00 \\times\\ 10^{-2}$"), "50.00 \u{00d7} 10\u{207b}\u{00b2}");
    assert_eq!(mathtext_to_plain("$ 1.00 \\times\\ 10^{-0}$"), "1.00 \u{00d7} 10\u{207b}\u{2070}");
    assert_eq!(mathtext_to_plain("$x^{ab}$"), "x^(ab)");
}

#[test]
fn plain_labels_pass_through() {
    assert_eq!(mathtext_to_plain("Pr(F1)"), "Pr(F1)");
    assert_eq!(mathtext_to_plain("$5"), "$5");
}
