// File: crates/rowplot-core/tests/render.rs
// Purpose: Row renderer end to end: chart contents, formatter selection, repeated renders.

use rowplot_core::render::{X_LABEL, X_TICKS};
use rowplot_core::text::SERIF_FAMILIES;
use rowplot_core::{Marker, PlotError, RenderOptions, RowRenderer, Table, Theme};

fn rows(data: &[&[&str]]) -> Table {
    Table::from_rows(data.iter().map(|r| r.iter().map(|s| s.to_string()).collect()).collect())
}

fn three_row_table() -> Table {
    rows(&[&["label", "0.0", "1.0"], &["ref", "0.0", "1.0"], &["row2", "1.0", "2.0"]])
}

fn out_path(name: &str) -> std::path::PathBuf {
    let p = std::path::PathBuf::from("target/test_out").join(name);
    std::fs::create_dir_all(p.parent().unwrap()).unwrap();
    p
}

#[test]
fn scenario_unscaled_row_two() {
    let renderer = RowRenderer::new(three_row_table(), '.').expect("reference row");
    assert_eq!(renderer.table().len(), 3);
    assert_eq!(renderer.reference(), &[0.0, 1.0]);

    let chart = renderer.build_chart(2, "Y", 1).expect("chart");
    assert_eq!(chart.series.len(), 1);
    assert_eq!(chart.series[0].data_xy, vec![(0.0, 1.0), (1.0, 2.0)]);
    assert_eq!(chart.series[0].marker, Marker::Circle);
    assert!(!chart.y_axis.has_custom_formatter());
    assert!(chart.title.is_empty());
    assert_eq!(chart.x_axis.label, X_LABEL);
    assert_eq!(chart.x_axis.tick_positions(), X_TICKS.to_vec());
    assert_eq!(chart.y_axis.label, "Y");

    let out = out_path("out.svg");
    renderer.render_row(2, "Y", &out, 1).expect("render");
    let svg = std::fs::read_to_string(&out).expect("output exists");
    assert!(svg.contains("<svg"));
}

#[test]
fn scaled_row_uses_scientific_labels() {
    let table = rows(&[&["label", "a", "b"], &["ref", "0.0", "1.0"], &["row2", "0.001", "0.005"]]);
    let renderer = RowRenderer::new(table, '.').unwrap();

    let chart = renderer.build_chart(2, "Pr(H)", 3).unwrap();
    assert!(chart.y_axis.has_custom_formatter());
    let labels = chart.y_axis.tick_labels();
    assert!(!labels.is_empty());
    assert!(labels.iter().all(|(_, l)| l.starts_with("$ ") && l.ends_with("\\times\\ 10^{-3}$")));
}

#[test]
fn points_keep_input_order() {
    let table = rows(&[&["label"], &["ref", "1.0", "0.0", "0.5"], &["row2", "3", "1", "2"]]);
    let renderer = RowRenderer::new(table, '.').unwrap();
    let chart = renderer.build_chart(2, "Y", 1).unwrap();
    assert_eq!(chart.series[0].data_xy, vec![(1.0, 3.0), (0.0, 1.0), (0.5, 2.0)]);
}

#[test]
fn successive_renders_are_independent() {
    let table = rows(&[
        &["label", "0.0", "0.5", "1.0"],
        &["ref", "0.0", "0.5", "1.0"],
        &["row2", "1.0", "2.0", "3.0"],
        &["row3", "9.0", "4.0", "1.0"],
    ]);
    let renderer = RowRenderer::new(table, '.').unwrap();

    let first = out_path("successive_row2.svg");
    let second = out_path("successive_row3.svg");
    let again = out_path("successive_row2_again.svg");
    renderer.render_row(2, "Y", &first, 1).unwrap();
    renderer.render_row(3, "Y", &second, 2).unwrap();
    renderer.render_row(2, "Y", &again, 1).unwrap();

    let a = std::fs::read(&first).unwrap();
    let b = std::fs::read(&second).unwrap();
    let c = std::fs::read(&again).unwrap();
    assert_ne!(a, b);
    // nothing from the row 3 render leaks into the repeat of row 2
    assert_eq!(a, c);
}

#[test]
fn comma_decimals_are_normalized() {
    let table = Table::from_reader("label;a;b\nref;0,0;1,0\nrow2;0,5;0,25\n".as_bytes(), b';').unwrap();
    let renderer = RowRenderer::new(table, ',').unwrap();
    let chart = renderer.build_chart(2, "Y", 1).unwrap();
    assert_eq!(chart.series[0].data_xy, vec![(0.0, 0.5), (1.0, 0.25)]);
}

#[test]
fn length_mismatch_is_rejected() {
    let table = rows(&[&["label"], &["ref", "0.0", "1.0"], &["row2", "1.0"]]);
    let renderer = RowRenderer::new(table, '.').unwrap();
    assert!(matches!(
        renderer.build_chart(2, "Y", 1).unwrap_err(),
        PlotError::LengthMismatch { x: 2, y: 1 }
    ));
}

#[test]
fn bad_row_index_and_bad_number() {
    let table = rows(&[&["label"], &["ref", "0.0"], &["row2", "n/a"]]);
    let renderer = RowRenderer::new(table, '.').unwrap();
    assert!(matches!(renderer.build_chart(9, "Y", 1).unwrap_err(), PlotError::RowOutOfRange { row: 9, .. }));
    assert!(matches!(renderer.build_chart(2, "Y", 1).unwrap_err(), PlotError::Number { row: 2, column: 1, .. }));
}

#[test]
fn output_is_overwritten() {
    let out = out_path("overwrite.svg");
    std::fs::write(&out, b"stale").unwrap();
    let renderer = RowRenderer::new(three_row_table(), '.').unwrap();
    renderer.render_row(2, "Y", &out, 1).unwrap();
    let svg = std::fs::read_to_string(&out).unwrap();
    assert!(!svg.starts_with("stale"));
}

#[test]
fn default_styling_is_serif_with_fixed_sizes() {
    let opts = RenderOptions::default();
    assert_eq!(opts.font_families, SERIF_FAMILIES.iter().map(|s| s.to_string()).collect::<Vec<_>>());
    assert_eq!(opts.title_size, 16.0);
    assert_eq!(opts.label_size, 14.0);

    let renderer = RowRenderer::new(three_row_table(), '.').unwrap();
    let chart = renderer.build_chart(2, "Y", 1).unwrap();
    assert_eq!(chart.x_axis.tick_labels(), vec![(0.0, "0".to_string()), (1.0, "1".to_string())]);

    let out = out_path("styled.svg");
    renderer.render_row(2, "Y", &out, 1).unwrap();
    let svg = std::fs::read_to_string(&out).unwrap();
    assert!(svg.contains("font-family"));
    assert!(svg.contains("font-size=\"14\""));
}

#[test]
fn dark_theme_changes_the_output() {
    let light = RowRenderer::new(three_row_table(), '.').unwrap();
    let dark = RowRenderer::new(three_row_table(), '.')
        .unwrap()
        .with_options(RenderOptions { theme: Theme::dark(), ..RenderOptions::default() });
    assert_eq!(dark.options().theme.name, "dark");

    let a = out_path("theme_light.svg");
    let b = out_path("theme_dark.svg");
    light.render_row(2, "Y", &a, 1).unwrap();
    dark.render_row(2, "Y", &b, 1).unwrap();
    assert_ne!(std::fs::read(&a).unwrap(), std::fs::read(&b).unwrap());
}
