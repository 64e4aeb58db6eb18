use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rowplot_core::{RowRenderer, Table};

fn wide_table(n: usize) -> Table {
    let xs: Vec<String> = (0..n).map(|i| format!("{}", i as f64 / (n - 1) as f64)).collect();
    let ys: Vec<String> = (0..n)
        .map(|i| format!("{}", (i as f64 * 0.05).sin() * 1e-3 + 2e-3))
        .collect();

    let mut header = vec!["label".to_string()];
    header.extend((0..n).map(|i| format!("c{i}")));
    let mut reference = vec!["ref".to_string()];
    reference.extend(xs);
    let mut row = vec!["row2".to_string()];
    row.extend(ys);
    Table::from_rows(vec![header, reference, row])
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_svg_bytes");
    for &n in &[100usize, 5_000usize] {
        group.bench_function(format!("row_{n}"), |b| {
            let renderer = RowRenderer::new(wide_table(n), '.').expect("reference row");
            let mut opts = renderer.options().clone();
            opts.draw_labels = false;
            b.iter(|| {
                let chart = renderer.build_chart(2, "Y", 3).expect("chart");
                let bytes = chart.render_to_svg_bytes(&opts).expect("render");
                black_box(bytes);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
