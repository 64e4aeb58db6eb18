// File: crates/rowplot-core/src/chart.rs
// Summary: Chart struct and headless SVG rendering pipeline using Skia's SVG canvas.

use std::path::Path;

use log::info;
use skia_safe as skia;

use crate::error::{PlotError, Result};
use crate::scale::LinearScale;
use crate::series::Series;
use crate::text::{TextShaper, SERIF_FAMILIES};
use crate::theme::Theme;
use crate::ticks::mathtext_to_plain;
use crate::types::{Insets, HEIGHT, LABEL_SIZE, TICK_SIZE, TITLE_SIZE, WIDTH};
use crate::Axis;

/// Fraction of the data span added on each side by [`Chart::autoscale_axes`].
pub const DEFAULT_MARGIN: f64 = 0.05;

const TICK_LEN: f32 = 4.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub font_families: Vec<String>,
    pub title_size: f32,
    pub label_size: f32,
    pub tick_size: f32,
    pub line_width: f32,
    pub marker_radius: f32,
    /// Skip all text (title, axis and tick labels).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            font_families: SERIF_FAMILIES.iter().map(|s| s.to_string()).collect(),
            title_size: TITLE_SIZE,
            label_size: LABEL_SIZE,
            tick_size: TICK_SIZE,
            line_width: 1.5,
            marker_radius: 3.0,
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    fn validate(&self) -> Result<()> {
        let too_small = self.width <= self.insets.hsum() as i32 || self.height <= self.insets.vsum() as i32;
        if self.width <= 0 || self.height <= 0 || too_small {
            return Err(PlotError::InvalidSize { width: self.width, height: self.height });
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axis ranges to the data plus `margin` (fraction of the span) on
    /// each side, then widen them to keep fixed ticks visible.
    pub fn autoscale_axes(&mut self, margin: f64) {
        let bounds = self
            .series
            .iter()
            .filter_map(Series::bounds)
            .reduce(|a, b| (a.0.min(b.0), a.1.max(b.1), a.2.min(b.2), a.3.max(b.3)));

        if let Some((x0, x1, y0, y1)) = bounds {
            (self.x_axis.min, self.x_axis.max) = padded(x0, x1, margin);
            (self.y_axis.min, self.y_axis.max) = padded(y0, y1, margin);
        }
        self.x_axis.include_ticks();
        self.y_axis.include_ticks();
    }

    /// Render the chart as an SVG document.
    pub fn render_to_svg_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        opts.validate()?;
        let bounds = skia::Rect::from_wh(opts.width as f32, opts.height as f32);
        let canvas = skia::svg::Canvas::new(bounds, None);
        self.draw(&canvas, opts);
        let data = canvas.end();
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart as SVG to `output_path`, whatever its extension.
    /// An existing file is overwritten.
    pub fn render_to_svg(&self, opts: &RenderOptions, output_path: impl AsRef<Path>) -> Result<()> {
        let path = output_path.as_ref();
        let bytes = self.render_to_svg_bytes(opts)?;

        let io_err = |source: std::io::Error| PlotError::Io { path: path.to_path_buf(), source };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, &bytes).map_err(io_err)?;
        info!("wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;

        // Background
        let mut bg = skia::Paint::default();
        bg.set_color(theme.background);
        bg.set_style(skia::paint::Style::Fill);
        canvas.draw_rect(skia::Rect::from_wh(opts.width as f32, opts.height as f32), &bg);

        // Paddings & plot rect
        let plot = skia::Rect::from_ltrb(
            opts.insets.left as f32,
            opts.insets.top as f32,
            (opts.width - opts.insets.right as i32) as f32,
            (opts.height - opts.insets.bottom as i32) as f32,
        );
        let sx = LinearScale::horizontal(plot.left, plot.right, self.x_axis.min, self.x_axis.max);
        let sy = LinearScale::vertical(plot.top, plot.bottom, self.y_axis.min, self.y_axis.max);

        let shaper = opts.draw_labels.then(|| TextShaper::new(&opts.font_families));

        for s in &self.series {
            draw_series(canvas, plot, &sx, &sy, s, opts);
        }
        draw_frame(canvas, plot, theme);
        draw_ticks(canvas, plot, &sx, &sy, &self.x_axis, &self.y_axis, shaper.as_ref(), opts);

        if let Some(shaper) = &shaper {
            draw_labels(canvas, plot, shaper, &self.title, &self.x_axis, &self.y_axis, opts);
        }
    }
}

fn padded(lo: f64, hi: f64, margin: f64) -> (f64, f64) {
    let span = hi - lo;
    if span.abs() < 1e-12 {
        // single value: open a window around it
        let half = (lo.abs() * 0.05).max(0.05);
        return (lo - half, hi + half);
    }
    (lo - span * margin, hi + span * margin)
}

// ---- helpers ----------------------------------------------------------------

fn draw_frame(canvas: &skia::Canvas, plot: skia::Rect, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.frame);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);
    canvas.draw_rect(plot, &paint);
}

#[allow(clippy::too_many_arguments)]
fn draw_ticks(
    canvas: &skia::Canvas,
    plot: skia::Rect,
    sx: &LinearScale,
    sy: &LinearScale,
    x_axis: &Axis,
    y_axis: &Axis,
    shaper: Option<&TextShaper>,
    opts: &RenderOptions,
) {
    let theme = &opts.theme;
    let mut paint = skia::Paint::default();
    paint.set_color(theme.tick);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    for (v, label) in x_axis.tick_labels() {
        let x = sx.to_px(v);
        canvas.draw_line((x, plot.bottom), (x, plot.bottom + TICK_LEN), &paint);
        if let Some(shaper) = shaper {
            let text = mathtext_to_plain(&label);
            let baseline = plot.bottom + TICK_LEN + 4.0 + opts.tick_size;
            shaper.draw_centered(canvas, &text, x, baseline, opts.tick_size, theme.tick_label);
        }
    }

    for (v, label) in y_axis.tick_labels() {
        let y = sy.to_px(v);
        canvas.draw_line((plot.left - TICK_LEN, y), (plot.left, y), &paint);
        if let Some(shaper) = shaper {
            let text = mathtext_to_plain(&label);
            let baseline = y + opts.tick_size * 0.35;
            shaper.draw_right(canvas, &text, plot.left - TICK_LEN - 4.0, baseline, opts.tick_size, theme.tick_label);
        }
    }
}

fn draw_labels(
    canvas: &skia::Canvas,
    plot: skia::Rect,
    shaper: &TextShaper,
    title: &str,
    x_axis: &Axis,
    y_axis: &Axis,
    opts: &RenderOptions,
) {
    let color = opts.theme.axis_label;

    if !title.is_empty() {
        let baseline = plot.top - 0.5 * opts.title_size;
        shaper.draw_centered(canvas, &mathtext_to_plain(title), plot.center_x(), baseline, opts.title_size, color);
    }

    if !x_axis.label.is_empty() {
        let baseline = plot.bottom + TICK_LEN + 12.0 + opts.tick_size + opts.label_size;
        shaper.draw_centered(canvas, &mathtext_to_plain(&x_axis.label), plot.center_x(), baseline, opts.label_size, color);
    }

    if !y_axis.label.is_empty() {
        let widest_tick = y_axis
            .tick_labels()
            .iter()
            .map(|(_, l)| shaper.measure_width(&mathtext_to_plain(l), opts.tick_size))
            .fold(0.0f32, f32::max);
        let x = (plot.left - TICK_LEN - 12.0 - widest_tick).max(opts.label_size);

        // rotate so the label reads bottom-to-top along the axis
        canvas.save();
        canvas.translate((x, plot.center_y()));
        canvas.rotate(-90.0, None);
        shaper.draw_centered(canvas, &mathtext_to_plain(&y_axis.label), 0.0, 0.0, opts.label_size, color);
        canvas.restore();
    }
}

fn draw_series(
    canvas: &skia::Canvas,
    plot: skia::Rect,
    sx: &LinearScale,
    sy: &LinearScale,
    series: &Series,
    opts: &RenderOptions,
) {
    let data = &series.data_xy;
    if data.is_empty() {
        return;
    }

    canvas.save();
    canvas.clip_rect(plot, skia::ClipOp::Intersect, true);

    if series.draws_line() && data.len() >= 2 {
        let mut path = skia::Path::new();
        let (x0, y0) = data[0];
        path.move_to((sx.to_px(x0), sy.to_px(y0)));
        for &(x, y) in data.iter().skip(1) {
            path.line_to((sx.to_px(x), sy.to_px(y)));
        }

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(opts.line_width);
        stroke.set_stroke_join(skia::paint::Join::Round);
        stroke.set_color(opts.theme.line_stroke);
        canvas.draw_path(&path, &stroke);
    }

    if series.draws_markers() {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(opts.theme.marker_fill);
        for &(x, y) in data {
            if x.is_finite() && y.is_finite() {
                canvas.draw_circle((sx.to_px(x), sy.to_px(y)), opts.marker_radius, &fill);
            }
        }
    }

    canvas.restore();
}
