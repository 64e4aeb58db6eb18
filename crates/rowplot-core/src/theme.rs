// File: crates/rowplot-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub frame: skia::Color,
    pub tick: skia::Color,
    pub tick_label: skia::Color,
    pub axis_label: skia::Color,
    pub line_stroke: skia::Color,
    pub marker_fill: skia::Color,
}

impl Theme {
    /// White paper, matplotlib's default blue for the series.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            frame: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 0, 0, 0),
            tick_label: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            line_stroke: skia::Color::from_argb(255, 0x1f, 0x77, 0xb4),
            marker_fill: skia::Color::from_argb(255, 0x1f, 0x77, 0xb4),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            frame: skia::Color::from_argb(255, 180, 180, 190),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            tick_label: skia::Color::from_argb(255, 210, 210, 220),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            line_stroke: skia::Color::from_argb(255, 64, 160, 255),
            marker_fill: skia::Color::from_argb(255, 64, 160, 255),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`.
pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}
