// File: crates/rowplot-core/src/scale.rs
// Summary: Linear data-to-pixel transforms for the X and Y axes.

/// Maps `[vmin, vmax]` onto `[start_px, end_px]`. `end_px` may be smaller than
/// `start_px` (Y grows downward on screen).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub start_px: f32,
    pub end_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl LinearScale {
    pub fn new(start_px: f32, end_px: f32, vmin: f64, mut vmax: f64) -> Self {
        if (vmax - vmin).abs() < 1e-12 { vmax = vmin + 1.0; }
        Self { start_px, end_px, vmin, vmax }
    }

    /// Horizontal scale over a plot rect's left/right edges.
    pub fn horizontal(left_px: f32, right_px: f32, vmin: f64, vmax: f64) -> Self {
        Self::new(left_px, right_px, vmin, vmax)
    }

    /// Vertical scale: `vmin` sits on the bottom edge.
    pub fn vertical(top_px: f32, bottom_px: f32, vmin: f64, vmax: f64) -> Self {
        Self::new(bottom_px, top_px, vmin, vmax)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = self.vmax - self.vmin;
        self.start_px + ((v - self.vmin) / span) as f32 * (self.end_px - self.start_px)
    }
}
