// File: crates/rowplot-core/src/types.rs
// Summary: Shared constants (sizes, paddings, font sizes).

/// Default surface width in pixels.
pub const WIDTH: i32 = 640;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 480;

/// Title size in points.
pub const TITLE_SIZE: f32 = 16.0;
/// Axis label size in points.
pub const LABEL_SIZE: f32 = 14.0;
/// Tick label size in points.
pub const TICK_SIZE: f32 = 12.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        // room for rotated y label + scientific tick labels on the left
        Self::new(150, 24, 40, 64)
    }
}
