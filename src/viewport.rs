//! Responsive sizing against the host display surface.

use serde::{Deserialize, Serialize};

/// Current size of the host display surface (a browser window, a game window).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width over height
    pub fn ratio(&self) -> f64 {
        self.width / self.height
    }
}

/// Best canvas height for a design resolution of `width` x `height`.
///
/// When the viewport is proportionally narrower than the design, the height is
/// stretched to `width / viewport.ratio()` so the full width still fits;
/// otherwise the design height is returned unchanged.
pub fn calc_height_ratio(width: f64, height: f64, viewport: Viewport) -> f64 {
    let window_ratio = viewport.ratio();
    if window_ratio < width / height {
        width / window_ratio
    } else {
        height
    }
}
