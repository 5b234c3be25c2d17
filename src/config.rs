//! Canvas sizing for the viewer.

/// How large the painted canvas is relative to the window, and how big a
/// cell is. The canvas is larger than the window so the pattern can be
/// scrolled through.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasConfig {
    pub cell_size: u32,
    pub width_multiplier: f32,
    pub height_multiplier: f32,
    /// Upper bound on either canvas dimension, in pixels
    pub max_dimension: u32,
}

impl CanvasConfig {
    /// Pixel size of the canvas for a viewport of the given size
    pub fn canvas_size(&self, viewport_width: f32, viewport_height: f32) -> (u32, u32) {
        let scale = |viewport: f32, multiplier: f32| {
            ((viewport.max(0.0) * multiplier) as u32).min(self.max_dimension)
        };
        (
            scale(viewport_width, self.width_multiplier),
            scale(viewport_height, self.height_multiplier),
        )
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            cell_size: 4,
            width_multiplier: 5.0,
            height_multiplier: 3.0,
            max_dimension: 4096,
        }
    }
}
