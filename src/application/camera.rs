/// Camera tracks which part of the canvas is visible in the viewport.
/// Offsets are the canvas pixel shown at the viewport's top-left corner.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Camera {
    pub offset_x: f32,
    pub offset_y: f32,
    drag_anchor: Option<(f32, f32)>,
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll by a delta in canvas pixels, staying inside the canvas
    pub fn scroll(&mut self, dx: f32, dy: f32, canvas: (f32, f32), viewport: (f32, f32)) {
        self.offset_x = (self.offset_x + dx).clamp(0.0, (canvas.0 - viewport.0).max(0.0));
        self.offset_y = (self.offset_y + dy).clamp(0.0, (canvas.1 - viewport.1).max(0.0));
    }

    /// Continue a drag at `mouse_pos`. Dragging moves the canvas with the
    /// cursor, so the offset changes opposite to the mouse motion.
    pub fn drag(&mut self, mouse_pos: (f32, f32), canvas: (f32, f32), viewport: (f32, f32)) {
        if let Some((last_x, last_y)) = self.drag_anchor {
            self.scroll(last_x - mouse_pos.0, last_y - mouse_pos.1, canvas, viewport);
        }
        self.drag_anchor = Some(mouse_pos);
    }

    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Convert screen coordinates to canvas coordinates
    pub fn screen_to_canvas(&self, screen_x: f32, screen_y: f32) -> (f32, f32) {
        (screen_x + self.offset_x, screen_y + self.offset_y)
    }

    /// Reset camera to the top-left of the canvas
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Show the top of the canvas centered horizontally, where the seed cell is
    pub fn center_on_seed(&mut self, canvas: (f32, f32), viewport: (f32, f32)) {
        self.reset();
        self.scroll((canvas.0 - viewport.0) / 2.0, 0.0, canvas, viewport);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: (f32, f32) = (1000.0, 600.0);
    const VIEW: (f32, f32) = (200.0, 100.0);

    #[test]
    fn test_scroll_is_clamped() {
        let mut camera = Camera::new();
        camera.scroll(-50.0, -50.0, CANVAS, VIEW);
        assert_eq!((camera.offset_x, camera.offset_y), (0.0, 0.0));

        camera.scroll(5000.0, 5000.0, CANVAS, VIEW);
        assert_eq!((camera.offset_x, camera.offset_y), (800.0, 500.0));
    }

    #[test]
    fn test_canvas_smaller_than_view() {
        let mut camera = Camera::new();
        camera.scroll(30.0, 30.0, (100.0, 50.0), VIEW);
        assert_eq!((camera.offset_x, camera.offset_y), (0.0, 0.0));
    }

    #[test]
    fn test_drag_moves_against_mouse() {
        let mut camera = Camera::new();
        camera.scroll(100.0, 100.0, CANVAS, VIEW);

        camera.drag((50.0, 50.0), CANVAS, VIEW);
        assert_eq!((camera.offset_x, camera.offset_y), (100.0, 100.0));
        camera.drag((40.0, 45.0), CANVAS, VIEW);
        assert_eq!((camera.offset_x, camera.offset_y), (110.0, 105.0));

        camera.end_drag();
        assert!(!camera.is_dragging());
    }

    #[test]
    fn test_center_on_seed() {
        let mut camera = Camera::new();
        camera.scroll(10.0, 10.0, CANVAS, VIEW);
        camera.center_on_seed(CANVAS, VIEW);
        assert_eq!((camera.offset_x, camera.offset_y), (400.0, 0.0));
        assert_eq!(camera.screen_to_canvas(100.0, 0.0), (500.0, 0.0));
    }
}
