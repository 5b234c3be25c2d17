use super::Surface;

/// Axis-aligned rectangle in pixels
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DrawCall {
    Fill(Rect),
    Clear(Rect),
}

/// Surface that keeps the draw calls it receives, in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn fills(&self) -> impl Iterator<Item = Rect> + '_ {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Fill(rect) => Some(*rect),
            DrawCall::Clear(_) => None,
        })
    }

    pub fn fill_count(&self) -> usize {
        self.fills().count()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.calls.clear();
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32) {
        self.calls.push(DrawCall::Fill(Rect::new(x, y, width, height)));
    }

    fn clear_rect(&mut self, x: u32, y: u32, width: u32, height: u32) {
        self.calls.push(DrawCall::Clear(Rect::new(x, y, width, height)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut surface = RecordingSurface::new(10, 10);
        surface.clear_rect(0, 0, 10, 10);
        surface.fill_rect(1, 2, 3, 4);

        assert_eq!(
            surface.calls(),
            [
                DrawCall::Clear(Rect::new(0, 0, 10, 10)),
                DrawCall::Fill(Rect::new(1, 2, 3, 4)),
            ]
        );
        assert_eq!(surface.fill_count(), 1);
    }

    #[test]
    fn test_resize_discards_calls() {
        let mut surface = RecordingSurface::new(10, 10);
        surface.fill_rect(0, 0, 1, 1);
        surface.set_size(20, 5);

        assert_eq!((surface.width(), surface.height()), (20, 5));
        assert!(surface.calls().is_empty());
    }
}
