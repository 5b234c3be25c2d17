use macroquad::color::Color;
use macroquad::texture::Image;
use tracing::warn;

use super::Surface;

/// CPU-side pixel surface backed by a macroquad [`Image`].
///
/// Cleared pixels take the background color, filled pixels the foreground.
/// Rectangles are clipped to the image.
pub struct ImageSurface {
    image: Image,
    foreground: [u8; 4],
    background: [u8; 4],
}

impl ImageSurface {
    pub fn new(width: u32, height: u32, foreground: Color, background: Color) -> Self {
        let background_bytes: [u8; 4] = background.into();
        let (w, h) = (clamp_dimension(width), clamp_dimension(height));
        Self {
            image: Image::gen_image_color(w, h, background),
            foreground: foreground.into(),
            background: background_bytes,
        }
    }

    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let idx = y as usize * self.image.width() + x as usize;
        self.image.get_image_data().get(idx).copied()
    }

    pub fn is_filled(&self, x: u32, y: u32) -> bool {
        self.pixel(x, y) == Some(self.foreground)
    }

    fn paint(&mut self, x: u32, y: u32, width: u32, height: u32, color: [u8; 4]) {
        let stride = self.image.width();
        let x0 = (x as usize).min(stride);
        let x1 = (x as usize).saturating_add(width as usize).min(stride);
        let y0 = (y as usize).min(self.image.height());
        let y1 = (y as usize).saturating_add(height as usize).min(self.image.height());
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let data = self.image.get_image_data_mut();
        for row in y0..y1 {
            data[row * stride + x0..row * stride + x1].fill(color);
        }
    }
}

fn clamp_dimension(value: u32) -> u16 {
    u16::try_from(value).unwrap_or_else(|_| {
        warn!(requested = value, max = u16::MAX, "surface dimension clamped");
        u16::MAX
    })
}

impl Surface for ImageSurface {
    fn width(&self) -> u32 {
        u32::from(self.image.width)
    }

    fn height(&self) -> u32 {
        u32::from(self.image.height)
    }

    fn set_size(&mut self, width: u32, height: u32) {
        let background = Color::from_rgba(
            self.background[0],
            self.background[1],
            self.background[2],
            self.background[3],
        );
        self.image =
            Image::gen_image_color(clamp_dimension(width), clamp_dimension(height), background);
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32) {
        self.paint(x, y, width, height, self.foreground);
    }

    fn clear_rect(&mut self, x: u32, y: u32, width: u32, height: u32) {
        self.paint(x, y, width, height, self.background);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::render;
    use crate::domain::RULE_30;
    use macroquad::color::{BLACK, WHITE};

    #[test]
    fn test_fill_and_clear_pixels() {
        let mut surface = ImageSurface::new(8, 8, WHITE, BLACK);
        assert!(!surface.is_filled(2, 2));

        surface.fill_rect(1, 1, 3, 2);
        assert!(surface.is_filled(1, 1));
        assert!(surface.is_filled(3, 2));
        assert!(!surface.is_filled(4, 2));
        assert!(!surface.is_filled(1, 3));

        surface.clear_rect(0, 0, 8, 8);
        assert!(!surface.is_filled(1, 1));
    }

    #[test]
    fn test_rects_are_clipped() {
        let mut surface = ImageSurface::new(4, 4, WHITE, BLACK);
        surface.fill_rect(2, 2, 100, 100);
        surface.fill_rect(10, 10, 2, 2);

        assert!(surface.is_filled(3, 3));
        assert_eq!(surface.pixel(4, 4), None);
    }

    #[test]
    fn test_resize() {
        let mut surface = ImageSurface::new(4, 4, WHITE, BLACK);
        surface.fill_rect(0, 0, 4, 4);
        surface.set_size(6, 2);

        assert_eq!((surface.width(), surface.height()), (6, 2));
        assert!(!surface.is_filled(0, 0));
    }

    #[test]
    fn test_render_into_pixels() {
        let mut surface = ImageSurface::new(10, 6, WHITE, BLACK);
        render(&RULE_30, 10, 6, 2, &mut surface);

        // generation 0: one cell at column 2 of a 5x3 grid
        assert!(surface.is_filled(4, 0));
        assert!(surface.is_filled(5, 1));
        assert!(!surface.is_filled(2, 0));
        // generation 1: columns 1..=3
        assert!(surface.is_filled(2, 2));
        assert!(surface.is_filled(7, 3));
        // generation 2 stays blank
        assert!((0..10).all(|x| !surface.is_filled(x, 4)));
    }
}
