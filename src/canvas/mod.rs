//! Drawing surfaces and the renderer that paints an automaton onto them.

mod image;
mod recording;

pub use image::ImageSurface;
pub use recording::{DrawCall, Rect, RecordingSurface};

use tracing::debug;

use crate::domain::{Grid, RuleTable};

/// A 2D raster target addressed in whole pixels.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Resize the surface. Existing content is discarded.
    fn set_size(&mut self, width: u32, height: u32);

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32);

    fn clear_rect(&mut self, x: u32, y: u32, width: u32, height: u32);
}

/// Paint `rule` onto `surface`, one row of cells per generation.
///
/// The grid is `surface_width / cell_size` cells wide and
/// `surface_height / cell_size` generations tall. Only live cells are
/// filled; the last generation is computed but not painted. A zero cell
/// size or a surface smaller than one cell draws nothing.
pub fn render<S: Surface + ?Sized>(
    rule: &RuleTable,
    surface_width: u32,
    surface_height: u32,
    cell_size: u32,
    surface: &mut S,
) {
    let width = surface_width.checked_div(cell_size).unwrap_or(0) as usize;
    let height = surface_height.checked_div(cell_size).unwrap_or(0) as usize;

    let grid = Grid::compute(rule, width, height);

    let mut painted = 0usize;
    for (x, y) in grid.iter_painted_cells() {
        surface.fill_rect(x as u32 * cell_size, y as u32 * cell_size, cell_size, cell_size);
        painted += 1;
    }

    debug!(rule = rule.name(), width, height, painted, "rendered automaton");
}

/// Renders onto a surface using the surface's own size, clearing it first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutomatonRenderer {
    cell_size: u32,
}

impl AutomatonRenderer {
    pub const fn new(cell_size: u32) -> Self {
        Self { cell_size }
    }

    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Grid dimensions in cells for a surface of the given pixel size
    pub fn grid_dimensions(&self, surface_width: u32, surface_height: u32) -> (u32, u32) {
        (
            surface_width.checked_div(self.cell_size).unwrap_or(0),
            surface_height.checked_div(self.cell_size).unwrap_or(0),
        )
    }

    /// Clear the whole surface and paint `rule` from scratch
    pub fn render<S: Surface + ?Sized>(&self, rule: &RuleTable, surface: &mut S) {
        let (width, height) = (surface.width(), surface.height());
        surface.clear_rect(0, 0, width, height);
        render(rule, width, height, self.cell_size, surface);
    }
}
