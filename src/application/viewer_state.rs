use std::time::Instant;

use macroquad::color::Color;
use tracing::info;

use crate::canvas::{AutomatonRenderer, ImageSurface, Surface};
use crate::config::CanvasConfig;
use crate::domain::{RuleTable, all_rules, default_rule};

pub const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);
pub const BACKGROUND_COLOR: Color = Color::new(0.06, 0.06, 0.06, 1.0);

/// ViewerState owns the rule list, the canvas and what was last drawn on it.
///
/// Every selection runs one complete render before returning, so a surface
/// is never shared between two renders.
pub struct ViewerState {
    pub rules: Vec<(&'static str, RuleTable)>,
    pub active: usize,
    pub surface: ImageSurface,
    pub renderer: AutomatonRenderer,
    /// Set after a render; cleared once the texture has been re-uploaded
    pub dirty: bool,
    pub last_render_time_ms: f32,
}

impl ViewerState {
    /// Create the state and paint the default rule on a canvas of the given size
    pub fn new(config: &CanvasConfig, canvas_width: u32, canvas_height: u32) -> Self {
        let rules = all_rules();
        let active = rules
            .iter()
            .position(|(_, rule)| *rule == default_rule())
            .unwrap_or(0);

        let mut state = Self {
            rules,
            active,
            surface: ImageSurface::new(canvas_width, canvas_height, ALIVE_COLOR, BACKGROUND_COLOR),
            renderer: AutomatonRenderer::new(config.cell_size),
            dirty: false,
            last_render_time_ms: 0.0,
        };
        state.render_active();
        state
    }

    pub fn active_rule(&self) -> &RuleTable {
        &self.rules[self.active].1
    }

    /// Switch to the rule at `index` and render it. Out-of-range indices are ignored.
    pub fn select_rule(&mut self, index: usize) {
        if index >= self.rules.len() {
            return;
        }
        self.active = index;
        info!(rule = self.rules[index].0, "rule selected");
        self.render_active();
    }

    /// Resize the canvas and render the active rule again
    pub fn resize_canvas(&mut self, width: u32, height: u32) {
        if (width, height) == (self.surface.width(), self.surface.height()) {
            return;
        }
        self.surface.set_size(width, height);
        self.render_active();
    }

    /// Canvas size in pixels
    pub fn canvas_size(&self) -> (f32, f32) {
        (self.surface.width() as f32, self.surface.height() as f32)
    }

    /// Grid size in cells
    pub fn grid_dimensions(&self) -> (u32, u32) {
        self.renderer
            .grid_dimensions(self.surface.width(), self.surface.height())
    }

    fn render_active(&mut self) {
        let start = Instant::now();
        let rule = *self.active_rule();
        self.renderer.render(&rule, &mut self.surface);
        self.last_render_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.dirty = true;
    }
}
