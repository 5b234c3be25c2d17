use macroquad::prelude::*;

/// Button that triggers a render of one rule.
#[derive(Clone)]
pub struct RuleButton {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    label: String,
    /// Position of the rule in the viewer's rule list
    pub rule_index: usize,
}

const IDLE_COLOR: Color = Color::new(0.27, 0.51, 0.71, 1.0);
const HOVER_COLOR: Color = Color::new(0.39, 0.58, 0.93, 1.0);
const ACTIVE_COLOR: Color = Color::new(0.0, 0.6, 0.35, 1.0);

impl RuleButton {
    pub fn new(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        label: impl Into<String>,
        rule_index: usize,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            label: label.into(),
            rule_index,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Check if mouse is hovering over button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    /// Draw button; the active rule keeps its highlight
    pub fn draw(&self, mouse_pos: (f32, f32), active: bool) {
        let color = if active {
            ACTIVE_COLOR
        } else if self.is_hovered(mouse_pos) {
            HOVER_COLOR
        } else {
            IDLE_COLOR
        };

        draw_rectangle(self.x, self.y, self.width, self.height, color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);

        let text_size = measure_text(&self.label, None, 20, 1.0);
        draw_text(
            &self.label,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            20.0,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
