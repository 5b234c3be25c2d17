use macroquad::prelude::*;

use crate::application::{Camera, ViewerState};
use crate::ui::{PANEL_WIDTH, RuleButton, below_buttons, panel_x, rule_label};

/// Draw the visible part of the canvas texture into the viewport
pub fn draw_canvas(texture: &Texture2D, camera: &Camera, viewport: (f32, f32)) {
    let width = viewport.0.min(texture.width() - camera.offset_x).max(0.0);
    let height = viewport.1.min(texture.height() - camera.offset_y).max(0.0);
    if width == 0.0 || height == 0.0 {
        return;
    }

    draw_texture_ex(
        texture,
        0.0,
        0.0,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(width, height)),
            source: Some(Rect::new(camera.offset_x, camera.offset_y, width, height)),
            ..Default::default()
        },
    );
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Draw the panel with rule buttons and info about the current canvas
pub fn draw_controls(
    state: &ViewerState,
    camera: &Camera,
    buttons: &[RuleButton],
    mouse_pos: (f32, f32),
) {
    draw_panel_background();

    buttons
        .iter()
        .for_each(|btn| btn.draw(mouse_pos, btn.rule_index == state.active));

    let px = panel_x();
    let top = below_buttons(buttons.len());
    let (cols, rows) = state.grid_dimensions();
    let (canvas_w, canvas_h) = state.canvas_size();
    let rule = state.active_rule();

    let labels = [
        ("Active:".to_owned(), 16.0, WHITE),
        (rule_label(rule), 20.0, Color::from_rgba(0, 255, 150, 255)),
        (format!("Grid: {cols}x{rows} cells"), 12.0, GRAY),
        (format!("Canvas: {canvas_w:.0}x{canvas_h:.0} px"), 12.0, GRAY),
        (format!("Render: {:.1}ms", state.last_render_time_ms), 13.0, GRAY),
        (
            format!("View: {:.0}, {:.0}", camera.offset_x, camera.offset_y),
            12.0,
            GRAY,
        ),
        ("Controls:".to_owned(), 14.0, WHITE),
        ("1-4: Pick rule".to_owned(), 12.0, GRAY),
        ("Wheel: Scroll".to_owned(), 12.0, GRAY),
        ("Shift+Wheel: Sideways".to_owned(), 12.0, GRAY),
        ("Mid-drag: Pan".to_owned(), 12.0, GRAY),
        ("Home: Recenter".to_owned(), 12.0, GRAY),
    ];

    labels
        .iter()
        .enumerate()
        .for_each(|(i, (text, size, color))| {
            draw_text(text, px, top + i as f32 * 18.0, *size, *color);
        });
}
