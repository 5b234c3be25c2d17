use macroquad::prelude::*;

use crate::application::{Camera, ViewerState};
use crate::ui::RuleButton;

const WHEEL_STEP: f32 = 60.0;
const KEY_STEP: f32 = 40.0;

/// Keys 1-4 select the rules in button order
const RULE_KEYS: [KeyCode; 4] = [KeyCode::Key1, KeyCode::Key2, KeyCode::Key3, KeyCode::Key4];

/// Mouse wheel scrolls vertically, or horizontally while shift is held
pub fn handle_scroll(camera: &mut Camera, canvas: (f32, f32), viewport: (f32, f32)) {
    let wheel = mouse_wheel().1;
    if wheel == 0.0 {
        return;
    }
    let step = -wheel.signum() * WHEEL_STEP;
    if is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift) {
        camera.scroll(step, 0.0, canvas, viewport);
    } else {
        camera.scroll(0.0, step, canvas, viewport);
    }
}

/// Pan with middle mouse button drag
pub fn handle_pan(
    camera: &mut Camera,
    mouse_pos: (f32, f32),
    canvas: (f32, f32),
    viewport: (f32, f32),
) {
    if is_mouse_button_down(MouseButton::Middle) {
        camera.drag(mouse_pos, canvas, viewport);
    } else {
        camera.end_drag();
    }
}

/// Arrow keys scroll, Home recenters on the seed, 1-4 pick a rule
pub fn process_keyboard_input(
    state: &mut ViewerState,
    camera: &mut Camera,
    canvas: (f32, f32),
    viewport: (f32, f32),
) {
    let moves = [
        (KeyCode::Left, (-KEY_STEP, 0.0)),
        (KeyCode::Right, (KEY_STEP, 0.0)),
        (KeyCode::Up, (0.0, -KEY_STEP)),
        (KeyCode::Down, (0.0, KEY_STEP)),
    ];
    moves
        .iter()
        .filter(|(key, _)| is_key_down(*key))
        .for_each(|(_, (dx, dy))| camera.scroll(*dx, *dy, canvas, viewport));

    if is_key_pressed(KeyCode::Home) {
        camera.center_on_seed(canvas, viewport);
    }

    if let Some(index) = RULE_KEYS.iter().position(|key| is_key_pressed(*key)) {
        state.select_rule(index);
    }
}

/// Render the rule behind whichever button was clicked
pub fn process_button_clicks(
    state: &mut ViewerState,
    buttons: &[RuleButton],
    mouse_pos: (f32, f32),
) {
    if let Some(button) = buttons.iter().find(|btn| btn.is_clicked(mouse_pos)) {
        state.select_rule(button.rule_index);
    }
}
