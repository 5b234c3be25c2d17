use macroquad::prelude::*;
use elementary_automata::{
    Camera, CanvasConfig, ViewerState, input, logging, rendering,
    application::BACKGROUND_COLOR,
    ui::{self, layout_rule_buttons},
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Elementary Cellular Automata".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

fn upload(state: &ViewerState) -> Texture2D {
    let texture = Texture2D::from_image(state.surface.image());
    texture.set_filter(FilterMode::Nearest);
    texture
}

#[macroquad::main(window_conf)]
async fn main() {
    logging::init();

    let config = CanvasConfig::default();
    let viewport = ui::viewport_size();
    let (canvas_w, canvas_h) = config.canvas_size(viewport.0, viewport.1);

    let mut state = ViewerState::new(&config, canvas_w, canvas_h);
    let mut camera = Camera::new();
    camera.center_on_seed(state.canvas_size(), viewport);

    let mut texture = upload(&state);
    state.dirty = false;

    loop {
        let mouse_pos = mouse_position();
        let viewport = ui::viewport_size();

        // Canvas follows the window size; resizing re-renders the active rule
        let (canvas_w, canvas_h) = config.canvas_size(viewport.0, viewport.1);
        state.resize_canvas(canvas_w, canvas_h);

        let buttons = layout_rule_buttons(ui::panel_x(), &state.rules);
        input::process_button_clicks(&mut state, &buttons, mouse_pos);

        let canvas = state.canvas_size();
        input::process_keyboard_input(&mut state, &mut camera, canvas, viewport);
        input::handle_scroll(&mut camera, canvas, viewport);
        input::handle_pan(&mut camera, mouse_pos, canvas, viewport);

        if state.dirty {
            texture = upload(&state);
            state.dirty = false;
        }

        clear_background(BACKGROUND_COLOR);
        rendering::draw_canvas(&texture, &camera, viewport);
        rendering::draw_controls(&state, &camera, &buttons, mouse_pos);

        next_frame().await;
    }
}
