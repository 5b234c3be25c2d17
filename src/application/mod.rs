mod camera;
mod viewer_state;

pub use camera::Camera;
pub use viewer_state::{ViewerState, ALIVE_COLOR, BACKGROUND_COLOR};
