// Domain layer - rule tables and generations
pub mod domain;

// Drawing surfaces and the automaton renderer
pub mod canvas;

// Application layer - viewer state and camera
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

pub mod config;
pub mod logging;

// Re-exports for convenience
pub use domain::{Cell, Generation, Grid, Neighborhood, RuleTable, all_rules, default_rule};
pub use canvas::{AutomatonRenderer, ImageSurface, RecordingSurface, Surface, render};
pub use application::{Camera, ViewerState};
pub use config::CanvasConfig;
