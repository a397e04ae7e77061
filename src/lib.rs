// Domain layer - Cells, the toroidal grid and seed patterns
pub mod domain;

// Application layer - Frame loop and startup wiring
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

pub mod config;
pub mod error;

// Re-exports for convenience
pub use domain::{Cell, Grid, Pattern, presets};
pub use application::{App, Entity, FrameInfo, Host};
pub use config::LifeConfig;
pub use error::LifeError;
