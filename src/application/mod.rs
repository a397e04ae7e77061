mod app;
mod entity;
mod host;

pub use app::App;
pub use entity::{Entity, FrameInfo};
pub use host::Host;
