use crate::domain::{Grid, presets};
use crate::input::InputEvent;
use crate::rendering::Surface;

/// Host state visible to entities while updating
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInfo {
    /// Frames completed before this one
    pub index: u64,
    /// Timestamp of this frame in milliseconds
    pub now_ms: f64,
}

/// Anything the host loop advances and renders once per frame.
pub trait Entity {
    fn update(&mut self, frame: &FrameInfo, elapsed_ms: f64);

    fn draw(&self, surface: &mut dyn Surface, elapsed_ms: f64);

    /// React to user input. Ignored unless overridden.
    fn handle_input(&mut self, _event: &InputEvent) {}
}

impl Entity for Grid {
    fn update(&mut self, _frame: &FrameInfo, elapsed_ms: f64) {
        Grid::update(self, elapsed_ms);
    }

    fn draw(&self, surface: &mut dyn Surface, elapsed_ms: f64) {
        Grid::draw(self, surface, elapsed_ms);
    }

    fn handle_input(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::Click { x, y } => self.birth_at_pixel(x, y),
            InputEvent::Stamp { x, y } => {
                if let Some((gx, gy)) = self.cell_at_pixel(x, y) {
                    presets::glider().place_on(self, gx, gy);
                }
            }
            InputEvent::TogglePause => self.toggle_simulation(),
            InputEvent::Step => self.step(),
            InputEvent::Clear => self.clear(),
            InputEvent::Randomize => self.randomize(&mut rand::rng()),
            InputEvent::Quit => {}
        }
    }
}
