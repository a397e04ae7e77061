use macroquad::color::Color;
use macroquad::time::get_time;
use macroquad::window::next_frame;
use tracing::info;

use super::{Entity, FrameInfo};
use crate::config::HostConfig;
use crate::input::{self, InputEvent};
use crate::rendering::{ScreenSurface, Surface};

/// Host drives its entities once per animation frame.
/// Within a frame every entity updates before any entity draws, in
/// registration order.
pub struct Host {
    entities: Vec<Box<dyn Entity>>,
    background: Color,
    running: bool,
    last_time: Option<f64>,
    frames: u64,
}

impl Host {
    pub fn new(config: &HostConfig) -> Self {
        Self {
            entities: Vec::new(),
            background: config.background,
            running: false,
            last_time: None,
            frames: 0,
        }
    }

    /// Register an entity after those already present
    pub fn add(&mut self, entity: Box<dyn Entity>) {
        self.entities.push(entity);
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Ask the loop to exit before its next frame
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Forward an input event to every entity
    pub fn dispatch(&mut self, event: &InputEvent) {
        self.entities
            .iter_mut()
            .for_each(|entity| entity.handle_input(event));
    }

    /// One loop body: clear, update all, draw all, remember the timestamp.
    /// Returns the milliseconds elapsed since the previous frame.
    pub fn frame(&mut self, surface: &mut dyn Surface, now_ms: f64) -> f64 {
        let elapsed = self
            .last_time
            .map_or(0.0, |last| (now_ms - last).max(0.0));
        let info = FrameInfo {
            index: self.frames,
            now_ms,
        };

        surface.clear(self.background);
        self.entities
            .iter_mut()
            .for_each(|entity| entity.update(&info, elapsed));
        self.entities
            .iter()
            .for_each(|entity| entity.draw(surface, elapsed));

        self.last_time = Some(now_ms);
        self.frames += 1;
        elapsed
    }

    /// Run until [`Host::stop`] is called or the user quits.
    pub async fn start(&mut self, surface: &mut ScreenSurface) {
        self.running = true;
        self.last_time = Some(now_ms());
        info!(entities = self.entities.len(), "host loop started");

        while self.running {
            for event in input::poll_events() {
                match event {
                    InputEvent::Quit => self.stop(),
                    other => self.dispatch(&other),
                }
            }

            self.frame(surface, now_ms());
            surface.present();

            next_frame().await;
        }

        info!(frames = self.frames, "host loop stopped");
    }
}

/// Milliseconds since the window opened
fn now_ms() -> f64 {
    get_time() * 1000.0
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::rendering::testing::{DrawCall, RecordingSurface};

    type Log = Rc<RefCell<Vec<String>>>;

    /// Entity that records what the host asked of it
    struct Probe {
        name: &'static str,
        log: Log,
    }

    impl Entity for Probe {
        fn update(&mut self, frame: &FrameInfo, elapsed_ms: f64) {
            self.log
                .borrow_mut()
                .push(format!("{} update #{} {elapsed_ms}", self.name, frame.index));
        }

        fn draw(&self, _surface: &mut dyn Surface, elapsed_ms: f64) {
            self.log
                .borrow_mut()
                .push(format!("{} draw {elapsed_ms}", self.name));
        }

        fn handle_input(&mut self, event: &InputEvent) {
            self.log
                .borrow_mut()
                .push(format!("{} input {event:?}", self.name));
        }
    }

    fn host_with_probes(log: &Log) -> Host {
        let mut host = Host::new(&HostConfig::default());
        for name in ["a", "b"] {
            host.add(Box::new(Probe {
                name,
                log: Rc::clone(log),
            }));
        }
        host
    }

    #[test]
    fn test_updates_precede_draws_in_registration_order() {
        let log = Log::default();
        let mut host = host_with_probes(&log);

        host.frame(&mut RecordingSurface::default(), 0.0);

        assert_eq!(
            *log.borrow(),
            vec!["a update #0 0", "b update #0 0", "a draw 0", "b draw 0"]
        );
    }

    #[test]
    fn test_elapsed_is_time_since_previous_frame() {
        let log = Log::default();
        let mut host = host_with_probes(&log);
        let mut surface = RecordingSurface::default();

        assert_eq!(host.frame(&mut surface, 1_000.0), 0.0);
        assert_eq!(host.frame(&mut surface, 1_016.0), 16.0);
        assert_eq!(host.frame(&mut surface, 1_050.0), 34.0);
        assert_eq!(host.frames(), 3);
        assert!(log.borrow().contains(&"b update #2 34".to_owned()));
    }

    #[test]
    fn test_frame_clears_before_drawing() {
        let mut host = Host::new(&HostConfig::default());
        let grid = crate::domain::Grid::new(&crate::config::GridConfig::with_size(2, 2)).unwrap();
        host.add(Box::new(grid));

        let mut surface = RecordingSurface::default();
        host.frame(&mut surface, 0.0);

        assert_eq!(
            surface.calls.first(),
            Some(&DrawCall::Clear(macroquad::color::BLACK))
        );
        assert_eq!(surface.last_progress(), Some(0.0));
    }

    #[test]
    fn test_dispatch_reaches_every_entity() {
        let log = Log::default();
        let mut host = host_with_probes(&log);

        host.dispatch(&InputEvent::TogglePause);

        assert_eq!(
            *log.borrow(),
            vec!["a input TogglePause", "b input TogglePause"]
        );
    }

    #[test]
    fn test_stop_clears_running() {
        let mut host = Host::new(&HostConfig::default());
        assert!(host.is_empty());
        host.stop();
        assert!(!host.is_running());
    }
}
