use macroquad::color::Color;
use macroquad::shapes::{draw_line, draw_rectangle};
use macroquad::window::clear_background;

use crate::config::ProgressConfig;
use crate::ui::ProgressBar;

/// Drawing target handed to entities each frame.
/// Keeps the domain independent of the window so draws can be recorded in tests.
pub trait Surface {
    /// Fill the whole surface
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, thickness: f32, color: Color);

    /// Feed the external progress indicator
    fn set_progress(&mut self, value: f32);
}

/// Surface backed by the macroquad window
pub struct ScreenSurface {
    progress: ProgressBar,
}

impl ScreenSurface {
    pub fn new(config: &ProgressConfig) -> Self {
        Self {
            progress: ProgressBar::new(config),
        }
    }

    pub fn progress(&self) -> &ProgressBar {
        &self.progress
    }

    /// Draw overlay widgets after all entities have drawn
    pub fn present(&self) {
        self.progress.draw();
    }
}

impl Surface for ScreenSurface {
    fn clear(&mut self, color: Color) {
        clear_background(color);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        draw_rectangle(x, y, width, height, color);
    }

    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, thickness: f32, color: Color) {
        draw_line(x1, y1, x2, y2, thickness, color);
    }

    fn set_progress(&mut self, value: f32) {
        self.progress.set_value(value);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    pub enum DrawCall {
        Clear(Color),
        Rect { x: f32, y: f32, width: f32, height: f32, color: Color },
        Line { x1: f32, y1: f32, x2: f32, y2: f32 },
        Progress(f32),
    }

    /// Surface that remembers every call in order
    #[derive(Default)]
    pub struct RecordingSurface {
        pub calls: Vec<DrawCall>,
    }

    impl RecordingSurface {
        pub fn rects(&self) -> Vec<&DrawCall> {
            self.calls
                .iter()
                .filter(|call| matches!(call, DrawCall::Rect { .. }))
                .collect()
        }

        pub fn line_count(&self) -> usize {
            self.calls
                .iter()
                .filter(|call| matches!(call, DrawCall::Line { .. }))
                .count()
        }

        pub fn last_progress(&self) -> Option<f32> {
            self.calls.iter().rev().find_map(|call| match call {
                DrawCall::Progress(value) => Some(*value),
                _ => None,
            })
        }
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, color: Color) {
            self.calls.push(DrawCall::Clear(color));
        }

        fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
            self.calls.push(DrawCall::Rect { x, y, width, height, color });
        }

        fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, _thickness: f32, _color: Color) {
            self.calls.push(DrawCall::Line { x1, y1, x2, y2 });
        }

        fn set_progress(&mut self, value: f32) {
            self.calls.push(DrawCall::Progress(value));
        }
    }
}
