use macroquad::color::{Color, WHITE};
use macroquad::shapes::{draw_rectangle, draw_rectangle_lines};
use macroquad::text::draw_text;

use crate::config::ProgressConfig;

/// Horizontal bar showing a single numeric value against a fixed maximum.
/// The raw value is kept as reported; only the drawn fill is clamped.
#[derive(Clone, Debug)]
pub struct ProgressBar {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    max: f32,
    value: f32,
    fill: Color,
}

impl ProgressBar {
    pub fn new(config: &ProgressConfig) -> Self {
        Self {
            x: config.x,
            y: config.y,
            width: config.width,
            height: config.height,
            max: config.max,
            value: 0.0,
            fill: config.fill,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn set_value(&mut self, value: f32) {
        self.value = value;
    }

    /// Portion of the bar to fill, within `[0, 1]`
    pub fn fraction(&self) -> f32 {
        if self.max <= 0.0 {
            return 0.0;
        }
        (self.value / self.max).clamp(0.0, 1.0)
    }

    pub fn draw(&self) {
        draw_rectangle(
            self.x,
            self.y,
            self.width * self.fraction(),
            self.height,
            self.fill,
        );
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);

        let label = format!("{:.1}% alive", self.value * 100.0);
        draw_text(&label, self.x + 6.0, self.y + self.height - 5.0, 16.0, WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_scales_to_max() {
        let mut bar = ProgressBar::new(&ProgressConfig::default());
        bar.set_value(0.2);
        assert!((bar.fraction() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_fraction_clamps_but_value_does_not() {
        let mut bar = ProgressBar::new(&ProgressConfig::default());
        bar.set_value(0.9);
        assert_eq!(bar.fraction(), 1.0);
        assert_eq!(bar.value(), 0.9);
    }
}
