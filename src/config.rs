//! Configuration for the visualizer.
//!
//! Everything here is fixed at construction time. Defaults reproduce the
//! classic layout: an 800x600 canvas split into 20-unit cells (30 rows by
//! 40 columns) advancing one generation every 75 ms.

use macroquad::color::{BLACK, Color, GREEN, RED, WHITE};

use crate::error::LifeError;

pub const CANVAS_WIDTH: f32 = 800.0;
pub const CANVAS_HEIGHT: f32 = 600.0;
pub const CELL_SIZE: f32 = 20.0;
pub const GENERATION_MS: f64 = 75.0;

/// Height of the strip under the canvas that holds the density bar.
pub const FOOTER_HEIGHT: f32 = 40.0;

/// Top-level configuration handed to [`crate::App::new`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LifeConfig {
    pub window: WindowConfig,
    pub grid: GridConfig,
    pub host: HostConfig,
    pub progress: ProgressConfig,
}

impl LifeConfig {
    /// Check every section that can be invalid.
    ///
    /// # Errors
    ///
    /// Returns the first [`LifeError`] found in the grid section.
    pub fn validate(&self) -> Result<(), LifeError> {
        self.grid.validate()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Conway's Game of Life".to_owned(),
            width: CANVAS_WIDTH as i32,
            height: (CANVAS_HEIGHT + FOOTER_HEIGHT) as i32,
        }
    }
}

/// Grid geometry, timing and colors.
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    pub cell_width: f32,
    pub cell_height: f32,
    pub origin_x: f32,
    pub origin_y: f32,
    /// Milliseconds of running time per generation.
    pub speed: f64,
    /// Denominator of the density metric. Kept independent of `rows * cols`
    /// so the bar reads the same scale whatever the grid size.
    pub density_reference: usize,
    /// Probability of a cell being alive after `R`.
    pub random_fill: f64,
    pub background: Color,
    pub foreground: Color,
    pub cell_color: Color,
}

impl GridConfig {
    /// Derive row and column counts from a canvas size by floor division.
    pub fn from_canvas(width: f32, height: f32, cell: f32) -> Self {
        let rows = (height / cell).floor() as usize;
        let cols = (width / cell).floor() as usize;
        Self {
            rows,
            cols,
            cell_width: cell,
            cell_height: cell,
            origin_x: 0.0,
            origin_y: 0.0,
            speed: GENERATION_MS,
            density_reference: rows * cols,
            random_fill: 0.3,
            background: WHITE,
            foreground: BLACK,
            cell_color: RED,
        }
    }

    /// Same defaults with different dimensions.
    pub fn with_size(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// # Errors
    ///
    /// Returns a [`LifeError`] describing the first invalid field.
    pub fn validate(&self) -> Result<(), LifeError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(LifeError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let valid_size = |v: f32| v.is_finite() && v > 0.0;
        if !valid_size(self.cell_width) || !valid_size(self.cell_height) {
            return Err(LifeError::InvalidCellSize {
                width: self.cell_width,
                height: self.cell_height,
            });
        }
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(LifeError::InvalidSpeed(self.speed));
        }
        if self.density_reference == 0 {
            return Err(LifeError::InvalidDensityReference);
        }
        if !(0.0..=1.0).contains(&self.random_fill) {
            return Err(LifeError::InvalidFillFraction(self.random_fill));
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::from_canvas(CANVAS_WIDTH, CANVAS_HEIGHT, CELL_SIZE)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
    /// Fill used to clear the whole window before entities draw.
    pub background: Color,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self { background: BLACK }
    }
}

/// Placement and scale of the density indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressConfig {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Value at which the bar is drawn full.
    pub max: f32,
    pub fill: Color,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            x: 10.0,
            y: CANVAS_HEIGHT + 10.0,
            width: CANVAS_WIDTH - 20.0,
            height: FOOTER_HEIGHT - 20.0,
            max: 0.4,
            fill: GREEN,
        }
    }
}
