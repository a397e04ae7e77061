use macroquad::color::Color;
use rand::Rng;
use tracing::{debug, info, trace};

use super::Cell;
use crate::config::GridConfig;
use crate::error::LifeError;
use crate::rendering::Surface;

const LINE_THICKNESS: f32 = 1.0;

/// Grid owns every cell of a toroidal lattice and advances it at a fixed
/// rate independent of the frame rate.
///
/// Cells are stored row-major: index `x + y * cols` is the cell at `(x, y)`.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cell_width: f32,
    cell_height: f32,
    origin_x: f32,
    origin_y: f32,
    cells: Vec<Cell>,
    /// Milliseconds accumulated toward the next generation
    current_time: f64,
    speed: f64,
    simulation_on: bool,
    generation: u64,
    density_reference: usize,
    random_fill: f64,
    background: Color,
    foreground: Color,
    cell_color: Color,
}

impl Grid {
    /// Create a paused grid with all cells dead
    ///
    /// # Errors
    ///
    /// Returns a [`LifeError`] if the configuration fails validation.
    pub fn new(config: &GridConfig) -> Result<Self, LifeError> {
        config.validate()?;

        let (rows, cols) = (config.rows, config.cols);
        let cells = (0..rows * cols)
            .map(|i| Cell::new(i % cols, i / cols))
            .collect();

        Ok(Self {
            rows,
            cols,
            cell_width: config.cell_width,
            cell_height: config.cell_height,
            origin_x: config.origin_x,
            origin_y: config.origin_y,
            cells,
            current_time: 0.0,
            speed: config.speed,
            simulation_on: false,
            generation: 0,
            density_reference: config.density_reference,
            random_fill: config.random_fill,
            background: config.background,
            foreground: config.foreground,
            cell_color: config.cell_color,
        })
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn current_time(&self) -> f64 {
        self.current_time
    }

    pub const fn speed(&self) -> f64 {
        self.speed
    }

    pub const fn is_running(&self) -> bool {
        self.simulation_on
    }

    pub fn set_running(&mut self, running: bool) {
        self.simulation_on = running;
    }

    /// Flip between paused and running
    pub fn toggle_simulation(&mut self) {
        self.simulation_on = !self.simulation_on;
        info!(
            running = self.simulation_on,
            generation = self.generation,
            "simulation toggled"
        );
    }

    /// Wrap coordinates onto the torus and return the flat index
    fn wrapped_index(&self, x: i64, y: i64) -> usize {
        let x = x.rem_euclid(self.cols as i64) as usize;
        let y = y.rem_euclid(self.rows as i64) as usize;
        x + y * self.cols
    }

    /// Cell at `(x, y)` after wrapping both coordinates, so any input is valid
    pub fn get_cell(&self, x: i64, y: i64) -> &Cell {
        &self.cells[self.wrapped_index(x, y)]
    }

    pub fn get_cell_mut(&mut self, x: i64, y: i64) -> &mut Cell {
        let idx = self.wrapped_index(x, y);
        &mut self.cells[idx]
    }

    /// Bring the cell at `(x, y)` to life
    pub fn birth(&mut self, x: i64, y: i64) {
        self.get_cell_mut(x, y).set_alive(true);
    }

    /// Accumulate running time and advance one generation once `speed` is reached.
    /// Does nothing, and accumulates nothing, while paused.
    pub fn update(&mut self, elapsed_ms: f64) {
        if !self.simulation_on {
            return;
        }

        self.current_time += elapsed_ms;
        if self.current_time < self.speed {
            return;
        }

        self.step();
        self.current_time = 0.0;
    }

    /// Advance exactly one generation.
    ///
    /// Both the kill set and the birth set are computed from the current
    /// generation before any cell is written, so every neighbor count reads
    /// the same snapshot.
    pub fn step(&mut self) {
        let doomed: Vec<usize> = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive() && cell.should_die(self))
            .map(|(idx, _)| idx)
            .collect();

        let newborn: Vec<usize> = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.should_be_born(self))
            .map(|(idx, _)| idx)
            .collect();

        for &idx in &doomed {
            self.cells[idx].set_alive(false);
        }
        for &idx in &newborn {
            self.cells[idx].set_alive(true);
        }

        self.generation += 1;
        debug!(
            generation = self.generation,
            died = doomed.len(),
            born = newborn.len(),
            alive = self.alive_count(),
            "generation advanced"
        );
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Living cells relative to the reference cell count.
    /// Not capped at 1.0; a full default grid reads 1.0, a typical one below 0.4.
    pub fn density(&self) -> f32 {
        self.alive_count() as f32 / self.density_reference as f32
    }

    fn pixel_width(&self) -> f32 {
        self.cols as f32 * self.cell_width
    }

    fn pixel_height(&self) -> f32 {
        self.rows as f32 * self.cell_height
    }

    /// Convert a window pixel into grid coordinates.
    /// Returns `None` for pixels outside the drawn grid.
    pub fn cell_at_pixel(&self, px: f32, py: f32) -> Option<(i64, i64)> {
        let local_x = px - self.origin_x;
        let local_y = py - self.origin_y;
        if local_x < 0.0
            || local_y < 0.0
            || local_x >= self.pixel_width()
            || local_y >= self.pixel_height()
        {
            return None;
        }
        Some((
            (local_x / self.cell_width).floor() as i64,
            (local_y / self.cell_height).floor() as i64,
        ))
    }

    /// Bring the clicked cell to life. Clicking never kills a cell.
    pub fn birth_at_pixel(&mut self, px: f32, py: f32) {
        if let Some((x, y)) = self.cell_at_pixel(px, py) {
            trace!(x, y, "cell born by click");
            self.birth(x, y);
        }
    }

    /// Kill every cell and restart the generation timer
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| cell.set_alive(false));
        self.current_time = 0.0;
        info!(generation = self.generation, "grid cleared");
    }

    /// Set each cell alive with the configured fill probability
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        let fill = self.random_fill;
        self.cells
            .iter_mut()
            .for_each(|cell| cell.set_alive(rng.random_bool(fill)));
        self.current_time = 0.0;
        info!(alive = self.alive_count(), "grid randomized");
    }

    /// Render background, grid lines and living cells, then report density.
    pub fn draw(&self, surface: &mut dyn Surface, _elapsed_ms: f64) {
        let (ox, oy) = (self.origin_x, self.origin_y);
        let (width, height) = (self.pixel_width(), self.pixel_height());

        surface.fill_rect(ox, oy, width, height, self.background);

        for col in 0..self.cols {
            let x = ox + col as f32 * self.cell_width;
            surface.stroke_line(x, oy, x, oy + height, LINE_THICKNESS, self.foreground);
        }
        for row in 0..self.rows {
            let y = oy + row as f32 * self.cell_height;
            surface.stroke_line(ox, y, ox + width, y, LINE_THICKNESS, self.foreground);
        }

        self.cells
            .iter()
            .filter(|cell| cell.is_alive())
            .for_each(|cell| {
                surface.fill_rect(
                    ox + cell.x() as f32 * self.cell_width,
                    oy + cell.y() as f32 * self.cell_height,
                    self.cell_width,
                    self.cell_height,
                    self.cell_color,
                );
            });

        surface.set_progress(self.density());
    }
}
