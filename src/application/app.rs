use tracing::info;

use super::Host;
use crate::config::LifeConfig;
use crate::domain::Grid;
use crate::error::LifeError;
use crate::rendering::ScreenSurface;

/// Everything the program needs, built once at startup and handed to the loop.
pub struct App {
    host: Host,
    surface: ScreenSurface,
}

impl App {
    /// Validate the configuration and wire the grid into a host.
    ///
    /// # Errors
    ///
    /// Returns a [`LifeError`] if the configuration is invalid.
    pub fn new(config: &LifeConfig) -> Result<Self, LifeError> {
        config.validate()?;

        let grid = Grid::new(&config.grid)?;
        let (rows, cols) = grid.dimensions();
        info!(rows, cols, speed_ms = config.grid.speed, "grid created");

        let mut host = Host::new(&config.host);
        host.add(Box::new(grid));

        Ok(Self {
            host,
            surface: ScreenSurface::new(&config.progress),
        })
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    pub fn surface(&self) -> &ScreenSurface {
        &self.surface
    }

    /// Drive the host loop until the user quits
    pub async fn run(mut self) {
        self.host.start(&mut self.surface).await;
    }
}
