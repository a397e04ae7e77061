//! Startup errors. Every runtime operation on the grid is total, so the only
//! failures are bad construction parameters, surfaced once and fatally.

/// Errors produced while validating configuration and building the grid.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LifeError {
    /// A grid needs at least one row and one column.
    #[error("grid must have at least one row and one column (got {rows}x{cols})")]
    EmptyGrid {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// Cells must have a positive, finite size in both directions.
    #[error("cell size must be positive (got {width}x{height})")]
    InvalidCellSize {
        /// Requested cell width.
        width: f32,
        /// Requested cell height.
        height: f32,
    },

    /// The generation interval must be a positive number of milliseconds.
    #[error("generation interval must be positive (got {0} ms)")]
    InvalidSpeed(f64),

    /// The density metric divides by this, so it cannot be zero.
    #[error("density reference cell count must be non-zero")]
    InvalidDensityReference,

    /// Fill probability for randomizing must lie in `[0, 1]`.
    #[error("random fill fraction must be within 0.0..=1.0 (got {0})")]
    InvalidFillFraction(f64),
}
