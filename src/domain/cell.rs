use super::Grid;

/// Offsets of the eight surrounding positions, in lookup order.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Cell is the fundamental unit of the automaton.
/// Its position never changes; only the alive flag does, and only the grid
/// flips it. Neighbor queries resolve through the grid that owns the cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    x: usize,
    y: usize,
    alive: bool,
}

impl Cell {
    /// Create a dead cell at a fixed position
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y, alive: false }
    }

    pub const fn x(&self) -> usize {
        self.x
    }

    pub const fn y(&self) -> usize {
        self.y
    }

    /// Check if the cell is currently alive
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    pub(crate) fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    /// The eight toroidally wrapped neighbors.
    /// On grids narrower than three cells some entries repeat.
    pub fn neighbors<'g>(&self, grid: &'g Grid) -> [&'g Cell; 8] {
        let (x, y) = (self.x as i64, self.y as i64);
        NEIGHBOR_OFFSETS.map(|(dx, dy)| grid.get_cell(x + dx, y + dy))
    }

    pub fn living_neighbors(&self, grid: &Grid) -> u8 {
        self.neighbors(grid)
            .iter()
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Underpopulation (< 2) or overpopulation (> 3)
    pub fn should_die(&self, grid: &Grid) -> bool {
        !matches!(self.living_neighbors(grid), 2 | 3)
    }

    /// Dead cell with exactly three living neighbors
    pub fn should_be_born(&self, grid: &Grid) -> bool {
        !self.alive && self.living_neighbors(grid) == 3
    }
}
