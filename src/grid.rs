//! Maze grid and fill bookkeeping

use itertools::Itertools;

/// State of a single grid square
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Carved passage
    Open,
    /// Uncarved rock
    Wall,
}

/// Location in the grid
///
/// Always within `[0, width) × [0, height)` of the grid it was created
/// against; all movement goes through [crate::PathWalker], which checks
/// bounds before stepping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

/// Rectangular array of cells, fixed size after creation
///
/// Starts fully [Cell::Wall]; passages are carved one cell at a time
/// with [Grid::carve].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
    width: usize,
    height: usize,
}

impl Grid {
    const C_OPEN: char = ' ';
    const C_WALL: char = '#';

    /// Create an all-wall grid of the given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        let cells = (0..height)
            .map(|_| (0..width).map(|_| Cell::Wall).collect())
            .collect();
        Grid {
            cells,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, p: Point) -> Cell {
        self.cells[p.y][p.x]
    }

    /// Open the cell at `p`
    ///
    /// Returns `true` if the cell was a wall, `false` if it was
    /// already open. Callers use the return value to keep their
    /// open-cell count in sync.
    pub fn carve(&mut self, p: Point) -> bool {
        let was_wall = self.cells[p.y][p.x] == Cell::Wall;
        self.cells[p.y][p.x] = Cell::Open;
        was_wall
    }

    /// Count open cells by scanning the whole grid
    ///
    /// O(width × height); generation uses [FillTracker] instead and
    /// checks it against this scan in debug builds.
    pub fn count_open(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| **c == Cell::Open)
            .count()
    }

    /// Render the grid as text, one character per cell, one row per line
    pub fn render(&self) -> String {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|c| match c {
                        Cell::Open => Self::C_OPEN,
                        Cell::Wall => Self::C_WALL,
                    })
                    .join("")
            })
            .join("\n")
    }
}

/// Running open-cell count, kept in lockstep with the grid
///
/// Rescanning the grid on every generation step is expensive at scale,
/// so the walker reports each carve here and the generator reads the
/// fill fraction in O(1).
#[derive(Clone, Copy, Debug, Default)]
pub struct FillTracker {
    open: usize,
}

impl FillTracker {
    pub fn new(open: usize) -> Self {
        FillTracker { open }
    }

    pub fn record_carve(&mut self) {
        self.open += 1;
    }

    pub fn open_count(&self) -> usize {
        self.open
    }

    /// Open cells as a percentage of `total_cells`
    pub fn percent_full(&self, total_cells: usize) -> f64 {
        self.open as f64 / total_cells as f64 * 100.0
    }
}
