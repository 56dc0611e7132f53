// grid.rs - Toroidal cell grid for Conway's Game of Life

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use tracing::{debug, trace, warn};

use crate::error::{LifeError, Result};

/// Whether the board is being edited by hand or evolving on its own.
/// Edits are only accepted in `Editing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Editing,
    Running,
}

/// Grid dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dims {
    pub rows: usize,
    pub cols: usize,
}

/// Fixed-size H x W board that wraps at every edge.
///
/// Cells are stored row-major. The next generation is always built in
/// `next` from an untouched `cells`, then the two buffers are swapped.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
    next: Vec<bool>,
    mode: Mode,
    generation: u64,
}

impl Grid {
    /// Creates a `width` x `height` grid with every cell dead, in editing mode.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![false; width * height],
            next: vec![false; width * height],
            mode: Mode::Editing,
            generation: 0,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dims(&self) -> Dims {
        Dims { rows: self.height, cols: self.width }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.mode == Mode::Running
    }

    /// Number of generations advanced since the last clear or load.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row < self.height && col < self.width {
            Ok(row * self.width + col)
        } else {
            Err(LifeError::OutOfBounds { row, col, height: self.height, width: self.width })
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<bool> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Flips a single cell. Returns `Ok(false)` without touching the board
    /// while the simulation is running.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool> {
        let i = self.index(row, col)?;
        if self.is_running() {
            warn!(row, col, "ignoring toggle while running");
            return Ok(false);
        }
        self.cells[i] = !self.cells[i];
        debug!(row, col, alive = self.cells[i], "toggled cell");
        Ok(true)
    }

    /// Sets a cell regardless of mode. Used when loading seed patterns.
    pub fn set_alive(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
        let i = self.index(row, col)?;
        self.cells[i] = alive;
        Ok(())
    }

    /// Sets the cell at `(row mod H, col mod W)`. Infallible, for loaders that
    /// place cells relative to the board.
    pub(crate) fn set_wrapped(&mut self, row: usize, col: usize, alive: bool) {
        let (row, col) = (row % self.height, col % self.width);
        self.cells[row * self.width + col] = alive;
    }

    /// Live cells among the eight neighbours, with both axes wrapping.
    pub fn neighbor_count(&self, row: usize, col: usize) -> u8 {
        let (h, w) = (self.height, self.width);
        let (row, col) = (row % h, col % w);
        let rows = [(row + h - 1) % h, row, (row + 1) % h];
        let cols = [(col + w - 1) % w, col, (col + 1) % w];

        let mut count = 0;
        for (i, &r) in rows.iter().enumerate() {
            for (j, &c) in cols.iter().enumerate() {
                if i == 1 && j == 1 {
                    continue;
                }
                if self.cells[r * w + c] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Applies B3/S23 to every cell at once.
    pub fn advance_generation(&mut self) {
        for row in 0..self.height {
            for col in 0..self.width {
                let alive = self.cells[row * self.width + col];
                let next_state = match (alive, self.neighbor_count(row, col)) {
                    (true, 2) | (true, 3) => true, // Survival
                    (false, 3) => true,            // Birth
                    _ => false,                    // Death or stays dead
                };
                self.next[row * self.width + col] = next_state;
            }
        }
        std::mem::swap(&mut self.cells, &mut self.next);
        self.generation += 1;
        trace!(generation = self.generation, live = self.live_count(), "advanced generation");
    }

    pub fn set_running(&mut self, running: bool) {
        let mode = if running { Mode::Running } else { Mode::Editing };
        if mode != self.mode {
            debug!(?mode, "mode changed");
            self.mode = mode;
        }
    }

    pub fn toggle_running(&mut self) -> Mode {
        self.set_running(!self.is_running());
        self.mode
    }

    /// Kills every cell and resets the generation counter. Mode is kept.
    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.generation = 0;
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// `(row, col)` of every live cell in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(i, _)| (i / width, i % width))
    }

    /// Hash of the cell matrix only; mode and generation do not contribute.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.cells.hash(&mut hasher);
        hasher.finish()
    }
}
