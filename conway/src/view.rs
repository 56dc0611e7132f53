// view.rs - Pixel <-> cell mapping for hit-testing and drawing

use crate::error::{LifeError, Result};
use crate::grid::Dims;

/// Largest accepted cell size in pixels.
pub const MAX_CELL_SIZE: u32 = 1 << 12;

/// Where the board sits on the drawing surface and how big each cell is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewConfig {
    left: i32,
    top: i32,
    cell_size: u32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self { left: 10, top: 10, cell_size: 30 }
    }
}

impl ViewConfig {
    pub fn new(left: i32, top: i32, cell_size: u32) -> Result<Self> {
        if cell_size == 0 || cell_size > MAX_CELL_SIZE {
            return Err(LifeError::InvalidCellSize);
        }
        Ok(Self { left, top, cell_size })
    }

    pub fn set_view(&mut self, left: i32, top: i32, cell_size: u32) -> Result<()> {
        *self = Self::new(left, top, cell_size)?;
        Ok(())
    }

    pub fn left(&self) -> i32 {
        self.left
    }

    pub fn top(&self) -> i32 {
        self.top
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }
}

/// Axis-aligned pixel rectangle, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl CellRect {
    /// True only for points inside the rectangle; the edges themselves
    /// belong to no cell.
    pub fn strictly_contains(&self, px: f32, py: f32) -> bool {
        let (x1, y1) = (self.x as f32, self.y as f32);
        let (x2, y2) = (x1 + self.w as f32, y1 + self.h as f32);
        x1 < px && px < x2 && y1 < py && py < y2
    }

    pub fn center(&self) -> (f32, f32) {
        (
            self.x as f32 + self.w as f32 / 2.0,
            self.y as f32 + self.h as f32 / 2.0,
        )
    }
}

/// Cell under the pixel `(px, py)`, if any.
///
/// The candidate is found by dividing the offset from the board origin by the
/// cell size, then re-checked for strict containment so that pixels on grid
/// lines resolve to nothing.
pub fn pixel_to_cell(px: f32, py: f32, view: &ViewConfig, dims: Dims) -> Option<(usize, usize)> {
    let dx = px - view.left as f32;
    let dy = py - view.top as f32;
    // also rejects NaN
    if !(dx >= 0.0 && dy >= 0.0) {
        return None;
    }

    let size = view.cell_size as f32;
    let col = (dx / size).floor();
    let row = (dy / size).floor();
    if col >= dims.cols as f32 || row >= dims.rows as f32 {
        return None;
    }

    let (row, col) = (row as usize, col as usize);
    cell_to_rect(row, col, view)
        .strictly_contains(px, py)
        .then_some((row, col))
}

/// Pixel rectangle of a cell. Coordinates saturate at the `i32` range for
/// boards that [`check_fits`] would reject.
pub fn cell_to_rect(row: usize, col: usize, view: &ViewConfig) -> CellRect {
    let size = view.cell_size;
    CellRect {
        x: offset(view.left, col, size),
        y: offset(view.top, row, size),
        w: size,
        h: size,
    }
}

fn offset(origin: i32, index: usize, size: u32) -> i32 {
    let index = i32::try_from(index).unwrap_or(i32::MAX);
    // size <= MAX_CELL_SIZE, so the cast is lossless
    origin.saturating_add(index.saturating_mul(size as i32))
}

/// Rectangle covering the whole rendered board.
pub fn board_rect(dims: Dims, view: &ViewConfig) -> CellRect {
    let span = |cells: usize| u32::try_from(cells).unwrap_or(u32::MAX).saturating_mul(view.cell_size);
    CellRect {
        x: view.left,
        y: view.top,
        w: span(dims.cols),
        h: span(dims.rows),
    }
}

/// Checks that every pixel of the board, including its far edge, is
/// representable as an `i32`.
pub fn check_fits(dims: Dims, view: &ViewConfig) -> Result<()> {
    let far_edge = |origin: i32, cells: usize| {
        i64::try_from(cells)
            .ok()
            .and_then(|cells| cells.checked_mul(i64::from(view.cell_size)))
            .and_then(|span| span.checked_add(i64::from(origin)))
            .is_some_and(|edge| edge <= i64::from(i32::MAX))
    };
    if far_edge(view.left, dims.cols) && far_edge(view.top, dims.rows) {
        Ok(())
    } else {
        Err(LifeError::BoardTooLarge { rows: dims.rows, cols: dims.cols, cell_size: view.cell_size })
    }
}
