//! Shared render target mutated by the simulation and read by the renderer
//!
//! A fixed-size grid of cells behind a single mutex. All three operations
//! (`clear`, `set_pixel`, `snapshot`) serialize against each other, so a
//! reader can never observe a half-written cell. Per-cell locking would
//! buy nothing at this cell count.

use std::sync::{Mutex, PoisonError};

/// One canvas cell: a display glyph plus an ANSI 256-color attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub attr: u8,
}

impl Cell {
    pub const BLANK: Cell = Cell { glyph: ' ', attr: 0 };

    pub fn is_blank(&self) -> bool {
        *self == Self::BLANK
    }
}

/// Frame snapshot produced by [`SharedCanvas::snapshot`]
///
/// A complete, consistent copy of the grid at one instant; safe to read
/// while writers keep mutating the live canvas.
#[derive(Debug, Clone)]
pub struct Frame {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Frame {
    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Cell at `(x, y)`, or `None` outside the grid
    ///
    /// Readers get the same permissive bounds treatment as writers:
    /// out-of-range lookups are answered, not panicked on.
    pub fn cell(&self, x: u16, y: u16) -> Option<Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y as usize * self.width as usize + x as usize])
    }

    /// Iterate non-blank cells as `(x, y, cell)`
    pub fn iter_occupied(&self) -> impl Iterator<Item = (u16, u16, Cell)> + '_ {
        let width = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_blank())
            .map(move |(i, cell)| ((i % width) as u16, (i / width) as u16, *cell))
    }
}

/// Fixed W x H cell grid shared by all agent workers and the render loop
pub struct SharedCanvas {
    width: u16,
    height: u16,
    cells: Mutex<Vec<Cell>>,
}

impl SharedCanvas {
    pub fn new(width: u16, height: u16) -> Self {
        let n = width as usize * height as usize;
        Self {
            width,
            height,
            cells: Mutex::new(vec![Cell::BLANK; n]),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Cell>> {
        // A panicking writer leaves the grid in a valid (if stale) state;
        // nothing here panics mid-write, so poison carries no information.
        self.cells.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Reset every cell to blank
    pub fn clear(&self) {
        let mut cells = self.lock();
        cells.fill(Cell::BLANK);
    }

    /// Write one cell; out-of-bounds coordinates are silently dropped
    ///
    /// Out-of-range targets are an expected transient of continuous
    /// motion, not a caller error. Identical-coordinate races resolve
    /// to last-writer-wins.
    pub fn set_pixel(&self, x: i32, y: i32, glyph: char, attr: u8) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let index = y as usize * self.width as usize + x as usize;
        let mut cells = self.lock();
        cells[index] = Cell { glyph, attr };
    }

    /// Produce a complete, consistent copy of the grid
    pub fn snapshot(&self) -> Frame {
        let cells = self.lock();
        Frame {
            width: self.width,
            height: self.height,
            cells: cells.clone(),
        }
    }
}
