//! Board module - occupancy of the square grid
//!
//! The board is a `grid_size` x `grid_size` grid. Occupancy is a flat bitmap in
//! row-major order, keyed by `y * grid_size + x`, so lookups are by value and
//! never depend on where a `Position` came from.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.

use crate::types::Position;

/// Set of blocked cells on a board of fixed size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupancy {
    grid_size: u16,
    /// Flat array of cells, row-major order (y * grid_size + x)
    cells: Vec<bool>,
    count: usize,
}

impl Occupancy {
    /// Create an empty occupancy map
    pub fn new(grid_size: u16) -> Self {
        Self {
            grid_size,
            cells: vec![false; grid_size as usize * grid_size as usize],
            count: 0,
        }
    }

    /// Create an occupancy map from every position yielded by `positions`
    pub fn from_positions<'a>(grid_size: u16, positions: impl IntoIterator<Item = &'a Position>) -> Self {
        let mut occupied = Self::new(grid_size);
        occupied.extend(positions);
        occupied
    }

    pub fn grid_size(&self) -> u16 {
        self.grid_size
    }

    /// Mark a cell as occupied.
    /// Returns false if the position is off the board (nothing is recorded).
    pub fn insert(&mut self, pos: Position) -> bool {
        match pos.index(self.grid_size) {
            Some(idx) => {
                if !self.cells[idx] {
                    self.cells[idx] = true;
                    self.count += 1;
                }
                true
            }
            None => false,
        }
    }

    pub fn extend<'a>(&mut self, positions: impl IntoIterator<Item = &'a Position>) {
        for &pos in positions {
            self.insert(pos);
        }
    }

    /// Check if an on-board cell is occupied (off-board cells never are)
    pub fn contains(&self, pos: Position) -> bool {
        pos.index(self.grid_size)
            .map(|idx| self.cells[idx])
            .unwrap_or(false)
    }

    /// Number of distinct occupied cells
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// True when no cell is left open
    pub fn is_full(&self) -> bool {
        self.count == self.cells.len()
    }
}

/// Enumerate the unoccupied cells of the grid.
///
/// The scan order is fixed (row-major: increasing `y`, then increasing `x`),
/// so the same occupancy always yields the same sequence.
pub fn find_open_cells(grid_size: u16, occupied: &Occupancy) -> Vec<Position> {
    let n = i32::from(grid_size);
    let capacity = (grid_size as usize * grid_size as usize).saturating_sub(occupied.len());
    let mut open = Vec::with_capacity(capacity);
    for y in 0..n {
        for x in 0..n {
            let pos = Position::new(x, y);
            if !occupied.contains(pos) {
                open.push(pos);
            }
        }
    }
    open
}
