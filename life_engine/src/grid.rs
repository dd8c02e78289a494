// grid.rs - Fixed-size cell grid and the neighbor-count scratch buffer

use std::ops::{Index, IndexMut};

use crate::cell::Cell;
use crate::error::ConfigError;
use crate::rules::NEIGHBOR_COUNT_CAP;

/// A `width` x `height` board stored row-major. Dimensions never change after
/// construction and every (row, col) in range owns exactly one `Cell`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        if width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if height == 0 {
            return Err(ConfigError::ZeroHeight);
        }

        let cells = (0..height)
            .flat_map(|row| (0..width).map(move |col| Cell::new(row, col)))
            .collect();

        Ok(Self { width, height, cells })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    /// Panics if (row, col) is outside the grid.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[self.index_of(row, col)]
    }

    #[inline]
    pub fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        let index = self.index_of(row, col);
        &mut self.cells[index]
    }

    #[inline]
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_alive()
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Sets every cell to `alive`.
    pub fn fill(&mut self, alive: bool) {
        for cell in &mut self.cells {
            cell.set_alive(alive);
        }
    }

    /// Live cells in the Moore neighborhood of (row, col). Cells past the
    /// edge do not exist, so corners see at most 3 and edges at most 5.
    /// Counting stops at `NEIGHBOR_COUNT_CAP`.
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let row_range = row.saturating_sub(1)..=(row + 1).min(self.height - 1);
        let col_range = col.saturating_sub(1)..=(col + 1).min(self.width - 1);

        let mut count = 0;
        for r in row_range {
            for c in col_range.clone() {
                if (r, c) == (row, col) {
                    continue;
                }
                if self.cells[r * self.width + c].is_alive() {
                    count += 1;
                    if count >= NEIGHBOR_COUNT_CAP {
                        return count;
                    }
                }
            }
        }
        count
    }

    #[inline]
    fn index_of(&self, row: usize, col: usize) -> usize {
        assert!(
            self.contains(row, col),
            "cell ({row}, {col}) outside {}x{} grid",
            self.width,
            self.height
        );
        row * self.width + col
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = Cell;

    fn index(&self, (row, col): (usize, usize)) -> &Cell {
        self.cell(row, col)
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Cell {
        self.cell_mut(row, col)
    }
}

/// Per-cell live-neighbor counts for one generation, shaped like the grid.
/// Filled completely before any cell changes so a step never reads a
/// half-updated board.
#[derive(Debug, Clone)]
pub struct NeighborCounts {
    width: usize,
    counts: Vec<u8>,
}

impl NeighborCounts {
    pub fn for_grid(grid: &Grid) -> Self {
        Self {
            width: grid.width(),
            counts: vec![0; grid.len()],
        }
    }

    pub fn recompute(&mut self, grid: &Grid) {
        debug_assert_eq!(self.counts.len(), grid.len());
        for cell in grid.cells() {
            self.counts[cell.row() * self.width + cell.col()] =
                grid.live_neighbors(cell.row(), cell.col());
        }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.counts[row * self.width + col]
    }
}
