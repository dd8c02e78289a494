// cell.rs - A single grid cell

/// One cell of the board. The position is fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    col: usize,
    alive: bool,
    /// Carried along for future rules; nothing reads it yet.
    pub age: u32,
}

impl Cell {
    /// A dead cell with `age = 0`.
    pub fn new(row: usize, col: usize) -> Self {
        Self::with_state(row, col, false, 0)
    }

    pub fn with_state(row: usize, col: usize, alive: bool, age: u32) -> Self {
        Self { row, col, alive, age }
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    #[inline]
    pub fn col(&self) -> usize {
        self.col
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[inline]
    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    #[inline]
    pub fn toggle(&mut self) {
        self.alive = !self.alive;
    }
}
