use super::Capacity;
use ahash::RandomState;
use rand::Rng;
use std::collections::HashSet;

/// Position on the playable grid, zero-based from its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
}

impl Cell {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl From<(u32, u32)> for Cell {
    fn from((x, y): (u32, u32)) -> Self {
        Self::new(x, y)
    }
}

/// Sparse set of alive cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellSet {
    cells: HashSet<Cell, RandomState>,
}

impl CellSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the cell unless it is already alive. Returns `true` if it was added.
    pub fn insert(&mut self, cell: Cell) -> bool {
        if self.cells.contains(&cell) {
            return false;
        }
        self.cells.insert(cell)
    }

    pub fn add(&mut self, x: u32, y: u32) -> bool {
        self.insert(Cell::new(x, y))
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.contains_cell(Cell::new(x, y))
    }

    pub fn contains_cell(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn remove(&mut self, x: u32, y: u32) -> bool {
        self.cells.remove(&Cell::new(x, y))
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Cells ordered row by row.
    pub fn sorted(&self) -> Vec<Cell> {
        let mut cells = self.cells.iter().copied().collect::<Vec<_>>();
        cells.sort_unstable_by_key(|c| (c.y, c.x));
        cells
    }

    /// Drops every cell outside `capacity`. Returns the number of removed cells.
    pub fn retain_within(&mut self, capacity: Capacity) -> usize {
        let before = self.cells.len();
        self.cells.retain(|&cell| capacity.contains(cell));
        before - self.cells.len()
    }

    /// Visits every coordinate of `capacity` and adds it when a uniform draw
    /// from `[0, 100)` is below `percent`. Returns the number of added cells.
    pub fn random_fill<R: Rng + ?Sized>(
        &mut self,
        percent: u8,
        capacity: Capacity,
        rng: &mut R,
    ) -> usize {
        let percent = f64::from(percent.min(100));
        let mut added = 0;
        for x in 0..capacity.columns {
            for y in 0..capacity.rows {
                if rng.gen_range(0.0..100.0) < percent && self.add(x, y) {
                    added += 1;
                }
            }
        }
        added
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<Cell> for CellSet {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        for cell in iter {
            self.insert(cell);
        }
    }
}
