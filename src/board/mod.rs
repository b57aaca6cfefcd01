mod cell;
mod rules;
mod viewport;

pub use cell::{Cell, CellSet};
pub use rules::next_generation;
pub use viewport::{Capacity, Viewport};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

/// Alive cells bound to the viewport they are displayed in.
///
/// Every cell of the board lies inside the current capacity.
pub struct Board {
    cells: CellSet,
    viewport: Viewport,
    capacity: Capacity,
    rng: ChaCha8Rng,
    redraw: bool,
}

impl Board {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_rng(viewport, ChaCha8Rng::from_entropy())
    }

    /// Board whose random fills are reproducible.
    pub fn with_seed(viewport: Viewport, seed: u64) -> Self {
        Self::with_rng(viewport, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(viewport: Viewport, rng: ChaCha8Rng) -> Self {
        Self {
            cells: CellSet::new(),
            viewport,
            capacity: Capacity::EMPTY,
            rng,
            redraw: true,
        }
    }

    pub fn cells(&self) -> &CellSet {
        &self.cells
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    pub fn population(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.cells.contains(x, y)
    }

    /// Marks the cell alive. Cells outside the capacity are ignored.
    ///
    /// A redraw is requested either way.
    pub fn add(&mut self, x: u32, y: u32) -> bool {
        self.redraw = true;
        let cell = Cell::new(x, y);
        if !self.capacity.contains(cell) {
            trace!(x, y, "ignoring cell outside the board");
            return false;
        }
        self.cells.insert(cell)
    }

    /// Marks the cell under the pointer alive, if there is one.
    pub fn add_at_pixel(&mut self, pointer_x: i32, pointer_y: i32) -> Option<Cell> {
        let cell = self
            .viewport
            .pixel_to_cell(pointer_x, pointer_y, self.capacity)?;
        self.add(cell.x, cell.y);
        Some(cell)
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        self.redraw = true;
    }

    /// Adds each cell of the board with probability `percent / 100`.
    pub fn random_fill(&mut self, percent: u8) -> usize {
        let added = self
            .cells
            .random_fill(percent, self.capacity, &mut self.rng);
        self.redraw = true;
        debug!(percent, added, "randomly filled the board");
        added
    }

    /// Recomputes the capacity for a canvas of the given pixel size and drops
    /// the cells that no longer fit.
    pub fn resize(&mut self, pixel_width: u32, pixel_height: u32) -> Capacity {
        let capacity = self.viewport.on_resize(pixel_width, pixel_height);
        let removed = self.viewport.reconcile(&mut self.cells, capacity);
        if capacity != self.capacity {
            debug!(
                columns = capacity.columns,
                rows = capacity.rows,
                removed,
                "board resized"
            );
        }
        self.capacity = capacity;
        self.redraw = true;
        capacity
    }

    /// Replaces all cells, dropping the ones outside the current capacity.
    pub fn replace_cells(&mut self, mut cells: CellSet) {
        self.viewport.reconcile(&mut cells, self.capacity);
        self.cells = cells;
        self.redraw = true;
    }

    /// Returns whether a redraw was requested since the last call.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }
}
