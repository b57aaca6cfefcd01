use super::{Cell, CellSet};
use crate::Config;
use std::num::NonZeroU32;

/// Number of playable columns and rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Capacity {
    pub columns: u32,
    pub rows: u32,
}

impl Capacity {
    pub const EMPTY: Self = Self::new(0, 0);

    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.columns && cell.y < self.rows
    }

    /// Total number of cells, `columns * rows`.
    pub fn area(&self) -> u64 {
        u64::from(self.columns) * u64::from(self.rows)
    }

    pub fn is_empty(&self) -> bool {
        self.columns == 0 || self.rows == 0
    }
}

/// Maps between canvas pixels and grid cells.
///
/// The playable grid starts `border` cells from the top-left corner of the
/// canvas, and the same number of cells is kept free on the right and bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    cell_size: NonZeroU32,
    border: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Config::CELL_SIZE, Config::BORDER_CELLS)
    }
}

impl Viewport {
    /// `cell_size` is in pixels, `border` is in cells.
    pub const fn new(cell_size: NonZeroU32, border: u32) -> Self {
        Self { cell_size, border }
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size.get()
    }

    /// Cells lost to the border along each axis.
    pub fn margin(&self) -> u32 {
        2 * self.border
    }

    /// Capacity of a canvas of the given pixel size.
    pub fn on_resize(&self, pixel_width: u32, pixel_height: u32) -> Capacity {
        Capacity::new(
            (pixel_width / self.cell_size).saturating_sub(self.margin()),
            (pixel_height / self.cell_size).saturating_sub(self.margin()),
        )
    }

    /// Removes cells that fall outside `capacity`. Returns how many were removed.
    pub fn reconcile(&self, cells: &mut CellSet, capacity: Capacity) -> usize {
        cells.retain_within(capacity)
    }

    /// Cell under the pointer, or `None` if the pointer is on the border or
    /// outside the grid.
    pub fn pixel_to_cell(
        &self,
        pointer_x: i32,
        pointer_y: i32,
        capacity: Capacity,
    ) -> Option<Cell> {
        let x = self.pixel_to_index(pointer_x)?;
        let y = self.pixel_to_index(pointer_y)?;
        let cell = Cell::new(x, y);
        capacity.contains(cell).then_some(cell)
    }

    /// Top-left pixel of the square drawn for `cell`.
    pub fn cell_to_pixel(&self, cell: Cell) -> (u32, u32) {
        (
            (self.border + cell.x) * self.cell_size(),
            (self.border + cell.y) * self.cell_size(),
        )
    }

    /// Top-left pixel of the playable grid.
    pub fn grid_origin(&self) -> u32 {
        self.border * self.cell_size()
    }

    /// Pixel width and height of the playable grid.
    pub fn grid_size(&self, capacity: Capacity) -> (u32, u32) {
        (
            capacity.columns * self.cell_size(),
            capacity.rows * self.cell_size(),
        )
    }

    fn pixel_to_index(&self, pixel: i32) -> Option<u32> {
        let cell_size = i64::from(self.cell_size());
        let index = i64::from(pixel).div_euclid(cell_size) - i64::from(self.border);
        u32::try_from(index).ok()
    }
}
