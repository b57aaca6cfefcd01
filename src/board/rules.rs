use super::{Capacity, Cell, CellSet};
use ahash::AHashMap;

const NEIGHBOURS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

fn neighbours(cell: Cell, capacity: Capacity) -> impl Iterator<Item = Cell> {
    NEIGHBOURS.iter().filter_map(move |&(dx, dy)| {
        let x = cell.x.checked_add_signed(dx)?;
        let y = cell.y.checked_add_signed(dy)?;
        let n = Cell::new(x, y);
        capacity.contains(n).then_some(n)
    })
}

/// Computes the next generation (B3/S23) on a bounded board.
///
/// Everything beyond `capacity` counts as dead, so patterns are cut at the edges.
pub fn next_generation(cells: &CellSet, capacity: Capacity) -> CellSet {
    let mut neibs: AHashMap<Cell, u8> = AHashMap::with_capacity(cells.len() * 8);
    for cell in cells.iter().filter(|&c| capacity.contains(c)) {
        for n in neighbours(cell, capacity) {
            *neibs.entry(n).or_default() += 1;
        }
    }

    neibs
        .into_iter()
        .filter(|&(cell, count)| count == 3 || (count == 2 && cells.contains_cell(cell)))
        .map(|(cell, _)| cell)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(cells: &[(u32, u32)]) -> CellSet {
        cells.iter().copied().map(Cell::from).collect()
    }

    #[test]
    fn blinker_oscillates() {
        let capacity = Capacity::new(10, 10);
        let horizontal = pattern(&[(3, 4), (4, 4), (5, 4)]);
        let vertical = pattern(&[(4, 3), (4, 4), (4, 5)]);

        let next = next_generation(&horizontal, capacity);
        assert_eq!(next, vertical);
        assert_eq!(next_generation(&next, capacity), horizontal);
    }

    #[test]
    fn block_is_still() {
        let capacity = Capacity::new(10, 10);
        let block = pattern(&[(1, 1), (2, 1), (1, 2), (2, 2)]);
        assert_eq!(next_generation(&block, capacity), block);
    }

    #[test]
    fn lonely_cells_die() {
        let capacity = Capacity::new(10, 10);
        assert!(next_generation(&pattern(&[(5, 5)]), capacity).is_empty());
        assert!(next_generation(&pattern(&[(5, 5), (6, 5)]), capacity).is_empty());
    }

    #[test]
    fn overcrowded_cell_dies() {
        let capacity = Capacity::new(10, 10);
        let plus = pattern(&[(5, 5), (4, 5), (6, 5), (5, 4), (5, 6)]);
        let next = next_generation(&plus, capacity);
        assert!(!next.contains(5, 5));
    }

    #[test]
    fn glider_keeps_its_shape() {
        let capacity = Capacity::new(20, 20);
        let mut glider = pattern(&[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
        for _ in 0..4 {
            glider = next_generation(&glider, capacity);
            assert_eq!(glider.len(), 5);
        }
        // after 4 generations it moved one cell down and right
        assert_eq!(glider, pattern(&[(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)]));
    }

    #[test]
    fn edges_are_dead() {
        // A blinker along the left edge cannot grow into negative columns.
        let capacity = Capacity::new(5, 5);
        let vertical = pattern(&[(0, 1), (0, 2), (0, 3)]);
        let next = next_generation(&vertical, capacity);
        assert_eq!(next, pattern(&[(0, 2), (1, 2)]));

        // A blinker on the last row cannot grow below the grid.
        let horizontal = pattern(&[(1, 4), (2, 4), (3, 4)]);
        let next = next_generation(&horizontal, capacity);
        assert_eq!(next, pattern(&[(2, 3), (2, 4)]));
    }
}
