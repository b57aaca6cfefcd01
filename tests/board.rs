#[cfg(test)]
mod tests {
    use life_board::{next_generation, Board, Capacity, Cell, CellSet, Viewport};
    use proptest::prelude::*;
    use std::num::NonZeroU32;

    const SEED: u64 = 42;

    fn board(width: u32, height: u32) -> Board {
        let mut board = Board::with_seed(Viewport::default(), SEED);
        board.resize(width, height);
        board
    }

    #[test]
    fn click_example() {
        let mut board = board(40, 50);
        assert_eq!(board.capacity(), Capacity::new(2, 3));
        assert_eq!(board.add_at_pixel(25, 35), Some(Cell::new(1, 2)));
        assert!(board.contains(1, 2));
    }

    #[test]
    fn random_fill_extremes() {
        let mut board = board(800, 600);
        assert_eq!(board.random_fill(0), 0);
        assert_eq!(board.population(), 0);

        board.random_fill(100);
        assert_eq!(board.population() as u64, board.capacity().area());
        assert_eq!(board.population(), 78 * 58);
    }

    #[test]
    fn seeded_fills_are_reproducible() {
        let mut a = board(300, 300);
        let mut b = board(300, 300);
        a.random_fill(30);
        b.random_fill(30);
        assert_eq!(a.cells(), b.cells());
    }

    proptest! {
        #[test]
        fn added_cells_are_contained(cells in prop::collection::vec((0u32..78, 0u32..58), 0..200)) {
            let mut board = board(800, 600);
            for &(x, y) in &cells {
                board.add(x, y);
                prop_assert!(board.contains(x, y));
            }
            let unique = cells.iter().copied().map(Cell::from).collect::<CellSet>();
            prop_assert_eq!(board.population(), unique.len());
        }

        #[test]
        fn add_is_idempotent(x in 0u32..78, y in 0u32..58) {
            let mut board = board(800, 600);
            board.add(x, y);
            let population = board.population();
            board.add(x, y);
            prop_assert_eq!(board.population(), population);
        }

        #[test]
        fn shrinking_leaves_no_cell_outside(
            percent in 0u8..=100,
            width in 0u32..800,
            height in 0u32..600,
        ) {
            let mut board = board(800, 600);
            board.random_fill(percent);
            let capacity = board.resize(width, height);
            for cell in board.cells().iter() {
                prop_assert!(cell.x < capacity.columns && cell.y < capacity.rows);
            }
        }

        #[test]
        fn pixel_to_cell_inverts_drawing(
            cell_size in (1u32..40).prop_map(|size| NonZeroU32::new(size).unwrap()),
            border in 0u32..4,
            x in 0u32..100,
            y in 0u32..100,
            dx in 0u32..40,
            dy in 0u32..40,
        ) {
            let viewport = Viewport::new(cell_size, border);
            let cell_size = cell_size.get();
            let capacity = Capacity::new(100, 100);
            let cell = Cell::new(x, y);
            let (px, py) = viewport.cell_to_pixel(cell);
            prop_assert_eq!(viewport.pixel_to_cell(px as i32, py as i32, capacity), Some(cell));

            // anywhere inside the drawn square maps back to the same cell
            let (dx, dy) = (dx % cell_size, dy % cell_size);
            prop_assert_eq!(
                viewport.pixel_to_cell((px + dx) as i32, (py + dy) as i32, capacity),
                Some(cell)
            );
        }

        #[test]
        fn generations_stay_on_the_board(
            cells in prop::collection::vec((0u32..20, 0u32..12), 0..120),
        ) {
            let capacity = Capacity::new(20, 12);
            let cells = cells.into_iter().map(Cell::from).collect::<CellSet>();
            let next = next_generation(&cells, capacity);
            prop_assert!(next.iter().all(|c| capacity.contains(c)));
        }
    }
}
