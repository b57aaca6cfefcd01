use crate::{Cell, Config};
use eframe::egui::IconData;

/// Glider drawn in the board colours.
const GLIDER: [(u32, u32); 5] = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

/// Window icon: a glider on the board background, one grid of 3x3 cells
/// centered in a square of `Config::ICON_SIZE` pixels.
pub fn window_icon() -> IconData {
    let size = Config::ICON_SIZE;
    let cell_size = size / 4;
    let margin = (size - 3 * cell_size) / 2;

    let pixel = |x: u32, y: u32| {
        let inside = |p: u32| (margin..margin + 3 * cell_size).contains(&p);
        if !(inside(x) && inside(y)) {
            return Config::BACKGROUND_COLOR;
        }
        let cell = Cell::new((x - margin) / cell_size, (y - margin) / cell_size);
        if GLIDER.into_iter().map(Cell::from).any(|alive| alive == cell) {
            Config::CELL_COLOR
        } else {
            Config::BACKGROUND_COLOR
        }
    };

    let rgba = (0..size)
        .flat_map(|y| (0..size).map(move |x| (x, y)))
        .flat_map(|(x, y)| pixel(x, y).to_array())
        .collect();
    IconData {
        rgba,
        width: size,
        height: size,
    }
}
