use eframe::egui::Color32;
use std::num::NonZeroU32;

pub struct Config;

impl Config {
    pub const WINDOW_TITLE: &'static str = "Conway's Game of Life";
    pub const WINDOW_SIZE: [f32; 2] = [800., 600.];
    pub const MIN_WINDOW_SIZE: [f32; 2] = [400., 400.];

    /// Side of one cell in pixels.
    pub const CELL_SIZE: NonZeroU32 = match NonZeroU32::new(10) {
        Some(size) => size,
        None => panic!("cell size must be positive"),
    };
    /// Cells reserved on every side of the playable grid for the boundary.
    pub const BORDER_CELLS: u32 = 1;

    pub const DEFAULT_MOVES_PER_SECOND: u32 = 3;

    pub const BACKGROUND_COLOR: Color32 = Color32::WHITE;
    pub const CELL_COLOR: Color32 = Color32::BLUE;
    pub const GRID_COLOR: Color32 = Color32::BLACK;
    pub const GRID_STROKE_WIDTH: f32 = 1.;

    pub const TEXT_SIZE: f32 = 14.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const DIALOG_WIDTH: f32 = 300.;

    /// Weight of the newest sample in the smoothed move rate.
    pub const RATE_SMOOTHING: f64 = 0.1;

    /// Side of the generated window icon in pixels.
    pub const ICON_SIZE: u32 = 32;

    /// Repository shown in the Source dialog, when the package records one.
    pub fn source_url() -> Option<&'static str> {
        option_env!("CARGO_PKG_REPOSITORY").filter(|url| !url.is_empty())
    }
}
