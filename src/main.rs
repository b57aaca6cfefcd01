#![warn(clippy::all)]

use life_board::{window_icon, App, Config};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    use eframe::egui::{vec2, ViewportBuilder};

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let [width, height] = Config::WINDOW_SIZE;
    let [min_width, min_height] = Config::MIN_WINDOW_SIZE;
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(Config::WINDOW_TITLE)
            .with_inner_size(vec2(width, height))
            .with_min_inner_size(vec2(min_width, min_height))
            .with_icon(window_icon()),
        centered: true,
        ..Default::default()
    };
    tracing::info!("opening the board window");
    eframe::run_native(
        Config::WINDOW_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(App::new(&cc.egui_ctx)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run the window: {err}"))
}
