use super::Dialogs;
use crate::{Board, Config, Event, Game, Viewport};
use eframe::egui::{CentralPanel, Context, Frame, Visuals};
use std::time::Instant;
use tracing::debug;

pub struct App {
    pub(super) game: Game,                     // Board, options and simulation state.
    pub(super) canvas_size: Option<[u32; 2]>, // Last canvas size in pixels, to detect resizes.
    pub(super) dialogs: Dialogs,              // Which pop-up windows are open.
}

impl App {
    pub fn new(ctx: &Context) -> Self {
        ctx.set_visuals(Visuals::light());
        Self {
            game: Game::new(Board::new(Viewport::default()), {
                let ctx = ctx.clone();
                move || ctx.request_repaint()
            }),
            canvas_size: None,
            dialogs: Dialogs::default(),
        }
    }

    pub(super) fn dispatch(&mut self, event: Event) {
        self.game.handle(event);
    }

    /// Emits a resize event when the canvas changed size since the last frame.
    pub(super) fn track_canvas_size(&mut self, width: u32, height: u32) {
        if self.canvas_size == Some([width, height]) {
            return;
        }
        debug!(width, height, "canvas resized");
        self.canvas_size = Some([width, height]);
        self.dispatch(Event::Resized { width, height });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.game.update(now);

        self.draw_menu_bar(ctx);
        self.draw_status_bar(ctx);
        self.draw_dialogs(ctx);

        CentralPanel::default()
            .frame(Frame::none().fill(Config::BACKGROUND_COLOR))
            .show(ctx, |ui| {
                self.draw_board(ui);
            });

        if self.game.take_redraw() {
            ctx.request_repaint();
        }
        if let Some(wait) = self.game.until_next_tick(now) {
            ctx.request_repaint_after(wait);
        }
    }
}
