use super::App;
use crate::{with_delimiters, Config, Event};
use eframe::egui::{
    pos2, vec2, Context, Pos2, Rect, Response, RichText, Sense, Stroke, TopBottomPanel, Ui, Vec2,
};

impl App {
    pub(super) fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    pub(super) fn draw_status_bar(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let state = self.game.state();
                ui.label(Self::new_text(state.label()).strong());
                ui.separator();
                ui.label(Self::new_text(&format!(
                    "Generation: {}",
                    with_delimiters(self.game.generation())
                )));
                ui.separator();
                ui.label(Self::new_text(&format!(
                    "Population: {}",
                    with_delimiters(self.game.board().population() as u64)
                )));
                ui.separator();
                let capacity = self.game.board().capacity();
                ui.label(Self::new_text(&format!(
                    "Board: {}x{} ({} cells)",
                    capacity.columns,
                    capacity.rows,
                    with_delimiters(capacity.area())
                )));
                if state.is_running() {
                    ui.separator();
                    ui.label(Self::new_text(&format!(
                        "{:.1} moves/s",
                        self.game.move_rate()
                    )));
                }
            });
        });
    }

    /// Turns pointer interaction with the canvas into board events.
    fn handle_pointer(&mut self, response: &Response) {
        let Some(pos) = response.interact_pointer_pos() else {
            return;
        };
        let offset = pos - response.rect.min;
        let (x, y) = (offset.x.floor() as i32, offset.y.floor() as i32);

        if response.drag_started() {
            self.dispatch(Event::PointerPressed { x, y });
        }
        if response.dragged() {
            self.dispatch(Event::PointerDragged { x, y });
        }
        if response.drag_stopped() || response.clicked() {
            self.dispatch(Event::PointerReleased { x, y });
        }
    }

    fn draw_cells(&self, ui: &Ui, origin: Pos2) {
        let painter = ui.painter();
        let viewport = self.game.board().viewport();
        let side = Vec2::splat(viewport.cell_size() as f32);
        for cell in self.game.board().cells().iter() {
            let (px, py) = viewport.cell_to_pixel(cell);
            let min = origin + vec2(px as f32, py as f32);
            painter.rect_filled(Rect::from_min_size(min, side), 0., Config::CELL_COLOR);
        }
    }

    fn draw_grid_lines(&self, ui: &Ui, origin: Pos2) {
        let painter = ui.painter();
        let board = self.game.board();
        let viewport = board.viewport();
        let capacity = board.capacity();
        if capacity.is_empty() {
            return;
        }
        let stroke = Stroke::new(Config::GRID_STROKE_WIDTH, Config::GRID_COLOR);

        let start = viewport.grid_origin() as f32;
        let step = viewport.cell_size() as f32;
        let (width, height) = viewport.grid_size(capacity);
        let (left, top) = (origin.x + start, origin.y + start);
        let (right, bottom) = (left + width as f32, top + height as f32);

        for i in 0..=capacity.columns {
            let x = left + i as f32 * step;
            painter.line_segment([pos2(x, top), pos2(x, bottom)], stroke);
        }
        for i in 0..=capacity.rows {
            let y = top + i as f32 * step;
            painter.line_segment([pos2(left, y), pos2(right, y)], stroke);
        }
    }

    pub(super) fn draw_board(&mut self, ui: &mut Ui) {
        let response = ui.allocate_response(ui.available_size(), Sense::click_and_drag());
        let rect = response.rect;

        // the board must know its capacity before any cell is added or drawn
        self.track_canvas_size(rect.width().max(0.) as u32, rect.height().max(0.) as u32);
        self.handle_pointer(&response);

        self.draw_cells(ui, rect.min);
        self.draw_grid_lines(ui, rect.min);
    }
}
