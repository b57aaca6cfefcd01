use super::App;
use crate::{Config, Event, AUTOFILL_PERCENT_CHOICES, MOVES_PER_SECOND_CHOICES};
use eframe::egui::{Align2, Button, ComboBox, Context, Vec2, Window};

#[derive(Default)]
pub struct Dialogs {
    pub options: bool,
    pub autofill: bool,
    /// Selected percentage, starting from the last one used; `None` shows "Select".
    pub autofill_choice: Option<u8>,
    pub about: bool,
    pub source: bool,
}

fn dialog<'open>(title: &str) -> Window<'open> {
    Window::new(title)
        .collapsible(false)
        .resizable(false)
        .default_width(Config::DIALOG_WIDTH)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
}

impl App {
    fn draw_options_dialog(&mut self, ctx: &Context) {
        let mut open = self.dialogs.options;
        let mut moves = self.game.options().moves_per_second();
        dialog("Options").open(&mut open).show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Number of moves per second:");
                ComboBox::from_id_source("moves_per_second")
                    .selected_text(moves.to_string())
                    .show_ui(ui, |ui| {
                        for choice in MOVES_PER_SECOND_CHOICES {
                            ui.selectable_value(&mut moves, choice, choice.to_string());
                        }
                    });
            });
        });
        if moves != self.game.options().moves_per_second() {
            self.dispatch(Event::SetMovesPerSecond(moves));
        }
        self.dialogs.options = open;
    }

    fn draw_autofill_dialog(&mut self, ctx: &Context) {
        let mut open = self.dialogs.autofill;
        let previous = self.dialogs.autofill_choice;
        let mut choice = previous;
        let mut fill = false;
        dialog("Autofill").open(&mut open).show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("What percentage should be filled?");
                let text = choice.map_or_else(|| "Select".to_string(), |p| format!("{p}%"));
                ComboBox::from_id_source("autofill_percent")
                    .selected_text(text)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut choice, None, "Select");
                        for percent in AUTOFILL_PERCENT_CHOICES {
                            ui.selectable_value(&mut choice, Some(percent), format!("{percent}%"));
                        }
                    });
            });
            fill = ui.add_enabled(choice.is_some(), Button::new("Fill")).clicked();
        });
        // picking a new percentage fills right away, "Fill" repeats the current one
        if fill || (choice.is_some() && choice != previous) {
            if let Some(percent) = choice {
                self.dispatch(Event::Autofill(percent));
                open = false;
            }
        }
        self.dialogs.autofill = open;
        self.dialogs.autofill_choice = choice;
    }

    fn draw_about_dialog(&mut self, ctx: &Context) {
        dialog("About")
            .open(&mut self.dialogs.about)
            .show(ctx, |ui| {
                ui.label(Self::new_text(Config::WINDOW_TITLE).strong());
                ui.label("A cellular automaton devised by the mathematician John Conway.");
                ui.label("Click or drag on the grid to bring cells to life, then press Play.");
                ui.label("Live cells with two or three neighbours survive.");
                ui.label("Dead cells with exactly three neighbours are born.");
            });
    }

    fn draw_source_dialog(&mut self, ctx: &Context) {
        dialog("Source")
            .open(&mut self.dialogs.source)
            .show(ctx, |ui| {
                ui.label(format!(
                    "{} {}",
                    env!("CARGO_PKG_NAME"),
                    env!("CARGO_PKG_VERSION")
                ));
                ui.label("Written in Rust with eframe and egui.");
                match Config::source_url() {
                    Some(url) => {
                        ui.hyperlink(url);
                    }
                    None => {
                        ui.label("No source repository is recorded for this build.");
                    }
                }
            });
    }

    pub(super) fn draw_dialogs(&mut self, ctx: &Context) {
        self.draw_options_dialog(ctx);
        self.draw_autofill_dialog(ctx);
        self.draw_about_dialog(ctx);
        self.draw_source_dialog(ctx);
    }
}
