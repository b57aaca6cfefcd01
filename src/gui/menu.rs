use super::App;
use crate::Event;
use eframe::egui::{menu, Button, Context, TopBottomPanel, Ui, ViewportCommand};

impl App {
    fn draw_file_menu(&mut self, ui: &mut Ui) {
        if ui.button("Options").clicked() {
            self.dialogs.options = true;
            ui.close_menu();
        }
        ui.separator();
        if ui.button("Exit").clicked() {
            ui.ctx().send_viewport_cmd(ViewportCommand::Close);
        }
    }

    fn draw_game_menu(&mut self, ui: &mut Ui) {
        let state = self.game.state();

        if ui.button("Autofill").clicked() {
            self.dialogs.autofill = true;
            self.dialogs.autofill_choice = self.game.options().autofill_percent();
            ui.close_menu();
        }
        ui.separator();
        if ui.add_enabled(state.can_play(), Button::new("Play")).clicked() {
            self.dispatch(Event::Play);
            ui.close_menu();
        }
        if ui.add_enabled(state.can_stop(), Button::new("Stop")).clicked() {
            self.dispatch(Event::Stop);
            ui.close_menu();
        }
        if ui.button("Reset").clicked() {
            self.dispatch(Event::Reset);
            ui.close_menu();
        }
    }

    fn draw_help_menu(&mut self, ui: &mut Ui) {
        if ui.button("About").clicked() {
            self.dialogs.about = true;
            ui.close_menu();
        }
        if ui.button("Source").clicked() {
            self.dialogs.source = true;
            ui.close_menu();
        }
    }

    pub(super) fn draw_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| self.draw_file_menu(ui));
                ui.menu_button("Game", |ui| self.draw_game_menu(ui));
                ui.menu_button("Help", |ui| self.draw_help_menu(ui));
            });
        });
    }
}
