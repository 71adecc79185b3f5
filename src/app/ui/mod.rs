// src/app/ui/mod.rs
pub mod form_panel;
pub mod grid;
pub mod topbar;

use eframe::egui as eg;

impl crate::app::MovieDeskApp {
    pub(crate) fn ui_render_loading(&self, ui: &mut eg::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.add(eg::Spinner::new().size(24.0));
            ui.label("Loading...");
        });
    }

    pub(crate) fn ui_render_error_banner(&mut self, ui: &mut eg::Ui) {
        let Some(message) = self.movies.error().map(str::to_owned) else {
            return;
        };
        let err_color = ui.visuals().error_fg_color;

        ui.add_space(4.0);
        eg::Frame::none()
            .fill(err_color.gamma_multiply(0.15))
            .stroke(eg::Stroke::new(1.0, err_color))
            .rounding(6.0)
            .inner_margin(eg::Margin::symmetric(10.0, 6.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(err_color, message);
                    ui.with_layout(eg::Layout::right_to_left(eg::Align::Center), |ui| {
                        if ui.small_button("×").on_hover_text("Close").clicked() {
                            self.movies.dismiss_error();
                        }
                    });
                });
            });
        ui.add_space(4.0);
    }
}
