// src/app/ui/topbar.rs
use eframe::egui as eg;

use crate::app::filters::collect_genres;

impl crate::app::MovieDeskApp {
    // ---------- TOP BAR ----------
    pub(crate) fn ui_render_topbar(&mut self, ui: &mut eg::Ui) {
        ui.horizontal(|ui| {
            ui.heading(self.config.window_title.as_str());
            ui.separator();

            let total = self.movies.movies().len();
            ui.label(match total {
                1 => "1 movie".to_string(),
                n => format!("{n} movies"),
            });

            ui.separator();

            // Genre filter (view-only)
            let genres = collect_genres(self.movies.movies());
            eg::ComboBox::from_id_source("genre_filter_combo")
                .selected_text(self.genre_filter.as_deref().unwrap_or("All genres"))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.genre_filter, None, "All genres");
                    for g in genres {
                        let label = g.clone();
                        ui.selectable_value(&mut self.genre_filter, Some(g), label);
                    }
                });

            ui.separator();

            let reload = ui
                .add_enabled(!self.movies.is_loading(), eg::Button::new("Reload"))
                .on_hover_text("Fetch the list from the server again");
            if reload.clicked() {
                self.request_load();
            }
        });
    }
}
