// src/app/detail.rs
use eframe::egui as eg;

use crate::app::utils;

impl crate::app::MovieDeskApp {
    pub(crate) fn ui_render_detail_panel(&mut self, ctx: &eg::Context) {
        let Some(movie) = self.movies.selected().cloned() else {
            return;
        };
        let mut close = false;

        eg::SidePanel::right("detail_panel")
            .resizable(true)
            .default_width(320.0)
            .min_width(260.0)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    ui.heading("Details");
                    ui.with_layout(eg::Layout::right_to_left(eg::Align::Center), |ui| {
                        if ui.button("Close").clicked() {
                            close = true;
                        }
                    });
                });
                ui.separator();

                ui.heading(utils::title_line(&movie));
                ui.label(eg::RichText::new(utils::director_line(&movie)).weak());
                ui.add_space(6.0);

                eg::Grid::new("detail_fields")
                    .num_columns(2)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        ui.label("Id");
                        ui.monospace(movie.id.to_string());
                        ui.end_row();

                        ui.label("Genre");
                        ui.label(utils::genre_label(&movie));
                        ui.end_row();

                        ui.label("Released");
                        ui.label(utils::format_release_date(movie.release_date.as_deref()));
                        ui.end_row();
                    });

                ui.separator();
                ui.add(eg::Label::new(utils::description_text(&movie)).wrap());
            });

        if close {
            self.movies.close_details();
        }
    }
}
