// src/app/ui/grid.rs
use eframe::egui as eg;

use crate::app::filters::filtered_indices;
use crate::app::types::CardAction;
use crate::app::utils;
use crate::app::Movie;

pub const H_SPACING: f32 = 8.0;
pub const V_SPACING: f32 = 10.0;
const CARD_W: f32 = 300.0;
const CARD_H: f32 = 170.0;

fn notice(ui: &mut eg::Ui, text: &str) {
    ui.add_space(12.0);
    eg::Frame::group(ui.style())
        .fill(ui.visuals().faint_bg_color)
        .show(ui, |ui| {
            ui.label(text);
        });
}

fn movie_card(ui: &mut eg::Ui, movie: &Movie, selected: bool) -> Option<CardAction> {
    let mut action = None;
    let stroke = if selected {
        eg::Stroke::new(2.0, eg::Color32::YELLOW)
    } else {
        ui.visuals().widgets.noninteractive.bg_stroke
    };
    let badge_bg = ui.visuals().selection.bg_fill;

    ui.allocate_ui_with_layout(
        eg::vec2(CARD_W, CARD_H),
        eg::Layout::top_down(eg::Align::Min),
        |ui| {
            ui.set_min_size(eg::vec2(CARD_W, CARD_H));
            eg::Frame::group(ui.style())
                .stroke(stroke)
                .rounding(6.0)
                .show(ui, |ui| {
                    ui.set_width(CARD_W - 16.0);
                    ui.horizontal(|ui| {
                        ui.label(eg::RichText::new(&movie.title).heading().strong());
                        ui.with_layout(eg::Layout::right_to_left(eg::Align::Center), |ui| {
                            let delete = eg::Button::new(
                                eg::RichText::new("Delete").color(eg::Color32::WHITE),
                            )
                            .fill(eg::Color32::from_rgb(200, 50, 50))
                            .small();
                            if ui.add(delete).clicked() {
                                action = Some(CardAction::Delete(movie.id));
                            }
                            if ui.small_button("Details").clicked() {
                                action = Some(CardAction::Details(movie.id));
                            }
                        });
                    });
                    ui.label(eg::RichText::new(utils::director_line(movie)).weak());
                    ui.horizontal(|ui| {
                        ui.label(
                            eg::RichText::new(utils::genre_label(movie))
                                .small()
                                .color(eg::Color32::WHITE)
                                .background_color(badge_bg),
                        );
                        ui.label(
                            eg::RichText::new(format!(
                                "Released: {}",
                                utils::format_release_date(movie.release_date.as_deref())
                            ))
                            .small()
                            .weak(),
                        );
                    });
                    ui.add_space(4.0);
                    ui.add(eg::Label::new(utils::description_text(movie)).wrap());
                });
        },
    );
    action
}

impl crate::app::MovieDeskApp {
    pub(crate) fn ui_render_movie_grid(&mut self, ui: &mut eg::Ui) {
        let movies = self.movies.movies();
        if movies.is_empty() {
            notice(ui, utils::EMPTY_LIST);
            return;
        }

        let indices = filtered_indices(movies, self.genre_filter.as_deref());
        if indices.is_empty() {
            notice(ui, "No movies match the selected genre.");
            return;
        }

        let selected_id = self.movies.selected().map(|m| m.id);
        let mut action = None;

        eg::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing = eg::vec2(H_SPACING, V_SPACING);
                    for &idx in &indices {
                        let movie = &movies[idx];
                        if let Some(a) = movie_card(ui, movie, selected_id == Some(movie.id)) {
                            action = Some(a);
                        }
                    }
                });
            });

        // Applied after painting so the list isn't borrowed while it changes.
        if let Some(a) = action {
            self.apply_card_action(a);
        }
    }
}
