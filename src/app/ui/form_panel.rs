// src/app/ui/form_panel.rs
use eframe::egui as eg;
use egui_extras::DatePickerButton;

use crate::app::utils::parse_release_date;
use crate::app::FormField;

impl crate::app::MovieDeskApp {
    pub(crate) fn ui_render_form(&mut self, ui: &mut eg::Ui) {
        ui.add_space(6.0);
        ui.heading("Add New Movie");
        ui.separator();

        // Inputs are frozen while a create is in flight.
        let enabled = !self.form.is_submitting();
        let err_color = ui.visuals().error_fg_color;

        for field in FormField::ALL {
            ui.add_space(4.0);
            let label = if field == FormField::Title {
                format!("{} *", field.label())
            } else {
                field.label().to_string()
            };
            ui.label(eg::RichText::new(label).strong());

            let mut value = self.form.draft().get(field).to_string();
            let invalid = self.form.field_error(field).is_some();
            let changed = match field {
                FormField::ReleaseDate => release_date_input(ui, &mut value, enabled),
                FormField::Description => ui
                    .add_enabled(
                        enabled,
                        eg::TextEdit::multiline(&mut value)
                            .desired_rows(3)
                            .desired_width(f32::INFINITY),
                    )
                    .changed(),
                _ => {
                    let mut edit =
                        eg::TextEdit::singleline(&mut value).desired_width(f32::INFINITY);
                    if invalid {
                        edit = edit.text_color(err_color);
                    }
                    ui.add_enabled(enabled, edit).changed()
                }
            };
            if changed {
                self.form.update_field(field, value);
            }
            if let Some(err) = self.form.field_error(field) {
                ui.colored_label(err_color, err);
            }
        }

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if self.form.is_submitting() {
                ui.add(eg::Spinner::new().size(14.0));
            }
            let button = eg::Button::new(self.form.submit_label())
                .min_size(eg::vec2(ui.available_width(), 28.0));
            if ui.add_enabled(enabled, button).clicked() {
                self.request_submit();
            }
        });
    }
}

/// Text entry plus a calendar picker; both write `YYYY-MM-DD`.
fn release_date_input(ui: &mut eg::Ui, value: &mut String, enabled: bool) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        changed |= ui
            .add_enabled(
                enabled,
                eg::TextEdit::singleline(value)
                    .hint_text("YYYY-MM-DD")
                    .desired_width(110.0),
            )
            .changed();

        let mut picked =
            parse_release_date(value).unwrap_or_else(|| chrono::Local::now().date_naive());
        let picker = ui.add_enabled(
            enabled,
            DatePickerButton::new(&mut picked).id_source("release_date_picker"),
        );
        if picker.changed() {
            *value = picked.format("%Y-%m-%d").to_string();
            changed = true;
        }

        if !value.is_empty() && ui.add_enabled(enabled, eg::Button::new("Clear").small()).clicked() {
            value.clear();
            changed = true;
        }
    });
    changed
}
