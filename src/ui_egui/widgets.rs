//! Small form widgets shared by the wizard screens.

use egui::{Color32, RichText, Stroke};

pub const ERROR_COLOR: Color32 = Color32::from_rgb(220, 38, 38);
const BORDER_COLOR: Color32 = Color32::from_rgb(212, 212, 216);

/// Options for [`text_field`].
#[derive(Default)]
pub struct FieldOptions<'a> {
    pub placeholder: &'a str,
    pub error: Option<&'a str>,
    /// Strip everything but ASCII digits as the user types.
    pub numeric: bool,
    pub max_len: Option<usize>,
    pub multiline: bool,
}

/// Labelled text input with the field's error underneath.
///
/// Returns true when the value changed this frame.
pub fn text_field(ui: &mut egui::Ui, label: &str, value: &mut String, options: FieldOptions) -> bool {
    let mut changed = false;

    ui.vertical(|ui| {
        ui.label(RichText::new(label).small().strong());

        let border = if options.error.is_some() {
            ERROR_COLOR
        } else {
            BORDER_COLOR
        };
        ui.scope(|ui| {
            ui.visuals_mut().widgets.inactive.bg_stroke = Stroke::new(1.0, border);
            ui.visuals_mut().widgets.hovered.bg_stroke = Stroke::new(1.0, border);

            let edit = if options.multiline {
                egui::TextEdit::multiline(value).desired_rows(3)
            } else {
                egui::TextEdit::singleline(value)
            };
            let response = ui.add(
                edit.hint_text(options.placeholder)
                    .desired_width(f32::INFINITY),
            );
            changed = response.changed();
        });

        if changed {
            if options.numeric {
                value.retain(|c| c.is_ascii_digit());
            }
            if let Some(max_len) = options.max_len {
                if let Some((cut, _)) = value.char_indices().nth(max_len) {
                    value.truncate(cut);
                }
            }
        }

        if let Some(error) = options.error {
            ui.label(RichText::new(error).small().color(ERROR_COLOR));
        }
    });

    changed
}

/// Row of mutually exclusive choices.
pub fn radio_row<T: PartialEq + Copy>(ui: &mut egui::Ui, label: &str, value: &mut T, choices: &[(T, &str)]) {
    ui.vertical(|ui| {
        ui.label(RichText::new(label).small().strong());
        ui.horizontal(|ui| {
            for (choice, text) in choices {
                ui.radio_value(value, *choice, *text);
            }
        });
    });
}

/// Title bar of the form screens, with an optional back arrow.
///
/// Returns true when the back arrow was clicked.
pub fn form_header(ui: &mut egui::Ui, title: &str, show_back: bool) -> bool {
    let mut back = false;
    ui.horizontal(|ui| {
        if show_back {
            back = ui
                .add(egui::Button::new(RichText::new("←").size(18.0)).frame(false))
                .on_hover_text("Retour")
                .clicked();
        }
        ui.label(RichText::new(title).size(18.0).strong());
    });
    back
}

/// Full-width dark call-to-action button.
pub fn primary_button(ui: &mut egui::Ui, text: &str, enabled: bool) -> egui::Response {
    let button = egui::Button::new(RichText::new(text).color(Color32::WHITE).strong())
        .fill(Color32::BLACK)
        .rounding(8.0)
        .min_size(egui::vec2(ui.available_width(), 40.0));
    ui.add_enabled(enabled, button)
}
