use crate::models::intake::{DwellingType, LocationForm, Parking};
use crate::services::wizard::WizardController;
use crate::ui_egui::widgets::{radio_row, text_field, FieldOptions};

const SHORT_FIELD_WIDTH: f32 = 80.0;

/// One address field, with its error shown and cleared on edit.
fn location_field(
    ui: &mut egui::Ui,
    wizard: &mut WizardController,
    key: &'static str,
    label: &str,
    options: FieldOptions,
    field: impl FnOnce(&mut LocationForm) -> &mut String,
) {
    let error = wizard.location_errors().get(key).cloned();
    let options = FieldOptions {
        error: error.as_deref(),
        ..options
    };
    if text_field(ui, label, field(&mut wizard.location), options) {
        wizard.clear_location_error(key);
    }
}

fn placeholder(text: &str) -> FieldOptions<'_> {
    FieldOptions {
        placeholder: text,
        ..Default::default()
    }
}

pub fn render_location(ui: &mut egui::Ui, wizard: &mut WizardController) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add_space(12.0);

            ui.horizontal_top(|ui| {
                ui.allocate_ui(egui::vec2(SHORT_FIELD_WIDTH, 0.0), |ui| {
                    location_field(ui, wizard, "number", "N°", placeholder("24"), |l| &mut l.number);
                });
                location_field(ui, wizard, "street", "Rue", placeholder("Rue de la Paix"), |l| {
                    &mut l.street
                });
            });
            ui.add_space(8.0);

            ui.horizontal_top(|ui| {
                ui.allocate_ui(egui::vec2(SHORT_FIELD_WIDTH, 0.0), |ui| {
                    let options = FieldOptions {
                        numeric: true,
                        max_len: Some(5),
                        ..placeholder("75010")
                    };
                    location_field(ui, wizard, "postalCode", "Code postal", options, |l| {
                        &mut l.postal_code
                    });
                });
                location_field(ui, wizard, "city", "Ville", placeholder("Paris"), |l| &mut l.city);
            });
            ui.add_space(8.0);

            radio_row(
                ui,
                "Logement",
                &mut wizard.location.dwelling,
                &[
                    (DwellingType::Appartement, "Appartement"),
                    (DwellingType::Maison, "Maison"),
                ],
            );
            ui.add_space(8.0);

            if wizard.location.dwelling == DwellingType::Appartement {
                let options = FieldOptions {
                    numeric: true,
                    ..placeholder("3")
                };
                location_field(ui, wizard, "floor", "Étage", options, |l| &mut l.floor);
                ui.add_space(8.0);
            }

            ui.columns(2, |columns| {
                location_field(
                    &mut columns[0],
                    wizard,
                    "accessCode1",
                    "Code d’accès 1",
                    placeholder("B12#"),
                    |l| &mut l.access_code1,
                );
                location_field(
                    &mut columns[1],
                    wizard,
                    "accessCode2",
                    "Code d’accès 2",
                    placeholder("1234"),
                    |l| &mut l.access_code2,
                );
            });
            ui.add_space(8.0);

            radio_row(
                ui,
                "Parking",
                &mut wizard.location.parking,
                &[(Parking::Oui, "Oui"), (Parking::Non, "Non")],
            );
            ui.add_space(8.0);

            let options = FieldOptions {
                multiline: true,
                ..placeholder("Interphone en panne, 3e étage sans ascenseur...")
            };
            location_field(ui, wizard, "notes", "Description additionnelle", options, |l| {
                &mut l.notes
            });
        });
}
