use crate::services::wizard::WizardController;
use crate::ui_egui::widgets::{text_field, FieldOptions};

pub fn render_contact(ui: &mut egui::Ui, wizard: &mut WizardController) {
    ui.add_space(12.0);

    let error = wizard.contact_errors().get("lastName").cloned();
    let options = FieldOptions {
        placeholder: "Dupont",
        error: error.as_deref(),
        ..Default::default()
    };
    if text_field(ui, "Nom", &mut wizard.contact.last_name, options) {
        wizard.clear_contact_error("lastName");
    }
    ui.add_space(8.0);

    let error = wizard.contact_errors().get("firstName").cloned();
    let options = FieldOptions {
        placeholder: "Jean",
        error: error.as_deref(),
        ..Default::default()
    };
    if text_field(ui, "Prénom", &mut wizard.contact.first_name, options) {
        wizard.clear_contact_error("firstName");
    }
    ui.add_space(8.0);

    let error = wizard.contact_errors().get("email").cloned();
    let options = FieldOptions {
        placeholder: "jean.dupont@email.com",
        error: error.as_deref(),
        ..Default::default()
    };
    if text_field(ui, "Email", &mut wizard.contact.email, options) {
        wizard.clear_contact_error("email");
    }
    ui.add_space(8.0);

    let error = wizard.contact_errors().get("phone").cloned();
    let options = FieldOptions {
        placeholder: "0612345678",
        error: error.as_deref(),
        numeric: true,
        max_len: Some(10),
        ..Default::default()
    };
    if text_field(ui, "Mobile", &mut wizard.contact.phone, options) {
        wizard.clear_contact_error("phone");
    }
}
