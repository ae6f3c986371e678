use egui::RichText;

pub fn render_confirmation(ui: &mut egui::Ui, artisan_name: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.15);
        ui.label(RichText::new("✅").size(48.0));
        ui.add_space(12.0);
        ui.label(RichText::new("Merci, c’est bien envoyé !").size(18.0).strong());
        ui.add_space(12.0);
        ui.label(format!("{} a reçu votre demande avec :", artisan_name));
        ui.label("• votre description du problème,");
        ui.label("• vos coordonnées,");
        ui.label("• l’adresse du lieu d’intervention,");
        ui.label("• vos disponibilités.");
        ui.add_space(12.0);
        ui.label(format!(
            "{} vous recontactera pour confirmer la date d’intervention.",
            artisan_name
        ));
    });
}
