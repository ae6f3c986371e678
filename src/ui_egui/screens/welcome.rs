use egui::RichText;

pub fn render_welcome(ui: &mut egui::Ui, artisan_name: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.15);
        ui.label(RichText::new("👨‍🔧").size(56.0));
        ui.add_space(16.0);
        ui.label(RichText::new("Bonjour ! Moi, c’est Bob.").size(20.0).strong());
        ui.add_space(8.0);
        ui.label(format!("Je prépare votre intervention pour {}.", artisan_name));
        ui.add_space(12.0);
        ui.label(
            "En 2–3 min, on clarifie votre problème, puis je prends vos \
             coordonnées et disponibilités.",
        );
        ui.add_space(12.0);
        ui.label(format!(
            "Ensuite, {} vous rappelle pour confirmer la date.",
            artisan_name
        ));
        ui.add_space(16.0);
        ui.label(RichText::new("On y va ?").size(17.0));
    });
}
