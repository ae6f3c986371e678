// Artisan Intake Application
// Main entry point

use artisan_intake::ui_egui::IntakeApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Artisan Intake");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Demande d’intervention")
            .with_inner_size([420.0, 800.0])
            .with_min_inner_size([360.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Artisan Intake",
        options,
        Box::new(|cc| Ok(Box::new(IntakeApp::new(cc)))),
    )
}
