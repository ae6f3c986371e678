use super::background::BackgroundTasks;
use super::toast::ToastManager;
use super::IntakeApp;
use crate::models::settings::Settings;
use crate::services::chat::{ChatBackend, ChatService};
use crate::services::settings::SettingsService;
use crate::services::submission::{MailCredentials, RequestSubmitter, SendGridSubmitter};
use crate::services::wizard::WizardController;
use crate::ui_egui::screens::availability::GridPointer;
use std::sync::Arc;

impl IntakeApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        let settings = load_settings();
        log::info!(
            "Loaded settings: artisan={}, grid={}h-{}h every {} min over {} days",
            settings.artisan_name,
            settings.grid.start_hour,
            settings.grid.end_hour,
            settings.grid.slot_minutes,
            settings.grid.day_count
        );

        let chat_backend = build_chat_backend(&settings);
        let submitter = build_submitter(&settings);

        let mut toast_manager = ToastManager::new();
        if chat_backend.is_none() {
            toast_manager.info("Assistant indisponible : la discussion fonctionnera en mode dégradé.");
        }

        Self {
            wizard: WizardController::new(settings.grid),
            settings,
            chat_backend,
            submitter,
            tasks: BackgroundTasks::default(),
            chat_input: String::new(),
            grid_pointer: GridPointer::default(),
            toast_manager,
        }
    }
}

fn load_settings() -> Settings {
    match SettingsService::from_project_dirs() {
        Some(service) => {
            log::info!("Reading settings from {}", service.path().display());
            service.load_or_default()
        }
        None => {
            log::warn!("No config directory on this platform; using default settings");
            Settings::default()
        }
    }
}

fn build_chat_backend(settings: &Settings) -> Option<Arc<dyn ChatBackend>> {
    match ChatService::from_env(settings.chat.clone(), &settings.artisan_name) {
        Ok(service) => Some(Arc::new(service)),
        Err(err) => {
            log::warn!("Chat assistant disabled: {:#}", err);
            None
        }
    }
}

fn build_submitter(settings: &Settings) -> Option<Arc<dyn RequestSubmitter>> {
    let credentials = MailCredentials::from_env();
    if credentials.is_none() {
        log::warn!("Mail delivery is not configured; submissions will be refused");
    }

    match SendGridSubmitter::new(&settings.mail, credentials, settings.artisan_name.clone()) {
        Ok(submitter) => Some(Arc::new(submitter)),
        Err(err) => {
            log::error!("Could not set up mail delivery: {:#}", err);
            None
        }
    }
}
