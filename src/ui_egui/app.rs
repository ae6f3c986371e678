mod background;
mod lifecycle;
mod toast;

use anyhow::anyhow;
use std::sync::Arc;

use self::background::BackgroundTasks;
use self::toast::ToastManager;
use crate::models::settings::Settings;
use crate::services::chat::{ChatBackend, API_KEY_ENV};
use crate::services::error::IntakeError;
use crate::services::submission::{RequestSubmitter, SENDGRID_API_KEY_ENV};
use crate::services::wizard::{WizardController, WizardStep};
use crate::ui_egui::screens::availability::{render_availability, GridPointer};
use crate::ui_egui::screens::chat::render_chat;
use crate::ui_egui::screens::confirmation::render_confirmation;
use crate::ui_egui::screens::contact::render_contact;
use crate::ui_egui::screens::location::render_location;
use crate::ui_egui::screens::welcome::render_welcome;
use crate::ui_egui::screens::ScreenAction;
use crate::ui_egui::widgets::{form_header, primary_button};
use crate::utils::date;

pub struct IntakeApp {
    settings: Settings,
    wizard: WizardController,
    /// `None` when no API key is configured
    chat_backend: Option<Arc<dyn ChatBackend>>,
    submitter: Option<Arc<dyn RequestSubmitter>>,
    tasks: BackgroundTasks,
    chat_input: String,
    grid_pointer: GridPointer,
    toast_manager: ToastManager,
}

impl eframe::App for IntakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_background();

        let step = self.wizard.step();
        let mut action = ScreenAction::None;

        if matches!(
            step,
            WizardStep::Contact | WizardStep::Location | WizardStep::Availability
        ) {
            egui::TopBottomPanel::top("wizard_header")
                .show_separator_line(false)
                .show(ctx, |ui| {
                    ui.add_space(8.0);
                    if form_header(ui, step.title(), step.previous().is_some()) {
                        action = ScreenAction::Back;
                    }
                });
        }

        egui::TopBottomPanel::bottom("wizard_footer")
            .show_separator_line(false)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                let (label, enabled, primary) = self.primary_button_for(step);
                if primary_button(ui, label, enabled).clicked() {
                    action = primary;
                }
                ui.add_space(8.0);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let screen_action = self.render_screen(ui, step);
            if screen_action != ScreenAction::None {
                action = screen_action;
            }
        });

        self.toast_manager.render(ctx);
        self.apply(ctx, action);
    }
}

impl IntakeApp {
    fn primary_button_for(&self, step: WizardStep) -> (&'static str, bool, ScreenAction) {
        match step {
            WizardStep::Welcome => ("Commencer", true, ScreenAction::Start),
            WizardStep::Chat => ("Suivant", !self.wizard.is_awaiting_reply(), ScreenAction::FinishChat),
            WizardStep::Contact => ("Suivant", true, ScreenAction::SubmitContact),
            WizardStep::Location => ("Suivant", true, ScreenAction::SubmitLocation),
            WizardStep::Availability => {
                let label = if self.wizard.is_submitting() {
                    "Envoi…"
                } else {
                    "Envoyer"
                };
                (label, !self.wizard.is_submitting(), ScreenAction::SubmitRequest)
            }
            WizardStep::Confirmation => ("Fermer", true, ScreenAction::Reset),
        }
    }

    fn render_screen(&mut self, ui: &mut egui::Ui, step: WizardStep) -> ScreenAction {
        let artisan_name = self.settings.artisan_name.as_str();

        match step {
            WizardStep::Welcome => {
                render_welcome(ui, artisan_name);
                ScreenAction::None
            }
            WizardStep::Chat => render_chat(
                ui,
                self.wizard.messages(),
                self.wizard.is_awaiting_reply(),
                &mut self.chat_input,
                artisan_name,
            ),
            WizardStep::Contact => {
                render_contact(ui, &mut self.wizard);
                ScreenAction::None
            }
            WizardStep::Location => {
                render_location(ui, &mut self.wizard);
                ScreenAction::None
            }
            WizardStep::Availability => {
                if let Some(grid) = self.wizard.grid_mut() {
                    render_availability(ui, grid, &mut self.grid_pointer);
                }
                ScreenAction::None
            }
            WizardStep::Confirmation => {
                render_confirmation(ui, artisan_name);
                ScreenAction::None
            }
        }
    }

    fn poll_background(&mut self) {
        if let Some(reply) = self.tasks.poll_chat() {
            self.wizard.finish_chat_turn(reply);
        }

        if let Some(result) = self.tasks.poll_submission() {
            match self.wizard.finish_submission(result) {
                Ok(()) => self.toast_manager.success("Demande envoyée"),
                Err(err) => {
                    if err.is_retryable() {
                        log::warn!("Submission failed, the client may retry: {}", err);
                    } else {
                        log::error!("Submission rejected: {}", err);
                    }
                    self.toast_manager.error(err.user_message());
                }
            }
        }
    }

    fn apply(&mut self, ctx: &egui::Context, action: ScreenAction) {
        match action {
            ScreenAction::None => {}
            ScreenAction::Start => self.wizard.start(),
            ScreenAction::SendMessage => self.send_message(ctx),
            ScreenAction::FinishChat => self.wizard.finish_chat(),
            ScreenAction::SubmitContact => {
                self.wizard.submit_contact();
            }
            ScreenAction::SubmitLocation => {
                if self.wizard.submit_location(date::today()) {
                    self.grid_pointer.reset();
                }
            }
            ScreenAction::SubmitRequest => self.submit_request(ctx),
            ScreenAction::Back => self.wizard.back(),
            ScreenAction::Reset => {
                self.tasks.cancel();
                self.chat_input.clear();
                self.grid_pointer.reset();
                self.toast_manager.clear();
                self.wizard.reset();
            }
        }
    }

    fn send_message(&mut self, ctx: &egui::Context) {
        let Some(history) = self.wizard.begin_chat_turn(&self.chat_input) else {
            return;
        };
        self.chat_input.clear();

        match &self.chat_backend {
            Some(backend) => self.tasks.spawn_chat(ctx, Arc::clone(backend), history),
            None => self
                .wizard
                .finish_chat_turn(Err(anyhow!(IntakeError::MissingConfig(API_KEY_ENV.to_string())))),
        }
    }

    fn submit_request(&mut self, ctx: &egui::Context) {
        let Some(request) = self.wizard.begin_submission() else {
            return;
        };

        match &self.submitter {
            Some(submitter) => self.tasks.spawn_submission(ctx, Arc::clone(submitter), request),
            None => {
                let result = self
                    .wizard
                    .finish_submission(Err(IntakeError::MissingConfig(SENDGRID_API_KEY_ENV.to_string())));
                if let Err(err) = result {
                    self.toast_manager.error(err.user_message());
                }
            }
        }
    }
}
