// Wizard service
// Step-by-step flow of an intake: chat, contact, location, availability

use chrono::NaiveDate;

use crate::models::grid::GridConfig;
use crate::models::intake::{Contact, IntakeRequest, LocationForm, Message};
use crate::services::availability::AvailabilityGrid;
use crate::services::chat::{self, ChatBackend};
use crate::services::error::IntakeError;
use crate::services::submission::RequestSubmitter;
use crate::services::validation::{validate_contact, validate_location, ValidationErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Welcome,
    Chat,
    Contact,
    Location,
    Availability,
    Confirmation,
}

impl WizardStep {
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Welcome => "Bienvenue",
            WizardStep::Chat => "Votre problème",
            WizardStep::Contact => "Contact",
            WizardStep::Location => "Lieu",
            WizardStep::Availability => "Disponibilités",
            WizardStep::Confirmation => "Demande envoyée",
        }
    }

    /// Form step the back button leads to, if the screen has one.
    pub fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Location => Some(WizardStep::Contact),
            WizardStep::Availability => Some(WizardStep::Location),
            _ => None,
        }
    }
}

pub struct WizardController {
    step: WizardStep,
    grid_config: GridConfig,
    messages: Vec<Message>,
    next_message_id: u64,
    awaiting_reply: bool,
    /// Bound directly to the contact form fields.
    pub contact: Contact,
    contact_errors: ValidationErrors,
    /// Bound directly to the location form fields.
    pub location: LocationForm,
    location_errors: ValidationErrors,
    grid: Option<AvailabilityGrid>,
    submitting: bool,
}

impl WizardController {
    pub fn new(grid_config: GridConfig) -> Self {
        let messages = chat::greeting_messages();
        let next_message_id = messages.iter().map(|m| m.id).max().unwrap_or(0) + 1;

        Self {
            step: WizardStep::Welcome,
            grid_config,
            messages,
            next_message_id,
            awaiting_reply: false,
            contact: Contact::default(),
            contact_errors: ValidationErrors::new(),
            location: LocationForm::default(),
            location_errors: ValidationErrors::new(),
            grid: None,
            submitting: false,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    fn go_to(&mut self, step: WizardStep) {
        if self.step != step {
            log::info!("Wizard step: {:?} -> {:?}", self.step, step);
            self.step = step;
        }
    }

    pub fn start(&mut self) {
        if self.step == WizardStep::Welcome {
            self.go_to(WizardStep::Chat);
        }
    }

    pub fn back(&mut self) {
        if let Some(previous) = self.step.previous() {
            self.go_to(previous);
        }
    }

    // --- chat ---

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_message_id;
        self.next_message_id += 1;
        id
    }

    /// Records the client's message and returns the history to send, or `None`
    /// when the text is blank or a reply is still pending.
    pub fn begin_chat_turn(&mut self, text: &str) -> Option<Vec<Message>> {
        let text = text.trim();
        if text.is_empty() || self.awaiting_reply {
            return None;
        }

        let id = self.next_id();
        self.messages.push(Message::client(id, text));
        self.awaiting_reply = true;
        Some(self.messages.clone())
    }

    /// Appends the assistant's answer, or an apology when the turn failed.
    pub fn finish_chat_turn(&mut self, reply: anyhow::Result<String>) {
        let text = match reply {
            Ok(text) => text,
            Err(err) => {
                log::error!("Chat turn failed: {:#}", err);
                chat::failure_reply(&err).to_string()
            }
        };

        let id = self.next_id();
        self.messages.push(Message::assistant(id, text));
        self.awaiting_reply = false;
    }

    /// Runs one chat turn synchronously against `backend`.
    pub fn send_message(&mut self, backend: &dyn ChatBackend, text: &str) -> bool {
        let Some(history) = self.begin_chat_turn(text) else {
            return false;
        };
        self.finish_chat_turn(backend.reply(&history));
        true
    }

    pub fn finish_chat(&mut self) {
        if self.step == WizardStep::Chat && !self.awaiting_reply {
            self.go_to(WizardStep::Contact);
        }
    }

    // --- forms ---

    pub fn contact_errors(&self) -> &ValidationErrors {
        &self.contact_errors
    }

    pub fn location_errors(&self) -> &ValidationErrors {
        &self.location_errors
    }

    /// Editing a field hides its stale message until the next submit.
    pub fn clear_contact_error(&mut self, field: &str) {
        self.contact_errors.remove(field);
    }

    pub fn clear_location_error(&mut self, field: &str) {
        self.location_errors.remove(field);
    }

    pub fn submit_contact(&mut self) -> bool {
        self.contact_errors = validate_contact(&self.contact);
        if !self.contact_errors.is_empty() {
            return false;
        }
        self.go_to(WizardStep::Location);
        true
    }

    /// Validates the address and opens the availability grid anchored on `today`.
    /// A grid from an earlier visit keeps its selection.
    pub fn submit_location(&mut self, today: NaiveDate) -> bool {
        self.location_errors = validate_location(&self.location);
        if !self.location_errors.is_empty() {
            return false;
        }

        if self.grid.is_none() {
            self.grid = Some(AvailabilityGrid::new(self.grid_config, today));
        }
        self.go_to(WizardStep::Availability);
        true
    }

    // --- availability and submission ---

    pub fn grid(&self) -> Option<&AvailabilityGrid> {
        self.grid.as_ref()
    }

    pub fn grid_mut(&mut self) -> Option<&mut AvailabilityGrid> {
        self.grid.as_mut()
    }

    pub fn build_request(&self) -> IntakeRequest {
        IntakeRequest {
            messages: self.messages.clone(),
            contact: self.contact.clone(),
            location: self.location.clone(),
            availabilities: self
                .grid
                .as_ref()
                .map(AvailabilityGrid::compile)
                .unwrap_or_default(),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Snapshot of the request to deliver, or `None` if not on the
    /// availability screen or a delivery is already running.
    pub fn begin_submission(&mut self) -> Option<IntakeRequest> {
        if self.step != WizardStep::Availability || self.submitting {
            return None;
        }
        self.submitting = true;
        Some(self.build_request())
    }

    /// Moves to the confirmation on success. Field errors reported by the
    /// receiving side are shown on the form they belong to.
    pub fn finish_submission(&mut self, result: Result<(), IntakeError>) -> Result<(), IntakeError> {
        self.submitting = false;

        match result {
            Ok(()) => {
                self.go_to(WizardStep::Confirmation);
                Ok(())
            }
            Err(IntakeError::Validation { contact, location }) => {
                let step = if !contact.is_empty() {
                    WizardStep::Contact
                } else {
                    WizardStep::Location
                };
                self.contact_errors = contact.clone();
                self.location_errors = location.clone();
                self.go_to(step);
                Err(IntakeError::Validation { contact, location })
            }
            Err(err) => {
                log::error!("Submission failed: {}", err);
                Err(err)
            }
        }
    }

    /// Delivers the request synchronously through `submitter`.
    pub fn submit(&mut self, submitter: &dyn RequestSubmitter) -> Option<Result<(), IntakeError>> {
        let request = self.begin_submission()?;
        let result = submitter.submit(&request);
        Some(self.finish_submission(result))
    }

    /// Back to a blank welcome screen for the next client.
    pub fn reset(&mut self) {
        log::info!("Wizard reset");
        *self = Self::new(self.grid_config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::grid::SlotId;
    use crate::models::intake::Speaker;
    use crate::services::availability::geometry::{GridGeometry, Point};
    use crate::services::availability::gesture::GridEvent;
    use crate::services::chat::{MockChatBackend, UNREACHABLE_REPLY};
    use crate::services::submission::MockRequestSubmitter;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 26).unwrap()
    }

    fn filled_wizard() -> WizardController {
        let mut wizard = WizardController::new(GridConfig::default());
        wizard.start();
        wizard.finish_chat();
        wizard.contact = Contact {
            last_name: "Martin".to_string(),
            first_name: "Claire".to_string(),
            email: "claire@example.fr".to_string(),
            phone: "0601020304".to_string(),
        };
        assert!(wizard.submit_contact());
        wizard.location = LocationForm {
            number: "8".to_string(),
            street: "rue Victor Hugo".to_string(),
            postal_code: "44000".to_string(),
            city: "Nantes".to_string(),
            ..Default::default()
        };
        assert!(wizard.submit_location(today()));
        wizard
    }

    fn book(wizard: &mut WizardController, slot: SlotId) {
        let geometry = GridGeometry::new(Point::default(), 50.0, 10.0, 48, 6);
        let grid = wizard.grid_mut().unwrap();
        grid.handle(GridEvent::PointerDown { slot }, &geometry);
        grid.handle(GridEvent::PointerUp, &geometry);
    }

    #[test]
    fn test_new_wizard_greets_the_client() {
        let wizard = WizardController::new(GridConfig::default());
        assert_eq!(wizard.step(), WizardStep::Welcome);
        assert_eq!(wizard.messages().len(), 3);
        assert!(wizard.grid().is_none());
    }

    #[test]
    fn test_chat_turn_appends_both_sides() {
        let mut backend = MockChatBackend::new();
        backend
            .expect_reply()
            .withf(|history| history.last().map(|m| m.text.as_str()) == Some("Mon robinet fuit"))
            .times(1)
            .returning(|_| Ok("Depuis quand ?".to_string()));

        let mut wizard = WizardController::new(GridConfig::default());
        wizard.start();
        assert!(wizard.send_message(&backend, "  Mon robinet fuit "));

        let messages = wizard.messages();
        assert_eq!(messages.len(), 5);
        assert_eq!(messages[3].from, Speaker::Client);
        assert_eq!(messages[3].id, 4);
        assert_eq!(messages[4].text, "Depuis quand ?");
        assert!(!wizard.is_awaiting_reply());
    }

    #[test]
    fn test_blank_message_is_not_sent() {
        let mut backend = MockChatBackend::new();
        backend.expect_reply().never();

        let mut wizard = WizardController::new(GridConfig::default());
        assert!(!wizard.send_message(&backend, "   "));
        assert_eq!(wizard.messages().len(), 3);
    }

    #[test]
    fn test_pending_reply_blocks_another_turn() {
        let mut wizard = WizardController::new(GridConfig::default());
        assert!(wizard.begin_chat_turn("Bonjour").is_some());
        assert!(wizard.begin_chat_turn("Vous êtes là ?").is_none());

        wizard.finish_chat_turn(Err(anyhow::anyhow!(IntakeError::Transport(
            "timeout".to_string()
        ))));
        assert_eq!(wizard.messages().last().unwrap().text, UNREACHABLE_REPLY);
        assert!(wizard.begin_chat_turn("Vous êtes là ?").is_some());
    }

    #[test]
    fn test_invalid_contact_stays_on_form() {
        let mut wizard = WizardController::new(GridConfig::default());
        wizard.start();
        wizard.finish_chat();
        assert_eq!(wizard.step(), WizardStep::Contact);

        assert!(!wizard.submit_contact());
        assert_eq!(wizard.step(), WizardStep::Contact);
        assert_eq!(wizard.contact_errors().len(), 4);

        wizard.clear_contact_error("email");
        assert_eq!(wizard.contact_errors().len(), 3);
    }

    #[test]
    fn test_back_keeps_grid_selection() {
        let mut wizard = filled_wizard();
        book(&mut wizard, SlotId::new(4, 0));

        wizard.back();
        assert_eq!(wizard.step(), WizardStep::Location);
        assert!(wizard.submit_location(today()));
        assert!(wizard.grid().unwrap().is_selected(SlotId::new(4, 0)));
    }

    #[test]
    fn test_successful_submission_reaches_confirmation() {
        let mut wizard = filled_wizard();
        book(&mut wizard, SlotId::new(4, 0));

        let mut submitter = MockRequestSubmitter::new();
        submitter
            .expect_submit()
            .withf(|request| request.availabilities.len() == 1 && request.messages.len() == 3)
            .times(1)
            .returning(|_| Ok(()));

        assert_eq!(wizard.submit(&submitter), Some(Ok(())));
        assert_eq!(wizard.step(), WizardStep::Confirmation);
        assert!(!wizard.is_submitting());
    }

    #[test]
    fn test_rejected_location_returns_to_form() {
        let mut wizard = filled_wizard();

        let mut submitter = MockRequestSubmitter::new();
        submitter.expect_submit().returning(|_| {
            let mut location = ValidationErrors::new();
            location.insert("city", "Ville requise".to_string());
            Err(IntakeError::Validation {
                contact: ValidationErrors::new(),
                location,
            })
        });

        let result = wizard.submit(&submitter).unwrap();
        assert!(matches!(result, Err(IntakeError::Validation { .. })));
        assert_eq!(wizard.step(), WizardStep::Location);
        assert_eq!(wizard.location_errors()["city"], "Ville requise");
    }

    #[test]
    fn test_submission_only_from_availability() {
        let mut wizard = WizardController::new(GridConfig::default());
        let mut submitter = MockRequestSubmitter::new();
        submitter.expect_submit().never();
        assert_eq!(wizard.submit(&submitter), None);
    }

    #[test]
    fn test_reset_starts_over() {
        let mut wizard = filled_wizard();
        wizard.reset();
        assert_eq!(wizard.step(), WizardStep::Welcome);
        assert_eq!(wizard.contact, Contact::default());
        assert!(wizard.grid().is_none());
    }
}
