//! Errors surfaced to the user by the chat and submission services.

use thiserror::Error;

use crate::services::validation::ValidationErrors;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntakeError {
    /// A required environment variable or setting is absent.
    #[error("Missing configuration: {0}")]
    MissingConfig(String),

    /// Contact or location failed field validation.
    #[error("Validation failed ({} contact, {} location field errors)", .contact.len(), .location.len())]
    Validation {
        contact: ValidationErrors,
        location: ValidationErrors,
    },

    /// The remote service answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// The request never got an answer (DNS, TLS, timeout...).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The remote service answered with something we could not read.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl IntakeError {
    /// French copy shown in the UI.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingConfig(_) => {
                "Configuration email manquante côté serveur. Contactez l’administrateur.".to_string()
            }
            Self::Validation { .. } => "Validation échouée".to_string(),
            Self::HttpStatus { .. } | Self::InvalidResponse(_) => {
                "Une erreur est survenue lors de l’envoi de votre demande.".to_string()
            }
            Self::Transport(_) => {
                "Impossible de contacter le serveur. Merci de réessayer plus tard.".to_string()
            }
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::HttpStatus { status: 500..=599, .. })
    }
}

impl From<reqwest::Error> for IntakeError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::HttpStatus {
                status: status.as_u16(),
                message: err.to_string(),
            };
        }
        if err.is_decode() {
            return Self::InvalidResponse(err.to_string());
        }
        Self::Transport(err.to_string())
    }
}
