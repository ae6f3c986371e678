// Submission service
// Validates an intake request and delivers it to the artisan by email

use reqwest::blocking::Client;
use serde::Serialize;
use std::time::Duration;

use crate::models::intake::IntakeRequest;
use crate::models::settings::MailSettings;
use crate::services::email;
use crate::services::error::IntakeError;
use crate::services::validation::{validate_contact, validate_location};

pub const SENDGRID_API_KEY_ENV: &str = "SENDGRID_API_KEY";
pub const SENDGRID_FROM_ENV: &str = "SENDGRID_FROM";
pub const SENDGRID_TO_ENV: &str = "SENDGRID_TO";

/// Anything that can hand a finished request over to the artisan.
#[cfg_attr(test, mockall::automock)]
pub trait RequestSubmitter: Send + Sync {
    fn submit(&self, request: &IntakeRequest) -> Result<(), IntakeError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailCredentials {
    pub api_key: String,
    pub from: String,
    pub to: String,
}

impl MailCredentials {
    /// Reads the SendGrid environment. The recipient defaults to the sender.
    pub fn from_env() -> Option<Self> {
        let read = |name: &str| {
            std::env::var(name)
                .ok()
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_key = read(SENDGRID_API_KEY_ENV)?;
        let from = read(SENDGRID_FROM_ENV)?;
        let to = read(SENDGRID_TO_ENV).unwrap_or_else(|| from.clone());

        Some(Self { api_key, from, to })
    }
}

#[derive(Debug, Serialize, PartialEq)]
struct Address {
    email: String,
}

#[derive(Debug, Serialize, PartialEq)]
struct Personalization {
    to: Vec<Address>,
}

#[derive(Debug, Serialize, PartialEq)]
struct Content {
    #[serde(rename = "type")]
    mime: &'static str,
    value: String,
}

#[derive(Debug, Serialize, PartialEq)]
struct MailMessage {
    personalizations: Vec<Personalization>,
    from: Address,
    subject: String,
    content: Vec<Content>,
}

/// Checks the request the way the receiving side would, then renders the email.
fn prepare(
    request: &IntakeRequest,
    credentials: Option<&MailCredentials>,
    artisan_name: &str,
) -> Result<MailMessage, IntakeError> {
    let contact = validate_contact(&request.contact);
    let location = validate_location(&request.location);
    if !contact.is_empty() || !location.is_empty() {
        return Err(IntakeError::Validation { contact, location });
    }

    let credentials = credentials.ok_or_else(|| {
        log::error!("Mail delivery is not configured ({} / {})", SENDGRID_API_KEY_ENV, SENDGRID_FROM_ENV);
        IntakeError::MissingConfig(SENDGRID_API_KEY_ENV.to_string())
    })?;

    Ok(MailMessage {
        personalizations: vec![Personalization {
            to: vec![Address {
                email: credentials.to.clone(),
            }],
        }],
        from: Address {
            email: credentials.from.clone(),
        },
        subject: email::build_subject(request),
        content: vec![
            Content {
                mime: "text/plain",
                value: email::build_email_text(request, artisan_name),
            },
            Content {
                mime: "text/html",
                value: email::build_email_html(request, artisan_name),
            },
        ],
    })
}

pub struct SendGridSubmitter {
    client: Client,
    url: String,
    credentials: Option<MailCredentials>,
    artisan_name: String,
}

impl SendGridSubmitter {
    pub fn new(
        settings: &MailSettings,
        credentials: Option<MailCredentials>,
        artisan_name: impl Into<String>,
    ) -> anyhow::Result<Self> {
        use anyhow::Context;

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .context("Failed to build mail HTTP client")?;

        Ok(Self {
            client,
            url: settings.sendgrid_url.clone(),
            credentials,
            artisan_name: artisan_name.into(),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }
}

impl RequestSubmitter for SendGridSubmitter {
    fn submit(&self, request: &IntakeRequest) -> Result<(), IntakeError> {
        let message = prepare(request, self.credentials.as_ref(), &self.artisan_name)?;
        let api_key = self
            .credentials
            .as_ref()
            .map(|c| c.api_key.as_str())
            .unwrap_or_default();

        log::info!(
            "Submitting intake request with {} availability intervals",
            request.availabilities.len()
        );

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .json(&message)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            log::error!("Mail delivery failed with HTTP {}: {}", status, body);
            return Err(IntakeError::HttpStatus {
                status: status.as_u16(),
                message: body,
            });
        }

        log::info!("Intake request delivered");
        Ok(())
    }
}
