// Intake module
// Conversation, contact and service-address records collected by the wizard

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::availability::AvailabilityInterval;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Client,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub from: Speaker,
    pub text: String,
}

impl Message {
    pub fn client(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            from: Speaker::Client,
            text: text.into(),
        }
    }

    pub fn assistant(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            from: Speaker::Assistant,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DwellingType {
    #[default]
    Appartement,
    Maison,
}

impl fmt::Display for DwellingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DwellingType::Appartement => write!(f, "Appartement"),
            DwellingType::Maison => write!(f, "Maison"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Parking {
    #[default]
    Oui,
    Non,
}

impl fmt::Display for Parking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parking::Oui => write!(f, "Oui"),
            Parking::Non => write!(f, "Non"),
        }
    }
}

/// Where the intervention takes place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationForm {
    pub number: String,
    pub street: String,
    pub postal_code: String,
    pub city: String,
    #[serde(rename = "type")]
    pub dwelling: DwellingType,
    pub floor: String,
    pub access_code1: String,
    pub access_code2: String,
    pub notes: String,
    pub parking: Parking,
}

/// Everything the wizard hands to the submission service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeRequest {
    pub messages: Vec<Message>,
    pub contact: Contact,
    pub location: LocationForm,
    pub availabilities: Vec<AvailabilityInterval>,
}

impl IntakeRequest {
    /// Latest thing the client typed, which is what the artisan reads as the problem statement.
    pub fn last_client_message(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.from == Speaker::Client)
            .map(|m| m.text.as_str())
    }
}
