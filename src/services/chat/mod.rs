// Chat service
// Relays the conversation to an OpenAI-compatible chat-completions endpoint

use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::models::intake::{Message, Speaker};
use crate::models::settings::ChatSettings;
use crate::services::error::IntakeError;

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

pub const FALLBACK_REPLY: &str = "Désolé, je n’ai pas réussi à répondre.";
pub const UNAVAILABLE_REPLY: &str =
    "Je rencontre un problème pour répondre, pouvez-vous réessayer dans un instant ?";
pub const UNREACHABLE_REPLY: &str =
    "Je n’arrive pas à joindre le serveur pour l’instant. Merci de réessayer un peu plus tard.";

const SYSTEM_PROMPT: &str = "\
Tu es {artisan}, un assistant technique pour des artisans du bâtiment (plombier, électricien, serrurier, chauffagiste, menuisier…).

Ton rôle :
- parler simplement, comme un artisan sympa, direct, humain
- ne jamais donner de solution technique détaillée ni de diagnostic final
- ton but est de poser les bonnes questions pour préparer l’intervention
- tu cherches uniquement :
  • le symptôme précis
  • la localisation
  • depuis quand / évolution
  • signes visibles (eau, bruit, odeur, voyant…)
  • l’environnement (autre prise, autre robinet…)
  • accessibilité
  • type de logement
- une seule question à la fois
- style simple
";

/// Messages the assistant opens every conversation with.
pub fn greeting_messages() -> Vec<Message> {
    vec![
        Message::assistant(1, "Dites-moi ce qui se passe."),
        Message::assistant(2, "Si vous pouvez envoyer une photo, c’est encore mieux."),
        Message::assistant(3, "Pas d’inquiétude, ça sera rapide."),
    ]
}

/// What the assistant says when a turn could not be answered.
pub fn failure_reply(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<IntakeError>() {
        Some(IntakeError::Transport(_)) => UNREACHABLE_REPLY,
        _ => UNAVAILABLE_REPLY,
    }
}

/// Anything that can answer the next turn of the conversation.
#[cfg_attr(test, mockall::automock)]
pub trait ChatBackend: Send + Sync {
    fn reply(&self, history: &[Message]) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

pub struct ChatService {
    client: Client,
    settings: ChatSettings,
    api_key: String,
    system_prompt: String,
}

impl ChatService {
    pub fn new(settings: ChatSettings, api_key: impl Into<String>, artisan_name: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .context("Failed to build chat HTTP client")?;

        Ok(Self {
            client,
            settings,
            api_key: api_key.into(),
            system_prompt: SYSTEM_PROMPT.replace("{artisan}", artisan_name),
        })
    }

    /// Build from settings, reading the API key from the environment.
    pub fn from_env(settings: ChatSettings, artisan_name: &str) -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| IntakeError::MissingConfig(API_KEY_ENV.to_string()))?;
        Self::new(settings, api_key, artisan_name)
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.settings.base_url.trim_end_matches('/'))
    }

    fn build_request<'a>(&'a self, history: &'a [Message]) -> CompletionRequest<'a> {
        build_completion_request(&self.settings, &self.system_prompt, history)
    }
}

fn build_completion_request<'a>(
    settings: &'a ChatSettings,
    system_prompt: &'a str,
    history: &'a [Message],
) -> CompletionRequest<'a> {
    let mut messages = Vec::with_capacity(history.len() + 1);
    messages.push(ChatMessage {
        role: "system",
        content: system_prompt,
    });
    messages.extend(history.iter().map(|m| ChatMessage {
        role: match m.from {
            Speaker::Client => "user",
            Speaker::Assistant => "assistant",
        },
        content: &m.text,
    }));

    CompletionRequest {
        model: &settings.model,
        messages,
        max_tokens: settings.max_tokens,
    }
}

fn extract_reply(response: CompletionResponse) -> String {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
        .unwrap_or_else(|| FALLBACK_REPLY.to_string())
}

impl ChatBackend for ChatService {
    fn reply(&self, history: &[Message]) -> Result<String> {
        log::info!("Sending {} chat messages to {}", history.len(), self.settings.model);

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&self.build_request(history))
            .send()
            .map_err(IntakeError::from)
            .context("Network error during chat request")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(anyhow!(IntakeError::HttpStatus {
                status: status.as_u16(),
                message: body,
            }));
        }

        let parsed: CompletionResponse = response
            .json()
            .map_err(IntakeError::from)
            .context("Failed to decode chat completion")?;

        Ok(extract_reply(parsed))
    }
}
