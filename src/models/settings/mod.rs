// Settings module
// Application configuration persisted as TOML

use serde::{Deserialize, Serialize};

use crate::models::grid::GridConfig;

pub const DEFAULT_CHAT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4.1-mini";
pub const DEFAULT_CHAT_MAX_TOKENS: u32 = 200;
pub const DEFAULT_SENDGRID_URL: &str = "https://api.sendgrid.com/v3/mail/send";
pub const DEFAULT_ARTISAN_NAME: &str = "Bob";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatSettings {
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CHAT_BASE_URL.to_string(),
            model: DEFAULT_CHAT_MODEL.to_string(),
            max_tokens: DEFAULT_CHAT_MAX_TOKENS,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailSettings {
    pub sendgrid_url: String,
    pub timeout_secs: u64,
}

impl Default for MailSettings {
    fn default() -> Self {
        Self {
            sendgrid_url: DEFAULT_SENDGRID_URL.to_string(),
            timeout_secs: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Name shown wherever the UI refers to the tradesperson.
    pub artisan_name: String,
    pub grid: GridConfig,
    pub chat: ChatSettings,
    pub mail: MailSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            artisan_name: DEFAULT_ARTISAN_NAME.to_string(),
            grid: GridConfig::default(),
            chat: ChatSettings::default(),
            mail: MailSettings::default(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        self.grid.validate()?;

        if self.artisan_name.trim().is_empty() {
            return Err("Artisan name cannot be empty".to_string());
        }

        if !self.chat.base_url.starts_with("http") {
            return Err(format!("Invalid chat base URL '{}'", self.chat.base_url));
        }

        if self.chat.max_tokens == 0 {
            return Err("Chat max_tokens must be positive".to_string());
        }

        if !self.mail.sendgrid_url.starts_with("https://") {
            return Err("Mail delivery URL must use HTTPS".to_string());
        }

        Ok(())
    }
}
