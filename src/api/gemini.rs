//! Gemini API client for the AI study assistant.
//!
//! Thin wrapper over the `generateContent` endpoint. Prompt construction
//! (system prompt plus task context) happens in the `ai` command; this
//! module only speaks the wire format.

use crate::libs::config::ConfigModule;
use crate::libs::messages::Message;
use crate::libs::secret::Secret;
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const SECRET_FILE: &str = ".gemini_api_key";
const API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-pro";
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiSystemInstruction>,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiSystemInstruction {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
    error: Option<GeminiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContentResponse,
}

#[derive(Debug, Deserialize)]
struct GeminiContentResponse {
    parts: Vec<GeminiPartResponse>,
}

#[derive(Debug, Deserialize)]
struct GeminiPartResponse {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetail {
    message: String,
}

/// Gemini module configuration stored in the application config file.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GeminiConfig {
    /// Model name, e.g. "gemini-pro"
    pub model: String,
}

impl GeminiConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "gemini".to_string(),
            name: "Gemini AI".to_string(),
        }
    }

    /// Runs an interactive configuration setup for the Gemini assistant.
    ///
    /// Prompts for the model name and stores the API key through encrypted
    /// secret storage rather than the config file.
    pub fn init(config: &Option<GeminiConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or(Self {
            model: DEFAULT_MODEL.to_string(),
        });

        msg_print!(Message::ConfigModuleGemini);

        let model = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptGeminiModel.to_string())
            .default(config.model)
            .interact_text()?;

        // Prompt for the key up front so the first `tsk ai` call works
        Self::secret().get_or_prompt()?;

        Ok(Self { model })
    }

    fn secret() -> Secret {
        Secret::new(SECRET_FILE, &Message::PromptGeminiApiKey.to_string())
    }
}

#[derive(Debug)]
pub struct Gemini {
    client: Client,
    config: GeminiConfig,
}

impl Gemini {
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS)).build()?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Sends a single-turn generation request and returns the reply text.
    pub async fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let api_key = GeminiConfig::secret().get_or_prompt()?;
        let url = format!("{}/models/{}:generateContent?key={}", API_URL, self.config.model, api_key);

        let body = GeminiRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiPart {
                    text: user_prompt.to_string(),
                }],
            }],
            system_instruction: if system_prompt.is_empty() {
                None
            } else {
                Some(GeminiSystemInstruction {
                    parts: vec![GeminiPart {
                        text: system_prompt.to_string(),
                    }],
                })
            },
        };

        let response = self.client.post(url).json(&body).send().await?;
        let response: GeminiResponse = response.json().await?;

        if let Some(error) = response.error {
            msg_bail_anyhow!(Message::AiRequestFailed(error.message));
        }

        let text = response
            .candidates
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            msg_bail_anyhow!(Message::AiEmptyReply);
        }
        Ok(text)
    }
}
