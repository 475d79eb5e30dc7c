use crate::models::{ChatMessage, ChatRequest, ChatResponse};
use crate::prompt::INSTRUCTIONS;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,
    #[error("completion request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("completion endpoint returned {0}")]
    BadStatus(reqwest::StatusCode),
    #[error("completion response contained no choices")]
    NoChoices,
}

// Client for an OpenAI-compatible chat completion endpoint
pub struct CompletionClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
    timeout: Duration,
}

impl CompletionClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key,
            model: model.into(),
            timeout,
        }
    }

    // One completion round trip: fixed system instruction plus the
    // assembled user input.
    pub async fn feedback(
        &self,
        input: String,
        temperature: Option<f32>,
    ) -> Result<String, CompletionError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(CompletionError::MissingApiKey)?;

        let payload = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(INSTRUCTIONS.as_str()),
                ChatMessage::user(input),
            ],
            temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .timeout(self.timeout)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CompletionError::BadStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(CompletionError::NoChoices)
    }
}
