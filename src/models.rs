use serde::{Deserialize, Serialize};

// Feedback request submitted by the form
#[derive(Deserialize, Serialize, Clone)]
pub struct SuggestionRequest {
    pub text: String,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub strands: Option<Vec<String>>,
    #[serde(default)]
    pub temperature: Option<f32>,
}

// Feedback response: the raw model output plus its numbered-list split
#[derive(Deserialize, Serialize, Clone)]
pub struct SuggestionResponse {
    pub suggestions: String,
    pub items: Vec<String>,
}

#[derive(Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// Chat completion API request format
#[derive(Deserialize, Serialize, Clone)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Deserialize, Serialize, Clone)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

// Chat completion API response format
#[derive(Deserialize, Serialize, Clone)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Deserialize, Serialize, Clone)]
pub struct ChatChoice {
    pub message: ChatMessage,
}
