//! Chat Completions wire types for the scheduling extractor

use paneboard_domain::PaneboardError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// OpenAI API error types
#[derive(Debug, thiserror::Error)]
pub enum OpenAIError {
    /// Connection failed, timed out, or the body could not be read
    #[error("Network error: {0}")]
    Network(String),

    /// OpenAI API returned an error response
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Rate limit exceeded; retry after the given number of seconds
    #[error("Rate limit exceeded (retry after {0}s)")]
    RateLimit(u64),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Completion carried no function call payload
    #[error("Completion did not include extracted scheduling info")]
    MissingFunctionCall,

    /// Response or function arguments don't match the expected schema
    #[error("Invalid response schema: {0}")]
    InvalidSchema(String),
}

impl From<OpenAIError> for PaneboardError {
    fn from(err: OpenAIError) -> Self {
        match err {
            OpenAIError::Network(_) | OpenAIError::RateLimit(_) | OpenAIError::Api { .. } => {
                Self::Network(err.to_string())
            }
            OpenAIError::Authentication(_) => Self::Auth(err.to_string()),
            OpenAIError::MissingFunctionCall | OpenAIError::InvalidSchema(_) => {
                Self::ExtractionUnavailable(err.to_string())
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub tools: Vec<Tool>,
    pub tool_choice: ToolChoice,
    pub temperature: f32,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct Tool {
    #[serde(rename = "type")]
    pub tool_type: String,
    pub function: FunctionDefinition,
}

#[derive(Debug, Serialize)]
pub(crate) struct FunctionDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// Forces the model to answer through one named function
#[derive(Debug, Serialize)]
pub(crate) struct ToolChoice {
    #[serde(rename = "type")]
    pub tool_type: String,
    pub function: FunctionName,
}

#[derive(Debug, Serialize)]
pub(crate) struct FunctionName {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Choice {
    pub message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AssistantMessage {
    #[serde(default)]
    pub tool_calls: Vec<ToolCall>,
    /// Legacy `functions` API shape
    #[serde(default)]
    pub function_call: Option<FunctionCall>,
}

impl AssistantMessage {
    /// Raw JSON arguments of the first function call, in either API shape.
    pub fn arguments(&self) -> Option<&str> {
        self.tool_calls
            .first()
            .map(|call| call.function.arguments.as_str())
            .or_else(|| self.function_call.as_ref().map(|call| call.arguments.as_str()))
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ToolCall {
    pub function: FunctionCall,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FunctionCall {
    pub arguments: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Arguments of `extractSchedulingInfo`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SchedulingInfo {
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub preferred_date: Option<String>,
    #[serde(default)]
    pub alternative_dates: Option<Vec<String>>,
    #[serde(default)]
    pub notes: Option<String>,
}
