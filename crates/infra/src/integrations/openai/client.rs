/// LLM-backed field extraction through OpenAI function calling
use async_trait::async_trait;
use paneboard_core::{finish_extraction, FieldExtractor};
use paneboard_domain::{
    ConfidenceModel, ExtractedFields, Extraction, ExtractionRequest, ExtractionStrategy,
    OpenAiConfig, PaneboardError, Result,
};
use reqwest::Method;
use serde_json::json;
use tracing::{debug, info};

use crate::http::HttpClient;

use super::types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, FunctionDefinition, FunctionName,
    OpenAIError, SchedulingInfo, Tool, ToolChoice,
};

pub(crate) const FUNCTION_NAME: &str = "extractSchedulingInfo";
const DEFAULT_TEMPERATURE: f32 = 0.0;
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

const SYSTEM_PROMPT: &str = "You are a helpful assistant that extracts scheduling information \
from emails for a window cleaning business. Extract ONLY the information requested in the \
schema. If information is missing, leave the field empty or null. For dates, convert them to \
YYYY-MM-DD format if possible.";

/// Extracts customer fields by forcing a single `extractSchedulingInfo` call
pub struct OpenAIExtractor {
    http_client: HttpClient,
    api_key: String,
    model: String,
    api_url: String,
    confidence_model: ConfidenceModel,
}

impl OpenAIExtractor {
    pub fn new(http_client: HttpClient, config: &OpenAiConfig) -> Self {
        Self {
            http_client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            api_url: config.api_url.clone(),
            confidence_model: ConfidenceModel::default(),
        }
    }

    pub fn with_confidence_model(mut self, model: ConfidenceModel) -> Self {
        self.confidence_model = model;
        self
    }

    /// Ask the model for raw fields, without the shared finishing step.
    pub async fn extract_fields(
        &self,
        request: &ExtractionRequest,
    ) -> std::result::Result<ExtractedFields, OpenAIError> {
        let payload = self.build_request(request);

        let builder = self
            .http_client
            .request(Method::POST, &self.api_url)
            .bearer_auth(&self.api_key)
            .json(&payload);

        let response = self.http_client.send(builder).await.map_err(|err| match err {
            PaneboardError::Network(msg) | PaneboardError::Internal(msg) => {
                OpenAIError::Network(msg)
            }
            other => OpenAIError::Network(format!("HTTP error: {other}")),
        })?;

        let status = response.status();
        debug!(status = status.as_u16(), "Received OpenAI API response");

        if !status.is_success() {
            return Err(handle_error_status(status.as_u16(), response).await);
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| OpenAIError::InvalidSchema(format!("Failed to parse response: {e}")))?;

        if let Some(usage) = &completion.usage {
            info!(
                tokens = usage.total_tokens,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "OpenAI extraction complete"
            );
        }

        let arguments = completion
            .choices
            .first()
            .and_then(|choice| choice.message.arguments())
            .ok_or(OpenAIError::MissingFunctionCall)?;

        let info: SchedulingInfo = serde_json::from_str(arguments).map_err(|e| {
            OpenAIError::InvalidSchema(format!("Failed to parse function arguments: {e}"))
        })?;

        Ok(ExtractedFields {
            customer_name: info.customer_name,
            phone: info.phone,
            email: info.email,
            address: info.address,
            service: info.service,
            requested_date: info.preferred_date,
            alternative_dates: info.alternative_dates.unwrap_or_default(),
            notes: info.notes,
            needs_estimate: false,
        })
    }

    fn build_request(&self, request: &ExtractionRequest) -> ChatCompletionRequest {
        let mut prompt = String::from("Extract scheduling information from this email:\n\n");
        if let Some(from) = request.from() {
            prompt.push_str(&format!("From: {from}\n"));
        }
        if !request.subject().is_empty() {
            prompt.push_str(&format!("Subject: {}\n", request.subject()));
        }
        prompt.push('\n');
        prompt.push_str(&request.body_text);

        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage { role: "system".to_string(), content: SYSTEM_PROMPT.to_string() },
                ChatMessage { role: "user".to_string(), content: prompt },
            ],
            tools: vec![Tool {
                tool_type: "function".to_string(),
                function: FunctionDefinition {
                    name: FUNCTION_NAME.to_string(),
                    description: "Extract scheduling information from an email".to_string(),
                    parameters: scheduling_schema(),
                },
            }],
            tool_choice: ToolChoice {
                tool_type: "function".to_string(),
                function: FunctionName { name: FUNCTION_NAME.to_string() },
            },
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

#[async_trait]
impl FieldExtractor for OpenAIExtractor {
    fn strategy(&self) -> ExtractionStrategy {
        ExtractionStrategy::Llm
    }

    async fn extract(&self, request: &ExtractionRequest) -> Result<Extraction> {
        let fields = self.extract_fields(request).await?;
        Ok(finish_extraction(fields, request, self.confidence_model, ExtractionStrategy::Llm))
    }
}

fn scheduling_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "customerName": { "type": "string", "description": "Full name of the customer" },
            "phone": { "type": "string", "description": "Customer phone number" },
            "email": { "type": "string", "description": "Customer email address" },
            "address": { "type": "string", "description": "Service address" },
            "service": {
                "type": "string",
                "description": "Type of service requested (e.g. window cleaning, gutter cleaning)"
            },
            "preferredDate": {
                "type": "string",
                "description": "Preferred date for the service in YYYY-MM-DD format"
            },
            "alternativeDates": {
                "type": "array",
                "items": { "type": "string" },
                "description": "Alternative dates in YYYY-MM-DD format"
            },
            "notes": { "type": "string", "description": "Any additional notes or special requests" }
        },
        "required": ["customerName", "phone", "email", "address", "service", "preferredDate"]
    })
}

async fn handle_error_status(status: u16, response: reqwest::Response) -> OpenAIError {
    let retry_after = response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok());
    let message = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

    match status {
        401 | 403 => OpenAIError::Authentication(format!("Invalid API key ({status})")),
        429 => OpenAIError::RateLimit(retry_after.unwrap_or(DEFAULT_RETRY_AFTER_SECS)),
        _ => OpenAIError::Api { status, message },
    }
}
