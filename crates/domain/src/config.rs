//! Application configuration structures
//!
//! Loaded by `paneboard-infra::config` from the environment or a TOML/JSON
//! file and passed explicitly to every collaborator at construction time.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BUSINESS_NAME, DEFAULT_CALENDAR_ID, DEFAULT_MAX_RESULTS, DEFAULT_TIMEZONE,
    DEFAULT_UNREAD_QUERY,
};
use crate::types::extraction::{ConfidenceModel, ExtractionStrategy};

pub const DEFAULT_BIND: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const GMAIL_API_BASE: &str = "https://gmail.googleapis.com/gmail/v1";
pub const CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";
pub const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Root configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub openai: Option<OpenAiConfig>,
    pub google: GoogleConfig,
    #[serde(default)]
    pub gmail: GmailConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
    pub datastore: DatastoreConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind(), port: default_port() }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

/// Which extractor the API uses and how confidence is scored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    #[serde(default)]
    pub strategy: ExtractionStrategy,
    #[serde(default)]
    pub confidence_model: ConfidenceModel,
}

/// OpenAI structured-completion settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    pub api_key: String,
    #[serde(default = "default_openai_model")]
    pub model: String,
    #[serde(default = "default_openai_url")]
    pub api_url: String,
}

/// OAuth client credentials shared by the Gmail and Calendar adapters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleConfig {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
    #[serde(default = "default_token_url")]
    pub token_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GmailConfig {
    #[serde(default = "default_gmail_base")]
    pub api_base: String,
    #[serde(default = "default_unread_query")]
    pub query: String,
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    /// Address used in the `From` header of customer notifications.
    #[serde(default)]
    pub sender_address: Option<String>,
}

impl Default for GmailConfig {
    fn default() -> Self {
        Self {
            api_base: default_gmail_base(),
            query: default_unread_query(),
            max_results: default_max_results(),
            sender_address: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    #[serde(default = "default_calendar_base")]
    pub api_base: String,
    #[serde(default = "default_calendar_id")]
    pub calendar_id: String,
    /// IANA timezone used to interpret scheduled dates and times.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            api_base: default_calendar_base(),
            calendar_id: default_calendar_id(),
            timezone: default_timezone(),
        }
    }
}

/// Hosted row store (Supabase PostgREST)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatastoreConfig {
    pub url: String,
    pub service_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_business_name")]
    pub business_name: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { business_name: default_business_name() }
    }
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_openai_model() -> String {
    DEFAULT_OPENAI_MODEL.to_string()
}

fn default_openai_url() -> String {
    OPENAI_API_URL.to_string()
}

fn default_token_url() -> String {
    GOOGLE_TOKEN_URL.to_string()
}

fn default_gmail_base() -> String {
    GMAIL_API_BASE.to_string()
}

fn default_unread_query() -> String {
    DEFAULT_UNREAD_QUERY.to_string()
}

fn default_max_results() -> u32 {
    DEFAULT_MAX_RESULTS
}

fn default_calendar_base() -> String {
    CALENDAR_API_BASE.to_string()
}

fn default_calendar_id() -> String {
    DEFAULT_CALENDAR_ID.to_string()
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

fn default_business_name() -> String {
    DEFAULT_BUSINESS_NAME.to_string()
}
