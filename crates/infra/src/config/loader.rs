//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Reads a `.env` file into the process environment when one exists
//! 2. Attempts to load from `PANEBOARD_*` environment variables
//! 3. If any required variable is missing, falls back to loading from file
//! 4. Probes multiple paths for config files (JSON and TOML)
//!
//! ## Environment Variables
//! Required:
//! - `PANEBOARD_GOOGLE_CLIENT_ID`, `PANEBOARD_GOOGLE_CLIENT_SECRET`,
//!   `PANEBOARD_GOOGLE_REFRESH_TOKEN`: OAuth client for Gmail and Calendar
//! - `PANEBOARD_DATASTORE_URL`, `PANEBOARD_DATASTORE_SERVICE_KEY`: row store
//!
//! Optional:
//! - `PANEBOARD_BIND`, `PANEBOARD_PORT`: HTTP listener
//! - `PANEBOARD_EXTRACTION_STRATEGY` (`rules` | `llm`)
//! - `PANEBOARD_CONFIDENCE_MODEL` (`weighted_required` | `required_fraction`)
//! - `PANEBOARD_OPENAI_API_KEY`, `PANEBOARD_OPENAI_MODEL`, `PANEBOARD_OPENAI_API_URL`
//! - `PANEBOARD_GOOGLE_TOKEN_URL`
//! - `PANEBOARD_GMAIL_API_BASE`, `PANEBOARD_GMAIL_QUERY`, `PANEBOARD_GMAIL_MAX_RESULTS`,
//!   `PANEBOARD_GMAIL_SENDER`
//! - `PANEBOARD_CALENDAR_API_BASE`, `PANEBOARD_CALENDAR_ID`, `PANEBOARD_TIMEZONE`
//! - `PANEBOARD_BUSINESS_NAME`
//!
//! ## File Locations
//! The loader searches the following paths (in order):
//! 1. `paneboard.{toml,json}` then `config.{toml,json}` in the working directory
//! 2. The same names in the parent and grandparent directories
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};
use std::str::FromStr;

use paneboard_domain::{
    CalendarConfig, Config, DatastoreConfig, ExtractionConfig, GmailConfig, GoogleConfig,
    NotificationConfig, OpenAiConfig, PaneboardError, Result, ServerConfig,
};

const CONFIG_FILE_NAMES: [&str; 4] =
    ["paneboard.toml", "paneboard.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `PaneboardError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<Config> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!(error = %err, "Ignoring unreadable .env file"),
    }

    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from the process environment
///
/// # Errors
/// Returns `PaneboardError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<Config> {
    load_from_lookup(|key| std::env::var(key).ok())
}

/// Load configuration from an arbitrary `PANEBOARD_*` key lookup
///
/// Blank values count as unset.
pub fn load_from_lookup<F>(lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
    let required = |key: &str| {
        get(key).ok_or_else(|| {
            PaneboardError::Config(format!("Missing required environment variable: {key}"))
        })
    };

    let google = GoogleConfig {
        client_id: required("PANEBOARD_GOOGLE_CLIENT_ID")?,
        client_secret: required("PANEBOARD_GOOGLE_CLIENT_SECRET")?,
        refresh_token: required("PANEBOARD_GOOGLE_REFRESH_TOKEN")?,
        token_url: get("PANEBOARD_GOOGLE_TOKEN_URL")
            .unwrap_or_else(|| paneboard_domain::config::GOOGLE_TOKEN_URL.to_string()),
    };
    let datastore = DatastoreConfig {
        url: required("PANEBOARD_DATASTORE_URL")?,
        service_key: required("PANEBOARD_DATASTORE_SERVICE_KEY")?,
    };

    let mut server = ServerConfig::default();
    if let Some(bind) = get("PANEBOARD_BIND") {
        server.bind = bind;
    }
    if let Some(port) = get("PANEBOARD_PORT") {
        server.port = parse_value("PANEBOARD_PORT", &port)?;
    }

    let mut extraction = ExtractionConfig::default();
    if let Some(strategy) = get("PANEBOARD_EXTRACTION_STRATEGY") {
        extraction.strategy = parse_value("PANEBOARD_EXTRACTION_STRATEGY", &strategy)?;
    }
    if let Some(model) = get("PANEBOARD_CONFIDENCE_MODEL") {
        extraction.confidence_model = parse_value("PANEBOARD_CONFIDENCE_MODEL", &model)?;
    }

    let openai = get("PANEBOARD_OPENAI_API_KEY").map(|api_key| OpenAiConfig {
        api_key,
        model: get("PANEBOARD_OPENAI_MODEL")
            .unwrap_or_else(|| paneboard_domain::config::DEFAULT_OPENAI_MODEL.to_string()),
        api_url: get("PANEBOARD_OPENAI_API_URL")
            .unwrap_or_else(|| paneboard_domain::config::OPENAI_API_URL.to_string()),
    });

    let mut gmail = GmailConfig::default();
    if let Some(base) = get("PANEBOARD_GMAIL_API_BASE") {
        gmail.api_base = base;
    }
    if let Some(query) = get("PANEBOARD_GMAIL_QUERY") {
        gmail.query = query;
    }
    if let Some(max) = get("PANEBOARD_GMAIL_MAX_RESULTS") {
        gmail.max_results = parse_value("PANEBOARD_GMAIL_MAX_RESULTS", &max)?;
    }
    gmail.sender_address = get("PANEBOARD_GMAIL_SENDER");

    let mut calendar = CalendarConfig::default();
    if let Some(base) = get("PANEBOARD_CALENDAR_API_BASE") {
        calendar.api_base = base;
    }
    if let Some(id) = get("PANEBOARD_CALENDAR_ID") {
        calendar.calendar_id = id;
    }
    if let Some(tz) = get("PANEBOARD_TIMEZONE") {
        calendar.timezone = tz;
    }

    let mut notifications = NotificationConfig::default();
    if let Some(name) = get("PANEBOARD_BUSINESS_NAME") {
        notifications.business_name = name;
    }

    Ok(Config { server, extraction, openai, google, gmail, calendar, datastore, notifications })
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>().map_err(|e| PaneboardError::Config(format!("Invalid {key}: {e}")))
}

/// Load configuration from a file
///
/// If `path` is `None`, searches multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `PaneboardError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(PaneboardError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => discover_config_path().ok_or_else(|| {
            PaneboardError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| PaneboardError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content, format chosen by extension.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| PaneboardError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| PaneboardError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(PaneboardError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the standard locations for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn discover_config_path() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.extend(cwd.ancestors().take(3).map(Path::to_path_buf));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
        }
    }

    search_roots(&roots)
}

fn search_roots(roots: &[PathBuf]) -> Option<PathBuf> {
    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.is_file())
}
