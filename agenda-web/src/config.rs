//! Frontend configuration module
//!
//! Settings are baked in at compile time through `option_env!` so a single
//! static bundle can be pointed at a different backend by rebuilding.

const DEFAULT_API_BASE_URL: &str = "/api";
const DEFAULT_APP_TITLE: &str = "Agenda Admin";
const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

/// Frontend configuration for API location, branding and logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Base URL every API path is joined to
    pub api_base_url: String,
    /// Title shown in the header
    pub app_title: String,
    /// Most verbose level forwarded to the browser console
    pub log_level: log::Level,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("AGENDA_API_BASE_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            app_title: option_env!("AGENDA_APP_TITLE")
                .unwrap_or(DEFAULT_APP_TITLE)
                .to_string(),
            log_level: parse_log_level(option_env!("AGENDA_LOG_LEVEL")),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the API base URL
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Get the application title
    pub fn app_title(&self) -> &str {
        &self.app_title
    }
}

fn parse_log_level(value: Option<&str>) -> log::Level {
    value
        .and_then(|level| level.parse().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}
