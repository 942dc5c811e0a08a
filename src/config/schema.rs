use crate::error::ConfigError;
use serde::Serialize;

/// Environment variable carrying the bearer token for the inference call.
pub const TOKEN_VAR: &str = "GH_TOKEN";
/// Optional task text interpolated into the user prompt.
pub const INSTRUCTIONS_VAR: &str = "INSTRUCTIONS";
/// Optional override for the built-in system prompt.
pub const SYSTEM_PROMPT_VAR: &str = "SYSTEM_PROMPT";
/// Repository name, display only.
pub const REPO_VAR: &str = "REPO";
/// Optional override for the chat-completions endpoint.
pub const ENDPOINT_VAR: &str = "CONNAUDIT_ENDPOINT";
/// Optional override for the resolution-rules document URL.
pub const RULES_URL_VAR: &str = "CONNAUDIT_RULES_URL";

fn default_endpoint() -> String {
    "https://models.github.ai/inference/chat/completions".into()
}

fn default_rules_url() -> String {
    "https://raw.githubusercontent.com/connaudit/model-rules/main/config/resolution_rules.json"
        .into()
}

fn default_instructions() -> String {
    "Audit and improve this repository's connectivity based on connectivity.md.".into()
}

fn default_repo_label() -> String {
    "(unknown repo)".into()
}

/// Run configuration, built once at startup and passed by reference into
/// every component. No reusable function reads the process environment.
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Bearer token forwarded to the inference endpoint. Never printed.
    #[serde(skip)]
    pub token: String,
    pub instructions: String,
    pub system_prompt: Option<String>,
    pub repo: String,
    pub endpoint: String,
    pub rules_url: String,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// Fails with [`ConfigError::MissingToken`] before any network call
    /// when the bearer token is absent.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary key lookup. Values are
    /// trimmed; empty strings count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let token = get(TOKEN_VAR).ok_or(ConfigError::MissingToken(TOKEN_VAR))?;

        Ok(Self {
            token,
            instructions: get(INSTRUCTIONS_VAR).unwrap_or_else(default_instructions),
            system_prompt: get(SYSTEM_PROMPT_VAR),
            repo: get(REPO_VAR).unwrap_or_else(default_repo_label),
            endpoint: get(ENDPOINT_VAR).unwrap_or_else(default_endpoint),
            rules_url: get(RULES_URL_VAR).unwrap_or_else(default_rules_url),
        })
    }
}
