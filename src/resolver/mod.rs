pub mod types;

pub use types::{ProviderInfo, ResolutionRules, ResolvedModel, RuleEntry};

use crate::config::Config;
use crate::error::ResolveError;
use crate::llm::build_client;
use reqwest::Client;
use tracing::info;

const FETCH_TIMEOUT_SECS: u64 = 10;

/// Resolves which model to use for a given use case by fetching the
/// remote rules document. One fetch per call; no retries, no caching —
/// concurrent CI runs that race a rules update may resolve differently,
/// which is accepted.
pub struct ModelResolver {
    rules_url: String,
    client: Client,
}

impl ModelResolver {
    pub fn new(config: &Config) -> Self {
        Self {
            rules_url: config.rules_url.clone(),
            client: build_client(FETCH_TIMEOUT_SECS),
        }
    }

    pub async fn resolve(
        &self,
        use_case: &str,
        module: &str,
        importance: &str,
    ) -> Result<ResolvedModel, ResolveError> {
        let response = self
            .client
            .get(&self.rules_url)
            .send()
            .await
            .map_err(|error| ResolveError::Fetch(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::Fetch(format!("HTTP {status}")));
        }

        let rules: ResolutionRules = response
            .json()
            .await
            .map_err(|error| ResolveError::Fetch(format!("invalid rules document: {error}")))?;

        let entry = rules
            .rules
            .get(use_case)
            .ok_or_else(|| ResolveError::RuleNotFound {
                use_case: use_case.to_string(),
            })?;

        let model = entry
            .provider
            .model
            .as_deref()
            .map(str::trim)
            .filter(|model| !model.is_empty())
            .ok_or_else(|| ResolveError::MissingModel {
                use_case: use_case.to_string(),
            })?
            .to_string();

        info!(use_case, model = %model, "resolved model");

        Ok(ResolvedModel {
            provider: entry.provider.clone(),
            model,
            module: module.to_string(),
            importance: importance.to_string(),
        })
    }
}
