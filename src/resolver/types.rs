use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Remotely hosted mapping from use-case identifiers to provider/model
/// selections. Fetched fresh on every resolution; never persisted.
#[derive(Debug, Deserialize)]
pub struct ResolutionRules {
    #[serde(default)]
    pub rules: HashMap<String, RuleEntry>,
}

#[derive(Debug, Deserialize)]
pub struct RuleEntry {
    // An entry without a provider key behaves like an empty provider and
    // fails with MissingModel rather than a decode error.
    #[serde(default)]
    pub provider: ProviderInfo,
}

/// Provider selection. Only `model` is interpreted; remaining fields pass
/// through opaquely to the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Successful resolution. `model` is non-empty; `module` and `importance`
/// are the caller's inputs, passed through verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedModel {
    pub provider: ProviderInfo,
    pub model: String,
    pub module: String,
    pub importance: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_document_deserializes() {
        let json = r#"{
            "rules": {
                "code-review": {
                    "provider": {"model": "openai/gpt-4.1-mini", "name": "github-models"}
                }
            }
        }"#;
        let rules: ResolutionRules = serde_json::from_str(json).unwrap();
        let entry = &rules.rules["code-review"];
        assert_eq!(entry.provider.model.as_deref(), Some("openai/gpt-4.1-mini"));
        assert_eq!(entry.provider.extra["name"], "github-models");
    }

    #[test]
    fn empty_provider_has_no_model() {
        let json = r#"{"rules": {"x": {"provider": {}}}}"#;
        let rules: ResolutionRules = serde_json::from_str(json).unwrap();
        assert!(rules.rules["x"].provider.model.is_none());
    }

    #[test]
    fn missing_provider_key_defaults_to_empty() {
        let json = r#"{"rules": {"x": {}}}"#;
        let rules: ResolutionRules = serde_json::from_str(json).unwrap();
        assert!(rules.rules["x"].provider.model.is_none());
    }

    #[test]
    fn missing_rules_key_defaults_to_empty_map() {
        let rules: ResolutionRules = serde_json::from_str("{}").unwrap();
        assert!(rules.rules.is_empty());
    }
}
