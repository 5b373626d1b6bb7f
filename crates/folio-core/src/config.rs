//! Configuration model.
//!
//! Loading lives in `folio-interaction`; this module only defines the shape
//! and its defaults.

use crate::agent::ArtifactKind;
use serde::{Deserialize, Serialize};

pub const DEFAULT_AGENT_ENDPOINT: &str = "http://127.0.0.1:3000/api/agent";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Root of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub agent: AgentSettings,
}

/// Where and how to reach the agent service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSettings {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Sent as a bearer token when present. Never logged.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub ids: AgentIds,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            ids: AgentIds::default(),
        }
    }
}

/// Remote agent identifier per artifact kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentIds {
    pub outline: String,
    pub chapter: String,
    pub edit: String,
    pub scripture: String,
}

impl AgentIds {
    pub fn for_kind(&self, kind: ArtifactKind) -> &str {
        match kind {
            ArtifactKind::Outline => &self.outline,
            ArtifactKind::Chapter => &self.chapter,
            ArtifactKind::Edit => &self.edit,
            ArtifactKind::Scripture => &self.scripture,
        }
    }
}

impl Default for AgentIds {
    fn default() -> Self {
        Self {
            outline: "699dc06311babb6bd9bda5c9".to_string(),
            chapter: "699dc063c546a47313680796".to_string(),
            edit: "699dc0642324bf32f83b5d61".to_string(),
            scripture: "699dc064d6de05974a3c6c6f".to_string(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_AGENT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: FolioConfig = toml::from_str("").unwrap();
        assert_eq!(config, FolioConfig::default());
        assert_eq!(config.agent.endpoint, DEFAULT_AGENT_ENDPOINT);
    }

    #[test]
    fn test_partial_ids_keep_other_defaults() {
        let config: FolioConfig = toml::from_str(
            r#"
            [agent]
            endpoint = "https://agents.example.com/run"
            timeout_secs = 30

            [agent.ids]
            scripture = "custom-scripture"
            "#,
        )
        .unwrap();

        assert_eq!(config.agent.endpoint, "https://agents.example.com/run");
        assert_eq!(config.agent.timeout_secs, 30);
        assert_eq!(config.agent.ids.for_kind(ArtifactKind::Scripture), "custom-scripture");
        assert_eq!(
            config.agent.ids.for_kind(ArtifactKind::Outline),
            AgentIds::default().outline
        );
    }
}
