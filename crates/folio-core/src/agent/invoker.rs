//! The remote agent seam.
//!
//! The studio makes exactly one call per user action through [`AgentInvoker`].
//! Implementations live in `folio-interaction`; tests use in-memory mocks.

use super::kind::ArtifactKind;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What the agent service handed back for one invocation.
///
/// `result` is deliberately untyped: the service does not guarantee a schema,
/// so the studio decodes it leniently per [`ArtifactKind`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentReply {
    pub success: bool,
    #[serde(default)]
    pub result: Option<Value>,
    /// Informational message attached to the response body.
    #[serde(default)]
    pub message: Option<String>,
    /// Error description supplied by the service on failure.
    #[serde(default)]
    pub error: Option<String>,
}

impl AgentReply {
    /// A successful reply carrying `result`.
    pub fn ok(result: Value) -> Self {
        Self {
            success: true,
            result: Some(result),
            message: None,
            error: None,
        }
    }

    /// A failed reply with an optional error description.
    pub fn failed(error: Option<String>) -> Self {
        Self {
            success: false,
            result: None,
            message: None,
            error,
        }
    }

    /// The payload, only if the call succeeded and returned something usable.
    pub fn usable_result(&self) -> Option<&Value> {
        if !self.success {
            return None;
        }
        self.result.as_ref().filter(|v| match v {
            Value::Null => false,
            Value::String(s) => !s.trim().is_empty(),
            _ => true,
        })
    }

    /// Best description of a failure: the error first, then the message.
    pub fn failure_description(&self) -> Option<String> {
        self.error
            .clone()
            .or_else(|| self.message.clone())
            .filter(|m| !m.trim().is_empty())
    }
}

/// Invokes one of the four remote writing agents.
///
/// `Err` means the call itself blew up (transport, decoding). A reply with
/// `success == false` is a remote failure and is returned as `Ok`.
#[async_trait::async_trait]
pub trait AgentInvoker: Send + Sync {
    async fn invoke(&self, message: &str, kind: ArtifactKind) -> Result<AgentReply>;
}
