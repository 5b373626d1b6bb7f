//! HttpAgentInvoker - JSON over HTTP implementation of the agent seam.
//!
//! Posts `{ "message", "agent_id" }` to the configured endpoint and reads
//! back the `{ success, response: { result, message }, error }` envelope.

use async_trait::async_trait;
use folio_core::agent::{AgentInvoker, AgentReply, ArtifactKind};
use folio_core::config::{AgentIds, AgentSettings};
use folio_core::{FolioError, Result};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// Agent invoker that talks to the agent service over HTTP.
#[derive(Clone)]
pub struct HttpAgentInvoker {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    ids: AgentIds,
}

impl HttpAgentInvoker {
    /// Creates an invoker from configuration.
    pub fn new(settings: &AgentSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| FolioError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
            api_key: settings.api_key.clone(),
            ids: settings.ids.clone(),
        })
    }

    async fn send_request(&self, body: &InvokeRequest<'_>) -> Result<AgentReply> {
        let mut request = self.client.post(&self.endpoint).json(body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|err| {
            FolioError::unexpected(format!("Agent request failed: {err}"))
        })?;

        let status = response.status();
        let body_text = response
            .text()
            .await
            .map_err(|err| FolioError::unexpected(format!("Failed to read agent response: {err}")))?;

        if !status.is_success() {
            tracing::warn!("[HttpAgentInvoker] Agent service returned {}", status);
            return Ok(AgentReply::failed(Some(map_http_error(status, &body_text))));
        }

        parse_envelope(&body_text)
    }
}

#[async_trait]
impl AgentInvoker for HttpAgentInvoker {
    async fn invoke(&self, message: &str, kind: ArtifactKind) -> Result<AgentReply> {
        let agent_id = self.ids.for_kind(kind);
        tracing::debug!(
            "[HttpAgentInvoker] Invoking {} agent {} ({} chars)",
            kind,
            agent_id,
            message.chars().count()
        );

        let request = InvokeRequest { message, agent_id };
        self.send_request(&request).await
    }
}

#[derive(Serialize)]
struct InvokeRequest<'a> {
    message: &'a str,
    agent_id: &'a str,
}

#[derive(Deserialize)]
struct InvokeEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    response: Option<ResponseBody>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
struct ResponseBody {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Converts the service envelope into an [`AgentReply`].
pub(crate) fn parse_envelope(body: &str) -> Result<AgentReply> {
    let envelope: InvokeEnvelope = serde_json::from_str(body)
        .map_err(|err| FolioError::unexpected(format!("Failed to parse agent response: {err}")))?;

    let (result, message) = match envelope.response {
        Some(body) => (body.result, body.message),
        None => (None, None),
    };

    Ok(AgentReply {
        success: envelope.success,
        result,
        message,
        error: envelope.error,
    })
}

fn map_http_error(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorWrapper>(body)
        .ok()
        .and_then(|wrapper| wrapper.error.or(wrapper.message))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("Agent service returned {status}"))
}
