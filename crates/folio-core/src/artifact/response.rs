//! Raw agent responses, one record per artifact kind.
//!
//! Every field is optional and decoded leniently: the agent service does not
//! guarantee a schema.

use super::lenient::lenient_string;
use super::view::{ArtifactRecord, ChapterView, EditView, OutlineView, ScriptureView};
use crate::agent::ArtifactKind;
use crate::normalize::{count_words, count_words_in};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineResponse {
    #[serde(default, deserialize_with = "lenient_string")]
    pub book_title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub target_audience: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub synopsis: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub estimated_pages: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub themes: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub chapters: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterResponse {
    #[serde(default, deserialize_with = "lenient_string")]
    pub chapter_title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub chapter_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub word_count: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub chapter_content: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub style_notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorResponse {
    #[serde(default, deserialize_with = "lenient_string")]
    pub edited_text: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub changes_summary: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub quality_before: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub quality_after: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub editorial_notes: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub pacing_feedback: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptureResponse {
    #[serde(default, deserialize_with = "lenient_string")]
    pub primary_verse: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub verse_text: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub translation: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub context_explanation: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub related_verses: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub integration_suggestion: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub devotional_application: Option<String>,
}

/// A decoded agent result of any kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentResponse {
    Outline(OutlineResponse),
    Chapter(ChapterResponse),
    Edit(EditorResponse),
    Scripture(ScriptureResponse),
}

impl AgentResponse {
    /// Decodes a result payload for `kind`.
    ///
    /// The payload may be a JSON object or a string holding one. Returns
    /// `None` when there is no object to read fields from.
    pub fn decode(kind: ArtifactKind, payload: &Value) -> Option<Self> {
        let object = match payload {
            Value::Object(_) => payload.clone(),
            Value::String(text) => match serde_json::from_str::<Value>(text) {
                Ok(value @ Value::Object(_)) => value,
                _ => return None,
            },
            _ => return None,
        };

        let decoded = match kind {
            ArtifactKind::Outline => serde_json::from_value(object).map(AgentResponse::Outline),
            ArtifactKind::Chapter => serde_json::from_value(object).map(AgentResponse::Chapter),
            ArtifactKind::Edit => serde_json::from_value(object).map(AgentResponse::Edit),
            ArtifactKind::Scripture => {
                serde_json::from_value(object).map(AgentResponse::Scripture)
            }
        };

        match decoded {
            Ok(response) => Some(response),
            Err(e) => {
                tracing::warn!("[AgentResponse] Could not decode {} result: {}", kind, e);
                None
            }
        }
    }

    pub fn kind(&self) -> ArtifactKind {
        match self {
            AgentResponse::Outline(_) => ArtifactKind::Outline,
            AgentResponse::Chapter(_) => ArtifactKind::Chapter,
            AgentResponse::Edit(_) => ArtifactKind::Edit,
            AgentResponse::Scripture(_) => ArtifactKind::Scripture,
        }
    }

    /// Words this response contributes to the writing statistics.
    ///
    /// Counted over the raw fields: synopsis, chapters and themes for an
    /// outline, the content for a chapter, the edited text for an edit.
    /// Scripture lookups contribute nothing.
    pub fn word_count(&self) -> usize {
        match self {
            AgentResponse::Outline(r) => count_words_in([
                r.synopsis.as_deref(),
                r.chapters.as_deref(),
                r.themes.as_deref(),
            ]),
            AgentResponse::Chapter(r) => count_words(r.chapter_content.as_deref()),
            AgentResponse::Edit(r) => count_words(r.edited_text.as_deref()),
            AgentResponse::Scripture(_) => 0,
        }
    }

    /// Normalizes the raw fields into the record the views and exporters use.
    pub fn normalize(&self) -> ArtifactRecord {
        match self {
            AgentResponse::Outline(r) => ArtifactRecord::Outline(OutlineView::from(r)),
            AgentResponse::Chapter(r) => ArtifactRecord::Chapter(ChapterView::from(r)),
            AgentResponse::Edit(r) => ArtifactRecord::Edit(EditView::from(r)),
            AgentResponse::Scripture(r) => ArtifactRecord::Scripture(ScriptureView::from(r)),
        }
    }
}
