//! Session history entries.

use crate::agent::ArtifactKind;
use crate::artifact::ArtifactRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of characters of primary text kept in a preview.
pub const PREVIEW_CHARS: usize = 80;

/// One generated artifact in session history.
///
/// Items are created by the tracker and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionItem {
    /// Unique, time-ordered identifier (UUID v7)
    pub id: String,
    pub kind: ArtifactKind,
    pub title: String,
    /// First characters of the primary text followed by an ellipsis
    pub preview: String,
    pub created_at: DateTime<Utc>,
    /// The full normalized record, for re-opening the artifact later
    pub record: ArtifactRecord,
}

impl SessionItem {
    pub(crate) fn from_record(record: ArtifactRecord, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            kind: record.kind(),
            title: record.title(),
            preview: preview(record.primary_text()),
            created_at,
            record,
        }
    }
}

/// Truncates to [`PREVIEW_CHARS`] characters and appends `...`.
pub fn preview(text: Option<&str>) -> String {
    let mut preview: String = text.unwrap_or_default().chars().take(PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}
