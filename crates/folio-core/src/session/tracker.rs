use super::model::SessionItem;
use super::stats::WritingStats;
use crate::agent::ArtifactKind;
use crate::artifact::ArtifactRecord;
use chrono::{DateTime, Utc};

/// Maximum number of items kept in session history.
pub const HISTORY_LIMIT: usize = 20;

/// Number of items the history panel shows.
pub const HISTORY_DISPLAY_LIMIT: usize = 10;

/// In-memory record of what was generated during a session.
///
/// Keeps the most recent [`HISTORY_LIMIT`] artifacts (newest first) and the
/// cumulative [`WritingStats`]. Nothing is persisted; a fresh tracker starts
/// from zero.
#[derive(Debug, Clone, Default)]
pub struct SessionTracker {
    history: Vec<SessionItem>,
    stats: WritingStats,
}

impl SessionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends a new history item for `record`, evicting the oldest entries
    /// beyond [`HISTORY_LIMIT`]. No deduplication.
    pub fn record_artifact(&mut self, record: ArtifactRecord) -> &SessionItem {
        self.record_artifact_at(record, Utc::now())
    }

    /// Same as [`SessionTracker::record_artifact`] with an explicit timestamp.
    pub fn record_artifact_at(
        &mut self,
        record: ArtifactRecord,
        created_at: DateTime<Utc>,
    ) -> &SessionItem {
        let item = SessionItem::from_record(record, created_at);
        tracing::debug!(
            "[SessionTracker] Recorded {} '{}' ({})",
            item.kind,
            item.title,
            item.id
        );
        self.history.insert(0, item);
        self.history.truncate(HISTORY_LIMIT);
        &self.history[0]
    }

    /// Adds `word_count` to the running total and bumps the counter for `kind`.
    pub fn update_statistics(&mut self, kind: ArtifactKind, word_count: usize) {
        self.stats.record(kind, word_count);
    }

    /// The payload to re-open for a history item. Does not touch the tracker.
    pub fn select_history_item(item: &SessionItem) -> ArtifactRecord {
        item.record.clone()
    }

    /// Looks up a history item by id.
    pub fn find(&self, id: &str) -> Option<&SessionItem> {
        self.history.iter().find(|item| item.id == id)
    }

    /// Full history, newest first.
    pub fn history(&self) -> &[SessionItem] {
        &self.history
    }

    /// The newest `limit` items.
    pub fn recent(&self, limit: usize) -> &[SessionItem] {
        &self.history[..limit.min(self.history.len())]
    }

    pub fn stats(&self) -> WritingStats {
        self.stats
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
