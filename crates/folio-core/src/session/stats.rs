use crate::agent::ArtifactKind;
use serde::{Deserialize, Serialize};

/// Cumulative writing output for the lifetime of a tracker.
///
/// Every counter only ever grows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritingStats {
    pub words_generated: u64,
    pub outlines_created: u64,
    pub chapters_written: u64,
    pub edits_performed: u64,
}

impl WritingStats {
    /// Adds `word_count` to the total and bumps the counter for `kind`.
    ///
    /// Scripture lookups are not writing output and bump no counter.
    pub fn record(&mut self, kind: ArtifactKind, word_count: usize) {
        self.words_generated = self.words_generated.saturating_add(word_count as u64);
        if !kind.is_writing_output() {
            return;
        }
        match kind {
            ArtifactKind::Outline => self.outlines_created += 1,
            ArtifactKind::Chapter => self.chapters_written += 1,
            ArtifactKind::Edit => self.edits_performed += 1,
            ArtifactKind::Scripture => {}
        }
    }
}
