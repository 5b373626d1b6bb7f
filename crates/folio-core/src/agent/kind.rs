//! Artifact kinds and the agent behind each one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four things the studio can produce, one per remote agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Outline,
    Chapter,
    Edit,
    Scripture,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::Outline,
        ArtifactKind::Chapter,
        ArtifactKind::Edit,
        ArtifactKind::Scripture,
    ];

    /// Lowercase identifier, also used as the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Outline => "outline",
            ArtifactKind::Chapter => "chapter",
            ArtifactKind::Edit => "edit",
            ArtifactKind::Scripture => "scripture",
        }
    }

    /// Short label shown next to history entries.
    pub fn label(&self) -> &'static str {
        match self {
            ArtifactKind::Outline => "Outline",
            ArtifactKind::Chapter => "Chapter",
            ArtifactKind::Edit => "Edit",
            ArtifactKind::Scripture => "Scripture",
        }
    }

    /// Name of the agent that produces this kind.
    pub fn agent_name(&self) -> &'static str {
        match self {
            ArtifactKind::Outline => "Book Outline Generator",
            ArtifactKind::Chapter => "AI Chapter Writer",
            ArtifactKind::Edit => "Manuscript Editor",
            ArtifactKind::Scripture => "Scripture Assistant",
        }
    }

    pub fn agent_purpose(&self) -> &'static str {
        match self {
            ArtifactKind::Outline => "Creates comprehensive book outlines from prompts",
            ArtifactKind::Chapter => "Drafts full book chapters in your style",
            ArtifactKind::Edit => "Edits and polishes manuscript text",
            ArtifactKind::Scripture => "Finds and contextualizes Bible references",
        }
    }

    /// Message surfaced when the agent fails without saying why.
    pub fn failure_message(&self) -> &'static str {
        match self {
            ArtifactKind::Outline => "Failed to generate outline. Please try again.",
            ArtifactKind::Chapter => "Failed to write chapter. Please try again.",
            ArtifactKind::Edit => "Failed to edit manuscript. Please try again.",
            ArtifactKind::Scripture => "Failed to search scriptures. Please try again.",
        }
    }

    /// Whether results of this kind count as writing output in the statistics.
    pub fn is_writing_output(&self) -> bool {
        !matches!(self, ArtifactKind::Scripture)
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ArtifactKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "outline" => Ok(ArtifactKind::Outline),
            "chapter" => Ok(ArtifactKind::Chapter),
            "edit" => Ok(ArtifactKind::Edit),
            "scripture" => Ok(ArtifactKind::Scripture),
            other => Err(format!("Unknown artifact kind: {}", other)),
        }
    }
}
