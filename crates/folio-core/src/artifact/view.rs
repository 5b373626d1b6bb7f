//! Normalized artifact records.
//!
//! These are what the studio displays, exports and stores in session
//! history. Blank raw fields are dropped and list-shaped fields are parsed.

use super::lenient::present;
use super::prefill::{ChapterPrefill, strip_chapter_prefix};
use super::response::{ChapterResponse, EditorResponse, OutlineResponse, ScriptureResponse};
use crate::agent::ArtifactKind;
use crate::export;
use crate::normalize::{
    ChapterEntry, VerseEntry, parse_chapters, parse_quality_score, parse_related_verses,
    parse_themes,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutlineView {
    pub book_title: Option<String>,
    pub subtitle: Option<String>,
    pub target_audience: Option<String>,
    pub synopsis: Option<String>,
    pub estimated_pages: Option<String>,
    pub themes: Vec<String>,
    pub chapters: Vec<ChapterEntry>,
}

impl OutlineView {
    /// Form values for writing the chapter at `index` (zero-based).
    pub fn chapter_prefill(&self, index: usize) -> Option<ChapterPrefill> {
        let entry = self.chapters.get(index)?;
        let stripped = strip_chapter_prefix(&entry.title);
        Some(ChapterPrefill {
            title: if stripped.is_empty() {
                entry.title.clone()
            } else {
                stripped
            },
            number: (index + 1).to_string(),
            summary: entry.description.clone(),
        })
    }
}

impl From<&OutlineResponse> for OutlineView {
    fn from(raw: &OutlineResponse) -> Self {
        Self {
            book_title: present(&raw.book_title),
            subtitle: present(&raw.subtitle),
            target_audience: present(&raw.target_audience),
            synopsis: present(&raw.synopsis),
            estimated_pages: present(&raw.estimated_pages),
            themes: parse_themes(raw.themes.as_deref()),
            chapters: parse_chapters(raw.chapters.as_deref()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChapterView {
    pub chapter_title: Option<String>,
    pub chapter_number: Option<String>,
    /// Word count as reported by the agent, verbatim.
    pub word_count: Option<String>,
    pub chapter_content: Option<String>,
    pub style_notes: Option<String>,
}

impl From<&ChapterResponse> for ChapterView {
    fn from(raw: &ChapterResponse) -> Self {
        Self {
            chapter_title: present(&raw.chapter_title),
            chapter_number: present(&raw.chapter_number),
            word_count: present(&raw.word_count),
            chapter_content: present(&raw.chapter_content),
            style_notes: present(&raw.style_notes),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditView {
    pub edited_text: Option<String>,
    pub changes_summary: Option<String>,
    pub editorial_notes: Option<String>,
    pub pacing_feedback: Option<String>,
    /// Always within `[0, 10]`.
    pub quality_before: f64,
    /// Always within `[0, 10]`.
    pub quality_after: f64,
}

impl From<&EditorResponse> for EditView {
    fn from(raw: &EditorResponse) -> Self {
        Self {
            edited_text: present(&raw.edited_text),
            changes_summary: present(&raw.changes_summary),
            editorial_notes: present(&raw.editorial_notes),
            pacing_feedback: present(&raw.pacing_feedback),
            quality_before: parse_quality_score(raw.quality_before.as_deref()),
            quality_after: parse_quality_score(raw.quality_after.as_deref()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScriptureView {
    pub primary_verse: Option<String>,
    pub verse_text: Option<String>,
    pub translation: Option<String>,
    pub context_explanation: Option<String>,
    pub related_verses: Vec<VerseEntry>,
    pub integration_suggestion: Option<String>,
    pub devotional_application: Option<String>,
}

impl From<&ScriptureResponse> for ScriptureView {
    fn from(raw: &ScriptureResponse) -> Self {
        Self {
            primary_verse: present(&raw.primary_verse),
            verse_text: present(&raw.verse_text),
            translation: present(&raw.translation),
            context_explanation: present(&raw.context_explanation),
            related_verses: parse_related_verses(raw.related_verses.as_deref()),
            integration_suggestion: present(&raw.integration_suggestion),
            devotional_application: present(&raw.devotional_application),
        }
    }
}

/// A normalized artifact of any kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "lowercase")]
pub enum ArtifactRecord {
    Outline(OutlineView),
    Chapter(ChapterView),
    Edit(EditView),
    Scripture(ScriptureView),
}

impl ArtifactRecord {
    pub fn kind(&self) -> ArtifactKind {
        match self {
            ArtifactRecord::Outline(_) => ArtifactKind::Outline,
            ArtifactRecord::Chapter(_) => ArtifactKind::Chapter,
            ArtifactRecord::Edit(_) => ArtifactKind::Edit,
            ArtifactRecord::Scripture(_) => ArtifactKind::Scripture,
        }
    }

    /// Title shown in session history.
    pub fn title(&self) -> String {
        match self {
            ArtifactRecord::Outline(v) => v
                .book_title
                .clone()
                .unwrap_or_else(|| "Untitled Outline".to_string()),
            ArtifactRecord::Chapter(v) => match (&v.chapter_title, &v.chapter_number) {
                (Some(title), _) => title.clone(),
                (None, Some(number)) => format!("Chapter {}", number),
                (None, None) => "Chapter".to_string(),
            },
            ArtifactRecord::Edit(_) => "Manuscript Edit".to_string(),
            ArtifactRecord::Scripture(v) => v
                .primary_verse
                .clone()
                .unwrap_or_else(|| "Scripture Search".to_string()),
        }
    }

    /// The main body text, used for history previews.
    pub fn primary_text(&self) -> Option<&str> {
        match self {
            ArtifactRecord::Outline(v) => v.synopsis.as_deref(),
            ArtifactRecord::Chapter(v) => v.chapter_content.as_deref(),
            ArtifactRecord::Edit(v) => v.edited_text.as_deref(),
            ArtifactRecord::Scripture(v) => v.verse_text.as_deref(),
        }
    }

    /// Flat text document for copy or download.
    pub fn export_text(&self) -> String {
        match self {
            ArtifactRecord::Outline(v) => export::outline_text(v),
            ArtifactRecord::Chapter(v) => export::chapter_text(v),
            ArtifactRecord::Edit(v) => export::edit_text(v),
            ArtifactRecord::Scripture(v) => export::scripture_text(v),
        }
    }

    /// Suggested file name for [`ArtifactRecord::export_text`].
    pub fn file_name(&self) -> String {
        match self {
            ArtifactRecord::Outline(v) => export::outline_file_name(v),
            ArtifactRecord::Chapter(v) => export::chapter_file_name(v),
            ArtifactRecord::Edit(_) => export::EDIT_FILE_NAME.to_string(),
            ArtifactRecord::Scripture(v) => export::scripture_file_name(v),
        }
    }
}
