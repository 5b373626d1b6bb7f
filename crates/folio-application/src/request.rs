//! Form input for each studio action.
//!
//! Each request validates its required field before anything is sent to the
//! agent.

use folio_core::artifact::ChapterPrefill;
use folio_core::{FolioError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineRequest {
    /// Book idea (required)
    pub prompt: String,
    pub genre: Option<String>,
    pub audience: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterRequest {
    pub title: Option<String>,
    pub number: Option<String>,
    /// Chapter brief (required)
    pub summary: String,
    pub genre: Option<String>,
    pub style_notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditRequest {
    /// Text to edit (required)
    pub manuscript: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptureRequest {
    /// Topic or theme (required)
    pub topic: String,
    pub context: Option<String>,
    pub translation: Option<String>,
}

/// Bible translations offered by the scripture form.
pub const TRANSLATIONS: [&str; 5] = ["KJV", "NIV", "ESV", "NASB", "NLT"];

/// Genres offered by the outline and chapter forms.
pub const GENRES: [&str; 12] = [
    "Fiction",
    "Non-Fiction",
    "Fantasy",
    "Sci-Fi",
    "Romance",
    "Thriller",
    "Mystery",
    "Self-Help",
    "Business",
    "Faith/Spiritual",
    "Biography",
    "Children's",
];

fn require(value: &str, message: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(FolioError::validation(message))
    } else {
        Ok(())
    }
}

impl OutlineRequest {
    pub fn validate(&self) -> Result<()> {
        require(&self.prompt, "Please enter a book idea or prompt.")
    }
}

impl ChapterRequest {
    pub fn validate(&self) -> Result<()> {
        require(&self.summary, "Please enter a chapter summary or brief.")
    }

    /// Starts a request from an outline chapter.
    pub fn from_prefill(prefill: ChapterPrefill) -> Self {
        Self {
            title: Some(prefill.title),
            number: Some(prefill.number),
            summary: prefill.summary,
            genre: None,
            style_notes: None,
        }
    }
}

impl EditRequest {
    pub fn validate(&self) -> Result<()> {
        require(&self.manuscript, "Please paste your manuscript text.")
    }
}

impl ScriptureRequest {
    pub fn validate(&self) -> Result<()> {
        require(&self.topic, "Please enter a topic or theme.")
    }
}
