use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static CHAPTER_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^Chapter\s+\d+:\s*").expect("invalid chapter prefix regex"));

/// Chapter-writer form values taken from an outline entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterPrefill {
    pub title: String,
    /// 1-based position in the outline.
    pub number: String,
    pub summary: String,
}

/// Removes a leading `Chapter <n>:` label.
pub(crate) fn strip_chapter_prefix(title: &str) -> String {
    CHAPTER_PREFIX_RE.replace(title, "").trim().to_string()
}
