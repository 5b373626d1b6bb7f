//! Text exporters.
//!
//! Each exporter is a pure function of a normalized record and renders the
//! sections in a fixed order. Absent sections are left out entirely.

use crate::artifact::{ChapterView, EditView, OutlineView, ScriptureView};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::Write as _;

pub const EDIT_FILE_NAME: &str = "edited_manuscript.txt";

static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("invalid whitespace regex"));

pub fn outline_text(view: &OutlineView) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "{}", view.book_title.as_deref().unwrap_or("Untitled"));
    if let Some(subtitle) = &view.subtitle {
        let _ = writeln!(text, "{}", subtitle);
    }
    text.push('\n');

    if let Some(audience) = &view.target_audience {
        let _ = write!(text, "Target Audience: {}\n\n", audience);
    }
    if let Some(pages) = &view.estimated_pages {
        let _ = write!(text, "Estimated Pages: {}\n\n", pages);
    }
    if let Some(synopsis) = &view.synopsis {
        let _ = write!(text, "Synopsis:\n{}\n\n", synopsis);
    }
    if !view.themes.is_empty() {
        text.push_str("Themes:\n");
        for theme in &view.themes {
            let _ = writeln!(text, "- {}", theme);
        }
        text.push('\n');
    }
    if !view.chapters.is_empty() {
        text.push_str("Chapters:\n");
        for (i, chapter) in view.chapters.iter().enumerate() {
            let _ = write!(text, "{}. {}", i + 1, chapter.title);
            if !chapter.description.is_empty() {
                let _ = write!(text, " - {}", chapter.description);
            }
            text.push('\n');
        }
    }
    text
}

pub fn chapter_text(view: &ChapterView) -> String {
    let mut text = String::new();
    if let Some(number) = &view.chapter_number {
        let _ = write!(text, "Chapter {}: ", number);
    }
    let _ = write!(
        text,
        "{}\n\n",
        view.chapter_title.as_deref().unwrap_or("Untitled Chapter")
    );
    if let Some(content) = &view.chapter_content {
        let _ = write!(text, "{}\n\n", content);
    }
    if let Some(notes) = &view.style_notes {
        let _ = writeln!(text, "---\nStyle Notes: {}", notes);
    }
    if let Some(count) = &view.word_count {
        let _ = writeln!(text, "Word Count: {}", count);
    }
    text
}

pub fn edit_text(view: &EditView) -> String {
    let mut text = format!("Edited Manuscript\n{}\n\n", "=".repeat(40));
    if let Some(edited) = &view.edited_text {
        let _ = write!(text, "{}\n\n", edited);
    }
    text.push_str("---\n");
    if let Some(summary) = &view.changes_summary {
        let _ = write!(text, "Changes Summary:\n{}\n\n", summary);
    }
    if let Some(notes) = &view.editorial_notes {
        let _ = write!(text, "Editorial Notes:\n{}\n\n", notes);
    }
    if let Some(pacing) = &view.pacing_feedback {
        let _ = write!(text, "Pacing Feedback:\n{}\n\n", pacing);
    }
    let _ = writeln!(
        text,
        "Quality: {}/10 -> {}/10",
        view.quality_before, view.quality_after
    );
    text
}

pub fn scripture_text(view: &ScriptureView) -> String {
    let mut text = view.primary_verse.clone().unwrap_or_else(|| "Verse".to_string());
    if let Some(translation) = &view.translation {
        let _ = write!(text, " ({})", translation);
    }
    text.push_str("\n\n");

    if let Some(verse) = &view.verse_text {
        let _ = write!(text, "\"{}\"\n\n", verse);
    }
    if let Some(context) = &view.context_explanation {
        let _ = write!(text, "Context:\n{}\n\n", context);
    }
    if !view.related_verses.is_empty() {
        text.push_str("Related Verses:\n");
        for verse in &view.related_verses {
            let _ = write!(text, "- {}", verse.reference);
            if !verse.text.is_empty() {
                let _ = write!(text, ": {}", verse.text);
            }
            text.push('\n');
        }
        text.push('\n');
    }
    if let Some(suggestion) = &view.integration_suggestion {
        let _ = write!(text, "Integration Suggestion:\n{}\n\n", suggestion);
    }
    if let Some(application) = &view.devotional_application {
        let _ = writeln!(text, "Devotional Application:\n{}", application);
    }
    text
}

/// One-line citation of the primary verse.
pub fn verse_citation(view: &ScriptureView) -> String {
    format!(
        "{} - \"{}\" ({})",
        view.primary_verse.as_deref().unwrap_or_default(),
        view.verse_text.as_deref().unwrap_or_default(),
        view.translation.as_deref().unwrap_or_default()
    )
}

pub fn outline_file_name(view: &OutlineView) -> String {
    format!(
        "{}_outline.txt",
        underscored(view.book_title.as_deref().unwrap_or("outline"))
    )
}

pub fn chapter_file_name(view: &ChapterView) -> String {
    format!(
        "chapter_{}_{}.txt",
        underscored(view.chapter_number.as_deref().unwrap_or("0")),
        underscored(view.chapter_title.as_deref().unwrap_or("untitled"))
    )
}

pub fn scripture_file_name(view: &ScriptureView) -> String {
    format!(
        "{}_scripture.txt",
        underscored(view.primary_verse.as_deref().unwrap_or("scripture"))
    )
}

/// Collapses whitespace to `_` and makes the name safe to join onto a
/// directory: path separators, drive colons and control characters become
/// `_`, and leading dots are dropped.
fn underscored(name: &str) -> String {
    let replaced: String = WHITESPACE_RE
        .replace_all(name, "_")
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    replaced.trim_start_matches('.').to_string()
}
