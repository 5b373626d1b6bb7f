use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use folio_core::artifact::ArtifactRecord;
use folio_core::session::{HISTORY_DISPLAY_LIMIT, SessionItem, WritingStats, time_ago};
use std::fs;
use std::path::{Path, PathBuf};

/// Where and how results are written.
pub struct Output {
    json: bool,
    path: Option<PathBuf>,
}

impl Output {
    pub fn new(json: bool, path: Option<PathBuf>) -> Self {
        Self { json, path }
    }

    pub fn render(&self, record: &ArtifactRecord) -> Result<String> {
        if self.json {
            serde_json::to_string_pretty(record).context("Failed to serialize record")
        } else {
            Ok(record.export_text())
        }
    }

    /// Writes one record to the output file, or stdout.
    pub fn emit(&self, record: &ArtifactRecord) -> Result<()> {
        self.write(&self.render(record)?)
    }

    /// Writes already rendered text to the output file, or stdout.
    pub fn write(&self, text: &str) -> Result<()> {
        match &self.path {
            Some(path) => write_file(path, text),
            None => {
                println!("{}", text);
                Ok(())
            }
        }
    }

    /// Writes several records. With an output path, each record is saved
    /// under its own file name inside that directory.
    pub fn emit_all(&self, records: &[ArtifactRecord]) -> Result<()> {
        let Some(dir) = &self.path else {
            for record in records {
                println!("{}\n", self.render(record)?);
            }
            return Ok(());
        };

        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
        for record in records {
            let mut name = record.file_name();
            if self.json {
                name = format!("{}.json", name.trim_end_matches(".txt"));
            }
            write_file(&dir.join(name), &self.render(record)?)?;
        }
        Ok(())
    }
}

fn write_file(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    eprintln!("💾 Saved {}", path.display());
    Ok(())
}

/// Statistics line plus the most recent history entries.
pub fn session_summary(history: &[SessionItem], stats: WritingStats, now: DateTime<Utc>) -> String {
    let mut lines = vec![format!(
        "📊 {} words | {} outlines | {} chapters | {} edits",
        stats.words_generated, stats.outlines_created, stats.chapters_written, stats.edits_performed
    )];
    for item in history.iter().take(HISTORY_DISPLAY_LIMIT) {
        lines.push(format!(
            "  [{}] {} ({})",
            item.kind.label(),
            item.title,
            time_ago(item.created_at, now)
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::artifact::{EditView, OutlineView};
    use folio_core::session::SessionTracker;
    use tempfile::TempDir;

    fn outline() -> ArtifactRecord {
        ArtifactRecord::Outline(OutlineView {
            book_title: Some("Salt and Stars".into()),
            ..Default::default()
        })
    }

    #[test]
    fn test_render_json_is_tagged() {
        let text = Output::new(true, None).render(&outline()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["kind"], "outline");
        assert_eq!(value["data"]["book_title"], "Salt and Stars");
    }

    #[test]
    fn test_emit_writes_export_text() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");
        let record = ArtifactRecord::Edit(EditView {
            edited_text: Some("Tidy prose.".into()),
            ..Default::default()
        });

        Output::new(false, Some(path.clone())).emit(&record).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), record.export_text());
    }

    #[test]
    fn test_emit_all_uses_record_file_names() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("book");

        Output::new(false, Some(dir.clone()))
            .emit_all(&[outline()])
            .unwrap();
        assert!(dir.join("Salt_and_Stars_outline.txt").exists());
    }

    #[test]
    fn test_emit_all_keeps_files_inside_directory() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("book");
        let titled = |title: &str| {
            ArtifactRecord::Outline(OutlineView {
                book_title: Some(title.into()),
                ..Default::default()
            })
        };

        Output::new(false, Some(dir.clone()))
            .emit_all(&[titled("Faith/Doubt"), titled("../escaped")])
            .unwrap();

        assert!(dir.join("Faith_Doubt_outline.txt").exists());
        assert!(dir.join("_escaped_outline.txt").exists());
        assert!(!temp_dir.path().join("escaped_outline.txt").exists());
    }

    #[test]
    fn test_session_summary() {
        let mut tracker = SessionTracker::new();
        let now = Utc::now();
        tracker.record_artifact_at(outline(), now - chrono::Duration::minutes(5));
        tracker.update_statistics(folio_core::agent::ArtifactKind::Outline, 42);

        let summary = session_summary(tracker.history(), tracker.stats(), now);
        assert_eq!(
            summary,
            "📊 42 words | 1 outlines | 0 chapters | 0 edits\n  [Outline] Salt and Stars (5m ago)"
        );
    }
}
