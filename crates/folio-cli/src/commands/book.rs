use super::output::{Output, session_summary};
use anyhow::Result;
use chrono::Utc;
use folio_application::{ChapterRequest, OutlineRequest, WritingStudio};
use folio_core::artifact::ArtifactRecord;

/// Outlines a book and writes up to `chapters` of its chapters in order.
pub async fn run(
    studio: &WritingStudio,
    output: &Output,
    request: OutlineRequest,
    chapters: usize,
) -> Result<()> {
    let outline = studio.generate_outline(&request).await?;
    eprintln!(
        "📚 {} ({} chapters planned)",
        outline.book_title.as_deref().unwrap_or("Untitled Outline"),
        outline.chapters.len()
    );

    let mut records = vec![ArtifactRecord::Outline(outline)];
    for index in 0..chapters {
        let Some(prefill) = studio.chapter_prefill(index).await else {
            tracing::warn!("[book] Outline has no chapter {}", index + 1);
            break;
        };
        let mut chapter = ChapterRequest::from_prefill(prefill);
        chapter.genre = request.genre.clone();
        eprintln!(
            "✍️  Writing chapter {}: {}",
            chapter.number.as_deref().unwrap_or("?"),
            chapter.title.as_deref().unwrap_or_default()
        );
        records.push(ArtifactRecord::Chapter(studio.write_chapter(&chapter).await?));
    }

    output.emit_all(&records)?;
    eprintln!("{}", session_summary(&studio.history().await, studio.stats().await, Utc::now()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use folio_core::agent::{AgentInvoker, AgentReply, ArtifactKind};
    use folio_core::session::HISTORY_LIMIT;
    use serde_json::json;
    use std::sync::Arc;
    use tempfile::TempDir;

    /// An outline with many chapters, and a chapter for every request.
    struct LongBookInvoker {
        chapters: usize,
    }

    #[async_trait]
    impl AgentInvoker for LongBookInvoker {
        async fn invoke(&self, message: &str, kind: ArtifactKind) -> folio_core::Result<AgentReply> {
            let result = match kind {
                ArtifactKind::Outline => {
                    let lines: Vec<String> = (1..=self.chapters)
                        .map(|n| format!("Chapter {n}: Part {n} - Events of part {n}"))
                        .collect();
                    json!({"book_title": "Long Road", "chapters": lines.join("\n")})
                }
                _ => {
                    let number = message
                        .split("Chapter number: ")
                        .nth(1)
                        .and_then(|rest| rest.split('.').next())
                        .unwrap_or("0");
                    json!({
                        "chapter_title": format!("Part {number}"),
                        "chapter_number": number,
                        "chapter_content": "Walking on."
                    })
                }
            };
            Ok(AgentReply::ok(result))
        }
    }

    #[tokio::test]
    async fn test_book_keeps_outline_beyond_history_limit() {
        let chapters = HISTORY_LIMIT + 2;
        let studio = WritingStudio::new(Arc::new(LongBookInvoker { chapters })).unwrap();
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("book");
        let output = Output::new(false, Some(dir.clone()));

        run(
            &studio,
            &output,
            OutlineRequest {
                prompt: "A long walk".into(),
                ..Default::default()
            },
            chapters,
        )
        .await
        .unwrap();

        assert_eq!(studio.history().await.len(), HISTORY_LIMIT);
        assert!(dir.join("Long_Road_outline.txt").exists());
        assert!(dir.join("chapter_1_Part_1.txt").exists());
        assert!(dir.join(format!("chapter_{chapters}_Part_{chapters}.txt")).exists());
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), chapters + 1);
    }
}
