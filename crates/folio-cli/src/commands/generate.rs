use super::output::{Output, session_summary};
use anyhow::{Context, Result};
use chrono::Utc;
use folio_application::{
    ChapterRequest, EditRequest, OutlineRequest, ScriptureRequest, WritingStudio,
};
use folio_core::agent::ArtifactKind;
use folio_core::export::verse_citation;
use std::io::Read;

pub async fn outline(studio: &WritingStudio, output: &Output, request: OutlineRequest) -> Result<()> {
    studio.generate_outline(&request).await?;
    finish(studio, output, ArtifactKind::Outline).await
}

pub async fn chapter(studio: &WritingStudio, output: &Output, request: ChapterRequest) -> Result<()> {
    studio.write_chapter(&request).await?;
    finish(studio, output, ArtifactKind::Chapter).await
}

pub async fn edit(studio: &WritingStudio, output: &Output, input: &str) -> Result<()> {
    let manuscript = read_manuscript(input)?;
    studio.edit_manuscript(&EditRequest { manuscript }).await?;
    finish(studio, output, ArtifactKind::Edit).await
}

/// With `citation`, only the one-line citation of the primary verse is written.
pub async fn scripture(
    studio: &WritingStudio,
    output: &Output,
    request: ScriptureRequest,
    citation: bool,
) -> Result<()> {
    let view = studio.find_scripture(&request).await?;
    if citation {
        output.write(&verse_citation(&view))?;
        print_summary(studio).await;
        return Ok(());
    }
    finish(studio, output, ArtifactKind::Scripture).await
}

async fn finish(studio: &WritingStudio, output: &Output, kind: ArtifactKind) -> Result<()> {
    let record = studio
        .current(kind)
        .await
        .with_context(|| format!("No {} result to show", kind))?;
    output.emit(&record)?;
    print_summary(studio).await;
    Ok(())
}

async fn print_summary(studio: &WritingStudio) {
    eprintln!("{}", session_summary(&studio.history().await, studio.stats().await, Utc::now()));
}

fn read_manuscript(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read manuscript from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))
    }
}
