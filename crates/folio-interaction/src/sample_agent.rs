//! SampleAgentInvoker - offline invoker that answers with canned results.
//!
//! Used for demos and for exploring the studio without an agent service.

use async_trait::async_trait;
use folio_core::Result;
use folio_core::agent::{AgentInvoker, AgentReply, ArtifactKind};
use serde_json::{Value, json};

/// Returns the same sample result for every request of a kind.
#[derive(Debug, Clone, Default)]
pub struct SampleAgentInvoker;

impl SampleAgentInvoker {
    pub fn new() -> Self {
        Self
    }

    /// The canned result for `kind`.
    pub fn sample(kind: ArtifactKind) -> Value {
        match kind {
            ArtifactKind::Outline => json!({
                "book_title": "Echoes of Tomorrow",
                "subtitle": "A Journey Through Time and Memory",
                "target_audience": "Young adults and adult readers who enjoy literary fiction with elements of magical realism",
                "synopsis": "In a world where memories can be shared like currency, a young archivist discovers she can hear the echoes of futures yet to come. She must decide whether to reveal her gift or stay silent as a catastrophe looms.",
                "estimated_pages": "320",
                "themes": "Memory and Identity, The Ethics of Knowledge, Human Connection in a Digital Age, Free Will vs. Determinism, The Cost of Truth",
                "chapters": "Chapter 1: The Memory Market - Introducing the world of memory trading and our protagonist Lena\nChapter 2: First Echo - Lena discovers her ability to hear future echoes\nChapter 3: The Archive - Deep dive into Lena's work and the history of memory science\nChapter 4: Whispers of Warning - The first signs of the approaching catastrophe\nChapter 5: The Collector - Introduction of the antagonist who hoards rare memories"
            }),
            ArtifactKind::Chapter => json!({
                "chapter_title": "The Memory Market",
                "chapter_number": "1",
                "word_count": "3,450",
                "chapter_content": "The morning light filtered through the crystalline walls of the Memory Exchange, casting prismatic shadows across the trading floor. Lena adjusted her archival gloves and surveyed the day's offerings.\n\n\"You're early again,\" noted Marcus, her supervisor.\n\n\"The Erikson collection arrives today,\" Lena replied.",
                "style_notes": "Third-person limited perspective following Lena. World-building is woven into the narrative through character interactions."
            }),
            ArtifactKind::Edit => json!({
                "edited_text": "The morning light filtered through the crystalline walls of the Memory Exchange, casting prismatic shadows across the trading floor. Lena adjusted her archival gloves and surveyed the day's offerings with practiced precision.",
                "changes_summary": "- Added \"with practiced precision\" to strengthen character competence\n- Minor punctuation adjustments for improved flow",
                "quality_before": "7",
                "quality_after": "9",
                "editorial_notes": "The prose is strong with vivid sensory details. Consider varying sentence length in the opening paragraph.",
                "pacing_feedback": "The pacing is well-balanced for an opening chapter."
            }),
            ArtifactKind::Scripture => json!({
                "primary_verse": "Jeremiah 29:11",
                "verse_text": "For I know the plans I have for you, declares the LORD, plans to prosper you and not to harm you, plans to give you hope and a future.",
                "translation": "NIV",
                "context_explanation": "This verse comes from a letter the prophet Jeremiah sent to the Jewish exiles in Babylon, assuring them they had not been abandoned.",
                "related_verses": "Romans 8:28 - \"And we know that in all things God works for the good of those who love him\"\nProverbs 3:5-6 - \"Trust in the LORD with all your heart and lean not on your own understanding\"\nPsalm 37:4 - \"Take delight in the LORD, and he will give you the desires of your heart\"",
                "integration_suggestion": "Use this verse as a thematic anchor for a character facing uncertainty, shared by a mentor at a pivotal moment.",
                "devotional_application": "The creative process itself is part of a larger plan; our stories are being woven into something meaningful."
            }),
        }
    }
}

#[async_trait]
impl AgentInvoker for SampleAgentInvoker {
    async fn invoke(&self, _message: &str, kind: ArtifactKind) -> Result<AgentReply> {
        tracing::debug!("[SampleAgentInvoker] Returning sample {} result", kind);
        Ok(AgentReply::ok(Self::sample(kind)))
    }
}
