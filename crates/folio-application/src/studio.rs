//! Writing studio use case.
//!
//! One user action maps to one agent call. A successful reply is decoded,
//! normalized and committed to the session in a single step; any failure
//! leaves history, statistics and views untouched.

use crate::prompt::PromptBuilder;
use crate::request::{ChapterRequest, EditRequest, OutlineRequest, ScriptureRequest};
use crate::state::{RequestSlots, StudioState};
use folio_core::agent::{AgentInvoker, ArtifactKind};
use folio_core::artifact::{
    AgentResponse, ArtifactRecord, ChapterPrefill, ChapterView, EditView, OutlineView,
    ScriptureView,
};
use folio_core::config::AgentSettings;
use folio_core::session::{SessionItem, WritingStats};
use folio_core::{FolioError, Result};
use folio_interaction::{HttpAgentInvoker, SampleAgentInvoker};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A flat text document ready to copy or save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportDocument {
    pub file_name: String,
    pub text: String,
}

impl ExportDocument {
    pub fn from_record(record: &ArtifactRecord) -> Self {
        Self {
            file_name: record.file_name(),
            text: record.export_text(),
        }
    }
}

/// Coordinates agent calls, session history and the per-kind current views.
#[derive(Clone)]
pub struct WritingStudio {
    invoker: Arc<dyn AgentInvoker>,
    prompts: Arc<PromptBuilder>,
    state: Arc<RwLock<StudioState>>,
    slots: RequestSlots,
}

impl WritingStudio {
    pub fn new(invoker: Arc<dyn AgentInvoker>) -> Result<Self> {
        Ok(Self {
            invoker,
            prompts: Arc::new(PromptBuilder::new()?),
            state: Arc::new(RwLock::new(StudioState::default())),
            slots: RequestSlots::default(),
        })
    }

    /// Builds a studio backed by the HTTP agent service, or by canned
    /// sample results when `sample` is set.
    pub fn from_settings(settings: &AgentSettings, sample: bool) -> Result<Self> {
        let invoker: Arc<dyn AgentInvoker> = if sample {
            tracing::info!("[WritingStudio] Using sample agent results");
            Arc::new(SampleAgentInvoker::new())
        } else {
            Arc::new(HttpAgentInvoker::new(settings)?)
        };
        Self::new(invoker)
    }

    pub async fn generate_outline(&self, request: &OutlineRequest) -> Result<OutlineView> {
        request.validate()?;
        let message = self.prompts.outline(request)?;
        match self.run(ArtifactKind::Outline, &message).await? {
            ArtifactRecord::Outline(view) => Ok(view),
            other => Err(mismatch(ArtifactKind::Outline, &other)),
        }
    }

    pub async fn write_chapter(&self, request: &ChapterRequest) -> Result<ChapterView> {
        request.validate()?;
        let message = self.prompts.chapter(request)?;
        match self.run(ArtifactKind::Chapter, &message).await? {
            ArtifactRecord::Chapter(view) => Ok(view),
            other => Err(mismatch(ArtifactKind::Chapter, &other)),
        }
    }

    pub async fn edit_manuscript(&self, request: &EditRequest) -> Result<EditView> {
        request.validate()?;
        let message = self.prompts.edit(request)?;
        match self.run(ArtifactKind::Edit, &message).await? {
            ArtifactRecord::Edit(view) => Ok(view),
            other => Err(mismatch(ArtifactKind::Edit, &other)),
        }
    }

    pub async fn find_scripture(&self, request: &ScriptureRequest) -> Result<ScriptureView> {
        request.validate()?;
        let message = self.prompts.scripture(request)?;
        match self.run(ArtifactKind::Scripture, &message).await? {
            ArtifactRecord::Scripture(view) => Ok(view),
            other => Err(mismatch(ArtifactKind::Scripture, &other)),
        }
    }

    async fn run(&self, kind: ArtifactKind, message: &str) -> Result<ArtifactRecord> {
        // Released on drop if this future is cancelled mid-call
        let request = self.slots.begin(kind)?;
        tracing::info!("[WritingStudio] Invoking {} agent", kind);

        let outcome = self.call_agent(kind, message).await;

        let mut state = self.state.write().await;
        let request_kind = request.kind();
        let stale = request.finish();
        let response = match outcome {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("[WritingStudio] {} request failed: {}", kind, e);
                return Err(e);
            }
        };

        let record = response.normalize();
        state.tracker.update_statistics(kind, response.word_count());
        state.tracker.record_artifact(record.clone());
        if stale {
            tracing::debug!(
                "[WritingStudio] {} result recorded without replacing the current view",
                request_kind
            );
        } else {
            state.show(record.clone());
        }
        Ok(record)
    }

    async fn call_agent(&self, kind: ArtifactKind, message: &str) -> Result<AgentResponse> {
        let reply = match self.invoker.invoke(message, kind).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!("[WritingStudio] {} agent call raised: {}", kind, e);
                return Err(match e {
                    FolioError::Unexpected(_) => e,
                    other => FolioError::unexpected(other.to_string()),
                });
            }
        };

        reply
            .usable_result()
            .and_then(|payload| AgentResponse::decode(kind, payload))
            .ok_or_else(|| FolioError::remote(kind, reply.failure_description()))
    }

    /// Re-opens a history item as the current view for its kind.
    ///
    /// A request of the same kind still in flight will be recorded when it
    /// completes but no longer replaces this view.
    pub async fn select_history_item(&self, id: &str) -> Option<ArtifactRecord> {
        let mut state = self.state.write().await;
        let item = state.tracker.find(id)?;
        let record = folio_core::session::SessionTracker::select_history_item(item);
        self.slots.supersede(record.kind());
        state.show(record.clone());
        Some(record)
    }

    pub async fn current(&self, kind: ArtifactKind) -> Option<ArtifactRecord> {
        self.state.read().await.current(kind).cloned()
    }

    /// Prefill for writing the outline chapter at `index` of the current outline.
    pub async fn chapter_prefill(&self, index: usize) -> Option<ChapterPrefill> {
        match self.state.read().await.current(ArtifactKind::Outline)? {
            ArtifactRecord::Outline(view) => view.chapter_prefill(index),
            _ => None,
        }
    }

    /// Export document for the current view of `kind`.
    pub async fn export(&self, kind: ArtifactKind) -> Option<ExportDocument> {
        self.state
            .read()
            .await
            .current(kind)
            .map(ExportDocument::from_record)
    }

    pub async fn history(&self) -> Vec<SessionItem> {
        self.state.read().await.tracker.history().to_vec()
    }

    pub async fn recent(&self, limit: usize) -> Vec<SessionItem> {
        self.state.read().await.tracker.recent(limit).to_vec()
    }

    pub async fn stats(&self) -> WritingStats {
        self.state.read().await.tracker.stats()
    }

    pub fn is_in_flight(&self, kind: ArtifactKind) -> bool {
        self.slots.is_in_flight(kind)
    }
}

fn mismatch(expected: ArtifactKind, record: &ArtifactRecord) -> FolioError {
    FolioError::internal(format!(
        "Expected {} record, got {}",
        expected,
        record.kind()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use folio_core::agent::AgentReply;
    use serde_json::{Value, json};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Replies with a fixed outcome and records every message.
    struct MockInvoker {
        reply: Box<dyn Fn(ArtifactKind) -> Result<AgentReply> + Send + Sync>,
        messages: Mutex<Vec<String>>,
        calls: AtomicUsize,
    }

    impl MockInvoker {
        fn new(reply: impl Fn(ArtifactKind) -> Result<AgentReply> + Send + Sync + 'static) -> Self {
            Self {
                reply: Box::new(reply),
                messages: Mutex::new(Vec::new()),
                calls: AtomicUsize::new(0),
            }
        }

        fn returning(result: Value) -> Self {
            Self::new(move |_| Ok(AgentReply::ok(result.clone())))
        }
    }

    #[async_trait]
    impl AgentInvoker for MockInvoker {
        async fn invoke(&self, message: &str, kind: ArtifactKind) -> Result<AgentReply> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.messages.lock().unwrap().push(message.to_string());
            (self.reply)(kind)
        }
    }

    fn studio(mock: &Arc<MockInvoker>) -> WritingStudio {
        WritingStudio::new(mock.clone()).unwrap()
    }

    fn outline_request() -> OutlineRequest {
        OutlineRequest {
            prompt: "A lighthouse keeper who collects lost letters".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_blank_prompt_makes_no_call() {
        let mock = Arc::new(MockInvoker::returning(json!({"book_title": "X"})));
        let studio = studio(&mock);

        let err = studio
            .generate_outline(&OutlineRequest::default())
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(mock.calls.load(Ordering::SeqCst), 0);
        assert!(studio.history().await.is_empty());
        assert!(!studio.is_in_flight(ArtifactKind::Outline));
    }

    #[tokio::test]
    async fn test_outline_success_commits_everything() {
        let mock = Arc::new(MockInvoker::returning(json!({
            "book_title": "Letters to the Tide",
            "synopsis": "A keeper finds letters",
            "themes": "grief, hope",
            "chapters": "The Bottle - First letter arrives"
        })));
        let studio = studio(&mock);

        let view = studio.generate_outline(&outline_request()).await.unwrap();
        assert_eq!(view.book_title.as_deref(), Some("Letters to the Tide"));
        assert_eq!(view.themes, vec!["grief", "hope"]);

        let history = studio.history().await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].title, "Letters to the Tide");

        let stats = studio.stats().await;
        assert_eq!(stats.outlines_created, 1);
        // synopsis (4) + chapters (5) + themes (2)
        assert_eq!(stats.words_generated, 11);

        assert_eq!(
            studio.current(ArtifactKind::Outline).await,
            Some(ArtifactRecord::Outline(view))
        );
        assert_eq!(
            mock.messages.lock().unwrap()[0],
            "Generate a book outline for: A lighthouse keeper who collects lost letters"
        );
    }

    #[tokio::test]
    async fn test_remote_failure_leaves_state_untouched() {
        let mock = Arc::new(MockInvoker::new(|_| {
            Ok(AgentReply::failed(Some("Agent overloaded".into())))
        }));
        let studio = studio(&mock);

        let err = studio.generate_outline(&outline_request()).await.unwrap_err();
        assert!(err.is_remote());
        assert_eq!(err.user_message(), "Agent overloaded");
        assert!(studio.history().await.is_empty());
        assert_eq!(studio.stats().await, WritingStats::default());
        assert!(studio.current(ArtifactKind::Outline).await.is_none());
        assert!(!studio.is_in_flight(ArtifactKind::Outline));
    }

    #[tokio::test]
    async fn test_failure_without_description_uses_kind_message() {
        let mock = Arc::new(MockInvoker::new(|_| Ok(AgentReply::failed(None))));
        let studio = studio(&mock);

        let err = studio
            .edit_manuscript(&EditRequest {
                manuscript: "Some text".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(
            err.user_message(),
            "Failed to edit manuscript. Please try again."
        );
    }

    #[tokio::test]
    async fn test_empty_result_is_remote_failure() {
        let mock = Arc::new(MockInvoker::new(|_| Ok(AgentReply::ok(Value::Null))));
        let studio = studio(&mock);

        let err = studio
            .find_scripture(&ScriptureRequest {
                topic: "Peace".into(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(err.is_remote());
        assert!(studio.history().await.is_empty());
    }

    #[tokio::test]
    async fn test_invoker_error_is_unexpected() {
        let mock = Arc::new(MockInvoker::new(|_| Err(FolioError::io("socket closed"))));
        let studio = studio(&mock);

        let err = studio.generate_outline(&outline_request()).await.unwrap_err();
        assert!(matches!(err, FolioError::Unexpected(_)));
        assert!(studio.history().await.is_empty());
        assert!(!studio.is_in_flight(ArtifactKind::Outline));
    }

    #[tokio::test]
    async fn test_scripture_does_not_count_words() {
        let mock = Arc::new(MockInvoker::returning(json!({
            "primary_verse": "John 14:27",
            "verse_text": "Peace I leave with you"
        })));
        let studio = studio(&mock);

        studio
            .find_scripture(&ScriptureRequest {
                topic: "Peace".into(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(studio.stats().await, WritingStats::default());
        assert_eq!(studio.history().await[0].title, "John 14:27");
    }

    #[tokio::test]
    async fn test_select_history_item_restores_view() {
        let mock = Arc::new(MockInvoker::new(|_| {
            Ok(AgentReply::ok(json!({"chapter_title": "Dawn", "chapter_content": "It began"})))
        }));
        let studio = studio(&mock);
        let request = ChapterRequest {
            summary: "Opening".into(),
            ..Default::default()
        };
        studio.write_chapter(&request).await.unwrap();
        studio.write_chapter(&request).await.unwrap();

        let history = studio.history().await;
        let oldest = history.last().unwrap();
        let record = studio.select_history_item(&oldest.id).await.unwrap();
        assert_eq!(record, oldest.record);
        assert_eq!(studio.current(ArtifactKind::Chapter).await, Some(record));
        assert_eq!(studio.history().await.len(), 2);
        assert_eq!(studio.stats().await.chapters_written, 2);

        assert!(studio.select_history_item("missing").await.is_none());
    }

    #[tokio::test]
    async fn test_chapter_prefill_from_current_outline() {
        let mock = Arc::new(MockInvoker::returning(json!({
            "book_title": "Tides",
            "chapters": "Chapter 1: The Bottle - A letter washes up"
        })));
        let studio = studio(&mock);
        assert!(studio.chapter_prefill(0).await.is_none());

        studio.generate_outline(&outline_request()).await.unwrap();
        let prefill = studio.chapter_prefill(0).await.unwrap();
        assert_eq!(prefill.title, "The Bottle");
        assert_eq!(prefill.number, "1");
        assert_eq!(prefill.summary, "A letter washes up");
        assert!(studio.chapter_prefill(1).await.is_none());
    }

    #[tokio::test]
    async fn test_export_current_view() {
        let mock = Arc::new(MockInvoker::returning(json!({
            "edited_text": "Clean text",
            "quality_before": "4",
            "quality_after": "8/10"
        })));
        let studio = studio(&mock);
        assert!(studio.export(ArtifactKind::Edit).await.is_none());

        studio
            .edit_manuscript(&EditRequest {
                manuscript: "messy text".into(),
            })
            .await
            .unwrap();
        let doc = studio.export(ArtifactKind::Edit).await.unwrap();
        assert_eq!(doc.file_name, "edited_manuscript.txt");
        assert!(doc.text.contains("Quality: 4/10 -> 8/10"));
    }
}
