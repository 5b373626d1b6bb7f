//! Use cases for the Folio writing studio.
//!
//! [`WritingStudio`] turns form input into agent instructions, invokes the
//! matching agent and commits successful results to the session.

mod prompt;
mod request;
mod state;
mod studio;

pub use prompt::PromptBuilder;
pub use request::{
    ChapterRequest, EditRequest, GENRES, OutlineRequest, ScriptureRequest, TRANSLATIONS,
};
pub use studio::{ExportDocument, WritingStudio};
