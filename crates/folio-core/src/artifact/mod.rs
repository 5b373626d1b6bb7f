//! Artifact domain module.
//!
//! # Module Structure
//!
//! - `response`: raw agent records (`OutlineResponse`, ..., `AgentResponse`)
//! - `view`: normalized records (`OutlineView`, ..., `ArtifactRecord`)
//! - `prefill`: chapter-writer prefill derived from outline entries
//! - `lenient`: serde helpers for untyped agent fields

mod lenient;
mod prefill;
mod response;
mod view;

pub use lenient::{lenient_string, present};
pub use prefill::ChapterPrefill;
pub use response::{
    AgentResponse, ChapterResponse, EditorResponse, OutlineResponse, ScriptureResponse,
};
pub use view::{ArtifactRecord, ChapterView, EditView, OutlineView, ScriptureView};
