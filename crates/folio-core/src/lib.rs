//! Domain layer for Folio.
//!
//! Folio turns loosely-structured output from remote writing agents into
//! typed records, keeps an in-memory session history with writing
//! statistics, and renders records back into plain-text documents.

pub mod agent;
pub mod artifact;
pub mod config;
pub mod error;
pub mod export;
pub mod normalize;
pub mod session;

// Re-export common error type
pub use error::{FolioError, Result};
