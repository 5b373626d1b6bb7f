//! Agent domain module.
//!
//! - `kind`: the four artifact kinds and the agent catalog behind them
//! - `invoker`: the [`AgentInvoker`] seam and its reply type

mod invoker;
mod kind;

pub use invoker::{AgentInvoker, AgentReply};
pub use kind::ArtifactKind;
