//! Agent adapters and configuration loading for Folio.
//!
//! - [`HttpAgentInvoker`]: talks to the agent service over HTTP
//! - [`SampleAgentInvoker`]: answers with canned results, no network
//! - [`config`]: reads `config.toml` and environment overrides

pub mod config;
mod http_agent;
mod sample_agent;

pub use http_agent::HttpAgentInvoker;
pub use sample_agent::SampleAgentInvoker;
