//! Session domain module.
//!
//! Page-lifetime bookkeeping of generated artifacts and writing statistics.
//!
//! # Module Structure
//!
//! - `model`: history entries (`SessionItem`)
//! - `stats`: cumulative counters (`WritingStats`)
//! - `tracker`: bounded history plus statistics (`SessionTracker`)
//! - `age`: relative timestamps for display

mod age;
mod model;
mod stats;
mod tracker;

pub use age::time_ago;
pub use model::{PREVIEW_CHARS, SessionItem, preview};
pub use stats::WritingStats;
pub use tracker::{HISTORY_DISPLAY_LIMIT, HISTORY_LIMIT, SessionTracker};
