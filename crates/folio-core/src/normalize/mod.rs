//! Lenient parsers for agent output.
//!
//! Every function here is total: malformed input degrades to an empty or
//! default value and never returns an error.
//!
//! - `field`: best-effort JSON decode of a raw string field
//! - `themes`: theme lists
//! - `entries`: chapter and related-verse lists
//! - `quality`: bounded quality scores
//! - `words`: word counting

mod entries;
mod field;
mod quality;
mod themes;
mod words;

pub use entries::{ChapterEntry, ENTRY_SEPARATOR, VerseEntry, parse_chapters, parse_related_verses};
pub use field::{NormalizedField, normalize_field};
pub use quality::{MAX_QUALITY, MIN_QUALITY, parse_quality_score};
pub use themes::parse_themes;
pub use words::{count_words, count_words_in};
