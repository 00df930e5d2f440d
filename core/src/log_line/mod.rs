//! ACT network log line handling
//!
//! Tokenizes raw pipe-delimited records and shapes ability lines into skill
//! usage events. File access (replay and live tail) lives in the reader.

mod error;
mod event;
mod parser;
mod reader;

pub use error::ReaderError;
pub use event::SkillUsageEvent;
pub use parser::{line_type, parse_primary_player, parse_skill_usage, tokenize};
pub use reader::{LineReader, ReplaySummary};
