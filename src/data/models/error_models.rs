use std::io;
use std::path::PathBuf;
use thiserror::Error;

// Errors from the pinyin primitives, independent of any dictionary line
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneError {
    #[error("Invalid tone: {0}")]
    InvalidTone(u8),
}

// Everything that can abort a shuffle run
#[derive(Error, Debug)]
pub enum ShufflerError {
    #[error("No dictionary given: pass a path or set CEDICT_PATH")]
    MissingDictionary,
    #[error("Cannot open dictionary {}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed reading dictionary")]
    Read(#[from] io::Error),
    #[error("Dictionary has no entries to choose from")]
    EmptySource,
    #[error("Failed to parse CEDICT line ({reason}): {line}")]
    MalformedEntry { line: String, reason: &'static str },
    #[error("Invalid tone in syllable {syllable:?}: {line}")]
    InvalidTone { syllable: String, line: String },
    #[error("Failed to encode entry")]
    Json(#[from] serde_json::Error),
}

impl ShufflerError {
    pub(crate) fn malformed(line: &str, reason: &'static str) -> Self {
        ShufflerError::MalformedEntry {
            line: line.to_string(),
            reason,
        }
    }
}
