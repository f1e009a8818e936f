use lazy_static::lazy_static;
use regex::Regex;

use crate::data::models::{Entry, ShufflerError};
use crate::features::pinyin::{normalize_umlaut, Romanization, SyllableError, UmlautEscape};

lazy_static! {
    static ref ENTRY_RE: Regex = Regex::new(r"^(\p{Han}+) (\p{Han}+) \[([^\]]+)\] /(.+)/$").unwrap();
}

/// Turns one CEDICT line into an [`Entry`]
#[derive(Debug, Clone, Copy, Default)]
pub struct EntryParser {
    umlaut: UmlautEscape,
}

impl EntryParser {
    pub fn new(umlaut: UmlautEscape) -> Self {
        EntryParser { umlaut }
    }

    pub fn parse(&self, line: &str) -> Result<Entry, ShufflerError> {
        let caps = ENTRY_RE
            .captures(line)
            .ok_or_else(|| ShufflerError::malformed(line, "line does not match entry layout"))?;

        let pinyin = normalize_umlaut(&caps[3], self.umlaut);
        let romanization = Romanization::parse(&pinyin).map_err(|(syllable, err)| match err {
            SyllableError::Tone(_) => ShufflerError::InvalidTone {
                syllable,
                line: line.to_string(),
            },
            SyllableError::Empty => ShufflerError::malformed(line, "empty syllable in pinyin"),
            SyllableError::MissingTone => ShufflerError::malformed(line, "syllable without tone digit"),
            SyllableError::MissingLetters => ShufflerError::malformed(line, "tone digit without letters"),
            SyllableError::NonLetter => ShufflerError::malformed(line, "non-letter in syllable"),
        })?;

        Ok(Entry {
            traditional: caps[1].to_string(),
            simplified: caps[2].to_string(),
            romanization,
            definition: caps[4].to_string(),
        })
    }
}
