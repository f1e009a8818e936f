use clap::ValueEnum;
use serde::Serialize;

use crate::features::pinyin::Romanization;

/// Which of the two headword fields to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Script {
    #[default]
    Traditional,
    Simplified,
}

/// One CEDICT record.
///
/// Field order in the file is traditional first, simplified second. The two
/// can't be told apart from their content, so this is purely positional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub traditional: String,
    pub simplified: String,
    pub romanization: Romanization,
    pub definition: String,
}

impl Entry {
    pub fn headword(&self, script: Script) -> &str {
        match script {
            Script::Traditional => &self.traditional,
            Script::Simplified => &self.simplified,
        }
    }

    /// Individual senses of the gloss, split on `/`
    pub fn definitions(&self) -> Vec<String> {
        self.definition
            .split('/')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

// JSON output shape
#[derive(Debug, Serialize)]
pub struct RenderedEntry<'a> {
    pub traditional: &'a str,
    pub simplified: &'a str,
    pub pinyin: String,
    pub pinyin_marked: String,
    pub definitions: Vec<String>,
}
