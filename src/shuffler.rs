//! The one-shot pipeline: open the dictionary, sample a line, parse it and
//! format it for output.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rand::Rng;

use crate::config::{Config, OutputFormat};
use crate::data::models::{Entry, RenderedEntry, Script, ShufflerError};
use crate::features::pinyin::{render_romanization, RenderStyle, PUNCTUATION, RESET};
use crate::parser::EntryParser;
use crate::sampler::sample_dictionary_line;

pub fn pick_entry_from<B, R>(reader: B, parser: &EntryParser, rng: &mut R) -> Result<Entry, ShufflerError>
where
    B: BufRead,
    R: Rng + ?Sized,
{
    let line = sample_dictionary_line(reader, rng)?;
    log::debug!("Chose line: {}", line);
    parser.parse(&line)
}

/// Opens `path` and picks one entry from it. The file is closed before
/// returning, whatever the outcome.
pub fn pick_entry<R: Rng + ?Sized>(
    path: &Path,
    parser: &EntryParser,
    rng: &mut R,
) -> Result<Entry, ShufflerError> {
    let file = File::open(path).map_err(|source| ShufflerError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Opened dictionary {}", path.display());
    pick_entry_from(BufReader::new(file), parser, rng)
}

/// `headword (pinyin): definition`, with magenta punctuation when coloured
pub fn format_entry(entry: &Entry, script: Script, style: RenderStyle) -> String {
    let headword = entry.headword(script);
    let pinyin = render_romanization(&entry.romanization, style);
    match style {
        RenderStyle::Plain => format!("{} ({}): {}", headword, pinyin, entry.definition),
        RenderStyle::Coloured => format!(
            "{} {PUNCTUATION}({RESET}{}{PUNCTUATION}):{RESET} {}",
            headword, pinyin, entry.definition
        ),
    }
}

pub fn format_json(entry: &Entry) -> Result<String, ShufflerError> {
    let rendered = RenderedEntry {
        traditional: &entry.traditional,
        simplified: &entry.simplified,
        pinyin: entry.romanization.to_string(),
        pinyin_marked: render_romanization(&entry.romanization, RenderStyle::Plain),
        definitions: entry.definitions(),
    };
    Ok(serde_json::to_string(&rendered)?)
}

/// Runs the whole pipeline and returns the line to print
pub fn run<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Result<String, ShufflerError> {
    let parser = EntryParser::new(config.umlaut);
    let entry = pick_entry(&config.dictionary, &parser, rng)?;
    match config.output {
        OutputFormat::Terminal => Ok(format_entry(&entry, config.script, config.style)),
        OutputFormat::Json => format_json(&entry),
    }
}
