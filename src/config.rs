use std::path::PathBuf;

use clap::Parser;

use crate::data::models::{Script, ShufflerError};
use crate::features::pinyin::{RenderStyle, UmlautEscape};

#[derive(Parser, Debug)]
#[command(
    name = "cedict-shuffler",
    about = "Print a random CEDICT entry with tone-marked pinyin"
)]
pub struct Cli {
    /// CEDICT dictionary file [default: $CEDICT_PATH]
    pub dictionary: Option<PathBuf>,
    /// Don't colour the pinyin (also set by $NO_COLOR)
    #[arg(long)]
    pub plain: bool,
    /// How the dictionary escapes ü
    #[arg(long, value_enum, default_value_t = UmlautEscape::Colon)]
    pub umlaut: UmlautEscape,
    /// Headword to print
    #[arg(long, value_enum, default_value_t = Script::Traditional)]
    pub script: Script,
    /// Print the entry as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dictionary: PathBuf,
    pub style: RenderStyle,
    pub umlaut: UmlautEscape,
    pub script: Script,
    pub output: OutputFormat,
}

impl Config {
    pub fn new(dictionary: impl Into<PathBuf>) -> Self {
        Config {
            dictionary: dictionary.into(),
            style: RenderStyle::default(),
            umlaut: UmlautEscape::default(),
            script: Script::default(),
            output: OutputFormat::default(),
        }
    }

    /// Reads `CEDICT_PATH` and `NO_COLOR` from the environment
    pub fn from_cli(cli: Cli) -> Result<Self, ShufflerError> {
        let env_dictionary = std::env::var_os("CEDICT_PATH").map(PathBuf::from);
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self::resolve(cli, env_dictionary, no_color)
    }

    pub fn resolve(
        cli: Cli,
        env_dictionary: Option<PathBuf>,
        no_color: bool,
    ) -> Result<Self, ShufflerError> {
        let dictionary = cli
            .dictionary
            .or(env_dictionary)
            .ok_or(ShufflerError::MissingDictionary)?;

        Ok(Config {
            dictionary,
            style: if cli.plain || no_color {
                RenderStyle::Plain
            } else {
                RenderStyle::Coloured
            },
            umlaut: cli.umlaut,
            script: cli.script,
            output: if cli.json {
                OutputFormat::Json
            } else {
                OutputFormat::Terminal
            },
        })
    }
}
