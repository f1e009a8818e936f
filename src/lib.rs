//! Picks a random entry from a CEDICT dictionary and renders its pinyin with
//! tone marks, optionally coloured by tone.

pub mod config;
pub mod data;
pub mod features;
pub mod parser;
pub mod sampler;
pub mod shuffler;
pub mod utils;

pub use config::{Cli, Config, OutputFormat};
pub use data::models::{Entry, Script, ShufflerError, ToneError};
pub use features::pinyin::{RenderStyle, UmlautEscape};
pub use parser::EntryParser;
