pub mod entry_models;
pub mod error_models;

pub use entry_models::{Entry, RenderedEntry, Script};
pub use error_models::{ShufflerError, ToneError};
