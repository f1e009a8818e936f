//! Numeric pinyin to tone-marked pinyin.
//!
//! A syllable such as `guo3` is split into its letters and its [`Tone`], the
//! tone's combining diacritic is placed on the right vowel and the result is
//! recomposed to NFC. Colouring by tone is a separate step applied to the
//! already-marked text.

pub mod colour;
pub mod render;
pub mod syllable;
pub mod tone_marks;
pub mod umlaut;

pub use colour::{colourize, PUNCTUATION, RESET, TONE_COLOURS};
pub use render::{render_romanization, render_syllable, RenderStyle};
pub use syllable::{Romanization, Syllable, SyllableError, Tone};
pub use tone_marks::{mark_syllable, mark_tone, place_mark, TONE_MARKS, VOWEL_TARGETS};
pub use umlaut::{normalize_umlaut, UmlautEscape};
