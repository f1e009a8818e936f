//! Uniform choice of one line from a stream of unknown length.
//!
//! Reservoir sampling with a reservoir of one: the c-th line replaces the
//! current pick with probability 1/c, which leaves every line with the same
//! 1/N chance once the stream ends. Only a counter and the current pick are
//! held, whatever the size of the input.

use std::io::{self, BufRead};

use rand::Rng;

use crate::data::models::ShufflerError;

#[derive(Debug)]
pub struct Reservoir<T> {
    seen: u64,
    selected: Option<T>,
}

impl<T> Default for Reservoir<T> {
    fn default() -> Self {
        Reservoir {
            seen: 0,
            selected: None,
        }
    }
}

impl<T> Reservoir<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offer<R: Rng + ?Sized>(&mut self, item: T, rng: &mut R) {
        self.seen += 1;
        if rng.gen_range(0..self.seen) == 0 {
            self.selected = Some(item);
        }
    }

    pub fn seen(&self) -> u64 {
        self.seen
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    pub fn into_selected(self) -> Option<T> {
        self.selected
    }
}

/// Picks one line uniformly at random. A read error aborts the whole pick
/// instead of returning a sample of the lines read so far.
pub fn sample_line<I, R>(lines: I, rng: &mut R) -> Result<String, ShufflerError>
where
    I: IntoIterator<Item = io::Result<String>>,
    R: Rng + ?Sized,
{
    let mut reservoir = Reservoir::new();
    for line in lines {
        reservoir.offer(line?, rng);
    }
    log::debug!("Sampled from {} candidate lines", reservoir.seen());
    reservoir.into_selected().ok_or(ShufflerError::EmptySource)
}

/// Blank lines and `#` comments never count as dictionary entries
pub fn is_candidate(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && !trimmed.starts_with('#')
}

/// Picks one dictionary line from `reader`, skipping comments and blank lines
pub fn sample_dictionary_line<B, R>(reader: B, rng: &mut R) -> Result<String, ShufflerError>
where
    B: BufRead,
    R: Rng + ?Sized,
{
    let lines = reader.lines().filter(|line| match line {
        Ok(text) if !is_candidate(text) => {
            log::trace!("Skipping non-entry line: {}", text);
            false
        }
        _ => true,
    });
    sample_line(lines, rng)
}
