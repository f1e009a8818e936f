use std::fmt;

use thiserror::Error;

use crate::data::models::ToneError;
use super::tone_marks::TONE_MARKS;

/// Mandarin tone, numbered as in CEDICT (5 is the neutral tone)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    First = 1,
    Second = 2,
    Third = 3,
    Fourth = 4,
    Neutral = 5,
}

impl Tone {
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Combining diacritic for this tone, `None` for the neutral tone
    pub fn combining_mark(self) -> Option<char> {
        match self {
            Tone::Neutral => None,
            tone => Some(TONE_MARKS[tone.number() as usize - 1]),
        }
    }
}

impl TryFrom<u8> for Tone {
    type Error = ToneError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(Tone::First),
            2 => Ok(Tone::Second),
            3 => Ok(Tone::Third),
            4 => Ok(Tone::Fourth),
            5 => Ok(Tone::Neutral),
            other => Err(ToneError::InvalidTone(other)),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyllableError {
    #[error("syllable is empty")]
    Empty,
    #[error("syllable has no tone digit")]
    MissingTone,
    #[error("syllable has no letters")]
    MissingLetters,
    #[error("syllable contains non-letter characters")]
    NonLetter,
    #[error(transparent)]
    Tone(#[from] ToneError),
}

/// One numerically-toned syllable, e.g. `zhe4`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllable {
    pub letters: String,
    pub tone: Tone,
}

impl Syllable {
    pub fn parse(token: &str) -> Result<Self, SyllableError> {
        let last = token.chars().last().ok_or(SyllableError::Empty)?;
        // to_digit only accepts ASCII digits, so the digit is one byte wide
        let digit = last.to_digit(10).ok_or(SyllableError::MissingTone)?;

        let letters = &token[..token.len() - 1];
        if letters.is_empty() {
            return Err(SyllableError::MissingLetters);
        }
        if !letters.chars().all(char::is_alphabetic) {
            return Err(SyllableError::NonLetter);
        }

        let tone = Tone::try_from(digit as u8)?;
        Ok(Syllable {
            letters: letters.to_string(),
            tone,
        })
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letters, self.tone.number())
    }
}

/// The bracketed pinyin of an entry, as an ordered list of syllables
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Romanization(Vec<Syllable>);

impl Romanization {
    /// Splits on single spaces. On failure returns the offending token with
    /// the reason it was rejected.
    pub fn parse(text: &str) -> Result<Self, (String, SyllableError)> {
        text.split(' ')
            .map(|token| Syllable::parse(token).map_err(|e| (token.to_string(), e)))
            .collect::<Result<Vec<_>, _>>()
            .map(Romanization)
    }

    pub fn syllables(&self) -> &[Syllable] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Romanization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, syllable) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{syllable}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_and_letters() {
        let syllable = Syllable::parse("gong1").unwrap();
        assert_eq!(syllable.tone, Tone::First);
        assert_eq!(syllable.letters, "gong");
    }

    #[test]
    fn test_tone_out_of_range() {
        for token in ["ma0", "ma6", "ma9"] {
            let err = Syllable::parse(token).unwrap_err();
            assert!(matches!(err, SyllableError::Tone(ToneError::InvalidTone(_))), "{token}");
        }
    }

    #[test]
    fn test_malformed_syllables() {
        assert_eq!(Syllable::parse(""), Err(SyllableError::Empty));
        assert_eq!(Syllable::parse("ma"), Err(SyllableError::MissingTone));
        assert_eq!(Syllable::parse("3"), Err(SyllableError::MissingLetters));
        assert_eq!(Syllable::parse("m,a3"), Err(SyllableError::NonLetter));
        // fullwidth digits are not tone numbers
        assert_eq!(Syllable::parse("ma３"), Err(SyllableError::MissingTone));
    }

    #[test]
    fn test_umlaut_letters_accepted() {
        let syllable = Syllable::parse("lü4").unwrap();
        assert_eq!(syllable.letters, "lü");
        assert_eq!(syllable.tone, Tone::Fourth);
    }

    #[test]
    fn test_romanization_display() {
        let romanization = Romanization::parse("zhe4 lei4").unwrap();
        assert_eq!(romanization.len(), 2);
        assert_eq!(romanization.to_string(), "zhe4 lei4");
    }

    #[test]
    fn test_romanization_rejects_double_space() {
        let (token, err) = Romanization::parse("zhe4  lei4").unwrap_err();
        assert_eq!(token, "");
        assert_eq!(err, SyllableError::Empty);
    }

    #[test]
    fn test_neutral_tone_has_no_mark() {
        assert_eq!(Tone::Neutral.combining_mark(), None);
        assert_eq!(Tone::Third.combining_mark(), Some('\u{030C}'));
    }
}
