use unicode_normalization::UnicodeNormalization;

use crate::data::models::ToneError;
use super::syllable::Tone;

/// Combining macron, acute, caron and grave for tones 1 to 4
pub const TONE_MARKS: [char; 4] = ['\u{0304}', '\u{0301}', '\u{030C}', '\u{0300}'];

/// Vowels in the order they take the tone mark. `a` and `e` always win,
/// `iu` puts the mark on the `u`, otherwise the last vowel present wins.
pub const VOWEL_TARGETS: [&str; 13] = [
    "A", "E", "I", "O", "U", "\u{00DC}", "iu", "a", "e", "i", "o", "u", "\u{00FC}",
];

/// Puts `mark` right after the first occurrence of the first target found in
/// `letters` and recomposes the result to NFC. Letters with no target are
/// returned unchanged.
pub fn place_mark(letters: &str, mark: char, targets: &[&str]) -> String {
    for target in targets {
        if let Some(start) = letters.find(target) {
            let end = start + target.len();
            let mut marked = String::with_capacity(letters.len() + mark.len_utf8());
            marked.push_str(&letters[..end]);
            marked.push(mark);
            marked.push_str(&letters[end..]);
            return marked.nfc().collect();
        }
    }
    letters.to_string()
}

pub fn mark_tone(letters: &str, tone: Tone) -> String {
    match tone.combining_mark() {
        Some(mark) => place_mark(letters, mark, &VOWEL_TARGETS),
        None => letters.to_string(),
    }
}

/// Tone-marks `letters` given a raw tone number
pub fn mark_syllable(letters: &str, tone: u8) -> Result<String, ToneError> {
    Ok(mark_tone(letters, Tone::try_from(tone)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::pinyin::Syllable;

    fn mark(numbered: &str) -> String {
        let syllable = Syllable::parse(numbered).unwrap();
        mark_tone(&syllable.letters, syllable.tone)
    }

    #[test]
    fn test_tone_mark() {
        let numbered_to_marked = [
            ("a1", "ā"),
            ("qiao1", "qiāo"),
            ("ba2", "bá"),
            ("tuo2", "tuó"),
            ("wa3", "wǎ"),
            ("guo3", "guǒ"),
            ("ku4", "kù"),
            ("cuo4", "cuò"),
            ("le5", "le"),
            ("kang5", "kang"),
        ];
        for (numbered, marked) in numbered_to_marked {
            assert_eq!(mark(numbered), marked, "marking {numbered}");
        }
    }

    #[test]
    fn test_vowel_precedence() {
        assert_eq!(mark("liu2"), "liú");
        assert_eq!(mark("gui4"), "guì");
        assert_eq!(mark("xue2"), "xué");
        assert_eq!(mark("lü3"), "lǚ");
        assert_eq!(mark("lüe4"), "lüè");
        assert_eq!(mark("Er2"), "Ér");
        assert_eq!(mark("Ou1"), "Ōu");
    }

    #[test]
    fn test_output_is_precomposed() {
        let marked = mark("ma3");
        assert_eq!(marked.chars().count(), 2);
        assert_eq!(marked, "m\u{01CE}");
    }

    #[test]
    fn test_no_vowel_is_unchanged() {
        assert_eq!(mark("m2"), "m");
        assert_eq!(mark("ng4"), "ng");
    }

    #[test]
    fn test_only_first_occurrence_marked() {
        assert_eq!(place_mark("aa", '\u{0304}', &VOWEL_TARGETS), "āa");
    }

    #[test]
    fn test_custom_targets() {
        assert_eq!(place_mark("tuo", '\u{0300}', &["u"]), "tùo");
    }

    #[test]
    fn test_invalid_tone() {
        for letters in ["a", "zhe", "lü"] {
            assert_eq!(mark_syllable(letters, 0), Err(ToneError::InvalidTone(0)));
            assert_eq!(mark_syllable(letters, 6), Err(ToneError::InvalidTone(6)));
        }
        assert_eq!(mark_syllable("ma", 4).unwrap(), "mà");
    }
}
