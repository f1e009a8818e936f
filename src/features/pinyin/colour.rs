use super::syllable::Tone;

/// ANSI foreground colours for tones 1 to 5: red, yellow, green, blue, black
pub const TONE_COLOURS: [&str; 5] = ["\x1b[31m", "\x1b[33m", "\x1b[32m", "\x1b[34m", "\x1b[30m"];
pub const RESET: &str = "\x1b[0m";
/// Magenta, for the brackets and colon around the pinyin
pub const PUNCTUATION: &str = "\x1b[35m";

/// Wraps already tone-marked text in its tone colour
pub fn colourize(text: &str, tone: Tone) -> String {
    format!("{}{}{}", TONE_COLOURS[tone.number() as usize - 1], text, RESET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_colour() {
        assert_eq!(colourize("test", Tone::Third), "\x1b[32mtest\x1b[0m");
    }

    #[test]
    fn test_neutral_colour() {
        assert_eq!(colourize("le", Tone::Neutral), "\x1b[30mle\x1b[0m");
    }
}
