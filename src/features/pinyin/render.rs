use super::colour::colourize;
use super::syllable::{Romanization, Syllable};
use super::tone_marks::mark_tone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// tone marks only
    Plain,
    /// tone marks plus an ANSI colour per tone
    #[default]
    Coloured,
}

pub fn render_syllable(syllable: &Syllable, style: RenderStyle) -> String {
    let marked = mark_tone(&syllable.letters, syllable.tone);
    match style {
        RenderStyle::Plain => marked,
        RenderStyle::Coloured => colourize(&marked, syllable.tone),
    }
}

/// Renders every syllable and joins them back with single spaces
pub fn render_romanization(romanization: &Romanization, style: RenderStyle) -> String {
    romanization
        .syllables()
        .iter()
        .map(|syllable| render_syllable(syllable, style))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_render() {
        let romanization = Romanization::parse("zhe4 lei4 le5").unwrap();
        assert_eq!(render_romanization(&romanization, RenderStyle::Plain), "zhè lèi le");
    }

    #[test]
    fn test_coloured_render() {
        let romanization = Romanization::parse("ni3 hao3").unwrap();
        assert_eq!(
            render_romanization(&romanization, RenderStyle::Coloured),
            "\x1b[32mnǐ\x1b[0m \x1b[32mhǎo\x1b[0m"
        );
    }

    #[test]
    fn test_syllable_count_preserved() {
        let romanization = Romanization::parse("a1 a2 a3 a4 a5").unwrap();
        let rendered = render_romanization(&romanization, RenderStyle::Plain);
        assert_eq!(rendered.split(' ').count(), 5);
        assert_eq!(rendered, "ā á ǎ à a");
    }
}
