use clap::ValueEnum;

/// How a dictionary spells the ü vowel in its pinyin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum UmlautEscape {
    /// `u:`/`v:` and `U:`/`V:`, as in CC-CEDICT
    #[default]
    Colon,
    /// a bare `v` or `V`
    BareV,
}

/// Rewrites the escaped ü to the real letter. Run once per line, before any
/// tone marks are placed.
pub fn normalize_umlaut(pinyin: &str, escape: UmlautEscape) -> String {
    match escape {
        UmlautEscape::Colon => pinyin
            .replace("u:", "\u{00FC}")
            .replace("v:", "\u{00FC}")
            .replace("U:", "\u{00DC}")
            .replace("V:", "\u{00DC}"),
        UmlautEscape::BareV => pinyin.replace('v', "\u{00FC}").replace('V', "\u{00DC}"),
    }
}
