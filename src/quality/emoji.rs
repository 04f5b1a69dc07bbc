//! Emoji-spam detection.

/// Sections whose visible characters are at least this share of emoji are rejected.
pub const EMOJI_RATIO_THRESHOLD: f64 = 0.6;

/// Unicode blocks counted as emoji: emoticons, dingbats, misc symbols and
/// pictographs, transport and map symbols, miscellaneous symbols.
const EMOJI_RANGES: &[(char, char)] = &[
    ('\u{1F600}', '\u{1F64F}'),
    ('\u{2700}', '\u{27BF}'),
    ('\u{1F300}', '\u{1F5FF}'),
    ('\u{1F680}', '\u{1F6FF}'),
    ('\u{2600}', '\u{26FF}'),
];

pub fn is_emoji(c: char) -> bool {
    EMOJI_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&c))
}

/// Check whether emoji make up most of the visible (non-whitespace) characters.
pub fn is_mostly_emojis(text: &str) -> bool {
    let visible = text.chars().filter(|c| !c.is_whitespace()).count();
    if visible == 0 {
        return false;
    }

    let emoji = text.chars().filter(|&c| is_emoji(c)).count();
    emoji as f64 >= visible as f64 * EMOJI_RATIO_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_emoji_ranges() {
        assert!(is_emoji('😀'));
        assert!(is_emoji('🚀'));
        assert!(is_emoji('🔥'));
        assert!(is_emoji('✅'));
        assert!(is_emoji('☀'));
        assert!(!is_emoji('a'));
        assert!(!is_emoji('é'));
        // Supplemental Symbols and Pictographs are outside the counted blocks
        assert!(!is_emoji('🤖'));
    }

    #[test]
    fn test_mostly_emojis() {
        assert!(is_mostly_emojis("😀😀😀😀😀😀 ok"));
        assert!(is_mostly_emojis("🚀🚀🚀"));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // 3 of 5 visible characters
        assert!(is_mostly_emojis("😀😀😀ab"));
        // 2 of 5
        assert!(!is_mostly_emojis("😀😀abc"));
    }

    #[test]
    fn test_whitespace_is_not_counted() {
        assert!(is_mostly_emojis("😀   😀     a"));
    }

    #[test]
    fn test_plain_text_and_empty() {
        assert!(!is_mostly_emojis("Adds a login form 🎉"));
        assert!(!is_mostly_emojis(""));
        assert!(!is_mostly_emojis("   "));
    }
}
