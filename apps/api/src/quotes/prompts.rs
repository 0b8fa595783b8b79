// Prompt constants for original-quote generation.

pub const DEFAULT_THEME: &str = "discipline and consistent action";

/// Words the model is told to stay away from.
pub const BANNED_WORDS: &[&str] = &["hustle", "grind"];

/// Quote prompt template. Replace `{theme}` and `{banned}` before sending.
pub const QUOTE_PROMPT_TEMPLATE: &str = "\
Write ONE original motivational quote of at most 220 characters.
Voice: grounded and specific. No clichés, no emojis, no hashtags.
Theme: {theme}
Do not use these words: {banned}. Avoid generic platitudes.
Reply with ONLY the quote line, without an author.";

pub fn build_quote_prompt(theme: &str) -> String {
    let banned = BANNED_WORDS
        .iter()
        .map(|w| format!("'{w}'"))
        .collect::<Vec<_>>()
        .join(", ");
    // Theme last; it may contain placeholder text.
    QUOTE_PROMPT_TEMPLATE
        .replace("{banned}", &banned)
        .replace("{theme}", theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_carries_theme_and_banned_words() {
        let prompt = build_quote_prompt("patience");
        assert!(prompt.contains("Theme: patience"));
        assert!(prompt.contains("'hustle', 'grind'"));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_theme_with_placeholder_text_is_kept_verbatim() {
        let prompt = build_quote_prompt("{banned}");
        assert!(prompt.contains("Theme: {banned}\n"));
        assert_eq!(prompt.matches("'hustle'").count(), 1);
    }
}
