/// Text normalization for vectorization
///
/// Fixed pipeline, in order: lowercase, drop every character that is not an
/// ASCII letter or whitespace, split on whitespace, drop stop words and
/// short tokens, rejoin with single spaces. Removed characters leave no
/// space behind, so "co-op" becomes "coop" — a documented lossy transform.
/// Empty output is a valid state the downstream vectorizer handles.

pub mod stopwords;

use std::collections::HashSet;

use regex::Regex;

use crate::config::NormalizerConfig;

/// Normalizer holding the compiled character filter and the stop-word set.
///
/// Constructed once from config and shared; all methods are pure.
pub struct TextNormalizer {
    strip_re: Regex,
    stop_words: HashSet<String>,
    min_token_chars: usize,
}

impl TextNormalizer {
    pub fn new(config: &NormalizerConfig) -> Self {
        let mut stop_words: HashSet<String> = stopwords::STOP_WORDS
            .iter()
            .map(|w| (*w).to_string())
            .collect();
        for extra in &config.extra_stop_words {
            stop_words.insert(extra.trim().to_lowercase());
        }

        TextNormalizer {
            strip_re: Regex::new(r"[^a-zA-Z\s]").expect("valid character filter pattern"),
            stop_words,
            min_token_chars: config.min_token_chars,
        }
    }

    /// Clean a free-text string for vectorization.
    ///
    /// Idempotent: normalizing an already-normalized string returns it
    /// unchanged.
    pub fn normalize(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let lowered = text.to_lowercase();
        let stripped = self.strip_re.replace_all(&lowered, "");

        stripped
            .split_whitespace()
            .filter(|token| {
                token.len() >= self.min_token_chars && !self.stop_words.contains(*token)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        TextNormalizer::new(&NormalizerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_punctuation_removed() {
        let norm = TextNormalizer::default();
        assert_eq!(
            norm.normalize("Cooking Tips: 10 tricks, fast!"),
            "cooking tips tricks fast"
        );
    }

    #[test]
    fn test_removed_characters_leave_no_space() {
        let norm = TextNormalizer::default();
        // Documented lossy transform: tokens merge across removed characters
        assert_eq!(norm.normalize("co-op"), "coop");
    }

    #[test]
    fn test_stop_words_and_short_tokens_dropped() {
        let norm = TextNormalizer::default();
        assert_eq!(
            norm.normalize("the cat sat on an ox with them"),
            "cat sat"
        );
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let norm = TextNormalizer::default();
        assert_eq!(norm.normalize(""), "");
        assert_eq!(norm.normalize("   \t\n"), "");
        // All-stop-word input is also a valid zero-term document
        assert_eq!(norm.normalize("the and with"), "");
    }

    #[test]
    fn test_idempotent() {
        let norm = TextNormalizer::default();
        let once = norm.normalize("Rust's async runtimes, compared (2024 edition)");
        let twice = norm.normalize(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_extra_stop_words_from_config() {
        let config = NormalizerConfig {
            extra_stop_words: vec!["cooking".to_string()],
            ..NormalizerConfig::default()
        };
        let norm = TextNormalizer::new(&config);
        assert_eq!(norm.normalize("cooking recipes"), "recipes");
    }
}
