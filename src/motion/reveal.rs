//! Word-by-word text reveal with staggered entrance delays.

use super::viewport::{Rect, ViewportObserver};

/// Gap between consecutive tokens' entrances, seconds.
pub const PER_TOKEN_DELAY: f64 = 0.1;
/// Entrance transition length, seconds (consumed by the stylesheet).
pub const TOKEN_DURATION: f64 = 0.6;

#[derive(Debug, Clone, PartialEq)]
pub struct RevealToken {
    pub text: String,
    pub index: usize,
    /// Case-insensitive substring match against the configured keyword;
    /// purely a styling hook.
    pub is_highlighted: bool,
    /// Entrance delay in seconds: `base_delay + index * PER_TOKEN_DELAY`.
    pub delay: f64,
}

/// Splits `text` on whitespace into tokens with stagger delays. An empty
/// keyword highlights nothing.
pub fn reveal(text: &str, keyword: &str, base_delay: f64) -> Vec<RevealToken> {
    let keyword = keyword.to_lowercase();
    text.split_whitespace()
        .enumerate()
        .map(|(index, word)| RevealToken {
            text: word.to_string(),
            index,
            is_highlighted: !keyword.is_empty() && word.to_lowercase().contains(&keyword),
            delay: base_delay + index as f64 * PER_TOKEN_DELAY,
        })
        .collect()
}

/// Token sequence plus the single visibility latch for the whole block —
/// one observation gates all tokens together.
#[derive(Debug, Clone)]
pub struct TextRevealSequencer {
    tokens: Vec<RevealToken>,
    observer: ViewportObserver,
}

impl TextRevealSequencer {
    pub fn new(text: &str, keyword: &str, base_delay: f64) -> Self {
        Self {
            tokens: reveal(text, keyword, base_delay),
            observer: ViewportObserver::new(0.0, 0.0),
        }
    }

    pub fn tokens(&self) -> &[RevealToken] {
        &self.tokens
    }

    pub fn is_revealed(&self) -> bool {
        self.observer.has_been_visible()
    }

    pub fn observe(&mut self, element: Rect, viewport: Rect) -> bool {
        self.observer.observe(element, viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline_tokens_and_highlight() {
        let tokens = reveal("Seu legado protegido com inteligência", "protegido", 0.0);
        assert_eq!(tokens.len(), 5);
        for token in &tokens {
            assert_eq!(token.is_highlighted, token.index == 2);
        }
        assert_eq!(tokens[2].text, "protegido");
    }

    #[test]
    fn test_trailing_punctuation_still_matches() {
        let tokens = reveal("Seu legado protegido. Garantido", "protegido", 0.0);
        assert!(tokens[2].is_highlighted);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let tokens = reveal("PROTEGIDO para sempre", "protegido", 0.0);
        assert!(tokens[0].is_highlighted);
        assert!(!tokens[1].is_highlighted);
    }

    #[test]
    fn test_delays_strictly_increase() {
        let tokens = reveal("um dois três quatro", "", 0.25);
        assert_eq!(tokens[0].delay, 0.25);
        for pair in tokens.windows(2) {
            assert!(pair[1].delay > pair[0].delay);
        }
    }

    #[test]
    fn test_empty_keyword_highlights_nothing() {
        let tokens = reveal("nada em destaque aqui", "", 0.0);
        assert!(tokens.iter().all(|token| !token.is_highlighted));
    }

    #[test]
    fn test_sequencer_reveals_once_for_all_tokens() {
        let mut sequencer = TextRevealSequencer::new("um dois três", "", 0.0);
        assert!(!sequencer.is_revealed());

        let viewport = Rect::new(0.0, 0.0, 1280.0, 800.0);
        let block = Rect::new(100.0, 300.0, 600.0, 120.0);
        assert!(sequencer.observe(block, viewport));
        assert!(sequencer.is_revealed());
        // the latch covers the whole block; later observations are no-ops
        assert!(!sequencer.observe(block, viewport));
    }
}
