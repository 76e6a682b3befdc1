//! Text statistics
//!
//! Word/character/sentence/paragraph counts and an estimated reading time,
//! computed in a single pass over the input.

use serde::Serialize;

/// Assumed reading speed in words per minute
const WORDS_PER_MINUTE: usize = 200;

/// Aggregate statistics over a block of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextStats {
    /// Whitespace-separated words
    pub words: usize,
    /// All characters, whitespace included
    pub characters: usize,
    /// Characters excluding whitespace
    pub characters_no_spaces: usize,
    /// Runs of text terminated by `.`, `!` or `?`
    pub sentences: usize,
    /// Non-blank line groups separated by newlines
    pub paragraphs: usize,
    /// Estimated reading time in whole minutes (200 wpm, rounded up)
    pub reading_time_minutes: usize,
}

impl TextStats {
    /// Analyze a block of text
    pub fn analyze(text: &str) -> Self {
        let words = text.split_whitespace().count();
        let characters = text.chars().count();
        let characters_no_spaces = text.chars().filter(|c| !c.is_whitespace()).count();

        let sentences = text
            .split(['.', '!', '?'])
            .filter(|s| !s.trim().is_empty())
            .count();

        let paragraphs = text
            .split('\n')
            .filter(|p| !p.trim().is_empty())
            .count();

        let reading_time_minutes = words.div_ceil(WORDS_PER_MINUTE);

        Self {
            words,
            characters,
            characters_no_spaces,
            sentences,
            paragraphs,
            reading_time_minutes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        let stats = TextStats::analyze("");
        assert_eq!(stats.words, 0);
        assert_eq!(stats.characters, 0);
        assert_eq!(stats.sentences, 0);
        assert_eq!(stats.paragraphs, 0);
        assert_eq!(stats.reading_time_minutes, 0);
    }

    #[test]
    fn test_basic_counts() {
        let stats = TextStats::analyze("Hello world. How are you?");
        assert_eq!(stats.words, 5);
        assert_eq!(stats.characters, 25);
        assert_eq!(stats.characters_no_spaces, 21);
        assert_eq!(stats.sentences, 2);
        assert_eq!(stats.paragraphs, 1);
        assert_eq!(stats.reading_time_minutes, 1);
    }

    #[test]
    fn test_paragraphs_skip_blank_lines() {
        let stats = TextStats::analyze("first\n\n\nsecond\nthird\n");
        assert_eq!(stats.paragraphs, 3);
    }

    #[test]
    fn test_sentence_terminator_runs() {
        // Runs of terminators do not create empty sentences
        let stats = TextStats::analyze("Wait... what?! Really.");
        assert_eq!(stats.sentences, 3);
    }

    #[test]
    fn test_reading_time_rounds_up() {
        let two_hundred_one = "word ".repeat(201);
        let stats = TextStats::analyze(&two_hundred_one);
        assert_eq!(stats.words, 201);
        assert_eq!(stats.reading_time_minutes, 2);
    }

    #[test]
    fn test_unicode_characters_counted_once() {
        let stats = TextStats::analyze("héllo wörld");
        assert_eq!(stats.characters, 11);
        assert_eq!(stats.words, 2);
    }
}
