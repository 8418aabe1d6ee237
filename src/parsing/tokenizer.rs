use super::line_filter::is_directive;
use crate::types::lesson_data::Token;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PUNCTUATION_RE: Regex = Regex::new(r#"[-.,?!:;"]"#).unwrap();
}

/// Splits a sentence into lower-cased words, punctuation still attached.
pub fn extract_words(sentence: &str) -> Vec<String> {
    sentence
        .split_whitespace()
        .filter(|word| !is_directive(word))
        .map(|word| word.to_lowercase().trim().to_string())
        .filter(|word| !word.is_empty())
        .collect()
}

/// Splits punctuation marks out of a word as standalone tokens, in order.
///
/// `"red,"` becomes `["red", ","]`; empty fragments are dropped.
pub fn split_punctuation(word: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut last_end = 0;
    for mark in PUNCTUATION_RE.find_iter(word) {
        if mark.start() > last_end {
            tokens.push(word[last_end..mark.start()].to_string());
        }
        tokens.push(mark.as_str().to_string());
        last_end = mark.end();
    }
    if last_end < word.len() {
        tokens.push(word[last_end..].to_string());
    }
    tokens
}

/// Full tokenization of one content line: words then split punctuation.
pub fn tokenize_sentence(sentence: &str) -> Vec<Token> {
    extract_words(sentence)
        .iter()
        .flat_map(|word| split_punctuation(word))
        .collect()
}

/// Coarse word extraction used when pairing chords with translations.
///
/// Unlike [`tokenize_sentence`] this leaves punctuation attached to its word.
pub fn yield_words(line: &str) -> Vec<String> {
    extract_words(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_comma_becomes_its_own_token() {
        assert_eq!(
            tokenize_sentence("roses are red, violets are blue"),
            vec!["roses", "are", "red", ",", "violets", "are", "blue"]
        );
    }

    #[test]
    fn words_are_lower_cased() {
        assert_eq!(extract_words("He IS Here"), vec!["he", "is", "here"]);
    }

    #[test]
    fn directive_words_are_discarded() {
        assert_eq!(extract_words("hello <pause> world"), vec!["hello", "world"]);
        assert!(tokenize_sentence("<lesson name=foo>").is_empty());
    }

    #[test]
    fn embedded_and_repeated_marks_keep_order() {
        assert_eq!(split_punctuation("well-known"), vec!["well", "-", "known"]);
        assert_eq!(split_punctuation("\"stop!\""), vec!["\"", "stop", "!", "\""]);
        assert_eq!(split_punctuation("..."), vec![".", ".", "."]);
        assert_eq!(split_punctuation("how's"), vec!["how's"]);
    }

    #[test]
    fn yield_words_keeps_punctuation_attached() {
        assert_eq!(yield_words("Red, blue."), vec!["red,", "blue."]);
        assert_eq!(tokenize_sentence("Red, blue.").len(), 4);
    }
}
