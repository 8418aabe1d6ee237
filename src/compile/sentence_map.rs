use crate::parsing::tokenizer::tokenize_sentence;
use crate::types::lesson_data::{SentenceMap, Token};

/// Indices `[total_so_far - word_count, total_so_far)`.
pub fn word_indices(word_count: usize, total_so_far: usize) -> Vec<usize> {
    (total_so_far - word_count..total_so_far).collect()
}

/// Tokenizes every line and records which run of tokens each line owns.
///
/// Lines that produce no tokens get no entry and do not consume a key.
pub fn build_sentence_map(lines: &[String]) -> (Vec<Token>, SentenceMap) {
    let mut tokens = Vec::new();
    let mut sentence_map = SentenceMap::new();

    for line in lines {
        let line_tokens = tokenize_sentence(line);
        if line_tokens.is_empty() {
            continue;
        }
        let word_count = line_tokens.len();
        tokens.extend(line_tokens);
        sentence_map.push_sentence(word_indices(word_count, tokens.len()));
    }

    (tokens, sentence_map)
}
