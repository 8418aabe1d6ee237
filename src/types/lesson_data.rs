use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One word (lower-cased) or one punctuation mark.
pub type Token = String;

/// One stroke, or several strokes compressed into a single unit.
pub type ChordUnit = String;

/// Maps each emitting sentence (in line order) to the global token indices it owns.
///
/// Index lists are strictly increasing and, taken in key order, cover
/// `0..index_count()` with no gaps or repeats.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct SentenceMap {
    sentences: BTreeMap<usize, Vec<usize>>,
}

impl SentenceMap {
    pub fn new() -> Self {
        SentenceMap { sentences: BTreeMap::new() }
    }

    /// Appends a sentence under the next dense key and returns that key.
    pub fn push_sentence(&mut self, indices: Vec<usize>) -> usize {
        let key = self.sentences.keys().next_back().map_or(0, |k| k + 1);
        self.sentences.insert(key, indices);
        key
    }

    pub fn get(&self, key: usize) -> Option<&[usize]> {
        self.sentences.get(&key).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.sentences.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = usize> + '_ {
        self.sentences.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Total number of token slots across all sentences.
    pub fn index_count(&self) -> usize {
        self.sentences.values().map(Vec::len).sum()
    }

    /// Key of the sentence that owns `index`, if any.
    pub fn sentence_of(&self, index: usize) -> Option<usize> {
        self.sentences
            .iter()
            .find(|(_, indices)| indices.contains(&index))
            .map(|(k, _)| *k)
    }

    /// True when `index` is the last token of its sentence.
    pub fn is_boundary(&self, index: usize) -> bool {
        self.sentences
            .values()
            .any(|indices| indices.last() == Some(&index))
    }

    /// Folds slot `index + 1` into slot `index` after a merge.
    ///
    /// The owning sentence loses its last slot and every index after the
    /// merge point in the other sentences shifts down by one. Only valid
    /// when `index` is not a boundary.
    pub fn absorb_next(&mut self, index: usize) {
        let owner = self.sentence_of(index + 1);
        for (key, indices) in self.sentences.iter_mut() {
            if Some(*key) == owner {
                indices.pop();
                continue;
            }
            for slot in indices.iter_mut().filter(|slot| **slot > index) {
                *slot -= 1;
            }
        }
    }

    /// Drops every index `>= len`, then any sentence left with no indices.
    pub fn truncate(&mut self, len: usize) {
        for indices in self.sentences.values_mut() {
            indices.retain(|&slot| slot < len);
        }
        self.sentences.retain(|_, indices| !indices.is_empty());
    }

    /// Checks the density invariant against a sequence of `total` tokens.
    pub fn is_contiguous(&self, total: usize) -> bool {
        let mut expected = 0;
        for indices in self.sentences.values() {
            for &slot in indices {
                if slot != expected {
                    return false;
                }
                expected += 1;
            }
        }
        expected == total
    }
}

/// A compiled lesson. Read-only once built.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    name: String,
    sentences: Vec<String>,
    chord_sentences: Vec<String>,
    tokens: Vec<Token>,
    chords: Vec<ChordUnit>,
    sentence_map: SentenceMap,
    chord_translations: BTreeMap<ChordUnit, String>,
}

impl Lesson {
    pub(crate) fn new(
        name: String,
        sentences: Vec<String>,
        chord_sentences: Vec<String>,
        tokens: Vec<Token>,
        chords: Vec<ChordUnit>,
        sentence_map: SentenceMap,
        chord_translations: BTreeMap<ChordUnit, String>,
    ) -> Self {
        Lesson {
            name,
            sentences,
            chord_sentences,
            tokens,
            chords,
            sentence_map,
            chord_translations,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Filtered translation lines, including any that produced no tokens.
    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    /// Whitespace-joined chords per sentence, for display.
    pub fn chord_sentences(&self) -> &[String] {
        &self.chord_sentences
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn chords(&self) -> &[ChordUnit] {
        &self.chords
    }

    pub fn sentence_map(&self) -> &SentenceMap {
        &self.sentence_map
    }

    pub fn chord_translations(&self) -> &BTreeMap<ChordUnit, String> {
        &self.chord_translations
    }

    pub fn translation_of(&self, chord: &str) -> Option<&str> {
        self.chord_translations.get(chord).map(String::as_str)
    }

    pub fn sentence_chords(&self, key: usize) -> Option<Vec<&str>> {
        let indices = self.sentence_map.get(key)?;
        Some(
            indices
                .iter()
                .filter_map(|&i| self.chords.get(i).map(String::as_str))
                .collect(),
        )
    }

    pub fn sentence_tokens(&self, key: usize) -> Option<Vec<&str>> {
        let indices = self.sentence_map.get(key)?;
        Some(
            indices
                .iter()
                .filter_map(|&i| self.tokens.get(i).map(String::as_str))
                .collect(),
        )
    }
}
