use super::dictionary::Dictionary;
use crate::error::LessonError;
use crate::types::lesson_data::{ChordUnit, SentenceMap, Token};

/// Converged output of [`ChordCompressor::compress`]. The three parts stay together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedChords {
    pub chords: Vec<ChordUnit>,
    pub tokens: Vec<Token>,
    pub sentence_map: SentenceMap,
}

/// Logs a chord/token count mismatch and cuts all three parts to the shorter length.
pub(crate) fn align_lengths(
    chords: &mut Vec<ChordUnit>,
    tokens: &mut Vec<Token>,
    sentence_map: &mut SentenceMap,
) {
    if chords.len() == tokens.len() {
        return;
    }
    log::error!(
        "Expected {} chords to match {} translations. That they don't indicates a bug in the lesson files.",
        chords.len(),
        tokens.len()
    );
    let len = chords.len().min(tokens.len());
    chords.truncate(len);
    tokens.truncate(len);
    sentence_map.truncate(len);
}

/// Merges adjacent chords when the dictionary has a single combined stroke
/// for exactly the same two words.
///
/// "he is" typed as `HE` then `S` also exists as `HE/S`; a lesson showing
/// two separate steps for it would drill a stroke nobody writes.
pub struct ChordCompressor<'d, D: Dictionary + ?Sized> {
    dictionary: &'d D,
}

impl<'d, D: Dictionary + ?Sized> ChordCompressor<'d, D> {
    pub fn new(dictionary: &'d D) -> Self {
        ChordCompressor { dictionary }
    }

    /// Repeats merge scans until one leaves chords and tokens unchanged.
    pub fn compress(
        &self,
        mut chords: Vec<ChordUnit>,
        mut tokens: Vec<Token>,
        mut sentence_map: SentenceMap,
    ) -> Result<CompressedChords, LessonError> {
        align_lengths(&mut chords, &mut tokens, &mut sentence_map);

        let initial_len = chords.len();
        let mut scans = 0;
        loop {
            let (next_chords, next_tokens) = self.scan(&chords, &tokens, &mut sentence_map)?;
            scans += 1;
            log::debug!("Scan {}: {} chords -> {}", scans, chords.len(), next_chords.len());
            if next_chords == chords && next_tokens == tokens {
                break;
            }
            chords = next_chords;
            tokens = next_tokens;
        }

        if chords.len() != initial_len {
            log::info!(
                "Compressed {} chords to {} in {} scans",
                initial_len,
                chords.len(),
                scans
            );
        }

        Ok(CompressedChords { chords, tokens, sentence_map })
    }

    /// One left-to-right pass. `sentence_map` is rewritten as merges happen.
    ///
    /// The map always describes the output sequence followed by the
    /// unread input, so the pair starting at input `i` sits at map slot
    /// `out_chords.len()`.
    fn scan(
        &self,
        chords: &[ChordUnit],
        tokens: &[Token],
        sentence_map: &mut SentenceMap,
    ) -> Result<(Vec<ChordUnit>, Vec<Token>), LessonError> {
        let len = chords.len().min(tokens.len());
        let mut out_chords = Vec::with_capacity(len);
        let mut out_tokens = Vec::with_capacity(len);

        let mut i = 0;
        while i < len {
            if i + 1 == len {
                out_chords.push(chords[i].clone());
                out_tokens.push(tokens[i].clone());
                break;
            }

            let Some((merged_chord, phrase)) =
                self.merge_candidate(&chords[i], &chords[i + 1], &tokens[i], &tokens[i + 1])
            else {
                out_chords.push(chords[i].clone());
                out_tokens.push(tokens[i].clone());
                i += 1;
                continue;
            };

            let slot = out_chords.len();
            if sentence_map.is_boundary(slot) {
                return Err(LessonError::CrossBoundaryMerge {
                    first: tokens[i].clone(),
                    second: tokens[i + 1].clone(),
                });
            }

            log::debug!("Merging {} + {} into {} ({})", chords[i], chords[i + 1], merged_chord, phrase);
            out_chords.push(merged_chord);
            out_tokens.push(phrase);
            sentence_map.absorb_next(slot);
            i += 2;
        }

        Ok((out_chords, out_tokens))
    }

    /// The combined chord and phrase for two adjacent pairs, if the dictionary agrees.
    ///
    /// `A/B` is tried before `AB`; only the first one present is compared.
    fn merge_candidate(
        &self,
        first_chord: &str,
        second_chord: &str,
        first_token: &str,
        second_token: &str,
    ) -> Option<(ChordUnit, Token)> {
        let slashed = format!("{}/{}", first_chord, second_chord);
        let joined = format!("{}{}", first_chord, second_chord);

        let (chord, translation) = match self.dictionary.lookup(&slashed) {
            Some(translation) => (slashed, translation),
            None => {
                let translation = self.dictionary.lookup(&joined)?;
                (joined, translation)
            }
        };

        let proposed = format!("{} {}", first_token, second_token);
        if proposed.to_lowercase() == translation.to_lowercase() {
            Some((chord, proposed))
        } else {
            None
        }
    }
}
