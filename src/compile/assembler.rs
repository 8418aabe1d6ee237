use super::compressor::{align_lengths, ChordCompressor};
use super::dictionary::Dictionary;
use super::sentence_map::build_sentence_map;
use crate::config::PairingPolicy;
use crate::error::LessonError;
use crate::parsing::chord_reader::{chord_sentences, read_chords};
use crate::parsing::line_filter::filter_lines;
use crate::parsing::tokenizer::yield_words;
use crate::types::lesson_data::{ChordUnit, Lesson, SentenceMap};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Builds a [`Lesson`] from a translation file and its chord file.
///
/// Chords are only compressed when a dictionary is supplied.
pub struct LessonAssembler<'d, D: Dictionary + ?Sized> {
    compressor: Option<ChordCompressor<'d, D>>,
    pairing: PairingPolicy,
}

impl<'d, D: Dictionary + ?Sized> LessonAssembler<'d, D> {
    pub fn new(dictionary: Option<&'d D>, pairing: PairingPolicy) -> Self {
        LessonAssembler {
            compressor: dictionary.map(ChordCompressor::new),
            pairing,
        }
    }

    pub fn compile_files(
        &self,
        translation_path: &Path,
        chords_path: &Path,
    ) -> Result<Lesson, LessonError> {
        let translation_text = read_lesson_file(translation_path)?;
        let chord_text = read_lesson_file(chords_path)?;
        let name = translation_path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();
        self.compile_text(&name, &translation_text, &chord_text)
    }

    pub fn compile_text(
        &self,
        name: &str,
        translation_text: &str,
        chord_text: &str,
    ) -> Result<Lesson, LessonError> {
        let sentences = filter_lines(translation_text);
        let raw_chords = read_chords(chord_text);

        let (tokens, sentence_map) = build_sentence_map(&sentences);
        log::debug!(
            "Lesson '{}': {} sentences, {} tokens, {} chords",
            name,
            sentence_map.len(),
            tokens.len(),
            raw_chords.len()
        );

        let (chords, tokens, sentence_map) = match &self.compressor {
            Some(compressor) => {
                let compressed = compressor.compress(raw_chords.clone(), tokens, sentence_map)?;
                (compressed.chords, compressed.tokens, compressed.sentence_map)
            }
            None => {
                let mut chords = raw_chords.clone();
                let mut tokens = tokens;
                let mut sentence_map = sentence_map;
                align_lengths(&mut chords, &mut tokens, &mut sentence_map);
                (chords, tokens, sentence_map)
            }
        };

        let chord_sentences = if chords != raw_chords {
            regenerate_chord_sentences(&sentence_map, &chords)
        } else {
            chord_sentences(chord_text)
        };

        let chord_translations = self.translation_lookup(&chords, translation_text)?;

        Ok(Lesson::new(
            name.to_string(),
            sentences,
            chord_sentences,
            tokens,
            chords,
            sentence_map,
            chord_translations,
        ))
    }

    /// Pairs chords with the coarse, punctuation-attached word list.
    fn translation_lookup(
        &self,
        chords: &[ChordUnit],
        translation_text: &str,
    ) -> Result<BTreeMap<ChordUnit, String>, LessonError> {
        let translations: Vec<String> = filter_lines(translation_text)
            .iter()
            .flat_map(|line| yield_words(line))
            .collect();

        if chords.len() != translations.len() {
            match self.pairing {
                PairingPolicy::Strict => {
                    return Err(LessonError::PairingMismatch {
                        chords: chords.len(),
                        translations: translations.len(),
                    });
                }
                PairingPolicy::Warn => log::warn!(
                    "Pairing {} chords with {} translations; the lookup stops at the shorter list",
                    chords.len(),
                    translations.len()
                ),
            }
        }

        Ok(chords.iter().cloned().zip(translations).collect())
    }
}

/// Rebuilds the per-sentence chord strings from a (possibly compressed) sequence.
pub fn regenerate_chord_sentences(sentence_map: &SentenceMap, chords: &[ChordUnit]) -> Vec<String> {
    sentence_map
        .iter()
        .map(|(_, indices)| {
            indices
                .iter()
                .filter_map(|&i| chords.get(i).map(String::as_str))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn read_lesson_file(path: &Path) -> Result<String, LessonError> {
    fs::read_to_string(path).map_err(|source| LessonError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::dictionary::StenoDictionary;

    const TRANSLATION: &str = "<lesson name=foo>\nHe is happy\nroses are red\n";
    const CHORDS: &str = "<lesson name=foo>\nHE S HAPBG\nROEZ R RED\n";

    fn he_is() -> StenoDictionary {
        [("HE/S".to_string(), "he is".to_string())].into_iter().collect()
    }

    #[test]
    fn without_dictionary_nothing_is_compressed() {
        let assembler: LessonAssembler<StenoDictionary> = LessonAssembler::new(None, PairingPolicy::Warn);
        let lesson = assembler.compile_text("foo", TRANSLATION, CHORDS).unwrap();

        assert_eq!(lesson.chords().len(), 6);
        assert_eq!(lesson.tokens().len(), 6);
        assert_eq!(lesson.chord_sentences(), &["HE S HAPBG".to_string(), "ROEZ R RED".to_string()]);
        assert_eq!(lesson.translation_of("HAPBG"), Some("happy"));
    }

    #[test]
    fn without_dictionary_count_drift_is_truncated() {
        let assembler: LessonAssembler<StenoDictionary> = LessonAssembler::new(None, PairingPolicy::Warn);
        let lesson = assembler.compile_text("x", "roses are red,\n", "ROEZ R RED\n").unwrap();

        assert_eq!(lesson.chords(), &["ROEZ", "R", "RED"]);
        assert_eq!(lesson.tokens(), &["roses", "are", "red"]);
        assert_eq!(lesson.chords().len(), lesson.tokens().len());
        assert!(lesson.sentence_map().is_contiguous(3));
        assert_eq!(lesson.chord_sentences(), &["ROEZ R RED".to_string()]);
    }

    #[test]
    fn compression_regenerates_chord_sentences() {
        let dictionary = he_is();
        let assembler = LessonAssembler::new(Some(&dictionary), PairingPolicy::Warn);
        let lesson = assembler.compile_text("foo", TRANSLATION, CHORDS).unwrap();

        assert_eq!(lesson.chords()[0], "HE/S");
        assert_eq!(lesson.tokens()[0], "he is");
        assert_eq!(lesson.chord_sentences(), &["HE/S HAPBG".to_string(), "ROEZ R RED".to_string()]);
        assert!(lesson.sentence_map().is_contiguous(lesson.tokens().len()));
    }

    #[test]
    fn strict_pairing_rejects_count_drift() {
        let dictionary = he_is();
        let assembler = LessonAssembler::new(Some(&dictionary), PairingPolicy::Strict);
        let err = assembler.compile_text("foo", TRANSLATION, CHORDS).unwrap_err();
        assert!(matches!(
            err,
            LessonError::PairingMismatch { chords: 5, translations: 6 }
        ));
    }

    #[test]
    fn warn_pairing_zips_to_shorter_list() {
        let dictionary = he_is();
        let assembler = LessonAssembler::new(Some(&dictionary), PairingPolicy::Warn);
        let lesson = assembler.compile_text("foo", TRANSLATION, CHORDS).unwrap();
        assert_eq!(lesson.chord_translations().len(), 5);
        assert_eq!(lesson.translation_of("HE/S"), Some("he"));
    }

    #[test]
    fn regenerated_strings_split_back_into_sentence_chords() {
        let dictionary = he_is();
        let assembler = LessonAssembler::new(Some(&dictionary), PairingPolicy::Warn);
        let lesson = assembler.compile_text("foo", TRANSLATION, CHORDS).unwrap();

        for (position, key) in lesson.sentence_map().keys().enumerate() {
            let split: Vec<&str> = lesson.chord_sentences()[position].split_whitespace().collect();
            assert_eq!(Some(split), lesson.sentence_chords(key));
        }
    }

    #[test]
    fn missing_file_is_reported_with_its_path() {
        let assembler: LessonAssembler<StenoDictionary> = LessonAssembler::new(None, PairingPolicy::Warn);
        let err = assembler
            .compile_files(Path::new("/nonexistent/foo.les"), Path::new("/nonexistent/foo.chd"))
            .unwrap_err();
        match err {
            LessonError::Io { path, .. } => assert_eq!(path, Path::new("/nonexistent/foo.les")),
            other => panic!("unexpected error {:?}", other),
        }
    }
}
