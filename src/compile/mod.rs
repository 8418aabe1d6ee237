pub mod assembler;
pub mod compressor;
pub mod dictionary;
pub mod sentence_map;

pub use assembler::{regenerate_chord_sentences, LessonAssembler};
pub use compressor::{ChordCompressor, CompressedChords};
pub use dictionary::{Dictionary, StenoDictionary};
pub use sentence_map::build_sentence_map;
