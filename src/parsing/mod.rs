pub mod chord_reader;
pub mod line_filter;
pub mod tokenizer;

pub use chord_reader::read_chords;
pub use line_filter::filter_lines;
pub use tokenizer::{tokenize_sentence, yield_words};
