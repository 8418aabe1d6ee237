pub mod lesson_data;

pub use lesson_data::{ChordUnit, Lesson, SentenceMap, Token};
