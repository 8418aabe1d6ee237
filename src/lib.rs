//! Compiles a lesson's translation file and chord file into one [`Lesson`]:
//! tokens, chord units aligned with them, and the sentence each belongs to.

pub mod compile;
pub mod config;
pub mod error;
pub mod parsing;
pub mod types;

pub use compile::{Dictionary, LessonAssembler, StenoDictionary};
pub use config::{Config, PairingPolicy};
pub use error::LessonError;
pub use types::Lesson;
