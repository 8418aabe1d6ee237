use std::path::PathBuf;

/// Failures that abort compiling a lesson.
#[derive(Debug, thiserror::Error)]
pub enum LessonError {
    #[error("Failed to read lesson file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Cannot compress word across sentence boundaries. Please alter lesson file so that \"{first}\" and \"{second}\" are on same line."
    )]
    CrossBoundaryMerge { first: String, second: String },

    #[error("Lesson has {chords} chords but {translations} translations; refusing to pair them")]
    PairingMismatch { chords: usize, translations: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("Failed to read dictionary {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Dictionary is not a JSON object of stroke to translation")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path:?}. Please ensure it exists.")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config")]
    Toml(#[from] toml::de::Error),

    #[error("dictionary_path ('{0:?}') is not a valid file.")]
    MissingDictionary(PathBuf),
}
