use crate::error::DictionaryError;
use std::collections::HashMap;
use std::fs;
use std::hash::BuildHasher;
use std::path::Path;

/// Read-only stroke to phrase lookup consulted by the compressor.
pub trait Dictionary {
    fn lookup(&self, chord: &str) -> Option<&str>;
}

impl<S: BuildHasher> Dictionary for HashMap<String, String, S> {
    fn lookup(&self, chord: &str) -> Option<&str> {
        self.get(chord).map(String::as_str)
    }
}

/// A Plover-style dictionary: `{"STROKE/STROKE": "translation"}`.
#[derive(Debug, Default, Clone)]
pub struct StenoDictionary {
    entries: HashMap<String, String>,
}

impl StenoDictionary {
    pub fn new() -> Self {
        StenoDictionary { entries: HashMap::new() }
    }

    pub fn from_json_str(json: &str) -> Result<Self, DictionaryError> {
        let entries: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(StenoDictionary { entries })
    }

    /// Loads a JSON dictionary file from disk.
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        let contents = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::from_json_str(&contents)?;
        log::info!("Loaded {} dictionary entries from {:?}", dictionary.len(), path);
        Ok(dictionary)
    }

    pub fn insert(&mut self, chord: impl Into<String>, translation: impl Into<String>) {
        self.entries.insert(chord.into(), translation.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Dictionary for StenoDictionary {
    fn lookup(&self, chord: &str) -> Option<&str> {
        self.entries.get(chord).map(String::as_str)
    }
}

impl FromIterator<(String, String)> for StenoDictionary {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        StenoDictionary { entries: iter.into_iter().collect() }
    }
}
