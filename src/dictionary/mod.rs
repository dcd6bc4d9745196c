use std::collections::HashSet;
use std::path::Path;
use tokio::fs;

use crate::error::DictionaryError;

/// Set of valid upper-case words, read-only after load
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Load a newline-delimited word list. Each line is trimmed and upper-cased.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| DictionaryError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let dictionary = Self::from_words(content.lines());
        if dictionary.is_empty() {
            return Err(DictionaryError::Empty {
                path: path.to_path_buf(),
            });
        }

        tracing::info!(
            "Loaded {} words into dictionary from {}",
            dictionary.len(),
            path.display()
        );

        Ok(dictionary)
    }

    /// Build a dictionary from in-memory words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_uppercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self { words }
    }

    /// Check if a word exists in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
