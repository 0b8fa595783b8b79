//! Quote Store — the famous-quote collection loaded once at startup.

use std::io::ErrorKind;
use std::path::Path;

use rand::seq::IndexedRandom;
use rand::Rng;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::quotes::formatter::normalize;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read quote file: {0}")]
    Io(#[from] std::io::Error),

    #[error("quote file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("quote file must contain a JSON array of objects")]
    NotAnArray,
}

/// A normalized famous quote. `text` and `author` are never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRecord {
    pub text: String,
    pub author: String,
    pub source: Option<String>,
}

impl QuoteRecord {
    /// Builds a record from one JSON entry, or `None` if the entry is unusable.
    fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let field = |key: &str| -> Option<String> {
            match obj.get(key) {
                None | Some(Value::Null) => Some(String::new()),
                Some(Value::String(s)) => Some(normalize(s)),
                Some(_) => None,
            }
        };

        let text = field("text")?;
        let author = field("author")?;
        let source = field("source")?;

        if text.is_empty() || author.is_empty() {
            return None;
        }

        Some(QuoteRecord {
            text,
            author,
            source: (!source.is_empty()).then_some(source),
        })
    }
}

/// Read-only, ordered collection of quotes. Shared behind an `Arc` after startup.
#[derive(Debug, Clone, Default)]
pub struct QuoteStore {
    records: Vec<QuoteRecord>,
}

impl QuoteStore {
    #[cfg(test)]
    pub fn new(records: Vec<QuoteRecord>) -> Self {
        Self { records }
    }

    /// Loads quotes from `path`. A missing file yields an empty store.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("Quote file {} not found, starting with no quotes", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let store = Self::from_json(&raw)?;
        info!("Loaded {} quotes from {}", store.len(), path.display());
        Ok(store)
    }

    /// Parses a JSON array, dropping entries without a usable text and author.
    pub fn from_json(raw: &str) -> Result<Self, StoreError> {
        let value: Value = serde_json::from_str(raw)?;
        let entries = value.as_array().ok_or(StoreError::NotAnArray)?;

        let records: Vec<QuoteRecord> = entries.iter().filter_map(QuoteRecord::from_value).collect();

        let dropped = entries.len() - records.len();
        if dropped > 0 {
            debug!("Dropped {dropped} malformed quote entries");
        }

        Ok(Self { records })
    }

    /// Uniform random pick; `None` when the store is empty.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&QuoteRecord> {
        self.records.choose(rng)
    }

    #[cfg(test)]
    pub fn records(&self) -> &[QuoteRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Write;

    #[test]
    fn test_drops_record_with_empty_author() {
        let store = QuoteStore::from_json(
            r#"[
                {"text": "Lonely words.", "author": "   "},
                {"text": "Do the work.", "author": "A. Writer"}
            ]"#,
        )
        .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].text, "Do the work.");
        assert_eq!(store.records()[0].author, "A. Writer");
    }

    #[test]
    fn test_normalizes_fields() {
        let store = QuoteStore::from_json(
            r#"[{"text": "  Act\n  now. ", "author": "B.\tAuthor", "source": "  Essays  "}]"#,
        )
        .unwrap();

        assert_eq!(
            store.records()[0],
            QuoteRecord {
                text: "Act now.".to_string(),
                author: "B. Author".to_string(),
                source: Some("Essays".to_string()),
            }
        );
    }

    #[test]
    fn test_blank_source_becomes_none() {
        let store =
            QuoteStore::from_json(r#"[{"text": "Rest.", "author": "C", "source": "  "}]"#).unwrap();
        assert_eq!(store.records()[0].source, None);
    }

    #[test]
    fn test_malformed_entries_are_dropped() {
        let store = QuoteStore::from_json(
            r#"[
                "just a string",
                {"text": 42, "author": "Numbers"},
                {"author": "No Text"},
                {"text": "Kept.", "author": "D", "source": null}
            ]"#,
        )
        .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].text, "Kept.");
    }

    #[test]
    fn test_keeps_duplicates_in_order() {
        let store = QuoteStore::from_json(
            r#"[{"text": "Again.", "author": "E"}, {"text": "Again.", "author": "E"}]"#,
        )
        .unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_top_level_object_is_rejected() {
        let err = QuoteStore::from_json(r#"{"text": "x", "author": "y"}"#).unwrap_err();
        assert!(matches!(err, StoreError::NotAnArray));
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = QuoteStore::load(&dir.path().join("famous_quotes.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"text": "From disk.", "author": "F"}}]"#).unwrap();

        let store = QuoteStore::load(file.path()).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_pick() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(QuoteStore::default().pick(&mut rng).is_none());

        let store = QuoteStore::from_json(
            r#"[{"text": "One.", "author": "G"}, {"text": "Two.", "author": "H"}]"#,
        )
        .unwrap();
        for _ in 0..10 {
            let picked = store.pick(&mut rng).unwrap();
            assert!(store.records().contains(picked));
        }
    }
}
