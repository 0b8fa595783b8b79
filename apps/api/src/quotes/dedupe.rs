//! Dedupe Guard — same-run repeat detection for the CLI.

use std::collections::HashSet;

use sha2::{Digest, Sha256};

const FINGERPRINT_LEN: usize = 16;

/// Short content fingerprint of the lowercased text.
pub fn fingerprint(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.to_lowercase().as_bytes());
    let hash = hex::encode(hasher.finalize());
    hash[..FINGERPRINT_LEN].to_string()
}

/// Fingerprints seen during one CLI run. Never persisted.
#[derive(Debug, Default)]
pub struct SeenHashes {
    seen: HashSet<String>,
}

impl SeenHashes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if an equivalent text was already accepted, otherwise
    /// records it and returns `true`.
    pub fn accept(&mut self, text: &str) -> bool {
        self.seen.insert(fingerprint(text))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.seen.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_then_reject_same_text() {
        let mut seen = SeenHashes::new();
        assert!(seen.accept("Keep going."));
        assert!(!seen.accept("Keep going."));
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn test_accept_is_case_insensitive() {
        let mut seen = SeenHashes::new();
        assert!(seen.accept("Keep Going."));
        assert!(!seen.accept("KEEP going."));
    }

    #[test]
    fn test_distinct_texts_both_accepted() {
        let mut seen = SeenHashes::new();
        assert!(seen.accept("First."));
        assert!(seen.accept("Second."));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_fingerprint_shape() {
        let fp = fingerprint("Anything");
        assert_eq!(fp.len(), FINGERPRINT_LEN);
        assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(fp, fingerprint("ANYTHING"));
    }
}
