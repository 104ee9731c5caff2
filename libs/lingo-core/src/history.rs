//! Recent search terms.

use serde::{Deserialize, Serialize};

/// Maximum number of remembered search terms.
pub const MAX_SEARCH_HISTORY: usize = 10;

/// Distinct search terms, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchHistory(Vec<String>);

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a search. Blank terms are ignored; a repeated term moves to
    /// the front. Returns whether the history changed.
    pub fn push(&mut self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return false;
        }
        if self.0.first().map(String::as_str) == Some(term) {
            return false;
        }
        self.0.retain(|t| t != term);
        self.0.insert(0, term.to_string());
        self.0.truncate(MAX_SEARCH_HISTORY);
        true
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn terms(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Enforce the cap and distinctness on data read back from storage.
    pub fn normalized(self) -> Self {
        let mut out = Self::new();
        for term in self.0.iter().rev() {
            out.push(term);
        }
        out
    }
}
