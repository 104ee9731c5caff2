//! Test fixtures for persisted data.

use lingo_core::{Category, VocabularyEntry};

/// A small stored collection in the current JSON layout.
pub fn small_vocabulary() -> Vec<VocabularyEntry> {
    vec![
        VocabularyEntry::new("100", "Apple", "Mollë", Category::Food),
        VocabularyEntry::new("101", "Bread", "Bukë", Category::Food),
        VocabularyEntry::new("102", "Mother", "Nënë", Category::Family),
        VocabularyEntry::new("103", "Red", "E kuqe", Category::Colors),
    ]
}

pub fn small_vocabulary_json() -> String {
    serde_json::to_string(&small_vocabulary()).unwrap()
}

/// A collection written by an older app version: `word`/`meaning` fields,
/// plain-string translations and no counters.
pub fn legacy_vocabulary_json() -> &'static str {
    r#"[
        {"id": "1", "word": "Hello", "meaning": "Përshëndetje", "category": "Greetings"},
        {
            "id": "2",
            "word": "One",
            "meaning": "Një",
            "category": "Numbers",
            "audioUrl": "https://x/one.mp3"
        }
    ]"#
}

/// Terms used to fill search history.
pub fn search_terms(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("term {i}")).collect()
}
