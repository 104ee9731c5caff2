//! Core types for the vocabulary engine.

use crate::language::{DEFAULT_TARGET_LANGUAGE, PRIMARY_LANGUAGE};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Vocabulary category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Greetings,
    Thanks,
    Farewell,
    Others,
    Numbers,
    Colors,
    Food,
    Family,
}

impl Default for Category {
    fn default() -> Self {
        Self::Others
    }
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 8] = [
        Self::Greetings,
        Self::Thanks,
        Self::Farewell,
        Self::Others,
        Self::Numbers,
        Self::Colors,
        Self::Food,
        Self::Family,
    ];

    /// Get the category name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greetings => "Greetings",
            Self::Thanks => "Thanks",
            Self::Farewell => "Farewell",
            Self::Others => "Others",
            Self::Numbers => "Numbers",
            Self::Colors => "Colors",
            Self::Food => "Food",
            Self::Family => "Family",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category selection in a query: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => *c == category,
        }
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        if value == "All" {
            return Ok(Self::All);
        }
        Category::from_str(&value)
            .map(Self::Only)
            .ok_or_else(|| format!("unknown category: {value}"))
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => "All".to_string(),
            CategoryFilter::Only(c) => c.as_str().to_string(),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

/// Which side of an entry is the "question" language.
///
/// `Forward` searches and prompts by term; `Reverse` by translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl Direction {
    pub fn is_reverse(self) -> bool {
        matches!(self, Self::Reverse)
    }
}

/// Translations of a term keyed by language code.
///
/// Persisted data may hold a bare string (the two-language layout); it is
/// read as a one-entry map under the default target language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "TranslationRepr")]
pub struct Translation(BTreeMap<String, String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum TranslationRepr {
    Single(String),
    ByLanguage(BTreeMap<String, String>),
}

impl From<TranslationRepr> for Translation {
    fn from(repr: TranslationRepr) -> Self {
        match repr {
            TranslationRepr::Single(text) => Self::single(text),
            TranslationRepr::ByLanguage(map) => Self(map),
        }
    }
}

impl Serialize for Translation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl Translation {
    /// A one-entry translation under the default target language.
    pub fn single(text: impl Into<String>) -> Self {
        let mut map = BTreeMap::new();
        map.insert(DEFAULT_TARGET_LANGUAGE.to_string(), text.into());
        Self(map)
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.0.get(code).map(String::as_str)
    }

    pub fn insert(&mut self, code: impl Into<String>, text: impl Into<String>) {
        self.0.insert(code.into(), text.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when there is no non-whitespace text in any language.
    pub fn is_blank(&self) -> bool {
        self.0.values().all(|text| text.trim().is_empty())
    }

    /// Copy with every value trimmed and empty values dropped.
    pub fn trimmed(&self) -> Self {
        Self(
            self.0
                .iter()
                .filter_map(|(code, text)| {
                    let text = text.trim();
                    (!text.is_empty()).then(|| (code.clone(), text.to_string()))
                })
                .collect(),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<&str> for Translation {
    fn from(text: &str) -> Self {
        Self::single(text)
    }
}

impl From<String> for Translation {
    fn from(text: String) -> Self {
        Self::single(text)
    }
}

impl From<BTreeMap<String, String>> for Translation {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Translation {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// A single term/translation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyEntry {
    pub id: String,
    #[serde(alias = "word")]
    pub term: String,
    #[serde(alias = "meaning")]
    pub translation: Translation,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub view_count: u32,
    #[serde(default)]
    pub play_count: u32,
}

impl VocabularyEntry {
    /// Create an entry with zero counts and no audio.
    pub fn new(
        id: impl Into<String>,
        term: impl Into<String>,
        translation: impl Into<Translation>,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            term: term.into(),
            translation: translation.into(),
            category,
            audio_url: None,
            view_count: 0,
            play_count: 0,
        }
    }

    pub fn with_audio(mut self, url: impl Into<String>) -> Self {
        self.audio_url = Some(url.into());
        self
    }

    pub fn has_audio(&self) -> bool {
        self.audio_url.is_some()
    }

    /// Text of this entry in the given language.
    ///
    /// The primary language resolves to `term` unless a translation for it
    /// was stored explicitly. A one-entry map answers for any other code.
    /// Returns an empty string when nothing applies.
    pub fn lookup_translation(&self, code: &str) -> &str {
        if let Some(text) = self.translation.get(code) {
            return text;
        }
        if code == PRIMARY_LANGUAGE {
            return &self.term;
        }
        if self.translation.len() == 1 {
            if let Some((_, text)) = self.translation.iter().next() {
                return text;
            }
        }
        ""
    }

    /// Question-side text for a direction.
    pub fn primary_text(&self, direction: Direction, language: &str) -> &str {
        match direction {
            Direction::Forward => &self.term,
            Direction::Reverse => self.lookup_translation(language),
        }
    }

    /// Answer-side text for a direction.
    pub fn secondary_text(&self, direction: Direction, language: &str) -> &str {
        match direction {
            Direction::Forward => self.lookup_translation(language),
            Direction::Reverse => &self.term,
        }
    }
}
