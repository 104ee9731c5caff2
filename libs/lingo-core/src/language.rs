//! Known language table.

use serde::Serialize;

/// Language whose text is stored in an entry's `term`.
pub const PRIMARY_LANGUAGE: &str = "en";

/// Language a bare-string translation is filed under.
pub const DEFAULT_TARGET_LANGUAGE: &str = "sq";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

pub const LANGUAGES: &[Language] = &[
    Language { code: "en", name: "English" },
    Language { code: "sq", name: "Albanian" },
    Language { code: "es", name: "Spanish" },
    Language { code: "fr", name: "French" },
    Language { code: "de", name: "German" },
    Language { code: "it", name: "Italian" },
    Language { code: "ja", name: "Japanese" },
];

impl Language {
    /// Look up a language by code.
    pub fn find(code: &str) -> Option<&'static Language> {
        LANGUAGES.iter().find(|lang| lang.code == code)
    }

    pub fn is_known(code: &str) -> bool {
        Self::find(code).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_in_table() {
        assert!(Language::is_known(PRIMARY_LANGUAGE));
        assert!(Language::is_known(DEFAULT_TARGET_LANGUAGE));
    }

    #[test]
    fn find_by_code() {
        assert_eq!(Language::find("fr").map(|l| l.name), Some("French"));
        assert!(Language::find("xx").is_none());
    }
}
