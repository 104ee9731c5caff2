//! Core vocabulary library shared by every list, lesson and practice view.
//!
//! Provides:
//! - Vocabulary data model (entries, categories, translations by language)
//! - Query engine: filter, sort and paginate a word list
//! - Quiz engine: randomized multiple-choice quizzes with scoring
//! - Answer matching and pronunciation similarity
//! - The bundled default vocabulary and known language table

pub mod collation;
pub mod error;
pub mod history;
pub mod language;
pub mod matching;
pub mod query;
pub mod quiz;
pub mod seed;
pub mod settings;
pub mod stats;
pub mod types;

pub use error::{QuizError, Result, VocabError};
pub use history::{SearchHistory, MAX_SEARCH_HISTORY};
pub use language::{Language, DEFAULT_TARGET_LANGUAGE, LANGUAGES, PRIMARY_LANGUAGE};
pub use matching::{answers_match, check_pronunciation, PronunciationCheck};
pub use query::{ListedEntry, Marks, Query, QueryPage, SortField, DEFAULT_PAGE_SIZE};
pub use quiz::{AnswerOutcome, Quiz, QuizField, QuizQuestion, QuizState, QuizSummary, Verdict};
pub use seed::default_vocabulary;
pub use settings::{Settings, Theme};
pub use stats::VocabularyStats;
pub use types::{Category, CategoryFilter, Direction, Translation, VocabularyEntry};
