//! Application state shared by every screen.

use crate::settings::SettingsStore;
use crate::storage::Storage;
use crate::vocabulary::VocabularyStore;
use lingo_core::quiz::DEFAULT_QUESTION_COUNT;
use lingo_core::{Query, Quiz, QuizField};
use rand::Rng;
use std::sync::Arc;

enum Phase {
    Loading,
    Ready {
        vocabulary: VocabularyStore,
        settings: SettingsStore,
    },
}

/// Owns the stores once persisted data has been read.
///
/// Until [`AppState::load`] runs, every accessor returns `None`, so nothing
/// can be derived from a half-loaded collection.
pub struct AppState {
    storage: Arc<dyn Storage>,
    phase: Phase,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            phase: Phase::Loading,
        }
    }

    /// Read every store from storage and become ready.
    pub fn load(&mut self) {
        let vocabulary = VocabularyStore::load(self.storage.clone());
        let settings = SettingsStore::load(self.storage.clone());
        self.phase = Phase::Ready {
            vocabulary,
            settings,
        };
        tracing::info!("app state ready");
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.phase, Phase::Ready { .. })
    }

    pub fn vocabulary(&self) -> Option<&VocabularyStore> {
        match &self.phase {
            Phase::Ready { vocabulary, .. } => Some(vocabulary),
            Phase::Loading => None,
        }
    }

    pub fn vocabulary_mut(&mut self) -> Option<&mut VocabularyStore> {
        match &mut self.phase {
            Phase::Ready { vocabulary, .. } => Some(vocabulary),
            Phase::Loading => None,
        }
    }

    pub fn settings(&self) -> Option<&SettingsStore> {
        match &self.phase {
            Phase::Ready { settings, .. } => Some(settings),
            Phase::Loading => None,
        }
    }

    pub fn settings_mut(&mut self) -> Option<&mut SettingsStore> {
        match &mut self.phase {
            Phase::Ready { settings, .. } => Some(settings),
            Phase::Loading => None,
        }
    }

    /// Start a quiz over the entries matching `query`. Questions use the
    /// query's direction and language, so they read like the filtered list.
    ///
    /// Returns `None` while loading.
    pub fn start_quiz<R: Rng + ?Sized>(&self, query: &Query, rng: &mut R) -> Option<Quiz> {
        let vocabulary = self.vocabulary()?;
        let field = QuizField::new(query.direction, query.language.clone());
        let candidates = vocabulary.matching(query);
        let mut quiz = Quiz::new();
        let count = quiz.start(&candidates, &field, DEFAULT_QUESTION_COUNT, rng);
        tracing::debug!(count, candidates = candidates.len(), "quiz started");
        Some(quiz)
    }

    /// Wipe every persisted key and reload both stores from defaults.
    pub fn clear_all_data(&mut self) {
        if let Err(e) = self.storage.clear() {
            tracing::warn!(error = %e, "failed to clear storage");
        }
        tracing::info!("all data cleared");
        self.load();
    }
}
