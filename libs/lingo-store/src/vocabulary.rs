//! Vocabulary store: entries, favorites, learned/known marks and search history.

use crate::ids::IdGenerator;
use crate::storage::{keys, load_json, save_json, Storage};
use lingo_core::query::{self, Marks};
use lingo_core::{
    check_pronunciation, default_vocabulary, Category, PronunciationCheck, Query, QueryPage,
    Result, SearchHistory, Translation, VocabError, VocabularyEntry, VocabularyStats,
};
use std::sync::Arc;

/// Owns the word list and everything keyed by entry id.
///
/// Every mutation updates memory first and then writes the affected keys;
/// a failed write is logged and the mutation stands.
pub struct VocabularyStore {
    storage: Arc<dyn Storage>,
    entries: Vec<VocabularyEntry>,
    favorites: Vec<String>,
    learned: Vec<String>,
    known: Vec<String>,
    history: SearchHistory,
    ids: IdGenerator,
}

impl VocabularyStore {
    /// Read persisted state, falling back to the bundled default set when no
    /// vocabulary is stored or it cannot be read.
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let entries: Vec<VocabularyEntry> =
            load_json(&*storage, keys::VOCABULARY).unwrap_or_else(|| {
                tracing::info!("no stored vocabulary, using default set");
                default_vocabulary()
            });
        let favorites: Vec<String> = load_json(&*storage, keys::FAVORITES).unwrap_or_default();
        let learned: Vec<String> = load_json(&*storage, keys::LEARNED).unwrap_or_default();
        let known: Vec<String> = load_json(&*storage, keys::KNOWN).unwrap_or_default();
        let history = load_json::<SearchHistory>(&*storage, keys::SEARCH_HISTORY)
            .unwrap_or_default()
            .normalized();

        let mut ids = IdGenerator::new();
        for entry in &entries {
            ids.observe(&entry.id);
        }

        let mut store = Self {
            storage,
            entries,
            favorites,
            learned,
            known,
            history,
            ids,
        };
        store.prune_dangling_marks();
        tracing::info!(
            entries = store.entries.len(),
            favorites = store.favorites.len(),
            "vocabulary loaded"
        );
        store
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&VocabularyEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|f| f == id)
    }

    pub fn learned(&self) -> &[String] {
        &self.learned
    }

    pub fn known(&self) -> &[String] {
        &self.known
    }

    pub fn search_history(&self) -> &SearchHistory {
        &self.history
    }

    /// Add a new word at the front of the list.
    pub fn add(
        &mut self,
        term: &str,
        translation: impl Into<Translation>,
        category: Category,
        audio_url: Option<&str>,
    ) -> Result<VocabularyEntry> {
        let (term, translation) = validated(term, translation.into())?;

        let folded = term.to_lowercase();
        if self.entries.iter().any(|e| e.term.to_lowercase() == folded) {
            return Err(VocabError::Duplicate { term });
        }

        let mut id = self.ids.next_id();
        while self.get(&id).is_some() {
            id = self.ids.next_id();
        }
        let entry = VocabularyEntry {
            id,
            term,
            translation,
            category,
            audio_url: clean_audio_url(audio_url),
            view_count: 0,
            play_count: 0,
        };
        self.entries.insert(0, entry.clone());
        tracing::debug!(id = %entry.id, term = %entry.term, "word added");
        self.save_entries();
        Ok(entry)
    }

    /// Replace the editable fields of an existing word. Counts are kept.
    pub fn update(
        &mut self,
        id: &str,
        term: &str,
        translation: impl Into<Translation>,
        category: Category,
        audio_url: Option<&str>,
    ) -> Result<VocabularyEntry> {
        let index = self.index_of(id)?;
        let (term, translation) = validated(term, translation.into())?;

        let entry = &mut self.entries[index];
        entry.term = term;
        entry.translation = translation;
        entry.category = category;
        entry.audio_url = clean_audio_url(audio_url);
        let updated = entry.clone();

        tracing::debug!(id, "word updated");
        self.save_entries();
        Ok(updated)
    }

    /// Delete a word and drop its id from every mark set.
    pub fn remove(&mut self, id: &str) -> Result<VocabularyEntry> {
        let index = self.index_of(id)?;
        let removed = self.entries.remove(index);

        remove_id(&mut self.favorites, id);
        let had_learned = remove_id(&mut self.learned, id);
        let had_known = remove_id(&mut self.known, id);

        tracing::debug!(id, "word removed");
        self.save_entries();
        // Favorites are always rewritten with the vocabulary they refer to.
        self.save_favorites();
        if had_learned {
            save_json(&*self.storage, keys::LEARNED, &self.learned);
        }
        if had_known {
            save_json(&*self.storage, keys::KNOWN, &self.known);
        }
        Ok(removed)
    }

    /// Flip favorite membership. Returns whether the word is now a favorite.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool> {
        self.index_of(id)?;
        let now_favorite = toggle_id(&mut self.favorites, id);
        self.save_favorites();
        Ok(now_favorite)
    }

    /// Flip learned membership. Returns whether the word is now learned.
    pub fn toggle_learned(&mut self, id: &str) -> Result<bool> {
        self.index_of(id)?;
        let now_learned = toggle_id(&mut self.learned, id);
        save_json(&*self.storage, keys::LEARNED, &self.learned);
        Ok(now_learned)
    }

    /// Count a detail view. Returns the new count.
    pub fn record_view(&mut self, id: &str) -> Result<u32> {
        let index = self.index_of(id)?;
        let entry = &mut self.entries[index];
        entry.view_count = entry.view_count.saturating_add(1);
        let count = entry.view_count;
        self.save_entries();
        Ok(count)
    }

    /// Count an audio playback. Callers check audio availability and the
    /// audio setting first; this only counts.
    pub fn record_play(&mut self, id: &str) -> Result<u32> {
        let index = self.index_of(id)?;
        let entry = &mut self.entries[index];
        entry.play_count = entry.play_count.saturating_add(1);
        let count = entry.play_count;
        self.save_entries();
        Ok(count)
    }

    /// Remember a search term. Blank terms are ignored.
    pub fn add_search_term(&mut self, term: &str) {
        if self.history.push(term) {
            save_json(&*self.storage, keys::SEARCH_HISTORY, &self.history);
        }
    }

    pub fn clear_search_history(&mut self) {
        self.history.clear();
        save_json(&*self.storage, keys::SEARCH_HISTORY, &self.history);
    }

    /// Score a spoken attempt at a word; a passing attempt marks it known.
    pub fn check_pronunciation(&mut self, id: &str, heard: &str) -> Result<PronunciationCheck> {
        let index = self.index_of(id)?;
        let check = check_pronunciation(heard, &self.entries[index].term);
        if check.is_match && !self.known.iter().any(|k| k == id) {
            self.known.push(id.to_string());
            save_json(&*self.storage, keys::KNOWN, &self.known);
        }
        Ok(check)
    }

    /// Restore the bundled default set and clear every mark and the history.
    pub fn reset(&mut self) {
        self.entries = default_vocabulary();
        for entry in &self.entries {
            self.ids.observe(&entry.id);
        }
        self.favorites.clear();
        self.learned.clear();
        self.known.clear();
        self.history.clear();

        tracing::info!("vocabulary reset to default set");
        self.save_entries();
        self.save_favorites();
        save_json(&*self.storage, keys::LEARNED, &self.learned);
        save_json(&*self.storage, keys::KNOWN, &self.known);
        save_json(&*self.storage, keys::SEARCH_HISTORY, &self.history);
    }

    /// Derive a page from the current state.
    pub fn query(&self, query: &Query) -> QueryPage {
        query::run(&self.entries, self.marks(), query)
    }

    /// Every entry matching a query, unpaged. Used as quiz candidates.
    pub fn matching(&self, query: &Query) -> Vec<VocabularyEntry> {
        query::filtered(&self.entries, self.marks(), query)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Favorite entries in list order.
    pub fn favorite_entries(&self) -> Vec<&VocabularyEntry> {
        self.entries
            .iter()
            .filter(|e| self.is_favorite(&e.id))
            .collect()
    }

    pub fn stats(&self) -> VocabularyStats {
        VocabularyStats::compute(&self.entries, &self.favorites, &self.learned, &self.known)
    }

    /// Shareable one-line text for a word.
    pub fn share_text(&self, id: &str, language: &str) -> Result<String> {
        let index = self.index_of(id)?;
        Ok(share_line(&self.entries[index], language))
    }

    /// Shareable list of favorites, or `None` when there are none.
    pub fn favorites_share_text(&self, language: &str) -> Option<String> {
        let favorites = self.favorite_entries();
        if favorites.is_empty() {
            return None;
        }
        let lines: Vec<String> = favorites.iter().map(|e| share_line(e, language)).collect();
        Some(format!("My favorite words:\n\n{}", lines.join("\n")))
    }

    fn marks(&self) -> Marks<'_> {
        Marks {
            favorites: &self.favorites,
            learned: &self.learned,
        }
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| VocabError::NotFound { id: id.to_string() })
    }

    fn prune_dangling_marks(&mut self) {
        let entries = &self.entries;
        let exists = |id: &String| entries.iter().any(|e| &e.id == id);
        self.favorites.retain(exists);
        self.learned.retain(exists);
        self.known.retain(exists);
    }

    fn save_entries(&self) {
        save_json(&*self.storage, keys::VOCABULARY, &self.entries);
    }

    fn save_favorites(&self) {
        save_json(&*self.storage, keys::FAVORITES, &self.favorites);
    }
}

fn validated(term: &str, translation: Translation) -> Result<(String, Translation)> {
    let term = term.trim();
    if term.is_empty() {
        return Err(VocabError::Validation { field: "term" });
    }
    let translation = translation.trimmed();
    if translation.is_blank() {
        return Err(VocabError::Validation {
            field: "translation",
        });
    }
    Ok((term.to_string(), translation))
}

fn clean_audio_url(audio_url: Option<&str>) -> Option<String> {
    audio_url
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
}

fn share_line(entry: &VocabularyEntry, language: &str) -> String {
    format!("{} - {}", entry.term, entry.lookup_translation(language))
}

/// Remove `id` from a mark list. Returns whether it was present.
fn remove_id(ids: &mut Vec<String>, id: &str) -> bool {
    let before = ids.len();
    ids.retain(|i| i != id);
    ids.len() != before
}

/// Add or remove `id`. Returns whether it is now present.
fn toggle_id(ids: &mut Vec<String>, id: &str) -> bool {
    if remove_id(ids, id) {
        false
    } else {
        ids.push(id.to_string());
        true
    }
}
