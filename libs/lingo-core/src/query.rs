//! Filter, sort and paginate a vocabulary list.
//!
//! [`run`] is pure: the same entries, marks and query always produce the
//! same page.

use crate::collation;
use crate::language::DEFAULT_TARGET_LANGUAGE;
use crate::types::{CategoryFilter, Direction, VocabularyEntry};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Entries shown per page when the caller does not choose.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Sort key for a list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Question-side text for the active direction.
    #[default]
    Term,
    /// Answer-side text for the active direction.
    Translation,
    Category,
}

/// Transient list parameters coming from the UI.
///
/// Page numbers are one-based. Page 0 is served as page 1 and a page size of
/// 0 as 1; pages past the end are clamped to the last page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Query {
    pub search_text: String,
    pub direction: Direction,
    /// Translation language used for lookup, search and sort.
    pub language: String,
    pub category: CategoryFilter,
    pub sort_field: SortField,
    pub page_size: usize,
    pub page: usize,
    pub only_learned: bool,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            direction: Direction::Forward,
            language: DEFAULT_TARGET_LANGUAGE.to_string(),
            category: CategoryFilter::All,
            sort_field: SortField::Term,
            page_size: DEFAULT_PAGE_SIZE,
            page: 1,
            only_learned: false,
        }
    }
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.language = code.into();
        self
    }

    pub fn category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    pub fn sort_by(mut self, field: SortField) -> Self {
        self.sort_field = field;
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = size;
        self
    }

    pub fn only_learned(mut self, only: bool) -> Self {
        self.only_learned = only;
        self
    }
}

/// An entry in a result page, with its mark state for highlighting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListedEntry {
    pub entry: VocabularyEntry,
    pub is_favorite: bool,
    pub is_learned: bool,
}

/// One page of a filtered, sorted list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryPage {
    pub items: Vec<ListedEntry>,
    pub total_filtered: usize,
    pub total_pages: usize,
    /// Page actually served after clamping.
    pub page: usize,
}

/// Id sets an entry may belong to.
#[derive(Debug, Clone, Copy, Default)]
pub struct Marks<'a> {
    pub favorites: &'a [String],
    pub learned: &'a [String],
}

impl Marks<'_> {
    fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|f| f == id)
    }

    fn is_learned(&self, id: &str) -> bool {
        self.learned.iter().any(|l| l == id)
    }
}

/// Number of pages for `count` items, never less than one.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Derive a result page from the current entries.
pub fn run(entries: &[VocabularyEntry], marks: Marks<'_>, query: &Query) -> QueryPage {
    let matched = filtered(entries, marks, query);

    let page_size = query.page_size.max(1);
    let total_filtered = matched.len();
    let total_pages = total_pages(total_filtered, page_size);
    let page = query.page.clamp(1, total_pages);

    let items = matched
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .map(|entry| ListedEntry {
            entry: entry.clone(),
            is_favorite: marks.is_favorite(&entry.id),
            is_learned: marks.is_learned(&entry.id),
        })
        .collect();

    QueryPage {
        items,
        total_filtered,
        total_pages,
        page,
    }
}

/// Every entry matching the query, sorted, without paging.
pub fn filtered<'a>(
    entries: &'a [VocabularyEntry],
    marks: Marks<'_>,
    query: &Query,
) -> Vec<&'a VocabularyEntry> {
    let mut matched = filter(entries, marks, query);
    sort(&mut matched, query);
    matched
}

fn filter<'a>(
    entries: &'a [VocabularyEntry],
    marks: Marks<'_>,
    query: &Query,
) -> Vec<&'a VocabularyEntry> {
    let needle = query.search_text.to_lowercase();
    entries
        .iter()
        .filter(|e| query.category.matches(e.category))
        .filter(|e| !query.only_learned || marks.is_learned(&e.id))
        .filter(|e| {
            needle.is_empty()
                || e.primary_text(query.direction, &query.language)
                    .to_lowercase()
                    .contains(&needle)
        })
        .collect()
}

fn sort(entries: &mut [&VocabularyEntry], query: &Query) {
    let (direction, language) = (query.direction, query.language.as_str());
    // `sort_by` is stable: equal keys keep their stored order.
    entries.sort_by(|a, b| -> Ordering {
        match query.sort_field {
            SortField::Term => collation::compare(
                a.primary_text(direction, language),
                b.primary_text(direction, language),
            ),
            SortField::Translation => collation::compare(
                a.secondary_text(direction, language),
                b.secondary_text(direction, language),
            ),
            SortField::Category => collation::compare(a.category.as_str(), b.category.as_str()),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::default_vocabulary;
    use crate::types::Category;
    use pretty_assertions::assert_eq;

    fn two_words() -> Vec<VocabularyEntry> {
        vec![
            VocabularyEntry::new("1", "Hello", "Përshëndetje", Category::Greetings),
            VocabularyEntry::new("2", "Thank you", "Faleminderit", Category::Thanks),
        ]
    }

    fn ids(page: &QueryPage) -> Vec<&str> {
        page.items.iter().map(|i| i.entry.id.as_str()).collect()
    }

    #[test]
    fn search_hel_finds_only_hello() {
        let query = Query::new().search("hel").page_size(8).page(1);
        let page = run(&two_words(), Marks::default(), &query);
        assert_eq!(ids(&page), vec!["1"]);
        assert_eq!(page.total_filtered, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn search_is_case_insensitive_and_empty_matches_all() {
        let page = run(&two_words(), Marks::default(), &Query::new().search("THANK"));
        assert_eq!(ids(&page), vec!["2"]);
        let page = run(&two_words(), Marks::default(), &Query::new());
        assert_eq!(page.total_filtered, 2);
    }

    #[test]
    fn reverse_direction_searches_translation() {
        let query = Query::new().search("fale").direction(Direction::Reverse);
        let page = run(&two_words(), Marks::default(), &query);
        assert_eq!(ids(&page), vec!["2"]);

        let query = Query::new().search("hel").direction(Direction::Reverse);
        assert_eq!(run(&two_words(), Marks::default(), &query).total_filtered, 0);
    }

    #[test]
    fn category_filter_keeps_only_that_category() {
        let query = Query::new().category(Category::Farewell).page_size(100);
        let page = run(&default_vocabulary(), Marks::default(), &query);
        assert_eq!(page.total_filtered, 3);
        assert!(page.items.iter().all(|i| i.entry.category == Category::Farewell));
    }

    #[test]
    fn sort_by_term_is_alphabetical() {
        let page = run(&default_vocabulary(), Marks::default(), &Query::new().page_size(3));
        let terms: Vec<_> = page.items.iter().map(|i| i.entry.term.as_str()).collect();
        assert_eq!(terms, vec!["Bless you", "Cheers", "Congratulations"]);
    }

    #[test]
    fn sort_by_translation_in_reverse_uses_term() {
        let query = Query::new()
            .direction(Direction::Reverse)
            .sort_by(SortField::Translation);
        let page = run(&two_words(), Marks::default(), &query);
        assert_eq!(ids(&page), vec!["1", "2"]);

        let query = Query::new().sort_by(SortField::Translation);
        let page = run(&two_words(), Marks::default(), &query);
        assert_eq!(ids(&page), vec!["2", "1"]);
    }

    #[test]
    fn category_sort_is_stable() {
        let vocab = default_vocabulary();
        let query = Query::new().sort_by(SortField::Category).page_size(100);
        let page = run(&vocab, Marks::default(), &query);

        let farewell: Vec<_> = page
            .items
            .iter()
            .filter(|i| i.entry.category == Category::Farewell)
            .map(|i| i.entry.id.as_str())
            .collect();
        // Stored order of the Farewell entries is 3, 9, 13.
        assert_eq!(farewell, vec!["3", "9", "13"]);
        assert_eq!(page.items[0].entry.category, Category::Farewell);
    }

    #[test]
    fn identical_inputs_give_identical_pages() {
        let vocab = default_vocabulary();
        let favorites = vec!["3".to_string()];
        let marks = Marks { favorites: &favorites, learned: &[] };
        let query = Query::new().search("o").sort_by(SortField::Translation).page(2);
        assert_eq!(run(&vocab, marks, &query), run(&vocab, marks, &query));
    }

    #[test]
    fn total_pages_is_at_least_one() {
        for count in 0..40 {
            for size in 1..12 {
                let expected = if count == 0 { 1 } else { (count + size - 1) / size };
                assert_eq!(total_pages(count, size), expected, "count={count} size={size}");
            }
        }
    }

    #[test]
    fn every_page_request_is_non_empty_unless_nothing_matches() {
        let vocab = default_vocabulary();
        for size in 1..25 {
            for page in 0..30 {
                let query = Query::new().page_size(size).page(page);
                let result = run(&vocab, Marks::default(), &query);
                assert!(!result.items.is_empty(), "size={size} page={page}");
                assert!(result.items.len() <= size);
                assert!(result.page >= 1 && result.page <= result.total_pages);
            }
        }

        let empty = run(&vocab, Marks::default(), &Query::new().search("zzz").page(4));
        assert!(empty.items.is_empty());
        assert_eq!(empty.total_pages, 1);
        assert_eq!(empty.page, 1);
    }

    #[test]
    fn page_past_end_clamps_to_last_page() {
        let vocab = default_vocabulary();
        let page = run(&vocab, Marks::default(), &Query::new().page(99));
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page, 3);
        assert_eq!(page.items.len(), 4);
    }

    #[test]
    fn zero_page_size_serves_one_item() {
        let page = run(&two_words(), Marks::default(), &Query::new().page_size(0));
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn favorites_are_flagged_not_filtered() {
        let favorites = vec!["2".to_string()];
        let marks = Marks { favorites: &favorites, learned: &[] };
        let page = run(&two_words(), marks, &Query::new());
        assert_eq!(page.total_filtered, 2);
        assert!(!page.items[0].is_favorite);
        assert!(page.items[1].is_favorite);
    }

    #[test]
    fn only_learned_keeps_learned_entries() {
        let learned = vec!["1".to_string()];
        let marks = Marks { favorites: &[], learned: &learned };
        let page = run(&two_words(), marks, &Query::new().only_learned(true));
        assert_eq!(ids(&page), vec!["1"]);
        assert!(page.items[0].is_learned);
    }

    #[test]
    fn query_deserializes_with_defaults() {
        let query: Query =
            serde_json::from_str(r#"{"search_text":"hel","category":"All","sort_field":"term"}"#)
                .unwrap();
        assert_eq!(query.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(query.page, 1);
        assert_eq!(query.search_text, "hel");
    }
}
