//! Summary figures for a vocabulary collection.

use crate::types::{Category, VocabularyEntry};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VocabularyStats {
    pub total: usize,
    pub favorites: usize,
    pub learned: usize,
    pub known: usize,
    pub total_views: u64,
    pub total_plays: u64,
    /// Entry count per category, in [`Category::ALL`] order, zeros omitted.
    pub by_category: Vec<(Category, usize)>,
}

impl VocabularyStats {
    pub fn compute(
        entries: &[VocabularyEntry],
        favorites: &[String],
        learned: &[String],
        known: &[String],
    ) -> Self {
        let by_category = Category::ALL
            .into_iter()
            .map(|c| (c, entries.iter().filter(|e| e.category == c).count()))
            .filter(|(_, n)| *n > 0)
            .collect();

        Self {
            total: entries.len(),
            favorites: favorites.len(),
            learned: learned.len(),
            known: known.len(),
            total_views: entries.iter().map(|e| u64::from(e.view_count)).sum(),
            total_plays: entries.iter().map(|e| u64::from(e.play_count)).sum(),
            by_category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::default_vocabulary;
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_seed_vocabulary() {
        let mut vocab = default_vocabulary();
        vocab[0].view_count = 3;
        vocab[1].play_count = 2;
        let favorites = vec!["1".to_string()];
        let stats = VocabularyStats::compute(&vocab, &favorites, &[], &[]);

        assert_eq!(stats.total, 20);
        assert_eq!(stats.favorites, 1);
        assert_eq!(stats.total_views, 3);
        assert_eq!(stats.total_plays, 2);
        assert_eq!(
            stats.by_category,
            vec![
                (Category::Greetings, 6),
                (Category::Thanks, 4),
                (Category::Farewell, 3),
                (Category::Others, 7),
            ]
        );
    }
}
