//! Frequency table and top-K ranking

use rustc_hash::FxHashMap;

use crate::types::{RankedEntry, TokenStream};

/// Mapping of token to occurrence count, with a derived ranked view.
///
/// Entries are held in first-occurrence order, so the ranking tie-break
/// (earlier-seen tokens first) falls out of a stable sort on count alone.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    /// (token, count) in first-occurrence order.
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    /// Count occurrences of each distinct token in the stream.
    pub fn from_tokens(tokens: &TokenStream) -> Self {
        let mut index: FxHashMap<&str, usize> = FxHashMap::default();
        let mut entries: Vec<(String, usize)> = Vec::new();

        for token in tokens.iter() {
            match index.get(token) {
                Some(&i) => entries[i].1 += 1,
                None => {
                    index.insert(token, entries.len());
                    entries.push((token.to_string(), 1));
                }
            }
        }

        Self { entries }
    }

    /// Occurrence count for `token`, zero if unseen.
    pub fn count(&self, token: &str) -> usize {
        self.entries
            .iter()
            .find(|(t, _)| t == token)
            .map(|&(_, c)| c)
            .unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all counts; equals the length of the input stream.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|&(_, c)| c).sum()
    }

    /// The `min(k, distinct)` highest-count entries, sorted by count
    /// descending with ties broken by first occurrence (earlier first).
    pub fn top_k(&self, k: usize) -> Vec<RankedEntry> {
        let mut ranked = self.entries.clone();
        // Stable sort over first-occurrence order handles the tie-break.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(k);
        ranked
            .into_iter()
            .map(|(token, count)| RankedEntry { token, count })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(tokens: &[&str]) -> TokenStream {
        TokenStream::from_tokens(tokens.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn test_counts_collapse_duplicates() {
        let table = FrequencyTable::from_tokens(&stream(&["cat", "dog", "cat"]));
        assert_eq!(table.count("cat"), 2);
        assert_eq!(table.count("dog"), 1);
        assert_eq!(table.count("bird"), 0);
        assert_eq!(table.distinct(), 2);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn test_ties_break_on_first_occurrence() {
        // x:5, y:3, z:3 with y first seen before z.
        let table = FrequencyTable::from_tokens(&stream(&[
            "x", "y", "x", "z", "x", "y", "z", "x", "y", "z", "x",
        ]));
        let top = table.top_k(2);
        assert_eq!(top, vec![RankedEntry::new("x", 5), RankedEntry::new("y", 3)]);
    }

    #[test]
    fn test_all_equal_counts_rank_in_encounter_order() {
        let table = FrequencyTable::from_tokens(&stream(&["cat", "sat", "dog", "ran"]));
        let top = table.top_k(10);
        assert_eq!(
            top,
            vec![
                RankedEntry::new("cat", 1),
                RankedEntry::new("sat", 1),
                RankedEntry::new("dog", 1),
                RankedEntry::new("ran", 1),
            ]
        );
    }

    #[test]
    fn test_k_zero_yields_empty() {
        let table = FrequencyTable::from_tokens(&stream(&["a", "b"]));
        assert!(table.top_k(0).is_empty());
    }

    #[test]
    fn test_k_exceeding_distinct_returns_all() {
        let table = FrequencyTable::from_tokens(&stream(&["a", "b", "a"]));
        assert_eq!(table.top_k(100).len(), 2);
    }

    #[test]
    fn test_empty_stream() {
        let table = FrequencyTable::from_tokens(&stream(&[]));
        assert_eq!(table.distinct(), 0);
        assert_eq!(table.total(), 0);
        assert!(table.top_k(10).is_empty());
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let input = stream(&["b", "a", "b", "c", "a", "b"]);
        let first = FrequencyTable::from_tokens(&input).top_k(3);
        let second = FrequencyTable::from_tokens(&input).top_k(3);
        assert_eq!(first, second);
        assert_eq!(first[0], RankedEntry::new("b", 3));
    }
}
