//! Fuzzy-matching item source over a fixed list.
//!
//! [`FuzzySource`] lets a combo box search an in-memory list without writing a
//! fetcher. Queries are split on whitespace and lowercased; an entry matches
//! when every token fuzzy-matches its text (Skim algorithm). Matches are ranked
//! by their summed score, best first, and ties keep list order.

use crate::app::FetchItems;
use crate::domain::{ComboValue, Result};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use futures_util::future::LocalBoxFuture;
use futures_util::FutureExt;
use std::rc::Rc;

/// In-memory candidate list searchable by fuzzy query.
pub struct FuzzySource<T> {
    entries: Rc<[T]>,
    to_text: Rc<dyn Fn(&T) -> String>,
    limit: Option<usize>,
}

impl<T> Clone for FuzzySource<T> {
    fn clone(&self) -> Self {
        Self {
            entries: Rc::clone(&self.entries),
            to_text: Rc::clone(&self.to_text),
            limit: self.limit,
        }
    }
}

impl<T: ComboValue> FuzzySource<T> {
    /// Creates a source matching queries against `to_text(entry)`.
    pub fn new(entries: Vec<T>, to_text: impl Fn(&T) -> String + 'static) -> Self {
        Self {
            entries: entries.into(),
            to_text: Rc::new(to_text),
            limit: None,
        }
    }

    /// Caps the number of returned candidates.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Candidates for `query`, best match first.
    ///
    /// An empty or blank query returns the list in its original order.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<T> {
        let _span = tracing::trace_span!("fuzzy_search", query = %query).entered();

        let tokens: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
        let limit = self.limit.unwrap_or(usize::MAX);

        if tokens.is_empty() {
            return self.entries.iter().take(limit).cloned().collect();
        }

        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(i64, &T)> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let text = (self.to_text)(entry).to_lowercase();
                tokens
                    .iter()
                    .map(|token| matcher.fuzzy_match(&text, token))
                    .sum::<Option<i64>>()
                    .map(|score| (score, entry))
            })
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0));

        tracing::trace!(match_count = scored.len(), "fuzzy search applied");

        scored
            .into_iter()
            .take(limit)
            .map(|(_, entry)| entry.clone())
            .collect()
    }

    /// Adapts the source into an item fetcher for [`crate::Props`].
    #[must_use]
    pub fn fetcher(&self) -> FetchItems<T> {
        let source = self.clone();
        Rc::new(move |query: String| -> LocalBoxFuture<'static, Result<Vec<T>>> {
            let items = source.search(&query);
            async move { Ok(items) }.boxed_local()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cities() -> FuzzySource<String> {
        FuzzySource::new(
            vec![
                "Saint Petersburg".to_string(),
                "Yekaterinburg".to_string(),
                "Moscow".to_string(),
                "Samara".to_string(),
            ],
            String::clone,
        )
    }

    #[test]
    fn blank_query_returns_everything_in_order() {
        let all = cities().search("  ");
        assert_eq!(all.len(), 4);
        assert_eq!(all[0], "Saint Petersburg");
    }

    #[test]
    fn every_token_must_match() {
        assert_eq!(cities().search("saint burg"), vec!["Saint Petersburg"]);
        assert!(cities().search("moscow burg").is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(cities().search("MOSC"), vec!["Moscow"]);
    }

    #[test]
    fn limit_caps_results() {
        let source = cities().with_limit(2);
        assert_eq!(source.search("").len(), 2);
        assert!(source.search("a").len() <= 2);
    }
}
