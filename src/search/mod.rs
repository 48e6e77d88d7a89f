// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the rubber meets the road.
//!
//! One scoring path, two entry points. [`SearchEngine::search`] looks at every
//! topic; [`SearchEngine::search_within`] looks at the topics of a caller-chosen
//! [`CategoryGroup`]. Both delegate to the same `rank` so the scoring,
//! tie-break and cap can never drift apart between them.
//!
//! The engine borrows the knowledge base and never mutates it. Every call is
//! a pure function of `(knowledge base, query, group, limit)`.

pub mod query;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::error::{LoreError, Result};
use crate::kb::KnowledgeBase;
use crate::scoring::ranking::compare_hits;
use crate::scoring::score_topic;
use crate::types::{CategoryGroup, Hit, SearchResults, Topic};

pub use query::ParsedQuery;

/// How many hits a search returns unless configured otherwise.
pub const DEFAULT_RESULT_LIMIT: usize = 5;

/// Ranked keyword search over a [`KnowledgeBase`].
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine<'kb> {
    kb: &'kb KnowledgeBase,
    limit: usize,
}

impl<'kb> SearchEngine<'kb> {
    pub fn new(kb: &'kb KnowledgeBase) -> Self {
        Self {
            kb,
            limit: DEFAULT_RESULT_LIMIT,
        }
    }

    /// Change the result cap. Zero is clamped to one.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn knowledge_base(&self) -> &'kb KnowledgeBase {
        self.kb
    }

    /// Rank every topic against `query`, best first.
    ///
    /// Zero matches is a normal, empty result. Only a blank query is an error.
    pub fn search(&self, query: &str) -> Result<SearchResults<'kb>> {
        let parsed = ParsedQuery::parse(query)?;
        Ok(self.rank(&parsed, None))
    }

    /// Rank only topics whose category is in `group`.
    ///
    /// An empty group is a programming error and is reported before the query
    /// is even looked at.
    pub fn search_within(&self, query: &str, group: &CategoryGroup) -> Result<SearchResults<'kb>> {
        if group.is_empty() {
            return Err(LoreError::InvalidCategoryGroup(
                "category group is empty".to_string(),
            ));
        }
        let parsed = ParsedQuery::parse(query)?;
        Ok(self.rank(&parsed, Some(group)))
    }

    fn rank(&self, query: &ParsedQuery, group: Option<&CategoryGroup>) -> SearchResults<'kb> {
        let in_scope = |topic: &Topic| group.is_none_or(|g| g.contains(topic.category()));
        let score = |topic: &'kb Topic| {
            let score = score_topic(query, topic);
            (score > 0).then_some(Hit { topic, score })
        };

        #[cfg(feature = "parallel")]
        let mut hits: Vec<Hit<'kb>> = self
            .kb
            .topics()
            .par_iter()
            .filter(|topic| in_scope(topic))
            .filter_map(score)
            .collect();

        #[cfg(not(feature = "parallel"))]
        let mut hits: Vec<Hit<'kb>> = self
            .kb
            .topics()
            .iter()
            .filter(|topic| in_scope(topic))
            .filter_map(score)
            .collect();

        hits.sort_by(compare_hits);
        let total_matches = hits.len();
        hits.truncate(self.limit);

        debug!(
            query = query.full(),
            scoped = group.is_some(),
            total_matches,
            returned = hits.len(),
            "search complete"
        );

        SearchResults {
            hits,
            total_matches,
        }
    }
}
