// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Curated fallback suggestions.
//!
//! When a search comes back empty, the user gets a short list of phrases they
//! can literally type next. These are hand-picked entry points, not titles from
//! the live knowledge base, so a suggestion stays answerable even if nothing
//! happens to match the failed query.
//!
//! Matching is a bidirectional containment test on folded text:
//!
//! - the query is a substring of the phrase ("combas" → "COMBAS system"), or
//! - the phrase's category keyword is a substring of the query
//!   ("communication systems and beyond" → every `communication` entry).

use serde::Serialize;

use crate::types::Category;
use crate::utils::normalize;

/// Default cap on filtered suggestions.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// One curated phrase and the category whose keyword it answers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub phrase: String,
    pub category: Category,
}

impl Suggestion {
    pub fn new(phrase: &str, category: Category) -> Self {
        Self {
            phrase: phrase.to_string(),
            category,
        }
    }
}

/// The built-in onboarding list, in authored order.
const CURATED: &[(&str, Category)] = &[
    ("HOUND types and roles", Category::Roles),
    ("Weapons and equipment", Category::Equipment),
    ("Game mechanics", Category::Mechanics),
    ("Online features", Category::OnlineFeatures),
    ("Nation backgrounds", Category::Nations),
    ("Combat tactics", Category::Combat),
    ("Customization options", Category::Mechanics),
    ("COMBAS system", Category::Communication),
    ("Communication features", Category::Communication),
    ("Territory control", Category::OnlineFeatures),
    ("Weapon types", Category::Equipment),
    ("Combat ranges", Category::Combat),
    ("Damage system", Category::Mechanics),
    ("Targeting mechanics", Category::Combat),
    ("Nation equipment", Category::Nations),
    ("Manufacturers", Category::Organizations),
    ("Communication systems", Category::Communication),
    ("Squad mechanics", Category::OnlineFeatures),
    ("Role types", Category::Roles),
    ("Movement systems", Category::Equipment),
    ("Equipment types", Category::Equipment),
    ("Generator systems", Category::Equipment),
    ("Support features", Category::Equipment),
    ("Combat roles", Category::Roles),
    ("Chassis types", Category::Equipment),
    ("Nation histories", Category::History),
    ("Political background", Category::History),
    ("Military organizations", Category::Organizations),
    ("Historical events", Category::History),
    ("Technology development", Category::Development),
];

/// A fixed, ordered list of suggestions.
#[derive(Debug, Clone)]
pub struct SuggestionCatalog {
    entries: Vec<Suggestion>,
    folded: Vec<String>,
    limit: usize,
}

impl Default for SuggestionCatalog {
    fn default() -> Self {
        Self::new(
            CURATED
                .iter()
                .map(|(phrase, category)| Suggestion::new(phrase, *category)),
        )
    }
}

impl SuggestionCatalog {
    pub fn new(entries: impl IntoIterator<Item = Suggestion>) -> Self {
        let entries: Vec<Suggestion> = entries.into_iter().collect();
        let folded = entries.iter().map(|s| normalize(&s.phrase)).collect();
        Self {
            entries,
            folded,
            limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }

    /// Cap for filtered results. Zero is clamped to one.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }

    pub fn entries(&self) -> &[Suggestion] {
        &self.entries
    }

    /// Suggestions for `query`, in authored order.
    ///
    /// No query (or a blank one) returns the whole list, uncapped. Otherwise
    /// entries pass the bidirectional containment test and at most `limit`
    /// are returned.
    pub fn suggest(&self, query: Option<&str>) -> Vec<&Suggestion> {
        let query = query.map(str::trim).filter(|q| !q.is_empty());
        let Some(query) = query else {
            return self.entries.iter().collect();
        };

        let query = normalize(query);
        self.entries
            .iter()
            .zip(&self.folded)
            .filter(|(entry, phrase)| {
                phrase.contains(query.as_str()) || query.contains(entry.category.keyword())
            })
            .map(|(entry, _)| entry)
            .take(self.limit)
            .collect()
    }

    /// Just the phrases, for callers that render plain text.
    pub fn suggest_phrases(&self, query: Option<&str>) -> Vec<&str> {
        self.suggest(query)
            .into_iter()
            .map(|s| s.phrase.as_str())
            .collect()
    }
}
