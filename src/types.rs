// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the knowledge base and its search results.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Topic**: `title` and `body` are non-blank. Enforced by the knowledge base
//!   loader; a `Topic` never exists outside a validated `KnowledgeBase`.
//!
//! - **(category, key)**: unique across the knowledge base.
//!
//! - **Folded text**: the lowercased title, body and tag strings are computed once
//!   at construction and never drift from the display fields.
//!
//! Tag fields add to ranking and are readable through [`Topic::tags`], but
//! they are skipped in the serialized form of a topic.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::normalize;

// =============================================================================
// CATEGORIES
// =============================================================================

/// Subject area a topic belongs to. Fixed at build time.
///
/// Variant order is the display order used by listings. Ranking tie-breaks do
/// NOT use it; they compare [`Category::as_str`] so that the order is
/// alphabetical and independent of how this enum happens to be declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Lore,
    Development,
    Mechanics,
    Combat,
    Roles,
    Equipment,
    Nations,
    Organizations,
    History,
    Communication,
    OnlineFeatures,
    Technical,
    Legacy,
}

impl Category {
    pub const ALL: [Category; 13] = [
        Category::Lore,
        Category::Development,
        Category::Mechanics,
        Category::Combat,
        Category::Roles,
        Category::Equipment,
        Category::Nations,
        Category::Organizations,
        Category::History,
        Category::Communication,
        Category::OnlineFeatures,
        Category::Technical,
        Category::Legacy,
    ];

    /// Stable wire name, also the primary tie-break key.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Lore => "lore",
            Category::Development => "development",
            Category::Mechanics => "mechanics",
            Category::Combat => "combat",
            Category::Roles => "roles",
            Category::Equipment => "equipment",
            Category::Nations => "nations",
            Category::Organizations => "organizations",
            Category::History => "history",
            Category::Communication => "communication",
            Category::OnlineFeatures => "online-features",
            Category::Technical => "technical",
            Category::Legacy => "legacy",
        }
    }

    /// Word a user would actually type when asking about this category.
    pub fn keyword(self) -> &'static str {
        match self {
            Category::OnlineFeatures => "online",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A caller-chosen set of categories searched together.
///
/// The engine never hardcodes groupings. "parts" is whatever set the caller
/// passes in, so adding a grouping needs no engine change. An empty group is
/// representable here but rejected by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryGroup {
    categories: BTreeSet<Category>,
}

impl CategoryGroup {
    pub fn new(categories: impl IntoIterator<Item = Category>) -> Self {
        Self {
            categories: categories.into_iter().collect(),
        }
    }

    pub fn contains(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.iter().copied()
    }
}

impl FromIterator<Category> for CategoryGroup {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        Self::new(iter)
    }
}

// =============================================================================
// TOPICS
// =============================================================================

/// One searchable record.
///
/// Serializes as `{category, key, title, body}`. Tags are kept for scoring and
/// skipped on output.
#[derive(Debug, Clone, Serialize)]
pub struct Topic {
    category: Category,
    key: String,
    title: String,
    body: String,
    #[serde(skip)]
    tags: Vec<TagField>,
    #[serde(skip)]
    folded: FoldedText,
}

/// A named auxiliary field, already flattened to strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagField {
    pub name: String,
    pub values: Vec<String>,
}

/// Lowercased copies of every searchable field.
#[derive(Debug, Clone, Default)]
pub(crate) struct FoldedText {
    pub title: String,
    pub body: String,
    /// One entry per tag field: its values joined by newlines.
    pub tags: Vec<String>,
}

impl Topic {
    /// Build a topic and precompute its folded text.
    ///
    /// Callers outside the knowledge base loader go through
    /// [`KnowledgeBase::from_records`](crate::KnowledgeBase::from_records), which
    /// validates first.
    pub(crate) fn new(
        category: Category,
        key: String,
        title: String,
        body: String,
        tags: Vec<TagField>,
    ) -> Self {
        let folded = FoldedText {
            title: normalize(&title),
            body: normalize(&body),
            tags: tags
                .iter()
                .map(|field| normalize(&field.values.join("\n")))
                .collect(),
        };
        Self {
            category,
            key,
            title,
            body,
            tags,
            folded,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Auxiliary fields (equipment lists, tactics, ...), in name order.
    pub fn tags(&self) -> &[TagField] {
        &self.tags
    }

    pub(crate) fn folded(&self) -> &FoldedText {
        &self.folded
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// A topic paired with the score that ranked it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Hit<'kb> {
    pub topic: &'kb Topic,
    pub score: u32,
}

/// Ranked, truncated hits plus how many topics matched before truncation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults<'kb> {
    pub hits: Vec<Hit<'kb>>,
    pub total_matches: usize,
}

impl<'kb> SearchResults<'kb> {
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// More topics matched than were returned.
    pub fn is_truncated(&self) -> bool {
        self.total_matches > self.hits.len()
    }

    pub fn topics(&self) -> impl Iterator<Item = &'kb Topic> + '_ {
        self.hits.iter().map(|hit| hit.topic)
    }
}
