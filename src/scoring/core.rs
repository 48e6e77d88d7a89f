// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind topic ranking.
//!
//! A score is the sum of three independent signals:
//!
//! | Signal | Points | Condition |
//! |--------|--------|-----------|
//! | Title  | 10     | whole normalized query is a substring of the title |
//! | Body   | 1 each | every non-overlapping occurrence of every query token in the body |
//! | Tags   | 1      | any token inside any tag field (at most once per topic) |
//!
//! Tokens are counted once per appearance in the query, so "hound hound"
//! doubles the body contribution of "hound". Tags reward gear and tactic
//! lists a little, never as much as the body or the title.

use tracing::trace;

use crate::search::query::ParsedQuery;
use crate::types::Topic;
use crate::utils::count_occurrences;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Flat bonus when the whole query appears in the title.
pub const TITLE_MATCH_BONUS: u32 = 10;

/// Flat bonus when any token appears in any tag field.
pub const TAG_MATCH_BONUS: u32 = 1;

/// Per-signal contributions for one (query, topic) pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub title: u32,
    pub body: u32,
    pub tags: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.title.saturating_add(self.body).saturating_add(self.tags)
    }
}

/// Score every signal separately.
pub fn score_breakdown(query: &ParsedQuery, topic: &Topic) -> ScoreBreakdown {
    let folded = topic.folded();

    let title = if folded.title.contains(query.full()) {
        TITLE_MATCH_BONUS
    } else {
        0
    };

    let body = query
        .tokens()
        .iter()
        .map(|token| count_occurrences(&folded.body, token))
        .fold(0u32, |acc, n| {
            acc.saturating_add(u32::try_from(n).unwrap_or(u32::MAX))
        });

    let tags = if folded
        .tags
        .iter()
        .any(|field| query.tokens().iter().any(|token| field.contains(token.as_str())))
    {
        TAG_MATCH_BONUS
    } else {
        0
    };

    ScoreBreakdown { title, body, tags }
}

/// Total score for a topic. Zero means "not a match".
pub fn score_topic(query: &ParsedQuery, topic: &Topic) -> u32 {
    let breakdown = score_breakdown(query, topic);
    let total = breakdown.total();
    if total > 0 {
        trace!(
            category = %topic.category(),
            key = topic.key(),
            title = breakdown.title,
            body = breakdown.body,
            tags = breakdown.tags,
            total,
            "scored topic"
        );
    }
    total
}
