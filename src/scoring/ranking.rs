// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored topics get sorted.

use crate::types::Hit;
use std::cmp::Ordering;

/// Compare two hits for ranking.
///
/// Sort order:
/// 1. **Score** - descending
/// 2. **Category name** - ascending, by wire name (not enum declaration order)
/// 3. **Key** - ascending
///
/// `(category, key)` is unique in a knowledge base, so two distinct hits never
/// compare equal and the sort is fully deterministic.
pub fn compare_hits(a: &Hit<'_>, b: &Hit<'_>) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.topic.category().as_str().cmp(b.topic.category().as_str()))
        .then_with(|| a.topic.key().cmp(b.topic.key()))
}
