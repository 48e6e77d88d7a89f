// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing: the one place raw user text becomes something scorable.

use crate::error::{LoreError, Result};
use crate::utils::normalize;

/// A trimmed, folded query and its whitespace-separated tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    full: String,
    tokens: Vec<String>,
}

impl ParsedQuery {
    /// Trim and fold `raw`. Blank input is an [`LoreError::InvalidQuery`].
    ///
    /// # Example
    ///
    /// ```ignore
    /// let q = ParsedQuery::parse("  Black  Sea ")?;
    /// assert_eq!(q.full(), "black  sea");
    /// assert_eq!(q.tokens(), ["black", "sea"]);
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LoreError::InvalidQuery(
                "query is empty or whitespace-only".to_string(),
            ));
        }
        let full = normalize(trimmed);
        let tokens = full.split_whitespace().map(str::to_string).collect();
        Ok(Self { full, tokens })
    }

    /// Whole folded query, internal whitespace untouched.
    pub fn full(&self) -> &str {
        &self.full
    }

    /// Tokens in query order, duplicates kept.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}
