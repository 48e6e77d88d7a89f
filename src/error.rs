// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for loading the knowledge base and answering queries.
//!
//! Three kinds of failure matter to callers, and they must never be confused:
//!
//! - [`LoreError::InvalidQuery`] is the user's fault (blank input). Show it to them.
//! - [`LoreError::InvalidCategoryGroup`] is the caller's fault (empty or unknown
//!   group). Log it, don't blame the user.
//! - [`LoreError::Validation`] means the dataset itself is broken. Startup must
//!   abort; no query is ever served against a knowledge base that failed it.
//!
//! "No matches" is not an error. An empty `SearchResults` is a normal answer.

use thiserror::Error;

use crate::types::Category;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, LoreError>;

#[derive(Debug, Error)]
pub enum LoreError {
    /// Query was empty or whitespace-only after trimming.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Category group was empty or named a group nobody defined.
    #[error("invalid category group: {0}")]
    InvalidCategoryGroup(String),

    /// A topic broke the knowledge base invariants at construction.
    #[error("knowledge base validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LoreError {
    /// True when the end user caused this and should be told about it.
    pub fn is_user_error(&self) -> bool {
        matches!(self, LoreError::InvalidQuery(_))
    }
}

/// Invariant violations found while building a [`KnowledgeBase`](crate::KnowledgeBase).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("topic in category '{category}' has an empty key")]
    EmptyKey { category: Category },

    #[error("topic '{category}/{key}' has no title")]
    MissingTitle { category: Category, key: String },

    #[error("topic '{category}/{key}' has neither content nor description")]
    MissingBody { category: Category, key: String },

    #[error("topic '{category}/{key}' has both content and description")]
    AmbiguousBody { category: Category, key: String },

    #[error("topic '{category}/{key}' is defined more than once")]
    DuplicateTopic { category: Category, key: String },

    #[error("unsupported knowledge base version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}
