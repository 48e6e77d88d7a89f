// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! On-disk shape of the knowledge base and the per-record checks.
//!
//! Records are what the JSON says. Topics are what survived validation.
//! Keeping the two apart means a half-filled record can deserialize fine and
//! still never reach a search result.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::types::{Category, TagField, Topic};

/// Current dataset format version.
pub const FORMAT_VERSION: u32 = 1;

/// Top-level JSON document.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct KnowledgeBaseFile {
    pub version: u32,
    pub topics: Vec<TopicRecord>,
}

/// A topic as authored. Exactly one of `content` / `description` carries the body.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct TopicRecord {
    pub category: Category,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Auxiliary fields, already flattened to string lists.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, Vec<String>>,
}

impl TopicRecord {
    /// Record with a long-form `content` body and no tags.
    pub fn new(category: Category, key: &str, title: &str, content: &str) -> Self {
        Self {
            category,
            key: key.to_string(),
            title: title.to_string(),
            content: Some(content.to_string()),
            description: None,
            tags: BTreeMap::new(),
        }
    }

    pub fn with_tag(mut self, name: &str, values: &[&str]) -> Self {
        self.tags.insert(
            name.to_string(),
            values.iter().map(|v| (*v).to_string()).collect(),
        );
        self
    }

    /// Check the record and turn it into a [`Topic`].
    ///
    /// A blank body variant counts as absent, so `content: ""` next to a real
    /// `description` is accepted.
    pub fn into_topic(self) -> Result<Topic, ValidationError> {
        let category = self.category;
        let key = self.key.trim().to_string();
        if key.is_empty() {
            return Err(ValidationError::EmptyKey { category });
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle { category, key });
        }

        let content = self.content.filter(|s| !s.trim().is_empty());
        let description = self.description.filter(|s| !s.trim().is_empty());
        let body = match (content, description) {
            (Some(_), Some(_)) => return Err(ValidationError::AmbiguousBody { category, key }),
            (None, None) => return Err(ValidationError::MissingBody { category, key }),
            (Some(body), None) | (None, Some(body)) => body,
        };

        let tags = self
            .tags
            .into_iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(name, values)| TagField { name, values })
            .collect();

        Ok(Topic::new(category, key, self.title, body, tags))
    }
}
