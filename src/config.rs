//! Configuration for the command layer: limits, display, dataset, named groups.
//!
//! Resolution order: explicit path > `HOUNDLORE_CONFIG` > built-in defaults.
//! Environment overrides (`HOUNDLORE_MAX_RESULTS`, `HOUNDLORE_DATA`) are applied last.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LoreError, Result};
use crate::search::DEFAULT_RESULT_LIMIT;
use crate::suggest::DEFAULT_SUGGESTION_LIMIT;
use crate::types::{Category, CategoryGroup};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub suggestions: SuggestionsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub knowledge_base: KnowledgeBaseConfig,
    /// User-defined groups, merged over [`default_groups`].
    #[serde(default)]
    pub groups: BTreeMap<String, Vec<Category>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub max_results: usize,
    /// Shortest query the command layer will send to the engine.
    pub min_query_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_RESULT_LIMIT,
            min_query_chars: 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionsConfig {
    pub limit: usize,
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Bodies longer than this are cut and end in "...".
    pub max_body_chars: usize,
    pub color: ColorMode,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_body_chars: 1800,
            color: ColorMode::Auto,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeBaseConfig {
    /// Dataset to load instead of the bundled one.
    pub path: Option<PathBuf>,
}

/// The groupings behind the `lore`, `mechanics`, `parts` and `strategy` commands.
pub fn default_groups() -> BTreeMap<String, Vec<Category>> {
    use Category::*;
    BTreeMap::from([
        (
            "lore".to_string(),
            vec![Lore, Development, History, Nations, Organizations],
        ),
        (
            "mechanics".to_string(),
            vec![Mechanics, Combat, Communication, OnlineFeatures, Technical],
        ),
        ("parts".to_string(), vec![Equipment, Roles]),
        (
            "strategy".to_string(),
            vec![Roles, Combat, OnlineFeatures, Legacy],
        ),
    ])
}

impl Config {
    /// Load configuration, then apply environment overrides.
    ///
    /// An explicit path that does not exist is an error; a missing
    /// `HOUNDLORE_CONFIG` target is too, since someone asked for it by name.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let path = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("HOUNDLORE_CONFIG").ok().map(PathBuf::from));

        let mut config = match path {
            Some(path) => Self::from_path(&path)?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|err| LoreError::Config(format!("read config {}: {err}", path.display())))?;
        let config = Self::from_toml_str(&raw)
            .map_err(|err| LoreError::Config(format!("{}: {err}", path.display())))?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|err| LoreError::Config(format!("parse config: {err}")))
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(value) = std::env::var("HOUNDLORE_MAX_RESULTS") {
            self.search.max_results = value.trim().parse().map_err(|_| {
                LoreError::Config(format!("HOUNDLORE_MAX_RESULTS is not a number: {value}"))
            })?;
        }
        if let Ok(value) = std::env::var("HOUNDLORE_DATA") {
            if !value.trim().is_empty() {
                self.knowledge_base.path = Some(PathBuf::from(value));
            }
        }
        Ok(())
    }

    /// Defaults merged with user groups; a user group replaces a default of the same name.
    pub fn groups(&self) -> BTreeMap<String, Vec<Category>> {
        let mut groups = default_groups();
        for (name, categories) in &self.groups {
            groups.insert(name.to_lowercase(), categories.clone());
        }
        groups
    }

    /// Resolve a group by name. Unknown or empty groups are caller errors.
    pub fn resolve_group(&self, name: &str) -> Result<CategoryGroup> {
        let groups = self.groups();
        let categories = groups.get(&name.trim().to_lowercase()).ok_or_else(|| {
            LoreError::InvalidCategoryGroup(format!(
                "unknown group '{name}' (known: {})",
                groups.keys().cloned().collect::<Vec<_>>().join(", ")
            ))
        })?;
        if categories.is_empty() {
            return Err(LoreError::InvalidCategoryGroup(format!(
                "group '{name}' has no categories"
            )));
        }
        Ok(CategoryGroup::new(categories.iter().copied()))
    }
}
