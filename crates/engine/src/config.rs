//! Engine configuration
//!
//! One [`CategoryConfig`] per feature category plus the store sizing:
//!
//! ```toml
//! [entity-explosion]
//! enable = true
//! disable-unknown = true
//! alert = "An explosion with no known cause was blocked."
//!
//! [fire]
//! disable-unknown = false
//!
//! [cache]
//! location-capacity = 200000
//! ```
//!
//! Every key is optional; missing categories take the defaults.

use crate::error::Result;
use causeway_storage::StoreConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Feature categories the engine intercepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    BlockExplosion,
    EntityExplosion,
    ItemFrame,
    Painting,
    Hanging,
    Fire,
}

impl Category {
    /// All categories, in config-file order
    pub const ALL: [Category; 6] = [
        Category::BlockExplosion,
        Category::EntityExplosion,
        Category::ItemFrame,
        Category::Painting,
        Category::Hanging,
        Category::Fire,
    ];

    /// Config table name
    pub fn key(&self) -> &'static str {
        match self {
            Category::BlockExplosion => "block-explosion",
            Category::EntityExplosion => "entity-explosion",
            Category::ItemFrame => "itemframe",
            Category::Painting => "painting",
            Category::Hanging => "hanging",
            Category::Fire => "fire",
        }
    }

    /// Alert broadcast when no `alert` is configured
    pub fn default_alert(&self) -> &'static str {
        match self {
            Category::BlockExplosion => "A block explosion with no known cause was blocked.",
            Category::EntityExplosion => "An explosion with no known cause was blocked.",
            Category::ItemFrame => "Damage to an item frame with no known cause was blocked.",
            Category::Painting => "Damage to a painting with no known cause was blocked.",
            Category::Hanging => "A decoration break with no known cause was blocked.",
            Category::Fire => "Fire with no known cause was put out.",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Per-category switches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct CategoryConfig {
    /// Intercept this category at all (default: true)
    #[serde(default = "default_true")]
    pub enable: bool,

    /// Suppress events whose cause cannot be resolved (default: true)
    #[serde(default = "default_true")]
    pub disable_unknown: bool,

    /// Message shown to nearby players on suppression; empty disables it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for CategoryConfig {
    fn default() -> Self {
        Self {
            enable: true,
            disable_unknown: true,
            alert: None,
        }
    }
}

impl CategoryConfig {
    /// Configured alert, or the category default
    pub fn alert_message(&self, category: Category) -> &str {
        self.alert.as_deref().unwrap_or_else(|| category.default_alert())
    }
}

/// Full engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct EngineConfig {
    pub block_explosion: CategoryConfig,
    pub entity_explosion: CategoryConfig,
    pub itemframe: CategoryConfig,
    pub painting: CategoryConfig,
    pub hanging: CategoryConfig,
    pub fire: CategoryConfig,
    /// Store sizing
    pub cache: StoreConfig,
}

impl EngineConfig {
    /// Parse TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn category(&self, category: Category) -> &CategoryConfig {
        match category {
            Category::BlockExplosion => &self.block_explosion,
            Category::EntityExplosion => &self.entity_explosion,
            Category::ItemFrame => &self.itemframe,
            Category::Painting => &self.painting,
            Category::Hanging => &self.hanging,
            Category::Fire => &self.fire,
        }
    }

    pub fn category_mut(&mut self, category: Category) -> &mut CategoryConfig {
        match category {
            Category::BlockExplosion => &mut self.block_explosion,
            Category::EntityExplosion => &mut self.entity_explosion,
            Category::ItemFrame => &mut self.itemframe,
            Category::Painting => &mut self.painting,
            Category::Hanging => &mut self.hanging,
            Category::Fire => &mut self.fire,
        }
    }

    /// Turn unknown-cause suppression on or off for every category
    pub fn with_disable_unknown(mut self, disable_unknown: bool) -> Self {
        for category in Category::ALL {
            self.category_mut(category).disable_unknown = disable_unknown;
        }
        self
    }
}
