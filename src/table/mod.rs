// Static conversion data: categories, their base units and unit specs.
// Built once at start-up and only read afterwards.

pub mod builder;
pub mod builtin;
pub mod models;
pub mod validation;

pub use builder::TableBuilder;
pub use models::*;
pub use validation::*;

use crate::config::Config;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct ConversionTable {
    categories: Vec<CategoryDefinition>,
}

impl ConversionTable {
    pub(crate) fn new(categories: Vec<CategoryDefinition>) -> Self {
        Self { categories }
    }

    /// The six built-in categories
    pub fn builtin() -> Self {
        Self::new(builtin::builtin_categories())
    }

    /// Built-ins plus valid custom categories from config
    pub fn from_config(config: &Config) -> (Self, ValidationResult) {
        TableBuilder::from_config(config).build()
    }

    /// Look up a category by key or alias
    pub fn category(&self, key: &str) -> Option<&CategoryDefinition> {
        self.categories.iter().find(|c| c.answers_to(key))
    }

    pub fn categories(&self) -> impl Iterator<Item = &CategoryDefinition> {
        self.categories.iter()
    }

    pub fn keys(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.key.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for ConversionTable {
    fn default() -> Self {
        Self::builtin()
    }
}
