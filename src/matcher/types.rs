//! Catalog and query result types.
//!
//! ## Key Types
//!
//! - [`RecipeRecord`] - Plain catalog record as supplied by the application
//! - [`Recipe`] - Immutable catalog entry with its precomputed ingredient features
//! - [`QueryResult`] - One ranked entry returned by a query

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::matcher::normalize::normalize_name;

/// A catalog record in its plain, loadable shape.
///
/// This is the format accepted from JSON catalog files; `tags` may be omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeRecord {
    /// Recipe name, used by callers as the navigation key
    pub name: String,
    /// Ingredient names in display order
    pub ingredients: Vec<String>,
    /// Free-text cooking instructions
    pub instructions: String,
    /// Informational tags, not used for scoring
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

/// An immutable catalog entry.
///
/// Built once from a [`RecipeRecord`]. Ingredient names are kept as supplied
/// for display; the normalized distinct set used for scoring is computed up
/// front.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RecipeRecord")]
pub struct Recipe {
    name: String,
    ingredients: Vec<String>,
    instructions: String,
    tags: BTreeSet<String>,
    distinct: Vec<String>,
}

impl Recipe {
    pub fn new<I, S>(name: impl Into<String>, ingredients: I, instructions: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ingredients: Vec<String> = ingredients
            .into_iter()
            .map(|i| i.as_ref().to_string())
            .collect();

        let mut seen = BTreeSet::new();
        let distinct = ingredients
            .iter()
            .filter_map(|i| normalize_name(i))
            .filter(|i| seen.insert(i.clone()))
            .collect();

        Self {
            name: name.into(),
            ingredients,
            instructions: instructions.into(),
            tags: BTreeSet::new(),
            distinct,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ingredient names as supplied, in catalog order, duplicates included.
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Distinct normalized ingredient names in first-seen order.
    pub fn distinct_ingredients(&self) -> &[String] {
        &self.distinct
    }
}

impl From<RecipeRecord> for Recipe {
    fn from(record: RecipeRecord) -> Self {
        Recipe::new(record.name, record.ingredients, record.instructions).with_tags(record.tags)
    }
}

impl From<&Recipe> for RecipeRecord {
    fn from(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
            tags: recipe.tags.clone(),
        }
    }
}

/// One ranked entry of a query.
#[derive(Debug, Clone)]
pub struct QueryResult {
    /// Shared, read-only catalog entry
    pub recipe: Arc<Recipe>,
    /// Relevance in `[0.0, 1.0]`
    pub score: f64,
    matched: Vec<String>,
}

impl QueryResult {
    pub(crate) fn new(recipe: Arc<Recipe>, score: f64, matched: Vec<String>) -> Self {
        Self {
            recipe,
            score,
            matched,
        }
    }

    pub fn name(&self) -> &str {
        self.recipe.name()
    }

    /// Distinct recipe ingredients the user already has.
    pub fn matched_ingredients(&self) -> &[String] {
        &self.matched
    }

    /// Distinct recipe ingredients the user still needs.
    pub fn missing_ingredients(&self) -> Vec<&str> {
        self.recipe
            .distinct_ingredients()
            .iter()
            .filter(|i| !self.matched.contains(i))
            .map(String::as_str)
            .collect()
    }

    /// Whole-number percentage shown next to a suggestion.
    pub fn match_percent(&self) -> u32 {
        (self.score * 100.0).floor() as u32
    }
}
