//! # Recipe Matching Engine
//!
//! Turns a free-text list of ingredients into a relevance-ordered subset of a
//! fixed recipe catalog.
//!
//! ## Modules
//!
//! - [`types`] - Catalog records, recipes and query results
//! - [`normalize`] - Ingredient text normalization
//! - [`scoring`] - The [`Scorer`] seam and its strategies
//! - [`matcher`] - [`RecipeMatcher`], which owns the catalog and ranks it
//! - [`catalog`] - Built-in catalog and JSON catalog loading
//! - [`error`] - Construction and loading errors
//!
//! ## Quick Start
//!
//! ```
//! use meal_maker::matcher::{catalog, RecipeMatcher};
//!
//! let matcher = RecipeMatcher::new(catalog::builtin())?;
//! let suggestions = matcher.suggest("eggs, tomato, onion", 3);
//! assert_eq!(suggestions.len(), 3);
//! assert_eq!(suggestions[0].name(), "Vegetable Omelette");
//! # Ok::<(), meal_maker::matcher::MatcherError>(())
//! ```

pub mod catalog;
pub mod error;
#[allow(clippy::module_inception)]
pub mod matcher;
pub mod normalize;
pub mod scoring;
pub mod types;

pub use error::{MatcherError, Result};
pub use matcher::RecipeMatcher;
pub use normalize::IngredientSet;
pub use scoring::{CosineSimilarity, OverlapFraction, Scorer, ScorerKind};
pub use types::{QueryResult, Recipe, RecipeRecord};
