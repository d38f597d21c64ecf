//! Pluggable relevance scoring.
//!
//! Ranking, truncation and normalization live in the matcher; a [`Scorer`]
//! only answers "how relevant is this recipe to these ingredients". One
//! strategy is chosen per matcher at construction time.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::matcher::normalize::IngredientSet;
use crate::matcher::types::Recipe;

/// Relevance of a single recipe to a user's ingredient set.
///
/// Implementations should return a value in `[0.0, 1.0]`. The matcher clamps
/// the result and treats non-finite values as `0.0`.
pub trait Scorer: Send + Sync {
    fn name(&self) -> &'static str;

    fn score(&self, user: &IngredientSet, recipe: &Recipe) -> f64;
}

/// Fraction of the recipe's distinct ingredients the user has.
///
/// `|user ∩ recipe| / |recipe|`, with the denominator floored at 1. A recipe
/// needing exactly your three ingredients outranks one needing those three
/// plus seven more.
#[derive(Debug, Default, Clone, Copy)]
pub struct OverlapFraction;

impl Scorer for OverlapFraction {
    fn name(&self) -> &'static str {
        "overlap"
    }

    fn score(&self, user: &IngredientSet, recipe: &Recipe) -> f64 {
        let distinct = recipe.distinct_ingredients();
        let overlap = distinct.iter().filter(|i| user.covers(i)).count();
        overlap as f64 / distinct.len().max(1) as f64
    }
}

/// Cosine similarity between term-frequency vectors.
///
/// The user set is a binary vector over its tokens; the recipe vector counts
/// the words of its distinct ingredient names, so "olive oil" adds one to
/// "olive" and one to "oil".
#[derive(Debug, Default, Clone, Copy)]
pub struct CosineSimilarity;

impl CosineSimilarity {
    fn recipe_vector(recipe: &Recipe) -> BTreeMap<&str, f64> {
        let mut vector = BTreeMap::new();
        for word in recipe
            .distinct_ingredients()
            .iter()
            .flat_map(|i| i.split(' '))
        {
            *vector.entry(word).or_insert(0.0) += 1.0;
        }
        vector
    }
}

impl Scorer for CosineSimilarity {
    fn name(&self) -> &'static str {
        "cosine"
    }

    fn score(&self, user: &IngredientSet, recipe: &Recipe) -> f64 {
        let recipe_vector = Self::recipe_vector(recipe);
        if user.is_empty() || recipe_vector.is_empty() {
            return 0.0;
        }

        let dot: f64 = user
            .iter()
            .filter_map(|token| recipe_vector.get(token))
            .sum();
        let user_norm = (user.len() as f64).sqrt();
        let recipe_norm = recipe_vector.values().map(|v| v * v).sum::<f64>().sqrt();

        dot / (user_norm * recipe_norm)
    }
}

/// Scoring strategies selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScorerKind {
    #[default]
    Overlap,
    Cosine,
}

impl ScorerKind {
    pub fn build(self) -> Box<dyn Scorer> {
        match self {
            ScorerKind::Overlap => Box::new(OverlapFraction),
            ScorerKind::Cosine => Box::new(CosineSimilarity),
        }
    }
}

impl FromStr for ScorerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "overlap" | "overlap-fraction" => Ok(ScorerKind::Overlap),
            "cosine" | "cosine-similarity" => Ok(ScorerKind::Cosine),
            other => Err(format!("unknown scorer '{}'", other)),
        }
    }
}

impl fmt::Display for ScorerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScorerKind::Overlap => write!(f, "overlap"),
            ScorerKind::Cosine => write!(f, "cosine"),
        }
    }
}
