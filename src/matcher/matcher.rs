use std::cmp::Ordering;
use std::sync::Arc;

use crate::matcher::{
    error::{MatcherError, Result},
    normalize::{normalize_name, IngredientSet},
    scoring::{OverlapFraction, Scorer},
    types::{QueryResult, Recipe},
};

/// Ranks a fixed recipe catalog against free-text ingredient lists.
///
/// The catalog is owned, read-only and never mutated by a query, so a
/// matcher can be shared across threads behind an `Arc` without locking.
pub struct RecipeMatcher {
    recipes: Vec<Arc<Recipe>>,
    scorer: Box<dyn Scorer>,
}

impl RecipeMatcher {
    /// Build a matcher using [`OverlapFraction`] scoring.
    pub fn new<I>(recipes: I) -> Result<Self>
    where
        I: IntoIterator<Item = Recipe>,
    {
        Self::with_scorer(recipes, Box::new(OverlapFraction))
    }

    pub fn with_scorer<I>(recipes: I, scorer: Box<dyn Scorer>) -> Result<Self>
    where
        I: IntoIterator<Item = Recipe>,
    {
        let recipes: Vec<Arc<Recipe>> = recipes.into_iter().map(Arc::new).collect();

        if recipes.is_empty() {
            return Err(MatcherError::InvalidCatalog(
                "catalog must contain at least one recipe".to_string(),
            ));
        }

        tracing::info!(
            "Recipe matcher ready: {} recipes, {} scoring",
            recipes.len(),
            scorer.name()
        );

        Ok(Self { recipes, scorer })
    }

    /// Return the `top_k` most relevant recipes for `ingredient_text`.
    ///
    /// Results are ordered by descending score; equal scores keep catalog
    /// order. A non-positive `top_k` is treated as 1. Text that normalizes to
    /// no ingredients yields an empty list.
    pub fn suggest(&self, ingredient_text: &str, top_k: i64) -> Vec<QueryResult> {
        let user = IngredientSet::from_text(ingredient_text);
        self.suggest_for(&user, top_k)
    }

    /// Same as [`suggest`](Self::suggest) for an already normalized set.
    pub fn suggest_for(&self, user: &IngredientSet, top_k: i64) -> Vec<QueryResult> {
        if user.is_empty() {
            tracing::debug!("Query normalized to no ingredients, returning no suggestions");
            return Vec::new();
        }

        let limit = usize::try_from(top_k.max(1)).unwrap_or(usize::MAX);

        let mut results: Vec<QueryResult> = self
            .recipes
            .iter()
            .map(|recipe| {
                let score = sanitize(self.scorer.score(user, recipe));
                let matched = recipe
                    .distinct_ingredients()
                    .iter()
                    .filter(|i| user.covers(i))
                    .cloned()
                    .collect();
                QueryResult::new(Arc::clone(recipe), score, matched)
            })
            .collect();

        // sort_by is stable, so equal scores keep catalog order
        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        results.truncate(limit);

        tracing::debug!(
            "Scored {} recipes for {} ingredients, returning {}",
            self.recipes.len(),
            user.len(),
            results.len()
        );

        results
    }

    /// The catalog in insertion order.
    pub fn recipes(&self) -> &[Arc<Recipe>] {
        &self.recipes
    }

    /// Look a recipe up by name, ignoring case and surrounding whitespace.
    pub fn find(&self, name: &str) -> Option<Arc<Recipe>> {
        let wanted = normalize_name(name)?;
        self.recipes
            .iter()
            .find(|r| normalize_name(r.name()).as_deref() == Some(wanted.as_str()))
            .cloned()
    }

    pub fn scorer_name(&self) -> &'static str {
        self.scorer.name()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

fn sanitize(score: f64) -> f64 {
    if score.is_finite() {
        score.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
