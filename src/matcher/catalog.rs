//! Catalog sources.
//!
//! The application either uses the built-in catalog or loads a JSON file
//! holding an array of [`RecipeRecord`](crate::matcher::RecipeRecord)s.
//! Loading never validates emptiness;
//! [`RecipeMatcher`](crate::matcher::RecipeMatcher) rejects empty catalogs.

use std::path::Path;

use crate::matcher::{
    error::{MatcherError, Result},
    types::Recipe,
};

/// The ten recipes shipped with the application, in display order.
pub fn builtin() -> Vec<Recipe> {
    vec![
        Recipe::new(
            "Vegetable Omelette",
            ["eggs", "onion", "tomato", "spinach", "salt", "pepper"],
            "Whisk eggs. Cook chopped veggies in a pan. Add eggs and fold.",
        )
        .with_tags(["breakfast", "fast", "healthy"]),
        Recipe::new(
            "Pasta with Tomato Sauce",
            ["pasta", "tomato", "garlic", "olive oil", "salt", "basil"],
            "Boil pasta. Simmer garlic and tomato sauce. Mix.",
        )
        .with_tags(["lunch", "easy"]),
        Recipe::new(
            "Mexican Chicken Tacos",
            ["chicken", "tortillas", "onion", "cilantro", "lime"],
            "Sauté chicken. Warm tortillas. Add toppings.",
        )
        .with_tags(["latin", "protein"]),
        Recipe::new(
            "Lentil Soup",
            ["lentils", "carrot", "onion", "celery", "garlic", "salt"],
            "Simmer all ingredients for 30 min.",
        )
        .with_tags(["vegan", "cheap", "batch-cooking"]),
        Recipe::new(
            "Fried Rice",
            ["rice", "egg", "carrot", "pea", "soy sauce", "onion"],
            "Stir fry ingredients in wok.",
        )
        .with_tags(["asian", "use-leftovers"]),
        Recipe::new(
            "Chicken Rice Bowl",
            ["rice", "chicken", "soy sauce", "carrot", "onion"],
            "Cook rice. Stir fry chicken and veggies.",
        )
        .with_tags(["balanced"]),
        Recipe::new(
            "Guacamole",
            ["avocado", "onion", "tomato", "lime", "cilantro", "salt"],
            "Mash avocado. Mix chopped ingredients.",
        )
        .with_tags(["dip", "healthy", "snack"]),
        Recipe::new(
            "Greek Salad",
            ["tomato", "cucumber", "olive oil", "onion", "feta", "oregano"],
            "Chop and mix all ingredients.",
        )
        .with_tags(["veggie", "fresh", "low-cal"]),
        Recipe::new(
            "Fruit Yogurt Bowl",
            ["yogurt", "banana", "berries", "honey", "granola"],
            "Layer yogurt, fruit and granola.",
        )
        .with_tags(["breakfast", "healthy"]),
        Recipe::new(
            "Stir-Fry Veggies",
            ["broccoli", "carrot", "pepper", "soy sauce", "garlic"],
            "Stir fry on high heat.",
        )
        .with_tags(["vegan", "fast"]),
    ]
}

/// Parse a JSON array of recipe records.
pub fn from_json_str(json: &str, origin: &Path) -> Result<Vec<Recipe>> {
    serde_json::from_str(json).map_err(|source| MatcherError::CatalogParse {
        path: origin.to_path_buf(),
        source,
    })
}

/// Read and parse a JSON catalog file.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Vec<Recipe>> {
    let path = path.as_ref();
    tracing::debug!("Loading recipe catalog from {}", path.display());

    let json = std::fs::read_to_string(path).map_err(|source| MatcherError::CatalogIo {
        path: path.to_path_buf(),
        source,
    })?;

    let recipes = from_json_str(&json, path)?;
    tracing::info!("Loaded {} recipes from {}", recipes.len(), path.display());
    Ok(recipes)
}
