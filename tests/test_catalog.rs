mod common;

use std::collections::BTreeSet;

use meal_maker::matcher::{catalog, MatcherError, Recipe, RecipeMatcher, RecipeRecord};
use pretty_assertions::assert_eq;

#[test]
fn test_builtin_catalog_contents() {
    let recipes = catalog::builtin();

    assert_eq!(recipes.len(), 10);
    assert_eq!(recipes[0].name(), "Vegetable Omelette");
    assert_eq!(recipes[9].name(), "Stir-Fry Veggies");

    let unique: BTreeSet<&str> = recipes.iter().map(|r| r.name()).collect();
    assert_eq!(unique.len(), recipes.len(), "Recipe names should be unique");

    for r in &recipes {
        assert!(!r.ingredients().is_empty(), "{} has no ingredients", r.name());
        assert!(!r.tags().is_empty(), "{} has no tags", r.name());
    }
}

#[test_log::test]
fn test_load_catalog_from_json_file() {
    let path = common::write_temp_file(
        "catalog",
        r#"[
            {
                "name": "Bruschetta",
                "ingredients": ["Bread", "Tomato", "Olive  Oil", "garlic"],
                "instructions": "Toast bread. Top with tomato.",
                "tags": ["starter"]
            },
            {
                "name": "Toast",
                "ingredients": ["bread"],
                "instructions": "Toast it."
            }
        ]"#,
    );

    let recipes = catalog::load_from_path(&path).expect("Catalog should load");
    std::fs::remove_file(&path).ok();

    assert_eq!(recipes.len(), 2);
    assert_eq!(
        recipes[0].ingredients(),
        ["Bread", "Tomato", "Olive  Oil", "garlic"]
    );
    assert_eq!(
        recipes[0].distinct_ingredients(),
        ["bread", "tomato", "olive oil", "garlic"]
    );
    assert!(recipes[0].tags().contains("starter"));
    assert!(recipes[1].tags().is_empty(), "Tags default to empty");

    let matcher = RecipeMatcher::new(recipes).unwrap();
    let results = matcher.suggest("bread tomato olive oil garlic", 2);
    assert_eq!(results[0].name(), "Bruschetta");
    assert_eq!(results[0].score, 1.0);
    assert_eq!(results[1].score, 1.0);
}

#[test]
fn test_recipe_deserializes_from_record_json() {
    let recipe: Recipe = serde_json::from_str(
        r#"{"name": "Toast", "ingredients": ["Bread", "bread", "Butter"], "instructions": "Toast it."}"#,
    )
    .unwrap();

    assert_eq!(recipe.name(), "Toast");
    assert_eq!(recipe.ingredients(), ["Bread", "bread", "Butter"]);
    assert_eq!(recipe.distinct_ingredients(), ["bread", "butter"]);
    assert!(recipe.tags().is_empty());
}

#[test]
fn test_missing_catalog_file() {
    let path = std::env::temp_dir().join("meal-maker-does-not-exist.json");

    match catalog::load_from_path(&path) {
        Err(MatcherError::CatalogIo { path: p, .. }) => assert_eq!(p, path),
        other => panic!("Expected CatalogIo error, got {:?}", other.map(|r| r.len())),
    }
}

#[test]
fn test_malformed_catalog_file() {
    let path = common::write_temp_file("malformed", r#"[{"name": "Broken"}]"#);

    let result = catalog::load_from_path(&path);
    std::fs::remove_file(&path).ok();

    assert!(matches!(result, Err(MatcherError::CatalogParse { .. })));
}

#[test]
fn test_empty_catalog_file_is_rejected_by_matcher() {
    let path = common::write_temp_file("empty", "[]");

    let recipes = catalog::load_from_path(&path).expect("An empty array is valid JSON");
    std::fs::remove_file(&path).ok();

    assert!(recipes.is_empty());
    assert!(matches!(
        RecipeMatcher::new(recipes),
        Err(MatcherError::InvalidCatalog(_))
    ));
}

#[test]
fn test_record_serializes_with_tags() {
    let recipes = catalog::builtin();
    let record = RecipeRecord::from(&recipes[0]);

    let value = serde_json::to_value(&record).unwrap();

    assert_eq!(value["name"], "Vegetable Omelette");
    assert_eq!(value["tags"], serde_json::json!(["breakfast", "fast", "healthy"]));
}
