#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use meal_maker::matcher::{Recipe, RecipeMatcher};

static FIXTURE_COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn recipe(name: &str, ingredients: &[&str]) -> Recipe {
    Recipe::new(name, ingredients.iter().copied(), format!("Cook the {}.", name.to_lowercase()))
}

pub fn matcher_of(recipes: Vec<Recipe>) -> RecipeMatcher {
    RecipeMatcher::new(recipes).expect("Fixture catalog should be valid")
}

pub fn names(results: &[meal_maker::matcher::QueryResult]) -> Vec<&str> {
    results.iter().map(|r| r.name()).collect()
}

/// Write `contents` to a fresh file in the system temp directory.
pub fn write_temp_file(stem: &str, contents: &str) -> PathBuf {
    let n = FIXTURE_COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!(
        "meal-maker-{}-{}-{}.json",
        stem,
        std::process::id(),
        n
    ));
    std::fs::write(&path, contents).expect("Failed to write fixture file");
    path
}

pub fn init_test_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}
