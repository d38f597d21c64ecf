//! Runtime settings read from environment variables.
//!
//! | Variable              | Default          |
//! |-----------------------|------------------|
//! | `MEAL_MAKER_CATALOG`  | built-in catalog |
//! | `MEAL_MAKER_SCORER`   | `overlap`        |
//! | `MEAL_MAKER_TOP_K`    | `3`              |
//! | `BIND_ADDR`           | `127.0.0.1:3001` |

use std::env;
use std::path::PathBuf;

use crate::matcher::{catalog, Recipe, RecipeMatcher, Result, ScorerKind};

pub const DEFAULT_TOP_K: i64 = 3;
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3001";

#[derive(Debug, Clone)]
pub struct Settings {
    pub catalog_path: Option<PathBuf>,
    pub scorer: ScorerKind,
    pub default_top_k: i64,
    pub bind_addr: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: None,
            scorer: ScorerKind::default(),
            default_top_k: DEFAULT_TOP_K,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the environment, falling back to defaults for
    /// anything unset or unparseable.
    pub fn from_env() -> Self {
        let catalog_path = env::var("MEAL_MAKER_CATALOG")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let scorer = match env::var("MEAL_MAKER_SCORER") {
            Ok(raw) => raw.parse::<ScorerKind>().unwrap_or_else(|e| {
                tracing::warn!("{}, falling back to {}", e, ScorerKind::default());
                ScorerKind::default()
            }),
            Err(_) => ScorerKind::default(),
        };

        let default_top_k = match env::var("MEAL_MAKER_TOP_K") {
            Ok(raw) => raw.trim().parse::<i64>().unwrap_or_else(|_| {
                tracing::warn!(
                    "MEAL_MAKER_TOP_K '{}' is not a number, using {}",
                    raw,
                    DEFAULT_TOP_K
                );
                DEFAULT_TOP_K
            }),
            Err(_) => DEFAULT_TOP_K,
        };

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        Self {
            catalog_path,
            scorer,
            default_top_k,
            bind_addr,
        }
    }

    /// The configured catalog: the JSON file if one is set, else the built-in one.
    pub fn load_catalog(&self) -> Result<Vec<Recipe>> {
        match &self.catalog_path {
            Some(path) => catalog::load_from_path(path),
            None => Ok(catalog::builtin()),
        }
    }

    pub fn build_matcher(&self) -> Result<RecipeMatcher> {
        RecipeMatcher::with_scorer(self.load_catalog()?, self.scorer.build())
    }
}
