//! # Meal Maker Library
//!
//! Recipe suggestions from the ingredients you have on hand. The crate
//! consists of three components:
//!
//! ## Matcher Module
//!
//! The [`matcher`] module holds the recipe catalog and ranks it against a
//! free-text ingredient list. It is synchronous, performs no I/O during
//! queries and can be shared freely between threads.
//!
//! ## Config Module
//!
//! The [`config`] module reads runtime settings (catalog file, scoring
//! strategy, default result count, bind address) from the environment.
//!
//! ## Server Module
//!
//! The [`server`] module exposes the matcher as MCP tools that AI assistants
//! and other clients can call.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use meal_maker::{catalog, MealMakerMcpServer, RecipeMatcher};
//!
//! // Use the matcher directly
//! let matcher = RecipeMatcher::new(catalog::builtin()).unwrap();
//! for suggestion in matcher.suggest("eggs, onion", 3) {
//!     println!("{} ({}% match)", suggestion.name(), suggestion.match_percent());
//! }
//!
//! // Or serve it over MCP
//! let server = MealMakerMcpServer::new(Arc::new(matcher), 3);
//! ```

pub mod config;
pub mod matcher;
pub mod server;

pub use matcher::{catalog, RecipeMatcher};
pub use server::MealMakerMcpServer;
