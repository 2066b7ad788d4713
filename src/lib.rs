//! Recipe Catalog Library
//!
//! A single-user recipe catalog persisted in a local key-value store:
//! accounts with a single active session, recipe submission and search,
//! and an append-only log of recipe reports.
//!
//! ```no_run
//! use recipe_catalog::{Config, NewRecipe, RecipeStore};
//!
//! # fn main() -> recipe_catalog::Result<()> {
//! let mut store = RecipeStore::open(&Config::with_database_path("./data/recipes.redb"))?;
//! store.register("Ana", "ana@x.com", "pw")?;
//! store.login("ana@x.com", "pw")?;
//! let recipe = store.add_recipe(NewRecipe::new("Toast", "Crunchy", "bread,butter", "toast;butter"))?;
//! store.file_report(recipe.id, Some("spam"))?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod storage;
pub mod store;
pub mod telemetry;

pub use api::{Catalog, Outcome};
pub use config::Config;
pub use error::{ErrorKind, Result, StoreError};
pub use models::{EntityId, NewRecipe, Profile, Recipe, Report, User};
pub use storage::{KeyValueStore, MemoryStorage, RedbStorage};
pub use store::RecipeStore;
