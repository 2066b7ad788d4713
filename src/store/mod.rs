//! The recipe store
//!
//! [`RecipeStore`] loads every collection into memory when it is created and
//! writes the complete state back after each mutation. A mutation is staged
//! on a copy of the state and only replaces the live state once the flush
//! has succeeded, so a failed call leaves both memory and storage as they
//! were.

mod accounts;
mod recipes;
mod reports;
mod seed;
mod state;

use crate::config::Config;
use crate::error::Result;
use crate::models::{IdGenerator, TimestampIdGenerator};
use crate::storage::{KeyValueStore, RedbStorage};

use state::CatalogState;

/// Owner of users, recipes, the session, favorites and reports
pub struct RecipeStore<S: KeyValueStore = RedbStorage> {
    storage: S,
    ids: Box<dyn IdGenerator>,
    state: CatalogState,
}

impl RecipeStore<RedbStorage> {
    /// Open the database named by `config` and load the catalog from it
    pub fn open(config: &Config) -> Result<Self> {
        tracing::info!(
            "Environment: {}, database: {}",
            config.environment,
            config.database_path
        );
        let storage = RedbStorage::open(&config.database_path)?;
        Self::load_with(
            storage,
            Box::new(TimestampIdGenerator::new()),
            config.seed_recipes,
        )
    }
}

impl<S: KeyValueStore> RecipeStore<S> {
    /// Load the catalog with timestamp ids, seeding an empty recipe list
    pub fn load(storage: S) -> Result<Self> {
        Self::load_with(storage, Box::new(TimestampIdGenerator::new()), true)
    }

    /// Load the catalog with an explicit id generator
    ///
    /// When `seed` is set and no recipes are stored, the starter recipes
    /// are added and persisted.
    pub fn load_with(storage: S, ids: Box<dyn IdGenerator>, seed: bool) -> Result<Self> {
        let state = CatalogState::read_from(&storage)?;
        let mut ids = ids;
        if let Some(max_id) = state.max_id() {
            ids.observe(max_id);
        }
        let mut store = Self {
            storage,
            ids,
            state,
        };

        if seed && store.state.recipes.is_empty() {
            let mut next = store.state.clone();
            next.recipes = seed::seed_recipes(store.ids.as_mut());
            store.commit(next)?;
            tracing::info!("Seeded {} starter recipes", store.state.recipes.len());
        }

        tracing::info!(
            "Recipe store loaded: {} users, {} recipes, {} reports",
            store.state.users.len(),
            store.state.recipes.len(),
            store.state.reports.len()
        );

        Ok(store)
    }

    /// Write the current state to storage
    pub fn flush(&self) -> Result<()> {
        self.state.write_to(&self.storage)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give up the store, keeping its storage
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Persist `next`, then make it the live state
    fn commit(&mut self, next: CatalogState) -> Result<()> {
        next.write_to(&self.storage)?;
        self.state = next;
        Ok(())
    }
}
