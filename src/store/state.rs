use serde::de::DeserializeOwned;

use crate::constants::{KEY_FAVORITES, KEY_RECIPES, KEY_REPORTS, KEY_SESSION, KEY_USERS};
use crate::error::Result;
use crate::models::{EntityId, Favorite, Recipe, Report, User};
use crate::storage::KeyValueStore;

/// Every persisted collection, held in memory
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct CatalogState {
    pub users: Vec<User>,
    pub recipes: Vec<Recipe>,
    pub session: Option<User>,
    pub favorites: Vec<Favorite>,
    pub reports: Vec<Report>,
}

impl CatalogState {
    /// Load all snapshots; absent keys yield empty collections
    pub fn read_from<S: KeyValueStore>(storage: &S) -> Result<Self> {
        Ok(Self {
            users: read_snapshot(storage, KEY_USERS)?.unwrap_or_default(),
            recipes: read_snapshot(storage, KEY_RECIPES)?.unwrap_or_default(),
            session: read_snapshot::<Option<User>, _>(storage, KEY_SESSION)?.flatten(),
            favorites: read_snapshot(storage, KEY_FAVORITES)?.unwrap_or_default(),
            reports: read_snapshot(storage, KEY_REPORTS)?.unwrap_or_default(),
        })
    }

    /// Largest id held by any user, recipe or report
    pub fn max_id(&self) -> Option<EntityId> {
        let users = self.users.iter().map(|user| user.id);
        let recipes = self.recipes.iter().map(|recipe| recipe.id);
        let reports = self.reports.iter().map(|report| report.id);
        users.chain(recipes).chain(reports).max()
    }

    /// Write every snapshot in one batch
    pub fn write_to<S: KeyValueStore>(&self, storage: &S) -> Result<()> {
        let entries = [
            (KEY_USERS, serde_json::to_vec(&self.users)?),
            (KEY_RECIPES, serde_json::to_vec(&self.recipes)?),
            (KEY_SESSION, serde_json::to_vec(&self.session)?),
            (KEY_FAVORITES, serde_json::to_vec(&self.favorites)?),
            (KEY_REPORTS, serde_json::to_vec(&self.reports)?),
        ];
        storage.write_batch(&entries)
    }
}

fn read_snapshot<T: DeserializeOwned, S: KeyValueStore>(storage: &S, key: &str) -> Result<Option<T>> {
    let snapshot = storage
        .get(key)?
        .map(|bytes| serde_json::from_slice(&bytes))
        .transpose()
        .map_err(|e| {
            tracing::error!("Corrupt snapshot under {}: {}", key, e);
            e
        })?;
    Ok(snapshot)
}
