use chrono::Utc;
use std::fmt;

use super::RecipeStore;
use super::recipes::non_blank;
use crate::constants::{DEFAULT_REPORT_REASON, ERR_RECIPE_NOT_FOUND};
use crate::error::{Result, StoreError};
use crate::models::Report;
use crate::storage::KeyValueStore;

impl<S: KeyValueStore> RecipeStore<S> {
    /// Flag a recipe
    ///
    /// Reports are append-only and are not returned by any query.
    pub fn file_report(&mut self, recipe_id: impl fmt::Display, reason: Option<&str>) -> Result<()> {
        let recipe = self.find_recipe(recipe_id).ok_or_else(|| {
            tracing::warn!("Report rejected: recipe not found");
            StoreError::NotFound(ERR_RECIPE_NOT_FOUND.to_string())
        })?;

        let report = Report {
            id: self.ids.next_id(),
            recipe_id: recipe.id,
            reason: non_blank(reason.map(str::to_string))
                .unwrap_or_else(|| DEFAULT_REPORT_REASON.to_string()),
            timestamp: Utc::now(),
        };

        let mut next = self.state.clone();
        next.reports.push(report);
        self.commit(next)?;

        tracing::info!("Report filed against recipe {}", recipe.id);
        Ok(())
    }
}
