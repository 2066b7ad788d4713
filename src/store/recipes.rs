use std::fmt;

use super::RecipeStore;
use crate::constants::{
    DEFAULT_CATEGORY, ERR_LOGIN_TO_ADD_RECIPE, ERR_MISSING_RECIPE_FIELDS, PLACEHOLDER_IMAGE,
};
use crate::error::{Result, StoreError};
use crate::models::{EntityId, NewRecipe, Recipe};
use crate::storage::KeyValueStore;

impl<S: KeyValueStore> RecipeStore<S> {
    /// Submit a recipe as the logged-in user
    ///
    /// The new recipe goes to the front of the list and is returned.
    pub fn add_recipe(&mut self, recipe: NewRecipe) -> Result<Recipe> {
        let author = self
            .state
            .session
            .clone()
            .ok_or_else(|| StoreError::Auth(ERR_LOGIN_TO_ADD_RECIPE.to_string()))?;

        if !recipe.has_required_fields() {
            return Err(StoreError::Validation(ERR_MISSING_RECIPE_FIELDS.to_string()));
        }

        let recipe = Recipe {
            id: self.ids.next_id(),
            title: recipe.title.trim().to_string(),
            description: recipe.description.trim().to_string(),
            category: non_blank(recipe.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            ingredients: recipe.ingredients.trim().to_string(),
            steps: recipe.steps.trim().to_string(),
            image: non_blank(recipe.image).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            author_name: author.name,
            author_user_id: Some(author.id),
        };

        let mut next = self.state.clone();
        next.recipes.insert(0, recipe.clone());
        self.commit(next)?;

        tracing::info!("Recipe {} added by user {}", recipe.id, author.id);
        Ok(recipe)
    }

    /// Every recipe, newest submission first
    pub fn list_recipes(&self) -> Vec<Recipe> {
        self.state.recipes.clone()
    }

    /// Look a recipe up by id
    ///
    /// Ids are compared in their string form, so `42`, `"42"` and
    /// `EntityId(42)` all find the same recipe.
    pub fn find_recipe(&self, id: impl fmt::Display) -> Option<Recipe> {
        let wanted = id.to_string();
        self.state
            .recipes
            .iter()
            .find(|recipe| recipe.id.to_string() == wanted)
            .cloned()
    }

    /// Case-insensitive substring search over title, description,
    /// ingredients and category
    ///
    /// An empty term returns the full list.
    pub fn search_recipes(&self, term: &str) -> Vec<Recipe> {
        if term.is_empty() {
            return self.list_recipes();
        }

        let term = term.to_lowercase();
        self.state
            .recipes
            .iter()
            .filter(|recipe| recipe.search_text().contains(&term))
            .cloned()
            .collect()
    }

    /// Recipes submitted by one user, in list order
    pub fn recipes_by_author(&self, user_id: EntityId) -> Vec<Recipe> {
        self.state
            .recipes
            .iter()
            .filter(|recipe| recipe.author_user_id == Some(user_id))
            .cloned()
            .collect()
    }
}

/// Trimmed value, or `None` when missing or blank
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
