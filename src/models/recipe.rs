use serde::{Deserialize, Serialize};

use super::EntityId;

/// Catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Comma-delimited ingredient list
    pub ingredients: String,
    /// Semicolon-delimited, ordered preparation steps
    pub steps: String,
    pub image: String,
    #[serde(rename = "authorName")]
    pub author_name: String,
    /// `None` for seed recipes
    #[serde(rename = "authorUserId")]
    pub author_user_id: Option<EntityId>,
}

impl Recipe {
    pub fn ingredient_list(&self) -> Vec<&str> {
        split_list(&self.ingredients, ',')
    }

    pub fn step_list(&self) -> Vec<&str> {
        split_list(&self.steps, ';')
    }

    /// Lowercased text searched by [`crate::RecipeStore::search_recipes`]
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title, self.description, self.ingredients, self.category
        )
        .to_lowercase()
    }
}

fn split_list(raw: &str, separator: char) -> Vec<&str> {
    raw.split(separator)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

/// Recipe submission
///
/// `title`, `description`, `ingredients` and `steps` are required and must
/// not be blank. A blank or missing `category` becomes "Other"; a blank or
/// missing `image` becomes the placeholder image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewRecipe {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    pub ingredients: String,
    pub steps: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl NewRecipe {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        ingredients: impl Into<String>,
        steps: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ingredients: ingredients.into(),
            steps: steps.into(),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// True when every required field has non-whitespace content
    pub fn has_required_fields(&self) -> bool {
        [&self.title, &self.description, &self.ingredients, &self.steps]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}
