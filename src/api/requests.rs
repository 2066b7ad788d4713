use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Recipe id as it arrives from a page: a JSON number or a string
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RecipeKey {
    Number(u64),
    Text(String),
}

impl fmt::Display for RecipeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeKey::Number(id) => write!(f, "{}", id),
            RecipeKey::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportRequest {
    #[serde(rename = "recipeId")]
    pub recipe_id: RecipeKey,
    /// Defaults to "not specified" when missing or blank
    #[serde(default)]
    pub reason: Option<String>,
}
