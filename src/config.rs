use std::env;

use crate::constants::DEFAULT_DATABASE_PATH;

/// Catalog configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    /// Seed the fixed starter recipes when the recipe collection is empty
    pub seed_recipes: bool,
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists (development)
        dotenvy::dotenv().ok();

        let database_path =
            env::var("RECIPE_DB_PATH").unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string());

        let seed_recipes = env::var("RECIPE_SEED")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .map_err(|_| "Invalid RECIPE_SEED")?;

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            database_path,
            seed_recipes,
            environment,
        })
    }

    /// Configuration for a database at `path` with seeding enabled
    pub fn with_database_path(path: impl Into<String>) -> Self {
        Config {
            database_path: path.into(),
            seed_recipes: true,
            environment: "development".to_string(),
        }
    }
}
