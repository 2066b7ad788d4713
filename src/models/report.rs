use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::EntityId;

/// Flag raised against a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub id: EntityId,
    #[serde(rename = "recipeId")]
    pub recipe_id: EntityId,
    pub reason: String,
    /// When the report was filed (ISO-8601, UTC)
    pub timestamp: DateTime<Utc>,
}
