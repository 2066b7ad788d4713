use serde::{Deserialize, Serialize};

use super::{EntityId, Recipe};

/// Registered account
///
/// The password is stored and compared as entered. This is a known
/// weakness carried over deliberately; there is no hashing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub name: String,
    /// Lowercased and trimmed, unique across users
    pub email: String,
    pub password: String,
}

impl User {
    /// Canonical form used for storing and comparing emails
    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }

    /// Plain comparison against the stored password
    pub fn password_matches(&self, password: &str) -> bool {
        self.password == password
    }
}

/// Logged-in user together with the recipes they submitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub user: User,
    pub recipes: Vec<Recipe>,
}
