use super::RecipeStore;
use crate::constants::{
    ERR_EMAIL_TAKEN, ERR_INVALID_CREDENTIALS, ERR_LOGIN_REQUIRED, ERR_MISSING_ACCOUNT_FIELDS,
};
use crate::error::{Result, StoreError};
use crate::models::{Profile, User};
use crate::storage::KeyValueStore;

impl<S: KeyValueStore> RecipeStore<S> {
    /// Create an account
    ///
    /// All three fields must be non-blank. The email is lowercased and
    /// trimmed and must not belong to an existing user.
    pub fn register(&mut self, name: &str, email: &str, password: &str) -> Result<User> {
        let email = User::normalize_email(email);
        if name.trim().is_empty() || email.is_empty() || password.trim().is_empty() {
            return Err(StoreError::Validation(ERR_MISSING_ACCOUNT_FIELDS.to_string()));
        }

        if self.state.users.iter().any(|user| user.email == email) {
            tracing::warn!("Registration rejected: email already registered");
            return Err(StoreError::Conflict(ERR_EMAIL_TAKEN.to_string()));
        }

        let user = User {
            id: self.ids.next_id(),
            name: name.trim().to_string(),
            email,
            password: password.to_string(),
        };

        let mut next = self.state.clone();
        next.users.push(user.clone());
        self.commit(next)?;

        tracing::info!("New user registered: {}", user.id);
        Ok(user)
    }

    /// Start a session for the user with this email and exact password
    pub fn login(&mut self, email: &str, password: &str) -> Result<User> {
        let email = User::normalize_email(email);
        let user = self
            .state
            .users
            .iter()
            .find(|user| user.email == email && user.password_matches(password))
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("Login rejected: invalid credentials");
                StoreError::Auth(ERR_INVALID_CREDENTIALS.to_string())
            })?;

        let mut next = self.state.clone();
        next.session = Some(user.clone());
        self.commit(next)?;

        tracing::info!("User {} logged in", user.id);
        Ok(user)
    }

    /// End the session; a no-op session is still persisted
    pub fn logout(&mut self) -> Result<()> {
        let mut next = self.state.clone();
        if let Some(user) = next.session.take() {
            tracing::info!("User {} logged out", user.id);
        }
        self.commit(next)
    }

    pub fn current_user(&self) -> Option<&User> {
        self.state.session.as_ref()
    }

    /// The session user, or an auth error for pages that need a login
    pub fn require_user(&self) -> Result<&User> {
        self.current_user()
            .ok_or_else(|| StoreError::Auth(ERR_LOGIN_REQUIRED.to_string()))
    }

    /// The session user and the recipes they submitted
    pub fn profile(&self) -> Result<Profile> {
        let user = self.require_user()?.clone();
        let recipes = self.recipes_by_author(user.id);
        Ok(Profile { user, recipes })
    }
}
