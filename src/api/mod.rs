//! Boundary used by the presentation layer
//!
//! Every operation takes a plain request value and answers with an
//! [`Outcome`]; failures never escape as errors. Pages must go through
//! [`Catalog`] rather than touching the persisted collections.

pub mod outcome;
pub mod requests;

pub use outcome::Outcome;
pub use requests::{LoginRequest, RecipeKey, RegisterRequest, ReportRequest};

use crate::constants::{
    MSG_LOGGED_IN, MSG_LOGGED_OUT, MSG_PROFILE, MSG_RECIPE_ADDED, MSG_REGISTERED,
    MSG_REPORT_FILED,
};
use crate::models::{NewRecipe, Profile, Recipe, User};
use crate::storage::{KeyValueStore, RedbStorage};
use crate::store::RecipeStore;

/// Facade over a [`RecipeStore`]
pub struct Catalog<S: KeyValueStore = RedbStorage> {
    store: RecipeStore<S>,
}

impl<S: KeyValueStore> Catalog<S> {
    pub fn new(store: RecipeStore<S>) -> Self {
        Self { store }
    }

    pub fn register(&mut self, request: RegisterRequest) -> Outcome<()> {
        let result = self
            .store
            .register(&request.name, &request.email, &request.password);
        Outcome::from_result(result, MSG_REGISTERED).discard_payload()
    }

    pub fn login(&mut self, request: LoginRequest) -> Outcome<()> {
        let result = self.store.login(&request.email, &request.password);
        Outcome::from_result(result, MSG_LOGGED_IN).discard_payload()
    }

    pub fn logout(&mut self) -> Outcome<()> {
        Outcome::from_result(self.store.logout(), MSG_LOGGED_OUT).discard_payload()
    }

    pub fn current_user(&self) -> Option<User> {
        self.store.current_user().cloned()
    }

    pub fn profile(&self) -> Outcome<Profile> {
        Outcome::from_result(self.store.profile(), MSG_PROFILE)
    }

    pub fn add_recipe(&mut self, request: NewRecipe) -> Outcome<Recipe> {
        Outcome::from_result(self.store.add_recipe(request), MSG_RECIPE_ADDED)
    }

    pub fn list_recipes(&self) -> Vec<Recipe> {
        self.store.list_recipes()
    }

    pub fn find_recipe(&self, id: &RecipeKey) -> Option<Recipe> {
        self.store.find_recipe(id)
    }

    /// A missing term lists every recipe
    pub fn search_recipes(&self, term: Option<&str>) -> Vec<Recipe> {
        self.store.search_recipes(term.unwrap_or_default())
    }

    pub fn file_report(&mut self, request: ReportRequest) -> Outcome<()> {
        let result = self
            .store
            .file_report(&request.recipe_id, request.reason.as_deref());
        Outcome::from_result(result, MSG_REPORT_FILED).discard_payload()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::models::SequentialIdGenerator;
    use crate::storage::MemoryStorage;

    fn test_catalog() -> Catalog<MemoryStorage> {
        let store = RecipeStore::load_with(
            MemoryStorage::new(),
            Box::new(SequentialIdGenerator::default()),
            true,
        )
        .unwrap();
        Catalog::new(store)
    }

    fn register_request(email: &str) -> RegisterRequest {
        RegisterRequest {
            name: "Ana".to_string(),
            email: email.to_string(),
            password: "pw".to_string(),
        }
    }

    #[test]
    fn test_register_outcomes() {
        let mut catalog = test_catalog();

        let first = catalog.register(register_request("ana@x.com"));
        assert!(first.ok);
        assert_eq!(first.message, MSG_REGISTERED);
        assert!(first.payload.is_none());

        let second = catalog.register(register_request("ANA@x.com"));
        assert!(!second.ok);
        assert_eq!(second.error, Some(ErrorKind::Conflict));
    }

    #[test]
    fn test_login_and_logout_outcomes() {
        let mut catalog = test_catalog();
        catalog.register(register_request("ana@x.com"));

        let failed = catalog.login(LoginRequest {
            email: "ana@x.com".to_string(),
            password: "nope".to_string(),
        });
        assert_eq!(failed.error, Some(ErrorKind::Auth));
        assert!(catalog.current_user().is_none());

        let ok = catalog.login(LoginRequest {
            email: "ana@x.com".to_string(),
            password: "pw".to_string(),
        });
        assert!(ok.ok);
        assert_eq!(catalog.current_user().map(|u| u.name), Some("Ana".to_string()));

        assert!(catalog.logout().ok);
        assert!(catalog.current_user().is_none());
    }

    #[test]
    fn test_add_recipe_outcome_carries_recipe() {
        let mut catalog = test_catalog();

        let anonymous = catalog.add_recipe(NewRecipe::new("T", "D", "a,b", "s1;s2"));
        assert_eq!(anonymous.error, Some(ErrorKind::Auth));

        catalog.register(register_request("ana@x.com"));
        catalog.login(LoginRequest {
            email: "ana@x.com".to_string(),
            password: "pw".to_string(),
        });
        let added = catalog.add_recipe(NewRecipe::new("T", "D", "a,b", "s1;s2"));

        assert!(added.ok);
        let recipe = added.payload.unwrap();
        assert_eq!(catalog.list_recipes()[0], recipe);
        assert_eq!(
            catalog.find_recipe(&RecipeKey::Text(recipe.id.to_string())),
            Some(recipe.clone())
        );
        assert_eq!(catalog.find_recipe(&RecipeKey::Number(recipe.id.0)), Some(recipe));
    }

    #[test]
    fn test_search_without_term() {
        let catalog = test_catalog();
        assert_eq!(catalog.search_recipes(None), catalog.list_recipes());
        assert_eq!(catalog.search_recipes(Some("salad")).len(), 1);
    }

    #[test]
    fn test_file_report_outcomes() {
        let mut catalog = test_catalog();
        let id = catalog.list_recipes()[0].id;

        let missing = catalog.file_report(ReportRequest {
            recipe_id: RecipeKey::Number(987_654),
            reason: None,
        });
        assert_eq!(missing.error, Some(ErrorKind::NotFound));

        let filed = catalog.file_report(ReportRequest {
            recipe_id: RecipeKey::Number(id.0),
            reason: Some("spam".to_string()),
        });
        assert!(filed.ok);
        assert_eq!(filed.message, MSG_REPORT_FILED);

        let json = serde_json::to_value(&filed).unwrap();
        assert!(json.get("payload").is_none());
    }

    #[test]
    fn test_profile_outcome() {
        let mut catalog = test_catalog();
        assert_eq!(catalog.profile().error, Some(ErrorKind::Auth));

        catalog.register(register_request("ana@x.com"));
        catalog.login(LoginRequest {
            email: "ana@x.com".to_string(),
            password: "pw".to_string(),
        });
        let profile = catalog.profile();
        assert!(profile.ok);
        assert_eq!(profile.payload.map(|p| p.user.email), Some("ana@x.com".to_string()));
    }
}
