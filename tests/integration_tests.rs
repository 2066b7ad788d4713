//! Integration tests for the Recipe Catalog
//!
//! These tests drive the public API against a redb file and reopen it to
//! verify what was persisted.

use recipe_catalog::api::{LoginRequest, RecipeKey, RegisterRequest, ReportRequest};
use recipe_catalog::constants::{KEY_FAVORITES, KEY_REPORTS, KEY_SESSION, KEY_USERS};
use recipe_catalog::models::SequentialIdGenerator;
use recipe_catalog::{
    Catalog, Config, ErrorKind, KeyValueStore, NewRecipe, RecipeStore, RedbStorage, Report,
};
use serde_json::{Value, json};
use std::path::PathBuf;
use tempfile::TempDir;

// =============================================================================
// Test Helpers
// =============================================================================

/// Path of the test database inside a temporary directory
fn db_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("data").join("recipes.redb")
}

/// Open a test configuration pointing at the temporary directory
fn test_config(temp_dir: &TempDir) -> Config {
    Config {
        database_path: db_path(temp_dir).to_string_lossy().into_owned(),
        seed_recipes: true,
        environment: "test".to_string(),
    }
}

/// Open the store with the default (timestamp) id generator
fn open_store(temp_dir: &TempDir) -> RecipeStore {
    RecipeStore::open(&test_config(temp_dir)).unwrap()
}

/// Read and decode one raw snapshot from the database file
fn read_snapshot(temp_dir: &TempDir, key: &str) -> Value {
    let storage = RedbStorage::open(db_path(temp_dir)).unwrap();
    let bytes = storage.get(key).unwrap().expect("snapshot should exist");
    serde_json::from_slice(&bytes).unwrap()
}

/// Register and log in a user
fn sign_in(store: &mut RecipeStore, name: &str, email: &str) {
    store.register(name, email, "pw").unwrap();
    store.login(email, "pw").unwrap();
}

// =============================================================================
// Initialization Tests
// =============================================================================

#[test]
fn test_fresh_database_is_seeded() {
    let temp_dir = TempDir::new().unwrap();
    let store = open_store(&temp_dir);

    let recipes = store.list_recipes();
    assert_eq!(recipes.len(), 3);
    assert!(recipes.iter().all(|r| r.author_user_id.is_none()));
    assert!(store.current_user().is_none());

    drop(store);
    assert_eq!(read_snapshot(&temp_dir, KEY_USERS), json!([]));
    assert_eq!(read_snapshot(&temp_dir, KEY_SESSION), Value::Null);
    assert_eq!(read_snapshot(&temp_dir, KEY_FAVORITES), json!([]));
    assert_eq!(read_snapshot(&temp_dir, KEY_REPORTS), json!([]));
}

#[test]
fn test_reopen_does_not_seed_again() {
    let temp_dir = TempDir::new().unwrap();
    let seeded = open_store(&temp_dir).list_recipes();

    let store = open_store(&temp_dir);

    assert_eq!(store.list_recipes(), seeded);
}

#[test]
fn test_unseeded_config_starts_empty() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config {
        seed_recipes: false,
        ..test_config(&temp_dir)
    };

    let store = RecipeStore::open(&config).unwrap();

    assert!(store.list_recipes().is_empty());
    assert!(store.search_recipes("").is_empty());
}

#[test]
fn test_favorites_are_preserved() {
    let temp_dir = TempDir::new().unwrap();
    drop(open_store(&temp_dir));

    {
        let storage = RedbStorage::open(db_path(&temp_dir)).unwrap();
        storage
            .write_batch(&[(KEY_FAVORITES, br#"[{"recipeId":1,"userId":2}]"#.to_vec())])
            .unwrap();
    }

    let mut store = open_store(&temp_dir);
    sign_in(&mut store, "Ana", "ana@x.com");
    drop(store);

    assert_eq!(
        read_snapshot(&temp_dir, KEY_FAVORITES),
        json!([{ "recipeId": 1, "userId": 2 }])
    );
}

// =============================================================================
// Persistence Tests
// =============================================================================

#[test]
fn test_state_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();

    let (recipes, user) = {
        let mut store = open_store(&temp_dir);
        sign_in(&mut store, "Ana", "ana@x.com");
        store.register("Bea", "bea@x.com", "secret").unwrap();
        let added = store
            .add_recipe(NewRecipe::new("Toast", "Crunchy", "bread,butter", "toast;spread"))
            .unwrap();
        store.file_report(added.id, Some("spam")).unwrap();
        (store.list_recipes(), store.current_user().cloned())
    };

    let mut store = open_store(&temp_dir);

    assert_eq!(store.list_recipes(), recipes);
    assert_eq!(store.current_user().cloned(), user);
    assert_eq!(store.search_recipes("toast").len(), 1);

    // Accounts came back too
    assert_eq!(
        store.register("Bea again", "BEA@x.com", "pw").unwrap_err().kind(),
        ErrorKind::Conflict
    );
    assert!(store.login("bea@x.com", "secret").is_ok());
}

#[test]
fn test_logout_is_persisted() {
    let temp_dir = TempDir::new().unwrap();
    {
        let mut store = open_store(&temp_dir);
        sign_in(&mut store, "Ana", "ana@x.com");
        store.logout().unwrap();
    }

    let store = open_store(&temp_dir);
    assert!(store.current_user().is_none());
}

#[test]
fn test_snapshots_use_camel_case_fields() {
    let temp_dir = TempDir::new().unwrap();
    {
        let mut store = open_store(&temp_dir);
        sign_in(&mut store, "Ana", "ana@x.com");
        let recipe = store
            .add_recipe(NewRecipe::new("T", "D", "a,b", "s1;s2"))
            .unwrap();
        store.file_report(recipe.id, None).unwrap();
    }

    let reports = read_snapshot(&temp_dir, KEY_REPORTS);
    let report = &reports[0];
    assert!(report["recipeId"].is_u64());
    assert_eq!(report["reason"], "not specified");
    assert!(report["timestamp"].as_str().unwrap().contains('T'));

    let typed: Vec<Report> = serde_json::from_value(reports).unwrap();
    assert_eq!(typed.len(), 1);

    let session = read_snapshot(&temp_dir, KEY_SESSION);
    assert_eq!(session["email"], "ana@x.com");
    assert_eq!(session["name"], "Ana");
}

// =============================================================================
// Report Tests
// =============================================================================

#[test]
fn test_report_grows_log_by_one() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open_store(&temp_dir);
    let id = store.list_recipes()[0].id;

    store.file_report(id, Some("spam")).unwrap();
    store.file_report(id, Some("offensive")).unwrap();
    assert_eq!(
        store.file_report("does-not-exist", Some("spam")).unwrap_err().kind(),
        ErrorKind::NotFound
    );
    drop(store);

    let reports = read_snapshot(&temp_dir, KEY_REPORTS);
    assert_eq!(reports.as_array().map(Vec::len), Some(2));
    assert_eq!(reports[1]["reason"], "offensive");
}

// =============================================================================
// Scenario Tests
// =============================================================================

#[test]
fn test_full_scenario_through_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let storage = RedbStorage::open(db_path(&temp_dir)).unwrap();
    let store =
        RecipeStore::load_with(storage, Box::new(SequentialIdGenerator::default()), true).unwrap();
    let mut catalog = Catalog::new(store);
    assert_eq!(catalog.list_recipes().len(), 3);

    let registered = catalog.register(RegisterRequest {
        name: "Ana".to_string(),
        email: "ana@x.com".to_string(),
        password: "pw".to_string(),
    });
    assert!(registered.ok, "{}", registered.message);

    let logged_in = catalog.login(LoginRequest {
        email: "ana@x.com".to_string(),
        password: "pw".to_string(),
    });
    assert!(logged_in.ok, "{}", logged_in.message);

    let added = catalog.add_recipe(NewRecipe::new("T", "D", "a,b", "s1;s2"));
    assert!(added.ok, "{}", added.message);
    let recipe = added.payload.unwrap();

    let listed = catalog.list_recipes();
    assert_eq!(listed.len(), 4);
    assert_eq!(listed[0], recipe);
    assert_eq!(listed[0].author_name, "Ana");

    assert!(catalog.search_recipes(Some("T")).contains(&recipe));

    let reported = catalog.file_report(ReportRequest {
        recipe_id: RecipeKey::Number(recipe.id.0),
        reason: Some("spam".to_string()),
    });
    assert!(reported.ok, "{}", reported.message);

    let outcome_json = serde_json::to_value(&reported).unwrap();
    assert_eq!(outcome_json["ok"], true);

    drop(catalog);
    let reports = read_snapshot(&temp_dir, KEY_REPORTS);
    assert_eq!(reports[0]["recipeId"], json!(recipe.id.0));
}

#[test]
fn test_search_property_holds_after_mutations() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open_store(&temp_dir);
    sign_in(&mut store, "Ana", "ana@x.com");
    store
        .add_recipe(NewRecipe::new("Lemon Tart", "Zesty", "lemons,butter", "bake").with_category("Dessert"))
        .unwrap();

    assert_eq!(store.search_recipes(""), store.list_recipes());

    let desserts = store.search_recipes("DESSERT");
    let titles: Vec<&str> = desserts.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["Lemon Tart", "Simple Chocolate Cake"]);
    assert_eq!(store.search_recipes("DESSERT"), desserts);

    for recipe in store.search_recipes("butter") {
        assert!(recipe.search_text().contains("butter"));
    }
}
