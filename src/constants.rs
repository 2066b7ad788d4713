// =============================================================================
// Storage Keys
// =============================================================================

/// Registered users (JSON array)
pub const KEY_USERS: &str = "catalog_users_v1";

/// Recipe collection, newest submission first (JSON array)
pub const KEY_RECIPES: &str = "catalog_recipes_v1";

/// Logged-in user (JSON object or `null`)
pub const KEY_SESSION: &str = "catalog_session_v1";

/// Favorites slot, kept for forward compatibility (JSON array)
pub const KEY_FAVORITES: &str = "catalog_favorites_v1";

/// Recipe reports, append-only (JSON array)
pub const KEY_REPORTS: &str = "catalog_reports_v1";

// =============================================================================
// Defaults
// =============================================================================

/// Category assigned when a submission leaves it blank
pub const DEFAULT_CATEGORY: &str = "Other";

/// Image assigned when a submission leaves it blank
pub const PLACEHOLDER_IMAGE: &str = "images/placeholder.png";

/// Reason recorded when a report is filed without one
pub const DEFAULT_REPORT_REASON: &str = "not specified";

/// Author name shown on seed recipes
pub const SEED_AUTHOR: &str = "Admin";

/// Default location of the catalog database
pub const DEFAULT_DATABASE_PATH: &str = "./data/recipes.redb";

// =============================================================================
// Messages
// =============================================================================

pub const ERR_MISSING_ACCOUNT_FIELDS: &str = "Please fill in all fields.";

pub const ERR_EMAIL_TAKEN: &str = "Email already registered.";

pub const ERR_INVALID_CREDENTIALS: &str = "Invalid credentials.";

pub const ERR_LOGIN_REQUIRED: &str = "Log in to continue.";

pub const ERR_LOGIN_TO_ADD_RECIPE: &str = "Log in to add a recipe.";

pub const ERR_MISSING_RECIPE_FIELDS: &str = "Required fields are missing.";

pub const ERR_RECIPE_NOT_FOUND: &str = "Recipe not found.";

/// Shown to callers in place of internal storage failures
pub const ERR_STORAGE_UNAVAILABLE: &str = "Storage is unavailable. Please try again.";

pub const MSG_REGISTERED: &str = "Registration successful.";

pub const MSG_LOGGED_IN: &str = "Signed in.";

pub const MSG_LOGGED_OUT: &str = "Signed out.";

pub const MSG_RECIPE_ADDED: &str = "Recipe added.";

pub const MSG_REPORT_FILED: &str = "Report submitted.";

pub const MSG_PROFILE: &str = "Profile loaded.";
