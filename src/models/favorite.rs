use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque favorites entry
///
/// No operation reads or creates favorites; whatever is stored is loaded
/// and written back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorite(pub Value);
