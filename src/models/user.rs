//! User model for storage and API.

use serde::{Deserialize, Serialize};

/// User record stored in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Generated identifier (also used as document ID)
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name; no uniqueness is enforced
    pub username: String,
}
