//! The on-disk document shape.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use wiremit_core::auth::User;

/// Everything the store persists, in one document.
///
/// A users collection, a credentials map keyed by email, and a single
/// current-session record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// All registered users.
    #[serde(default)]
    pub users: Vec<User>,
    /// Email → Argon2 PHC hash.
    #[serde(default)]
    pub credentials: HashMap<String, String>,
    /// The currently signed-in user, if any.
    #[serde(default)]
    pub session: Option<User>,
}
