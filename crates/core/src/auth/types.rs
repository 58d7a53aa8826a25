//! Auth domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wiremit_shared::types::UserId;

/// A registered user.
///
/// Created on sign-up and immutable thereafter. Email is unique across the
/// users collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address, unique.
    pub email: String,
    /// Sign-up timestamp.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user record with a generated ID and current timestamp.
    #[must_use]
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            id: UserId::new(),
            name: name.trim().to_string(),
            email: email.trim().to_lowercase(),
            created_at: Utc::now(),
        }
    }
}

/// Raw sign-up submission, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct SignUpInput {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Plaintext password; hashed before storage.
    pub password: String,
}

/// Raw sign-in submission, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct SignInInput {
    /// Email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}
