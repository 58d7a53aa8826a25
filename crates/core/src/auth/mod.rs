//! User/session domain types and credential handling.
//!
//! Credentials are stored as Argon2id hashes, never verbatim. Duplicate
//! emails are rejected at registration, invalid-credential failures are
//! indistinguishable from unknown emails, and at most one session is
//! persisted at a time.

pub mod password;
pub mod types;
pub mod validation;

pub use password::{PasswordError, hash_password, verify_password};
pub use types::{SignInInput, SignUpInput, User};
pub use validation::{validate_sign_in, validate_sign_up};
