//! User and credential repository.

use wiremit_core::auth::User;

use crate::error::StoreError;
use crate::store::Store;

/// Repository for user records and their credentials.
///
/// Credentials are stored separately from the user record, one per email,
/// as Argon2 PHC hashes.
#[derive(Debug, Clone)]
pub struct UserRepository {
    store: Store,
}

impl UserRepository {
    /// Creates a repository over the given store.
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Inserts a new user together with its credential hash.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateEmail` when an account with the same
    /// email already exists; the existing record is left unchanged and
    /// nothing is written.
    pub async fn create(&self, user: User, credential_hash: String) -> Result<User, StoreError> {
        self.store
            .update(move |doc| {
                if doc.users.iter().any(|u| u.email == user.email) {
                    return Err(StoreError::DuplicateEmail);
                }
                doc.credentials.insert(user.email.clone(), credential_hash);
                doc.users.push(user.clone());
                Ok(user)
            })
            .await
    }

    /// Finds a user by email (normalized to lowercase).
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on storage failure.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let needle = email.trim().to_lowercase();
        Ok(self
            .store
            .read(|doc| doc.users.iter().find(|u| u.email == needle).cloned())
            .await)
    }

    /// Returns the stored credential hash for an email, if any.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on storage failure.
    pub async fn credential_hash(&self, email: &str) -> Result<Option<String>, StoreError> {
        let needle = email.trim().to_lowercase();
        Ok(self
            .store
            .read(|doc| doc.credentials.get(&needle).cloned())
            .await)
    }

    /// Number of registered users.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on storage failure.
    pub async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.store.read(|doc| doc.users.len()).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn repo() -> (tempfile::TempDir, UserRepository) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("wiremit.json")).await.unwrap();
        (dir, UserRepository::new(store))
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let (_dir, repo) = repo().await;
        let user = User::new("Alice", "alice@example.com");
        repo.create(user.clone(), "$argon2id$fake".to_string())
            .await
            .unwrap();

        let found = repo.find_by_email("alice@example.com").await.unwrap();
        assert_eq!(found, Some(user));
        assert_eq!(
            repo.credential_hash("alice@example.com").await.unwrap(),
            Some("$argon2id$fake".to_string())
        );
    }

    #[tokio::test]
    async fn test_lookup_is_case_insensitive() {
        let (_dir, repo) = repo().await;
        repo.create(
            User::new("Alice", "Alice@Example.com"),
            "hash".to_string(),
        )
        .await
        .unwrap();

        assert!(
            repo.find_by_email(" ALICE@EXAMPLE.COM ")
                .await
                .unwrap()
                .is_some()
        );
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected_and_original_kept() {
        let (_dir, repo) = repo().await;
        let original = User::new("Alice", "alice@example.com");
        repo.create(original.clone(), "hash-one".to_string())
            .await
            .unwrap();

        let result = repo
            .create(User::new("Imposter", "alice@example.com"), "hash-two".into())
            .await;
        assert!(matches!(result, Err(StoreError::DuplicateEmail)));

        // Existing record and credential untouched
        let found = repo.find_by_email("alice@example.com").await.unwrap();
        assert_eq!(found, Some(original));
        assert_eq!(
            repo.credential_hash("alice@example.com").await.unwrap(),
            Some("hash-one".to_string())
        );
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_unknown_email_is_none() {
        let (_dir, repo) = repo().await;
        assert!(repo.find_by_email("ghost@example.com").await.unwrap().is_none());
        assert!(
            repo.credential_hash("ghost@example.com")
                .await
                .unwrap()
                .is_none()
        );
    }
}
