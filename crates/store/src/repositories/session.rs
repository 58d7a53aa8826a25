//! Current-session repository.

use wiremit_core::auth::User;

use crate::error::StoreError;
use crate::store::Store;

/// Repository for the single persisted session record.
///
/// The session is set on successful sign-in/sign-up, survives restarts,
/// and is cleared on sign-out.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    store: Store,
}

impl SessionRepository {
    /// Creates a repository over the given store.
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Returns the currently signed-in user, if any.
    ///
    /// Idempotent: repeated reads without an intervening sign-in/out return
    /// the same result.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on storage failure.
    pub async fn current(&self) -> Result<Option<User>, StoreError> {
        Ok(self.store.read(|doc| doc.session.clone()).await)
    }

    /// Persists `user` as the active session.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on storage failure.
    pub async fn set(&self, user: &User) -> Result<(), StoreError> {
        let user = user.clone();
        self.store
            .update(move |doc| {
                doc.session = Some(user);
                Ok(())
            })
            .await
    }

    /// Clears the active session.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on storage failure.
    pub async fn clear(&self) -> Result<(), StoreError> {
        self.store
            .update(|doc| {
                doc.session = None;
                Ok(())
            })
            .await
    }
}
