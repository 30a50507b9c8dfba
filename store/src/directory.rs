//! The [`UserStore`] gateway trait and the [`Directory`] collection mirror.

use crate::error::StoreError;
use crate::models::{User, UserDraft, UserId};

/// Async gateway to the remote store's four user operations.
///
/// Every call is fire-once: no retries, no caching, no cancellation. The
/// "store has no records" answer is already normalized to `Ok(vec![])` by
/// implementations, so an empty collection is never an error here.
pub trait UserStore {
    fn list(&self) -> impl std::future::Future<Output = Result<Vec<User>, StoreError>>;
    fn create(
        &self,
        draft: &UserDraft,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
    fn update(
        &self,
        id: &UserId,
        draft: &UserDraft,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
    fn delete(&self, id: &UserId) -> impl std::future::Future<Output = Result<(), StoreError>>;
}

/// The authoritative local mirror of the user collection.
///
/// The collection starts empty, is replaced wholesale by every successful
/// [`refresh`](Directory::refresh), and is never patched incrementally. A
/// failed operation leaves the last known-good snapshot in place; errors are
/// returned to the caller for reporting, never displayed as a state of the
/// collection itself.
#[derive(Clone, Debug)]
pub struct Directory<S: UserStore> {
    store: S,
    users: Vec<User>,
}

impl<S: UserStore> Directory<S> {
    /// Empty collection; populate with [`refresh`](Directory::refresh).
    pub fn new(store: S) -> Self {
        Self {
            store,
            users: Vec::new(),
        }
    }

    /// Current snapshot, in the order the store returned it.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the collection with the store's current records.
    pub async fn refresh(&mut self) -> Result<(), StoreError> {
        self.users = self.store.list().await?;
        Ok(())
    }

    /// Delete a record, then refresh.
    ///
    /// There is no speculative local removal: the row stays in the snapshot
    /// until the store confirms the delete and the follow-up refresh lands.
    pub async fn remove(&mut self, id: &UserId) -> Result<(), StoreError> {
        self.store.delete(id).await?;
        self.refresh().await
    }
}
