use std::sync::{Arc, Mutex};

use crate::directory::UserStore;
use crate::error::StoreError;
use crate::models::{User, UserDraft, UserId};

/// In-memory [`UserStore`] for tests and offline use.
///
/// Behaves like the remote store's happy path: sequential ids on create,
/// rejection messages for unknown ids. Every served call bumps a request
/// counter so tests can assert that a gated submit never reached the store.
#[derive(Clone, Debug, Default)]
pub struct MemoryUserStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    users: Vec<User>,
    next_id: u64,
    requests: usize,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing records, ids preserved.
    pub fn with_users(users: Vec<User>) -> Self {
        let next_id = users
            .iter()
            .filter_map(|u| u.id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            inner: Arc::new(Mutex::new(Inner {
                users,
                next_id,
                requests: 0,
            })),
        }
    }

    /// Number of requests this store has served.
    pub fn requests(&self) -> usize {
        self.inner.lock().unwrap().requests
    }
}

impl UserStore for MemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.requests += 1;
        Ok(inner.users.clone())
    }

    async fn create(&self, draft: &UserDraft) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.requests += 1;
        inner.next_id += 1;
        let id = UserId::new(inner.next_id.to_string());
        inner.users.push(User {
            id,
            name: draft.name.clone(),
            email: draft.email.clone(),
            password: draft.password.clone(),
            dob: draft.dob.clone(),
        });
        Ok(())
    }

    async fn update(&self, id: &UserId, draft: &UserDraft) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.requests += 1;
        match inner.users.iter_mut().find(|u| &u.id == id) {
            Some(user) => {
                user.name = draft.name.clone();
                user.email = draft.email.clone();
                user.password = draft.password.clone();
                user.dob = draft.dob.clone();
                Ok(())
            }
            None => Err(StoreError::Rejected("User not found".to_string())),
        }
    }

    async fn delete(&self, id: &UserId) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.requests += 1;
        let before = inner.users.len();
        inner.users.retain(|u| &u.id != id);
        if inner.users.len() == before {
            return Err(StoreError::Rejected("Failed to delete user".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Directory;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn user(id: &str, name: &str) -> User {
        User {
            id: UserId::new(id),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            password: "secret".to_string(),
            dob: "1990-01-01".to_string(),
        }
    }

    /// Wraps a [`MemoryUserStore`] and fails every call while the switch is
    /// thrown, without touching the records underneath.
    #[derive(Clone, Default)]
    struct FlakyStore {
        inner: MemoryUserStore,
        failing: Arc<AtomicBool>,
    }

    impl FlakyStore {
        fn with_users(users: Vec<User>) -> Self {
            Self {
                inner: MemoryUserStore::with_users(users),
                failing: Arc::new(AtomicBool::new(false)),
            }
        }

        fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        fn check(&self) -> Result<(), StoreError> {
            if self.failing.load(Ordering::SeqCst) {
                Err(StoreError::Transport("gateway timeout".to_string()))
            } else {
                Ok(())
            }
        }
    }

    impl UserStore for FlakyStore {
        async fn list(&self) -> Result<Vec<User>, StoreError> {
            self.check()?;
            self.inner.list().await
        }
        async fn create(&self, draft: &UserDraft) -> Result<(), StoreError> {
            self.check()?;
            self.inner.create(draft).await
        }
        async fn update(&self, id: &UserId, draft: &UserDraft) -> Result<(), StoreError> {
            self.check()?;
            self.inner.update(id, draft).await
        }
        async fn delete(&self, id: &UserId) -> Result<(), StoreError> {
            self.check()?;
            self.inner.delete(id).await
        }
    }

    #[tokio::test]
    async fn test_starts_empty_and_refresh_replaces_wholesale() {
        let store = MemoryUserStore::with_users(vec![user("1", "Ann"), user("2", "Ben")]);
        let mut directory = Directory::new(store);

        assert!(directory.users().is_empty());

        directory.refresh().await.unwrap();
        assert_eq!(directory.users().len(), 2);
        assert_eq!(directory.users()[0].name, "Ann");
        assert_eq!(directory.users()[1].name, "Ben");
    }

    #[tokio::test]
    async fn test_refresh_is_idempotent() {
        let store = MemoryUserStore::with_users(vec![user("1", "Ann")]);
        let mut directory = Directory::new(store);

        directory.refresh().await.unwrap();
        let first = directory.users().to_vec();

        directory.refresh().await.unwrap();
        assert_eq!(directory.users(), &first[..]);
    }

    #[tokio::test]
    async fn test_remove_confirms_before_dropping_the_row() {
        let store = MemoryUserStore::with_users(vec![user("1", "Ann"), user("2", "Ben")]);
        let mut directory = Directory::new(store);
        directory.refresh().await.unwrap();

        directory.remove(&UserId::new("1")).await.unwrap();

        assert_eq!(directory.users().len(), 1);
        assert_eq!(directory.users()[0].id, UserId::new("2"));
    }

    #[tokio::test]
    async fn test_remove_unknown_id_keeps_snapshot() {
        let store = MemoryUserStore::with_users(vec![user("1", "Ann")]);
        let mut directory = Directory::new(store);
        directory.refresh().await.unwrap();

        let err = directory.remove(&UserId::new("99")).await.unwrap_err();
        assert_eq!(err, StoreError::Rejected("Failed to delete user".to_string()));
        assert_eq!(directory.users().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_last_snapshot() {
        let store = FlakyStore::with_users(vec![user("1", "Ann")]);
        let mut directory = Directory::new(store.clone());
        directory.refresh().await.unwrap();

        store.set_failing(true);
        let err = directory.refresh().await.unwrap_err();
        assert!(matches!(err, StoreError::Transport(_)));

        // Still showing the last known-good records.
        assert_eq!(directory.users().len(), 1);
        assert_eq!(directory.users()[0].name, "Ann");
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_row() {
        let store = FlakyStore::with_users(vec![user("1", "Ann"), user("2", "Ben")]);
        let mut directory = Directory::new(store.clone());
        directory.refresh().await.unwrap();

        store.set_failing(true);
        directory.remove(&UserId::new("1")).await.unwrap_err();

        // Nothing was deleted remotely and nothing disappeared locally.
        assert_eq!(directory.users().len(), 2);
        store.set_failing(false);
        directory.refresh().await.unwrap();
        assert_eq!(directory.users().len(), 2);
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = MemoryUserStore::with_users(vec![user("7", "Greta")]);
        store
            .create(&UserDraft {
                name: "Hans".to_string(),
                email: "hans@example.com".to_string(),
                password: "pw".to_string(),
                dob: "1980-02-02".to_string(),
            })
            .await
            .unwrap();

        let users = store.list().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].id, UserId::new("8"));
    }
}
