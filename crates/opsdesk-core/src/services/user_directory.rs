//! User directory service - read-only access to user records.

use std::sync::Arc;

use crate::domain::{Collection, User, is_hidden_record};
use crate::ports::{CoreError, RecordStore, RepositoryError};

/// Service for reading users out of the record store.
#[derive(Clone)]
pub struct UserDirectory {
    store: Arc<dyn RecordStore>,
}

impl UserDirectory {
    /// Create a new user directory over a record store.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Identifiers of all registered users, in store order.
    ///
    /// Hidden bookkeeping entries are skipped.
    pub async fn list_ids(&self) -> Result<Vec<String>, CoreError> {
        let ids = self.store.list(Collection::Users).await?;
        Ok(ids.into_iter().filter(|id| !is_hidden_record(id)).collect())
    }

    /// Fetch a single user.
    ///
    /// Any JSON object is a valid user; error messages never carry record
    /// contents.
    pub async fn get(&self, id: &str) -> Result<User, CoreError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(CoreError::Validation("user id must not be empty".to_string()));
        }

        let raw = self.store.read(Collection::Users, id).await?;
        User::from_record(raw).ok_or_else(|| {
            tracing::warn!(user_id = id, "User record is not a JSON object");
            CoreError::Repository(RepositoryError::Serialization(format!(
                "users/{id} is not a JSON object"
            )))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    struct MockStore {
        users: Mutex<BTreeMap<String, Value>>,
        listing: Vec<String>,
    }

    impl MockStore {
        fn new(listing: &[&str]) -> Self {
            Self {
                users: Mutex::new(BTreeMap::new()),
                listing: listing.iter().map(ToString::to_string).collect(),
            }
        }

        fn with_user(self, id: &str, value: Value) -> Self {
            self.users.lock().unwrap().insert(id.to_string(), value);
            self
        }
    }

    #[async_trait]
    impl RecordStore for MockStore {
        async fn list(&self, _collection: Collection) -> Result<Vec<String>, RepositoryError> {
            Ok(self.listing.clone())
        }

        async fn read(&self, _collection: Collection, id: &str) -> Result<Value, RepositoryError> {
            self.users
                .lock()
                .unwrap()
                .get(id)
                .cloned()
                .ok_or_else(|| RepositoryError::NotFound(format!("users/{id}")))
        }
    }

    #[tokio::test]
    async fn test_list_ids_skips_hidden_entries() {
        let store = Arc::new(MockStore::new(&[".gitkeep", "u1", "u2"]));
        let directory = UserDirectory::new(store);

        let ids = directory.list_ids().await.unwrap();
        assert_eq!(ids, vec!["u1".to_string(), "u2".to_string()]);
    }

    #[tokio::test]
    async fn test_get_decodes_user() {
        let store = Arc::new(MockStore::new(&["u1"]).with_user(
            "u1",
            json!({ "firstName": "Grace", "lastName": "Hopper", "phone": "5551234567" }),
        ));
        let directory = UserDirectory::new(store);

        let user = directory.get(" u1 ").await.unwrap();
        assert_eq!(user.full_name(), "Grace Hopper");
    }

    #[tokio::test]
    async fn test_get_accepts_numeric_fields() {
        let store = Arc::new(MockStore::new(&["u2"]).with_user(
            "u2",
            json!({ "firstName": "Bob", "lastName": "Ray", "phone": 5_550_008_888_u64, "hashedPassword": 987_654_321 }),
        ));
        let directory = UserDirectory::new(store);

        let user = directory.get("u2").await.unwrap();
        assert_eq!(user.phone(), "5550008888");
    }

    #[tokio::test]
    async fn test_get_error_never_echoes_record() {
        let store = Arc::new(MockStore::new(&["u1"]).with_user("u1", json!([987_654_321])));
        let directory = UserDirectory::new(store);

        let err = directory.get("u1").await.unwrap_err();
        assert!(!err.to_string().contains("987654321"));
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let directory = UserDirectory::new(Arc::new(MockStore::new(&[])));

        let err = directory.get("nobody").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_get_rejects_empty_id() {
        let directory = UserDirectory::new(Arc::new(MockStore::new(&[])));

        let err = directory.get("   ").await.unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn test_get_undecodable_record() {
        let store = Arc::new(MockStore::new(&["u1"]).with_user("u1", json!(["not", "a", "user"])));
        let directory = UserDirectory::new(store);

        let err = directory.get("u1").await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::Repository(RepositoryError::Serialization(_))
        ));
    }
}
