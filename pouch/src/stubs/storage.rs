//! Shared data attached to stubbed contexts.

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;

/// Mutable values that test setup hands to the stub generator.
///
/// Storage is attached to a context by reference (`Arc<StubStorage>`), so
/// values written after the context was created are visible to the
/// generator. Every method takes the lock once; callers that need several
/// operations to happen atomically across call chains must coordinate
/// themselves.
#[derive(Debug, Default)]
pub struct StubStorage {
    data: RwLock<HashMap<String, serde_json::Value>>,
}

impl StubStorage {
    /// Creates an empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage from existing data.
    #[must_use]
    pub fn from_data(data: HashMap<String, serde_json::Value>) -> Self {
        Self {
            data: RwLock::new(data),
        }
    }

    /// Gets a value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        self.data.read().get(key).cloned()
    }

    /// Gets a value and deserializes it into `T`.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored value does not match `T`.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, serde_json::Error> {
        self.get(key).map(serde_json::from_value).transpose()
    }

    /// Gets a string value, if the key holds one.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<String> {
        self.data
            .read()
            .get(key)
            .and_then(serde_json::Value::as_str)
            .map(str::to_string)
    }

    /// Sets a value, returning the previous one.
    pub fn set(&self, key: impl Into<String>, value: serde_json::Value) -> Option<serde_json::Value> {
        self.data.write().insert(key.into(), value)
    }

    /// Serializes and sets a value.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` cannot be represented as JSON.
    pub fn set_serialized<T: Serialize>(
        &self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<(), serde_json::Error> {
        let value = serde_json::to_value(value)?;
        self.set(key, value);
        Ok(())
    }

    /// Removes a value.
    pub fn remove(&self, key: &str) -> Option<serde_json::Value> {
        self.data.write().remove(key)
    }

    /// Checks if a key exists.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.read().contains_key(key)
    }

    /// Returns a copy of all data.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        self.data.read().clone()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Returns true if the storage is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    /// Returns all keys.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.data.read().keys().cloned().collect()
    }

    /// Removes all entries.
    pub fn clear(&self) {
        self.data.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    #[test]
    fn test_set_and_get() {
        let storage = StubStorage::new();
        assert!(storage.set("user_id", serde_json::json!("42")).is_none());

        assert_eq!(storage.get("user_id"), Some(serde_json::json!("42")));
        assert_eq!(storage.get_str("user_id"), Some("42".to_string()));
        assert!(storage.contains_key("user_id"));
        assert!(!storage.contains_key("other"));
    }

    #[test]
    fn test_set_overwrites() {
        let storage = StubStorage::new();
        storage.set("count", serde_json::json!(1));
        let previous = storage.set("count", serde_json::json!(2));

        assert_eq!(previous, Some(serde_json::json!(1)));
        assert_eq!(storage.get("count"), Some(serde_json::json!(2)));
    }

    #[test]
    fn test_get_as_typed() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct User {
            id: u64,
            name: String,
        }

        let storage = StubStorage::new();
        let user = User {
            id: 7,
            name: "ada".to_string(),
        };
        storage.set_serialized("user", &user).unwrap();

        let loaded: Option<User> = storage.get_as("user").unwrap();
        assert_eq!(loaded, Some(user));

        let missing: Option<User> = storage.get_as("nobody").unwrap();
        assert!(missing.is_none());

        let mismatched = storage.get_as::<u64>("user");
        assert!(mismatched.is_err());
    }

    #[test]
    fn test_get_str_on_non_string() {
        let storage = StubStorage::new();
        storage.set("n", serde_json::json!(5));
        assert!(storage.get_str("n").is_none());
    }

    #[test]
    fn test_from_data_and_to_dict() {
        let mut data = HashMap::new();
        data.insert("a".to_string(), serde_json::json!(1));
        data.insert("b".to_string(), serde_json::json!(2));

        let storage = StubStorage::from_data(data.clone());
        assert_eq!(storage.len(), 2);
        assert_eq!(storage.to_dict(), data);

        let mut keys = storage.keys();
        keys.sort();
        assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_remove_and_clear() {
        let storage = StubStorage::new();
        storage.set("a", serde_json::json!(1));
        storage.set("b", serde_json::json!(2));

        assert_eq!(storage.remove("a"), Some(serde_json::json!(1)));
        assert_eq!(storage.len(), 1);

        storage.clear();
        assert!(storage.is_empty());
    }
}
