//! Entity storage keyed by type and id.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;

use crate::entity::{Entity, StoreValue, ID_FIELD};
use crate::error::{StoreError, StoreResult};

type EntityTable = HashMap<String, Entity>;

/// In-memory entity store
#[derive(Debug, Default)]
pub struct EntityStore {
    tables: RwLock<HashMap<String, EntityTable>>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves `entity` under `entity_type`/`id`, replacing any previous one.
    ///
    /// An entity without an `id` field gets one. A string, bytes or int8 `id`
    /// must render as `id`; any other `id` field is rejected.
    pub fn set(&self, entity_type: &str, id: &str, mut entity: Entity) -> StoreResult<()> {
        match entity.get(ID_FIELD) {
            None => entity.set(ID_FIELD, id),
            Some(field) if field.as_id().as_deref() == Some(id) => {}
            Some(other) => {
                return Err(StoreError::IdMismatch {
                    key: id.to_string(),
                    field: other.to_string(),
                })
            }
        }

        debug!(entity_type, id, "Saving entity");
        self.tables
            .write()
            .entry(entity_type.to_string())
            .or_default()
            .insert(id.to_string(), entity);
        Ok(())
    }

    pub fn get(&self, entity_type: &str, id: &str) -> Option<Entity> {
        self.tables
            .read()
            .get(entity_type)
            .and_then(|table| table.get(id))
            .cloned()
    }

    /// Reads one field without cloning the whole entity.
    pub fn get_field(&self, entity_type: &str, id: &str, field_name: &str) -> Option<StoreValue> {
        self.tables
            .read()
            .get(entity_type)
            .and_then(|table| table.get(id))
            .and_then(|entity| entity.get(field_name))
            .cloned()
    }

    pub fn contains(&self, entity_type: &str, id: &str) -> bool {
        self.tables
            .read()
            .get(entity_type)
            .map_or(false, |table| table.contains_key(id))
    }

    pub fn remove(&self, entity_type: &str, id: &str) -> Option<Entity> {
        debug!(entity_type, id, "Removing entity");
        let mut tables = self.tables.write();
        let table = tables.get_mut(entity_type)?;
        let removed = table.remove(id);
        if table.is_empty() {
            tables.remove(entity_type);
        }
        removed
    }

    pub fn count(&self, entity_type: &str) -> usize {
        self.tables.read().get(entity_type).map_or(0, HashMap::len)
    }

    pub fn clear(&self) {
        self.tables.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use graphtest_values::Bytes;

    #[test]
    fn set_get_remove() {
        let store = EntityStore::new();
        store
            .set("Gravatar", "0x1", Entity::new().with("displayName", "First"))
            .unwrap();

        let entity = store.get("Gravatar", "0x1").unwrap();
        assert_eq!(entity.id().as_deref(), Some("0x1"));
        assert_eq!(
            store.get_field("Gravatar", "0x1", "displayName"),
            Some(StoreValue::from("First"))
        );
        assert!(store.contains("Gravatar", "0x1"));
        assert_eq!(store.count("Gravatar"), 1);

        assert!(store.remove("Gravatar", "0x1").is_some());
        assert!(!store.contains("Gravatar", "0x1"));
        assert_eq!(store.count("Gravatar"), 0);
        assert!(store.remove("Gravatar", "0x1").is_none());
    }

    #[test]
    fn set_replaces_existing_entity() {
        let store = EntityStore::new();
        store.set("Token", "1", Entity::new().with("symbol", "AAA")).unwrap();
        store.set("Token", "1", Entity::new().with("symbol", "BBB")).unwrap();

        assert_eq!(store.count("Token"), 1);
        assert_eq!(store.get_field("Token", "1", "symbol"), Some(StoreValue::from("BBB")));
    }

    #[test]
    fn rejects_mismatched_id_field() {
        let store = EntityStore::new();
        let result = store.set("Token", "1", Entity::new().with("id", "2"));
        assert_matches!(result, Err(StoreError::IdMismatch { .. }));
        assert!(!store.contains("Token", "1"));
    }

    #[test]
    fn accepts_bytes_id_matching_key() {
        let store = EntityStore::new();
        let id = Bytes::from_hex_string("0x1234").unwrap();
        store.set("Transfer", "0x1234", Entity::new().with("id", id)).unwrap();

        assert!(store.contains("Transfer", "0x1234"));
        assert_eq!(store.count("Transfer"), 1);
        assert_eq!(
            store.get("Transfer", "0x1234").unwrap().id().as_deref(),
            Some("0x1234")
        );
    }

    #[test]
    fn rejects_bytes_id_for_other_key() {
        let store = EntityStore::new();
        let id = Bytes::from_hex_string("0x1234").unwrap();
        let result = store.set("Transfer", "0x5678", Entity::new().with("id", id));
        assert_matches!(
            result,
            Err(StoreError::IdMismatch { key, field }) if key == "0x5678" && field == "0x1234"
        );
    }

    #[test]
    fn rejects_non_scalar_id_kinds() {
        let store = EntityStore::new();
        let result = store.set("Token", "true", Entity::new().with("id", true));
        assert_matches!(result, Err(StoreError::IdMismatch { .. }));
    }

    #[test]
    fn counts_are_per_type() {
        let store = EntityStore::new();
        store.set("Token", "1", Entity::new()).unwrap();
        store.set("Token", "2", Entity::new()).unwrap();
        store.set("Pair", "1", Entity::new()).unwrap();

        assert_eq!(store.count("Token"), 2);
        assert_eq!(store.count("Pair"), 1);
        assert_eq!(store.count("Swap"), 0);

        store.clear();
        assert_eq!(store.count("Token"), 0);
    }
}
