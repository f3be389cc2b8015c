use crate::domain::error::DomainError;
use crate::domain::ports::key_value_store::KeyValueStore;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct MemoryKeyValueStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a slot, e.g. with content written by an earlier session.
    pub fn with_slot(key: &str, value: &str) -> Self {
        let store = Self::default();
        if let Ok(mut slots) = store.slots.lock() {
            slots.insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let slots = self
            .slots
            .lock()
            .map_err(|e| DomainError::Storage(e.to_string()))?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|e| DomainError::Storage(e.to_string()))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
