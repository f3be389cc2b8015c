use crate::domain::error::DomainError;

/// String slots addressed by name. The journal keeps its whole trade
/// collection as one JSON document in a single slot.
pub trait KeyValueStore: Send + Sync {
    /// `Ok(None)` when the slot has never been written.
    fn get(&self, key: &str) -> Result<Option<String>, DomainError>;
    /// Replace the slot's content in full.
    fn set(&self, key: &str, value: &str) -> Result<(), DomainError>;
}
