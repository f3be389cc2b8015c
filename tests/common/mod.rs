//! Shared test helpers.
#![allow(dead_code)]

use fxjournal::domain::entities::trade::RawTradeInput;
use fxjournal::domain::error::DomainError;
use fxjournal::domain::ports::key_value_store::KeyValueStore;
use fxjournal::infrastructure::ids::SequentialIdGenerator;
use fxjournal::infrastructure::memory::kv_store::MemoryKeyValueStore;
use fxjournal::FxJournal;
use std::sync::Arc;

pub fn setup() -> FxJournal {
    setup_with_store(Arc::new(MemoryKeyValueStore::new()))
}

pub fn setup_with_store(store: Arc<dyn KeyValueStore>) -> FxJournal {
    FxJournal::with_ports(store, Arc::new(SequentialIdGenerator::default()))
}

pub fn raw(
    date: &str,
    pair: &str,
    direction: &str,
    entry: f64,
    stop: f64,
    exit: f64,
    pip_value: f64,
) -> RawTradeInput {
    RawTradeInput {
        date: date.to_string(),
        pair: pair.to_string(),
        direction: direction.to_string(),
        entry,
        stop,
        exit,
        pip_value,
        notes: None,
    }
}

/// Store whose reads and/or writes always fail.
pub struct BrokenStore {
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, DomainError> {
        if self.fail_reads {
            return Err(DomainError::Storage("disk on fire".into()));
        }
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::Storage("quota exceeded".into()));
        }
        Ok(())
    }
}
