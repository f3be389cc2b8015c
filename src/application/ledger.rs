use crate::domain::entities::trade::Trade;
use crate::domain::error::DomainError;
use crate::domain::ports::key_value_store::KeyValueStore;
use std::sync::{Arc, Mutex, MutexGuard};

/// Storage slot holding the serialized trade collection.
pub const TRADES_SLOT: &str = "fxjournal_trades";

/// The journal's trade collection, most recent first.
///
/// The in-memory copy is authoritative for the session. It is loaded once
/// from the store (falling back to empty on any read or parse failure) and
/// written back in full after every mutation; failed writes are logged and
/// dropped.
pub struct TradeLedger {
    store: Arc<dyn KeyValueStore>,
    slot: String,
    trades: Mutex<Vec<Trade>>,
}

impl TradeLedger {
    pub fn open(store: Arc<dyn KeyValueStore>) -> Self {
        Self::open_slot(store, TRADES_SLOT)
    }

    pub fn open_slot(store: Arc<dyn KeyValueStore>, slot: &str) -> Self {
        let trades = load(store.as_ref(), slot);
        log::debug!("Loaded {} trades from slot {slot}", trades.len());
        Self {
            store,
            slot: slot.to_string(),
            trades: Mutex::new(trades),
        }
    }

    /// A consistent copy of the whole collection, in stored order.
    pub fn snapshot(&self) -> Vec<Trade> {
        self.lock().clone()
    }

    /// Add a trade at the front. Ids must be unique within the collection.
    pub fn prepend(&self, trade: Trade) -> Result<(), DomainError> {
        let mut trades = self.lock();
        if trades.iter().any(|t| t.id == trade.id) {
            return Err(DomainError::InvalidInput(format!(
                "Duplicate trade id: {}",
                trade.id
            )));
        }
        trades.insert(0, trade);
        self.persist(&trades);
        Ok(())
    }

    /// Remove the first trade with `id`. Returns `false` if no trade matched.
    pub fn remove(&self, id: &str) -> bool {
        let mut trades = self.lock();
        let Some(pos) = trades.iter().position(|t| t.id == id) else {
            return false;
        };
        trades.remove(pos);
        self.persist(&trades);
        true
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Trade>> {
        // A panic mid-mutation cannot leave the Vec half-updated, so keep going
        self.trades.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn persist(&self, trades: &[Trade]) {
        if let Err(e) = save(self.store.as_ref(), &self.slot, trades) {
            log::warn!("Could not persist trades to slot {}: {e}", self.slot);
        }
    }
}

fn load(store: &dyn KeyValueStore, slot: &str) -> Vec<Trade> {
    let raw = match store.get(slot) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            log::warn!("Could not read slot {slot}, starting empty: {e}");
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(trades) => trades,
        Err(e) => {
            log::warn!("Malformed trade data in slot {slot}, starting empty: {e}");
            Vec::new()
        }
    }
}

fn save(store: &dyn KeyValueStore, slot: &str, trades: &[Trade]) -> Result<(), DomainError> {
    let json = serde_json::to_string(trades)?;
    store.set(slot, &json)
}
