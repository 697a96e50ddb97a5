use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use super::domain::ReceiptId;

/// Storage abstraction for computed points so the service can be exercised in isolation.
///
/// Implementations must tolerate concurrent `record`/`lookup` calls. Recording an
/// identifier that already exists replaces its points.
pub trait PointsLedger: Send + Sync {
    fn record(&self, id: ReceiptId, points: u64);
    fn lookup(&self, id: &ReceiptId) -> Option<u64>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-local ledger. Clones share the same underlying map.
#[derive(Debug, Default, Clone)]
pub struct InMemoryLedger {
    entries: Arc<RwLock<HashMap<ReceiptId, u64>>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

// Entries are written by a single insert, so a poisoned guard still sees a whole map.
impl PointsLedger for InMemoryLedger {
    fn record(&self, id: ReceiptId, points: u64) {
        let mut guard = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        guard.insert(id, points);
    }

    fn lookup(&self, id: &ReceiptId) -> Option<u64> {
        let guard = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        guard.get(id).copied()
    }

    fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
