use std::sync::Arc;

use rp_store::{InMemoryReceiptStore, ReceiptStore};

/// Shared handler state. Cloning is cheap; every clone points at the same
/// store.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReceiptStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ReceiptStore>) -> Self {
        Self { store }
    }

    /// State backed by a fresh [`InMemoryReceiptStore`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryReceiptStore::new()))
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let records = self.store.len().ok();
        f.debug_struct("AppState").field("records", &records).finish()
    }
}
