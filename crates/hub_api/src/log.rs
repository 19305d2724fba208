use std::sync::Arc;

use tokio::sync::RwLock;

/// Append-only log of formatted ship reports, shared between the inbox
/// writer and the dashboard readers. Clones share the same underlying list.
#[derive(Clone, Default)]
pub struct MessageLog {
    entries: Arc<RwLock<Vec<String>>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn append(&self, entry: String) {
        self.entries.write().await.push(entry);
    }

    /// Copy of the log in insertion order.
    pub async fn snapshot(&self) -> Vec<String> {
        self.entries.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
