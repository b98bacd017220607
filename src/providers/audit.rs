//! In-memory audit sink

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::AuditError;
use crate::traits::{AuditSink, UpgradeEvent};

/// In-memory audit sink with failure injection
///
/// Records upgrade events for inspection in tests.
#[derive(Clone, Default)]
pub struct MemoryAuditSink {
    events: Arc<RwLock<Vec<UpgradeEvent>>>,
    fail: Arc<AtomicBool>,
}

impl MemoryAuditSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, in recording order
    pub async fn events(&self) -> Vec<UpgradeEvent> {
        self.events.read().await.clone()
    }

    /// Number of recorded events
    pub async fn len(&self) -> usize {
        self.events.read().await.len()
    }

    /// Whether no events were recorded
    pub async fn is_empty(&self) -> bool {
        self.events.read().await.is_empty()
    }

    /// Make every record call fail (error simulation)
    pub fn fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl AuditSink for MemoryAuditSink {
    async fn record(&self, event: UpgradeEvent) -> Result<(), AuditError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(AuditError::RecordFailed {
                account_id: event.account_id.to_string(),
                reason: "simulated audit failure".to_string(),
            });
        }
        self.events.write().await.push(event);
        Ok(())
    }
}
