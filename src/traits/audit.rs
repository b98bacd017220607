//! Audit sink trait and upgrade events

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AccountId, AlgorithmId, AuditError};

/// One hash-upgrade audit event
///
/// Captures the old-to-new algorithm transition for a single record,
/// attributed to the acting identity and content source of the triggering
/// verification. The digest itself is deliberately absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeEvent {
    /// Account whose credential was upgraded
    pub account_id: AccountId,

    /// Identity that performed the verification
    pub actor: String,

    /// Content-source metadata from the verification context
    pub content_source: String,

    /// Algorithm the record was stored under before the upgrade
    pub old_algorithm: AlgorithmId,

    /// Algorithm the record is stored under after the upgrade
    pub new_algorithm: AlgorithmId,

    /// Trace ID of the triggering verification call
    pub trace_id: Uuid,

    /// When the upgrade was applied
    pub occurred_at: DateTime<Utc>,
}

/// Trait for durably recording hash-upgrade events
///
/// One event is recorded per upgraded record. Recording is best-effort
/// relative to the verification result: a failure is logged by the engine
/// and never invalidates the already-computed boolean.
#[async_trait]
pub trait AuditSink: Send + Sync {
    /// Durably record an upgrade event
    async fn record(&self, event: UpgradeEvent) -> Result<(), AuditError>;
}
