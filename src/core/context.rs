//! Verification request context
//!
//! Provides the immutable configuration bundle for one verification
//! operation, plus tracing metadata for observability and audit logging.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::{AccountId, CredentialType};

/// Whether matched legacy credentials may be upgraded during a check
///
/// Content-source metadata is only meaningful when upgrades can run, so it
/// lives inside the `Enabled` variant: "upgrades on, attribution missing"
/// is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpgradePolicy {
    /// Opportunistic upgrades allowed; audit events are attributed to the
    /// given content source
    Enabled { content_source: String },

    /// No upgrade side effects for this operation
    Disabled,
}

impl UpgradePolicy {
    /// Enable upgrades with audit attribution
    pub fn enabled(content_source: impl Into<String>) -> Self {
        Self::Enabled {
            content_source: content_source.into(),
        }
    }
}

/// Immutable context for verification operations
///
/// Every required field is supplied at construction, so a partially
/// configured context cannot exist and operations need no runtime
/// precondition checks.
///
/// # Examples
///
/// ```
/// use credence::{AccountId, CredentialType, UpgradePolicy, VerificationContext};
///
/// let ctx = VerificationContext::new(
///     "login-workflow",
///     AccountId::new("user_123").unwrap(),
///     CredentialType::new("login").unwrap(),
///     UpgradePolicy::enabled("web-session"),
/// );
///
/// // With a custom trace ID
/// use uuid::Uuid;
/// let trace_id = Uuid::new_v4();
/// let ctx = ctx.with_trace_id(trace_id);
/// ```
#[derive(Debug, Clone)]
pub struct VerificationContext {
    /// Identity performing the check (audit attribution)
    pub actor: String,

    /// Target account whose credentials are checked
    pub account_id: AccountId,

    /// Credential type partition being checked
    pub credential_type: CredentialType,

    /// Upgrade policy for this operation
    pub upgrade_policy: UpgradePolicy,

    /// Trace ID for distributed tracing
    pub trace_id: Uuid,

    /// Timestamp of the request
    pub timestamp: DateTime<Utc>,
}

impl VerificationContext {
    /// Create a fully populated context
    pub fn new(
        actor: impl Into<String>,
        account_id: AccountId,
        credential_type: CredentialType,
        upgrade_policy: UpgradePolicy,
    ) -> Self {
        Self {
            actor: actor.into(),
            account_id,
            credential_type,
            upgrade_policy,
            trace_id: Uuid::new_v4(),
            timestamp: Utc::now(),
        }
    }

    /// Set trace ID for this context (builder pattern)
    pub fn with_trace_id(mut self, trace_id: Uuid) -> Self {
        self.trace_id = trace_id;
        self
    }

    /// Whether this context permits upgrade side effects
    pub fn upgrades_enabled(&self) -> bool {
        matches!(self.upgrade_policy, UpgradePolicy::Enabled { .. })
    }

    /// Content source for audit attribution, if upgrades are enabled
    pub fn content_source(&self) -> Option<&str> {
        match &self.upgrade_policy {
            UpgradePolicy::Enabled { content_source } => Some(content_source),
            UpgradePolicy::Disabled => None,
        }
    }
}
