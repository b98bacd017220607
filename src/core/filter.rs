//! Query filter for credential records

use serde::{Deserialize, Serialize};

use crate::core::{CredentialRecord, CredentialType};

/// Filter for credential store queries
///
/// Account scope is always applied first by the store; this filter narrows
/// by type partition and revocation state. `None` means "no constraint".
/// The store returns matching records as an unordered set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialFilter {
    /// Restrict to one credential type partition
    pub credential_type: Option<CredentialType>,

    /// Restrict by revocation state
    pub revoked: Option<bool>,
}

impl CredentialFilter {
    /// No constraints: every record for the account
    pub fn all() -> Self {
        Self::default()
    }

    /// Active records of one type (the valid-password query)
    pub fn active_of_type(credential_type: CredentialType) -> Self {
        Self {
            credential_type: Some(credential_type),
            revoked: Some(false),
        }
    }

    /// Revoked records across all types (the revoked-password query)
    pub fn revoked_any_type() -> Self {
        Self {
            credential_type: None,
            revoked: Some(true),
        }
    }

    /// Whether a record satisfies this filter
    pub fn matches(&self, record: &CredentialRecord) -> bool {
        if let Some(credential_type) = &self.credential_type {
            if &record.credential_type != credential_type {
                return false;
            }
        }
        if let Some(revoked) = self.revoked {
            if record.revoked != revoked {
                return false;
            }
        }
        true
    }
}
