//! Stored credential records
//!
//! A record is one historical secret-verification artifact for an account:
//! an algorithm-tagged hash under a credential type partition, with a
//! monotonic revoked flag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{AccountId, CredentialType, RecordId};

/// Identifies a hash algorithm
///
/// Opaque tag matching a [`PasswordHasher`](crate::traits::PasswordHasher)
/// registered in the [`HasherRegistry`](crate::hashers::HasherRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlgorithmId(String);

impl AlgorithmId {
    /// Create an algorithm tag
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Returns the tag as string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AlgorithmId {
    fn from(tag: &str) -> Self {
        Self(tag.to_string())
    }
}

/// A stored hash representation: algorithm tag plus opaque digest
///
/// The digest format is the algorithm's business (PHC string for argon2,
/// hex for the legacy SHA-256 hasher). The plaintext secret is never part
/// of this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordHash {
    /// Which algorithm produced the digest
    pub algorithm: AlgorithmId,

    /// Opaque digest string, format defined by the algorithm
    pub digest: String,
}

impl PasswordHash {
    /// Create a hash representation
    pub fn new(algorithm: impl Into<AlgorithmId>, digest: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            digest: digest.into(),
        }
    }
}

/// One stored credential record for an account
///
/// An (account, type) pair may have multiple historical entries; matching
/// treats "active" as `revoked == false`. The revoked flag is monotonic:
/// once true it never reverts within this engine's operations. This engine
/// mutates records only via the upgrade path, which replaces the hash in
/// place (same record identity, new algorithm tag and digest).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialRecord {
    /// Unique record identifier
    pub id: RecordId,

    /// Owning account
    pub account_id: AccountId,

    /// Partition label (e.g. login password vs API token)
    pub credential_type: CredentialType,

    /// The stored hash representation
    pub hash: PasswordHash,

    /// Whether this credential has been revoked (monotonic)
    pub revoked: bool,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl CredentialRecord {
    /// Create a new active record
    pub fn new(account_id: AccountId, credential_type: CredentialType, hash: PasswordHash) -> Self {
        Self {
            id: RecordId::new(),
            account_id,
            credential_type,
            hash,
            revoked: false,
            created_at: Utc::now(),
        }
    }

    /// Mark the record revoked (builder pattern, for store seeding)
    pub fn revoked(mut self) -> Self {
        self.revoked = true;
        self
    }

    /// Whether the record is active (not revoked)
    pub fn is_active(&self) -> bool {
        !self.revoked
    }
}
