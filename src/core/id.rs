//! Validated identifiers for accounts and credential partitions
//!
//! Provides validated [`AccountId`] and [`CredentialType`] newtypes that
//! prevent path traversal and injection attacks through strict validation
//! rules, plus the opaque [`RecordId`] identifying one stored record.

use crate::core::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Maximum length for account IDs (prevents DoS attacks)
const MAX_ACCOUNT_ID_LENGTH: usize = 255;

/// Maximum length for credential type labels
const MAX_TYPE_LENGTH: usize = 64;

/// Unique account identifier (validated)
///
/// Only allows alphanumeric characters, hyphens, and underscores to prevent
/// path traversal, filesystem issues, and injection attacks.
///
/// # Examples
///
/// ```
/// use credence::AccountId;
///
/// // Valid IDs
/// let id1 = AccountId::new("user_123").unwrap();
/// let id2 = AccountId::new("svc-backup-7").unwrap();
///
/// // Invalid IDs
/// assert!(AccountId::new("").is_err()); // Empty
/// assert!(AccountId::new("../etc/passwd").is_err()); // Path traversal
/// assert!(AccountId::new("name with spaces").is_err()); // Spaces
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId(String);

impl AccountId {
    /// Creates a new validated account ID
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyId`] if the ID is empty.
    ///
    /// Returns [`ValidationError::InvalidId`] if the ID exceeds 255
    /// characters or contains characters other than alphanumeric, hyphens,
    /// or underscores.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();

        if id.is_empty() {
            return Err(ValidationError::EmptyId { kind: "account id" });
        }

        if id.len() > MAX_ACCOUNT_ID_LENGTH {
            return Err(ValidationError::InvalidId {
                kind: "account id",
                id: id.clone(),
                reason: format!(
                    "exceeds maximum length of {} characters",
                    MAX_ACCOUNT_ID_LENGTH
                ),
            });
        }

        // Only allow alphanumeric, hyphens, underscores
        if !id
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ValidationError::InvalidId {
                kind: "account id",
                id: id.clone(),
                reason:
                    "contains invalid characters (only alphanumeric, hyphens, underscores allowed)"
                        .to_string(),
            });
        }

        Ok(Self(id))
    }

    /// Returns account ID as string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts to owned string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<AccountId> for String {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

impl TryFrom<String> for AccountId {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        AccountId::new(s)
    }
}

/// Credential type partition label (validated)
///
/// Partitions an account's credentials by role, e.g. a login password versus
/// an API token. Uniqueness and revocation checks treat partitions
/// differently: the valid-password check is scoped to one type, revocation
/// is account-wide.
///
/// # Examples
///
/// ```
/// use credence::CredentialType;
///
/// let login = CredentialType::new("login").unwrap();
/// let token = CredentialType::new("api_token").unwrap();
/// assert_ne!(login, token);
///
/// assert!(CredentialType::new("").is_err());
/// assert!(CredentialType::new("bad/type").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CredentialType(String);

impl CredentialType {
    /// Creates a new validated credential type label
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyId`] if the label is empty.
    ///
    /// Returns [`ValidationError::InvalidId`] if the label exceeds 64
    /// characters or contains characters other than alphanumeric, hyphens,
    /// or underscores.
    pub fn new(label: impl Into<String>) -> Result<Self, ValidationError> {
        let label = label.into();

        if label.is_empty() {
            return Err(ValidationError::EmptyId {
                kind: "credential type",
            });
        }

        if label.len() > MAX_TYPE_LENGTH {
            return Err(ValidationError::InvalidId {
                kind: "credential type",
                id: label.clone(),
                reason: format!("exceeds maximum length of {} characters", MAX_TYPE_LENGTH),
            });
        }

        if !label
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ValidationError::InvalidId {
                kind: "credential type",
                id: label.clone(),
                reason:
                    "contains invalid characters (only alphanumeric, hyphens, underscores allowed)"
                        .to_string(),
            });
        }

        Ok(Self(label))
    }

    /// Returns the type label as string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CredentialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<CredentialType> for String {
    fn from(label: CredentialType) -> Self {
        label.0
    }
}

impl TryFrom<String> for CredentialType {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        CredentialType::new(s)
    }
}

/// Unique identifier for one stored credential record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generate a new record ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the inner UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl AsRef<Uuid> for RecordId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for RecordId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}
