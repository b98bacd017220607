//! Core types for credential verification

mod context;
mod error;
mod filter;
mod id;
mod record;

pub use context::{UpgradePolicy, VerificationContext};
pub use error::{
    AuditError, HasherError, StoreError, ValidationError, VerifyError, VerifyResult,
};
pub use filter::CredentialFilter;
pub use id::{AccountId, CredentialType, RecordId};
pub use record::{AlgorithmId, CredentialRecord, PasswordHash};

// Re-exports from utils
pub use crate::utils::SecretString;
