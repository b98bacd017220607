//! Credence - Credential verification engine
//!
//! Verifies a caller-supplied secret against an account's stored credential
//! records and, as a side effect of successful verification, opportunistically
//! re-encodes matched legacy hashes under the strongest available algorithm.
//!
//! # Features
//!
//! - **Three verification checks** - valid / unique / revoked, each with its
//!   own query and matching rules
//! - **Pluggable hash algorithms** - per-algorithm compare, upgrade
//!   eligibility, and recompute behind a capability trait
//! - **Opportunistic hash upgrades** - matched legacy credentials are
//!   re-hashed on the read path, one audit event per upgraded record
//! - **Fail-safe matching** - an unavailable algorithm never blocks login and
//!   never falsely matches
//! - **Zeroized secrets** - the plaintext secret is never persisted or logged
#![deny(unsafe_code)]
#![forbid(unsafe_code)]

/// Core types, errors, and primitives
pub mod core;
/// Verification engine - the three checks and the upgrade pipeline
pub mod engine;
/// Built-in hash algorithm implementations and the registry
pub mod hashers;
/// In-memory collaborator implementations (tests and embedding)
pub mod providers;
/// Traits for storage, hashing, auditing, and write guarding
pub mod traits;
/// Secret handling utilities
pub mod utils;

// ── Root re-exports ─────────────────────────────────────────────────────────
// Commonly-used types available directly as `credence::TypeName`.

// Core types & errors
pub use crate::core::{
    AccountId, AlgorithmId, AuditError, CredentialFilter, CredentialRecord, CredentialType,
    HasherError, PasswordHash, RecordId, StoreError, UpgradePolicy, ValidationError,
    VerificationContext, VerifyError, VerifyResult,
};

// Traits
pub use crate::traits::{
    AuditSink, CredentialStore, PasswordHasher, UnguardedWrite, UpgradeEvent, WriteGuard,
};

// Engine
pub use crate::engine::CredentialVerifier;

// Hashers
pub use crate::hashers::HasherRegistry;

// Utils
pub use crate::utils::SecretString;

/// Commonly used types and traits
pub mod prelude {
    // Core types
    pub use crate::core::{
        AccountId, AlgorithmId, CredentialFilter, CredentialRecord, CredentialType, PasswordHash,
        RecordId, UpgradePolicy, VerificationContext, VerifyError, VerifyResult,
    };

    // Traits
    pub use crate::traits::{
        AuditSink, CredentialStore, PasswordHasher, UnguardedWrite, UpgradeEvent, WriteGuard,
    };

    // Engine
    pub use crate::engine::CredentialVerifier;

    // Built-in hashers and registry
    pub use crate::hashers::{Argon2Hasher, HasherRegistry, Sha256Hasher};

    // In-memory providers
    pub use crate::providers::{MemoryAuditSink, MemoryCredentialStore, ProcessWriteGuard};

    // Utils
    pub use crate::utils::SecretString;
}
