//! Error types for credential verification
//!
//! This module defines all errors that can occur during verification and
//! opportunistic hash upgrades.

use thiserror::Error;

use crate::core::AlgorithmId;

/// Result alias for verification operations
pub type VerifyResult<T> = Result<T, VerifyError>;

/// Validation errors for identifier construction
///
/// With the immutable [`VerificationContext`](crate::core::VerificationContext)
/// every required field is supplied at construction, so the only
/// configuration failures left are malformed identifiers.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Identifier is empty
    #[error("{kind} cannot be empty")]
    EmptyId { kind: &'static str },

    /// Identifier has invalid format
    #[error("invalid {kind} '{id}': {reason}")]
    InvalidId {
        kind: &'static str,
        id: String,
        reason: String,
    },
}

/// Errors raised by a hash algorithm implementation
///
/// `Unavailable` is the recoverable "cannot run in this environment" signal:
/// the matching loop treats it as a non-match for that candidate only and
/// keeps evaluating the rest. It never surfaces to the caller as a
/// verification failure.
#[derive(Debug, Error)]
pub enum HasherError {
    /// The algorithm cannot execute in the current runtime
    #[error("hash algorithm '{algorithm}' is unavailable in this environment")]
    Unavailable { algorithm: AlgorithmId },

    /// Recomputing a hash failed
    #[error("hashing under '{algorithm}' failed: {reason}")]
    Hash {
        algorithm: AlgorithmId,
        reason: String,
    },

    /// The stored digest could not be parsed for this algorithm
    #[error("stored digest is malformed for '{algorithm}': {reason}")]
    MalformedDigest {
        algorithm: AlgorithmId,
        reason: String,
    },
}

/// Errors raised by the credential store
#[derive(Debug, Error)]
pub enum StoreError {
    /// A query against the store failed
    #[error("credential query failed for account '{account_id}': {reason}")]
    QueryFailed { account_id: String, reason: String },

    /// An in-place hash replacement failed
    #[error("hash replacement failed for record '{record_id}': {reason}")]
    WriteFailed { record_id: String, reason: String },

    /// The record to replace no longer exists
    #[error("record not found: {record_id}")]
    RecordNotFound { record_id: String },
}

/// Errors raised by the audit sink
#[derive(Debug, Error)]
pub enum AuditError {
    /// The audit event could not be durably recorded
    #[error("audit record failed for account '{account_id}': {reason}")]
    RecordFailed { account_id: String, reason: String },
}

/// Engine-level verification errors
///
/// Store failures are propagated unmodified; this crate adds no retry
/// policy of its own. Algorithm unavailability and upgrade failures never
/// appear here - the former resolves to non-match, the latter is
/// best-effort and only logged.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Credential store failure
    #[error("credential store error: {0}")]
    Store(#[from] StoreError),
}
