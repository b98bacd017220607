//! Hash algorithm capability trait

use crate::core::{AlgorithmId, HasherError, PasswordHash};
use crate::utils::SecretString;

/// Capability interface for one hash algorithm
///
/// Implementations are registered in a
/// [`HasherRegistry`](crate::hashers::HasherRegistry) under their
/// [`AlgorithmId`]. Hashing is CPU-bound, so the trait is synchronous and
/// object-safe.
///
/// The "cannot run in this environment" condition is an explicit
/// recoverable result ([`HasherError::Unavailable`]), not a panic: the
/// matching loop maps it to a non-match for that candidate only, so an
/// unavailable algorithm never blocks login when another valid credential
/// exists and never falsely reports a match.
pub trait PasswordHasher: Send + Sync {
    /// The algorithm tag this hasher serves
    fn algorithm(&self) -> AlgorithmId;

    /// Compare a secret against a stored digest
    ///
    /// # Errors
    ///
    /// Returns [`HasherError::Unavailable`] when the algorithm cannot run
    /// in the current environment, and [`HasherError::MalformedDigest`]
    /// when the stored digest cannot be parsed.
    fn verify(&self, secret: &SecretString, digest: &str) -> Result<bool, HasherError>;

    /// Whether credentials stored under this algorithm should be re-encoded
    /// under the registry's preferred algorithm when verified
    fn is_upgradable(&self) -> bool;

    /// Recompute a hash representation for a secret
    ///
    /// Used by the upgrade pipeline with the preferred hasher; the
    /// plaintext is consumed transiently and never persisted.
    ///
    /// # Errors
    ///
    /// Returns [`HasherError::Unavailable`] or [`HasherError::Hash`] when
    /// the digest cannot be produced.
    fn hash(&self, secret: &SecretString) -> Result<PasswordHash, HasherError>;
}
