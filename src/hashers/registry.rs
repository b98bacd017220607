//! Hasher registry
//!
//! Maps algorithm tags to implementations and designates the preferred
//! algorithm that upgrades re-encode under.

use std::collections::HashMap;
use std::sync::Arc;

use crate::core::AlgorithmId;
use crate::traits::PasswordHasher;

/// Registry of hash algorithm implementations
///
/// Candidate records are verified under their own stored algorithm; a tag
/// with no registered hasher behaves like an unavailable algorithm
/// (non-match). The preferred hasher is the one the upgrade pipeline
/// re-encodes matched legacy records under.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use credence::hashers::{Argon2Hasher, HasherRegistry, Sha256Hasher};
///
/// let registry = HasherRegistry::new(Arc::new(Argon2Hasher::new()))
///     .with_hasher(Arc::new(Sha256Hasher::new()));
///
/// assert_eq!(registry.preferred().algorithm().as_str(), "argon2id");
/// ```
pub struct HasherRegistry {
    hashers: HashMap<AlgorithmId, Arc<dyn PasswordHasher>>,
    preferred: Arc<dyn PasswordHasher>,
}

impl HasherRegistry {
    /// Create a registry with the preferred (strongest) hasher
    ///
    /// The preferred hasher is also registered for lookup, so records
    /// already stored under it keep verifying.
    pub fn new(preferred: Arc<dyn PasswordHasher>) -> Self {
        let mut hashers: HashMap<AlgorithmId, Arc<dyn PasswordHasher>> = HashMap::new();
        hashers.insert(preferred.algorithm(), Arc::clone(&preferred));
        Self { hashers, preferred }
    }

    /// Register an additional hasher (builder pattern)
    #[must_use]
    pub fn with_hasher(mut self, hasher: Arc<dyn PasswordHasher>) -> Self {
        self.hashers.insert(hasher.algorithm(), hasher);
        self
    }

    /// Look up the hasher for an algorithm tag
    pub fn get(&self, algorithm: &AlgorithmId) -> Option<&Arc<dyn PasswordHasher>> {
        self.hashers.get(algorithm)
    }

    /// The hasher upgrades re-encode under
    pub fn preferred(&self) -> &Arc<dyn PasswordHasher> {
        &self.preferred
    }

    /// Whether records under this algorithm are eligible for upgrade
    ///
    /// Unknown algorithms are not eligible: a record that cannot verify
    /// cannot have matched, so it never reaches the upgrade pipeline.
    pub fn is_upgradable(&self, algorithm: &AlgorithmId) -> bool {
        self.hashers
            .get(algorithm)
            .is_some_and(|hasher| hasher.is_upgradable())
    }
}
