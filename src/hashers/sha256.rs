//! Legacy unsalted SHA-256 hasher (upgradable)

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::core::{AlgorithmId, HasherError, PasswordHash};
use crate::traits::PasswordHasher;
use crate::utils::SecretString;

/// Algorithm tag for legacy hex SHA-256 digests
pub const SHA256: &str = "sha256";

/// Legacy unsalted SHA-256 hasher
///
/// Digests are lowercase hex of `SHA-256(secret)`. Kept only so existing
/// records keep verifying; reports itself upgradable so every successful
/// match is re-encoded under the preferred algorithm.
#[derive(Debug, Default)]
pub struct Sha256Hasher;

impl Sha256Hasher {
    /// Create the legacy hasher
    pub fn new() -> Self {
        Self
    }

    fn digest_hex(secret: &SecretString) -> String {
        let digest = Sha256::digest(secret.expose().as_bytes());
        digest.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl PasswordHasher for Sha256Hasher {
    fn algorithm(&self) -> AlgorithmId {
        AlgorithmId::new(SHA256)
    }

    fn verify(&self, secret: &SecretString, digest: &str) -> Result<bool, HasherError> {
        // 64 hex chars for a 32-byte digest
        if digest.len() != 64 || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(HasherError::MalformedDigest {
                algorithm: self.algorithm(),
                reason: "expected 64 hex characters".to_string(),
            });
        }

        let computed = Self::digest_hex(secret);
        Ok(computed.as_bytes().ct_eq(digest.to_ascii_lowercase().as_bytes()).into())
    }

    fn is_upgradable(&self) -> bool {
        true
    }

    fn hash(&self, secret: &SecretString) -> Result<PasswordHash, HasherError> {
        Ok(PasswordHash::new(self.algorithm(), Self::digest_hex(secret)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hasher = Sha256Hasher::new();
        let secret = SecretString::new("changeme");

        let hash = hasher.hash(&secret).unwrap();
        assert_eq!(hash.digest.len(), 64);
        assert!(hasher.verify(&secret, &hash.digest).unwrap());
    }

    #[test]
    fn test_known_vector() {
        // SHA-256("abc")
        let hasher = Sha256Hasher::new();
        let digest = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";
        assert!(hasher.verify(&SecretString::new("abc"), digest).unwrap());
        assert!(!hasher.verify(&SecretString::new("abd"), digest).unwrap());
    }

    #[test]
    fn test_uppercase_digest_accepted() {
        let hasher = Sha256Hasher::new();
        let digest = "BA7816BF8F01CFEA414140DE5DAE2223B00361A396177A9CB410FF61F20015AD";
        assert!(hasher.verify(&SecretString::new("abc"), digest).unwrap());
    }

    #[test]
    fn test_malformed_digest() {
        let hasher = Sha256Hasher::new();
        assert!(matches!(
            hasher.verify(&SecretString::new("abc"), "zzzz"),
            Err(HasherError::MalformedDigest { .. })
        ));
    }

    #[test]
    fn test_upgradable() {
        assert!(Sha256Hasher::new().is_upgradable());
    }
}
