//! Argon2id hasher (preferred algorithm)

use argon2::password_hash::{
    PasswordHash as PhcHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
    rand_core::OsRng,
};
use argon2::Argon2;

use crate::core::{AlgorithmId, HasherError, PasswordHash};
use crate::traits::PasswordHasher;
use crate::utils::SecretString;

/// Algorithm tag for argon2id PHC-string hashes
pub const ARGON2ID: &str = "argon2id";

/// Argon2id password hasher
///
/// Produces and verifies PHC-format strings with per-hash random salts.
/// This is the strongest built-in algorithm and therefore not upgradable.
#[derive(Default)]
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Argon2Hasher {
    /// Create a hasher with the default argon2id parameters
    pub fn new() -> Self {
        Self::default()
    }
}

impl PasswordHasher for Argon2Hasher {
    fn algorithm(&self) -> AlgorithmId {
        AlgorithmId::new(ARGON2ID)
    }

    fn verify(&self, secret: &SecretString, digest: &str) -> Result<bool, HasherError> {
        let parsed = PhcHash::new(digest).map_err(|e| HasherError::MalformedDigest {
            algorithm: self.algorithm(),
            reason: e.to_string(),
        })?;

        match self
            .argon2
            .verify_password(secret.expose().as_bytes(), &parsed)
        {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(HasherError::MalformedDigest {
                algorithm: self.algorithm(),
                reason: e.to_string(),
            }),
        }
    }

    fn is_upgradable(&self) -> bool {
        false
    }

    fn hash(&self, secret: &SecretString) -> Result<PasswordHash, HasherError> {
        let salt = SaltString::generate(&mut OsRng);
        let digest = self
            .argon2
            .hash_password(secret.expose().as_bytes(), &salt)
            .map_err(|e| HasherError::Hash {
                algorithm: self.algorithm(),
                reason: e.to_string(),
            })?
            .to_string();

        Ok(PasswordHash::new(self.algorithm(), digest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hasher = Argon2Hasher::new();
        let secret = SecretString::new("correct-horse");

        let hash = hasher.hash(&secret).unwrap();
        assert_eq!(hash.algorithm.as_str(), ARGON2ID);
        assert!(hash.digest.starts_with("$argon2id$"));
        assert!(hasher.verify(&secret, &hash.digest).unwrap());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let hasher = Argon2Hasher::new();
        let hash = hasher.hash(&SecretString::new("correct-horse")).unwrap();

        assert!(!hasher.verify(&SecretString::new("wrong"), &hash.digest).unwrap());
    }

    #[test]
    fn test_salted_hashes_differ() {
        let hasher = Argon2Hasher::new();
        let secret = SecretString::new("same-secret");

        let a = hasher.hash(&secret).unwrap();
        let b = hasher.hash(&secret).unwrap();
        assert_ne!(a.digest, b.digest);
    }

    #[test]
    fn test_malformed_digest() {
        let hasher = Argon2Hasher::new();
        let result = hasher.verify(&SecretString::new("x"), "not-a-phc-string");
        assert!(matches!(result, Err(HasherError::MalformedDigest { .. })));
    }

    #[test]
    fn test_not_upgradable() {
        assert!(!Argon2Hasher::new().is_upgradable());
    }
}
