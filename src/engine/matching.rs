//! Match accumulation
//!
//! Compares a supplied secret against candidate records, each under its
//! own stored algorithm. All matches are accumulated, not just the first,
//! because the upgrade step operates on every eligible match.

use tracing::warn;

use crate::core::{CredentialRecord, HasherError};
use crate::hashers::HasherRegistry;
use crate::utils::SecretString;

/// Collect every candidate whose stored hash matches the secret
///
/// A candidate whose algorithm has no registered hasher, or whose hasher
/// reports itself unavailable, is a non-match for that candidate only;
/// evaluation of the remaining candidates continues. A malformed stored
/// digest is likewise a non-match: it can never verify, so it must never
/// block the other candidates.
pub(crate) fn collect_matches(
    candidates: Vec<CredentialRecord>,
    secret: &SecretString,
    registry: &HasherRegistry,
) -> Vec<CredentialRecord> {
    let mut matches = Vec::new();

    for candidate in candidates {
        let Some(hasher) = registry.get(&candidate.hash.algorithm) else {
            warn!(
                record_id = %candidate.id,
                algorithm = %candidate.hash.algorithm,
                "No hasher registered for stored algorithm; treating as non-match"
            );
            continue;
        };

        match hasher.verify(secret, &candidate.hash.digest) {
            Ok(true) => matches.push(candidate),
            Ok(false) => {}
            Err(HasherError::Unavailable { algorithm }) => {
                warn!(
                    record_id = %candidate.id,
                    algorithm = %algorithm,
                    "Hash algorithm unavailable; treating as non-match"
                );
            }
            Err(e) => {
                warn!(
                    record_id = %candidate.id,
                    algorithm = %candidate.hash.algorithm,
                    error = %e,
                    "Candidate comparison failed; treating as non-match"
                );
            }
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AccountId, AlgorithmId, CredentialType, PasswordHash};
    use crate::hashers::{Argon2Hasher, Sha256Hasher};
    use crate::traits::PasswordHasher as _;
    use std::sync::Arc;

    /// Hasher whose environment is always missing
    struct UnavailableHasher;

    impl crate::traits::PasswordHasher for UnavailableHasher {
        fn algorithm(&self) -> AlgorithmId {
            AlgorithmId::new("bcrypt")
        }

        fn verify(&self, _: &SecretString, _: &str) -> Result<bool, HasherError> {
            Err(HasherError::Unavailable {
                algorithm: self.algorithm(),
            })
        }

        fn is_upgradable(&self) -> bool {
            true
        }

        fn hash(&self, _: &SecretString) -> Result<PasswordHash, HasherError> {
            Err(HasherError::Unavailable {
                algorithm: self.algorithm(),
            })
        }
    }

    fn registry() -> HasherRegistry {
        HasherRegistry::new(Arc::new(Argon2Hasher::new()))
            .with_hasher(Arc::new(Sha256Hasher::new()))
            .with_hasher(Arc::new(UnavailableHasher))
    }

    fn record(hash: PasswordHash) -> CredentialRecord {
        CredentialRecord::new(
            AccountId::new("acct").unwrap(),
            CredentialType::new("login").unwrap(),
            hash,
        )
    }

    #[test]
    fn test_accumulates_all_matches() {
        let registry = registry();
        let secret = SecretString::new("s3cret");
        let sha = Sha256Hasher::new().hash(&secret).unwrap();
        let argon = Argon2Hasher::new().hash(&secret).unwrap();

        let matches = collect_matches(
            vec![record(sha), record(argon)],
            &secret,
            &registry,
        );
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn test_unavailable_candidate_skipped_not_fatal() {
        let registry = registry();
        let secret = SecretString::new("s3cret");
        let sha = Sha256Hasher::new().hash(&secret).unwrap();

        let matches = collect_matches(
            vec![
                record(PasswordHash::new(AlgorithmId::new("bcrypt"), "whatever")),
                record(sha),
            ],
            &secret,
            &registry,
        );
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].hash.algorithm.as_str(), "sha256");
    }

    #[test]
    fn test_unknown_algorithm_is_non_match() {
        let registry = registry();
        let secret = SecretString::new("s3cret");

        let matches = collect_matches(
            vec![record(PasswordHash::new(AlgorithmId::new("md5"), "abc"))],
            &secret,
            &registry,
        );
        assert!(matches.is_empty());
    }

    #[test]
    fn test_malformed_digest_is_non_match() {
        let registry = registry();
        let secret = SecretString::new("s3cret");

        let matches = collect_matches(
            vec![record(PasswordHash::new(AlgorithmId::new("sha256"), "zz"))],
            &secret,
            &registry,
        );
        assert!(matches.is_empty());
    }
}
