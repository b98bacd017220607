//! Shared helpers for integration tests

use std::sync::{Arc, Once};

use credence::prelude::*;
use credence::core::HasherError;

static TRACING: Once = Once::new();

/// Route engine logs to the test harness so failures show the [`tracing`]
/// output of the failing test only
fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .init();
    });
}

/// Everything a test needs to drive the verifier and inspect side effects
pub struct Harness {
    pub verifier: CredentialVerifier,
    pub store: MemoryCredentialStore,
    pub audit: MemoryAuditSink,
    pub guard: Arc<ProcessWriteGuard>,
}

/// Build a verifier over in-memory collaborators with argon2id preferred
/// and legacy sha256 registered
pub fn harness() -> Harness {
    init_tracing();

    let store = MemoryCredentialStore::new();
    let audit = MemoryAuditSink::new();
    let guard = Arc::new(ProcessWriteGuard::new());

    let registry = HasherRegistry::new(Arc::new(Argon2Hasher::new()))
        .with_hasher(Arc::new(Sha256Hasher::new()))
        .with_hasher(Arc::new(UnavailableHasher));

    let verifier = CredentialVerifier::new(
        Arc::new(store.clone()),
        Arc::new(registry),
        Arc::new(audit.clone()),
        Arc::clone(&guard) as Arc<dyn WriteGuard>,
    );

    Harness {
        verifier,
        store,
        audit,
        guard,
    }
}

/// Context with upgrades enabled for the given account and type
pub fn ctx(account: &str, credential_type: &str) -> VerificationContext {
    VerificationContext::new(
        "login-workflow",
        AccountId::new(account).unwrap(),
        CredentialType::new(credential_type).unwrap(),
        UpgradePolicy::enabled("web-session"),
    )
}

/// Context with upgrades disabled
pub fn ctx_no_upgrades(account: &str, credential_type: &str) -> VerificationContext {
    VerificationContext::new(
        "login-workflow",
        AccountId::new(account).unwrap(),
        CredentialType::new(credential_type).unwrap(),
        UpgradePolicy::Disabled,
    )
}

/// An active record hashed under the legacy sha256 algorithm
pub fn legacy_record(account: &str, credential_type: &str, secret: &str) -> CredentialRecord {
    let hash = Sha256Hasher::new().hash(&SecretString::new(secret)).unwrap();
    CredentialRecord::new(
        AccountId::new(account).unwrap(),
        CredentialType::new(credential_type).unwrap(),
        hash,
    )
}

/// An active record hashed under the preferred argon2id algorithm
pub fn strong_record(account: &str, credential_type: &str, secret: &str) -> CredentialRecord {
    let hash = Argon2Hasher::new().hash(&SecretString::new(secret)).unwrap();
    CredentialRecord::new(
        AccountId::new(account).unwrap(),
        CredentialType::new(credential_type).unwrap(),
        hash,
    )
}

/// Hasher whose runtime environment is always missing
pub struct UnavailableHasher;

impl PasswordHasher for UnavailableHasher {
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
