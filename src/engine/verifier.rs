//! Credential verifier - the three public checks
//!
//! Provides the high-level API for verifying a secret against an account's
//! stored credentials, with opportunistic hash upgrades on the valid-password
//! path.

use std::sync::Arc;
use tracing::{debug, info};

use crate::core::{CredentialFilter, VerificationContext, VerifyResult};
use crate::engine::matching::collect_matches;
use crate::engine::upgrade::upgrade_matches;
use crate::hashers::HasherRegistry;
use crate::traits::{AuditSink, CredentialStore, WriteGuard};
use crate::utils::SecretString;

/// Credential verification engine
///
/// Composes the credential store, hasher registry, audit sink, and write
/// guard. Checks are read-mostly and may run concurrently for different
/// accounts; the only mutation is the upgrade path, whose atomicity is the
/// store's contract.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use credence::prelude::*;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let verifier = CredentialVerifier::new(
///     Arc::new(MemoryCredentialStore::new()),
///     Arc::new(
///         HasherRegistry::new(Arc::new(Argon2Hasher::new()))
///             .with_hasher(Arc::new(Sha256Hasher::new())),
///     ),
///     Arc::new(MemoryAuditSink::new()),
///     Arc::new(ProcessWriteGuard::new()),
/// );
///
/// let ctx = VerificationContext::new(
///     "login-workflow",
///     AccountId::new("user_123")?,
///     CredentialType::new("login")?,
///     UpgradePolicy::enabled("web-session"),
/// );
///
/// let ok = verifier.is_valid_password(&ctx, &SecretString::new("hunter2")).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CredentialVerifier {
    store: Arc<dyn CredentialStore>,
    hashers: Arc<HasherRegistry>,
    audit: Arc<dyn AuditSink>,
    guard: Arc<dyn WriteGuard>,
}

impl CredentialVerifier {
    /// Create a verifier over its four collaborators
    ///
    /// Every collaborator is required, so a partially wired verifier
    /// cannot exist.
    pub fn new(
        store: Arc<dyn CredentialStore>,
        hashers: Arc<HasherRegistry>,
        audit: Arc<dyn AuditSink>,
        guard: Arc<dyn WriteGuard>,
    ) -> Self {
        Self {
            store,
            hashers,
            audit,
            guard,
        }
    }

    /// Check whether the secret matches an active credential of the
    /// configured type
    ///
    /// Queries the account's records filtered to the context's type
    /// partition with `revoked = false` and accumulates every match. When
    /// the upgrade gate holds (upgrades enabled and the system is not
    /// read-only), eligible matches are re-encoded under the preferred
    /// algorithm before returning.
    ///
    /// # Errors
    ///
    /// Returns `VerifyError::Store` if the credential query fails. An
    /// unavailable hash algorithm is never an error, and an upgrade
    /// failure never invalidates the returned boolean.
    pub async fn is_valid_password(
        &self,
        ctx: &VerificationContext,
        secret: &SecretString,
    ) -> VerifyResult<bool> {
        debug!(
            account_id = %ctx.account_id,
            credential_type = %ctx.credential_type,
            actor = %ctx.actor,
            "Checking secret against active credentials"
        );

        let candidates = self
            .store
            .find(
                &ctx.account_id,
                &CredentialFilter::active_of_type(ctx.credential_type.clone()),
            )
            .await?;

        let matches = collect_matches(candidates, secret, &self.hashers);
        let valid = !matches.is_empty();

        if valid && self.should_upgrade(ctx) {
            upgrade_matches(
                &matches,
                secret,
                ctx,
                &self.hashers,
                self.store.as_ref(),
                self.audit.as_ref(),
                self.guard.as_ref(),
            )
            .await;
        }

        info!(
            account_id = %ctx.account_id,
            credential_type = %ctx.credential_type,
            valid,
            "Valid-password check complete"
        );

        Ok(valid)
    }

    /// Check whether the secret is unused across the account's history
    ///
    /// Compares against every record for the account except active
    /// credentials of the configured type, so a credential cannot collide
    /// with itself. Revoked credentials of the configured type, and all
    /// credentials of other types, still count as collisions. Never
    /// mutates state.
    ///
    /// # Errors
    ///
    /// Returns `VerifyError::Store` if the credential query fails.
    pub async fn is_unique_password(
        &self,
        ctx: &VerificationContext,
        secret: &SecretString,
    ) -> VerifyResult<bool> {
        debug!(
            account_id = %ctx.account_id,
            credential_type = %ctx.credential_type,
            "Checking secret uniqueness across credential history"
        );

        let all = self
            .store
            .find(&ctx.account_id, &CredentialFilter::all())
            .await?;

        // Exclude only the active credentials of the configured type;
        // revoked same-type records remain collision candidates.
        let candidates: Vec<_> = all
            .into_iter()
            .filter(|record| {
                !(record.credential_type == ctx.credential_type && record.is_active())
            })
            .collect();

        let unique = collect_matches(candidates, secret, &self.hashers).is_empty();

        info!(
            account_id = %ctx.account_id,
            credential_type = %ctx.credential_type,
            unique,
            "Unique-password check complete"
        );

        Ok(unique)
    }

    /// Check whether the secret matches a revoked credential
    ///
    /// Revocation is account-wide, not type-scoped: a secret revoked under
    /// one credential type may not be reused under another. Never mutates
    /// state.
    ///
    /// # Errors
    ///
    /// Returns `VerifyError::Store` if the credential query fails.
    pub async fn is_revoked_password(
        &self,
        ctx: &VerificationContext,
        secret: &SecretString,
    ) -> VerifyResult<bool> {
        debug!(
            account_id = %ctx.account_id,
            "Checking secret against revoked credentials"
        );

        let candidates = self
            .store
            .find(&ctx.account_id, &CredentialFilter::revoked_any_type())
            .await?;

        let revoked = !collect_matches(candidates, secret, &self.hashers).is_empty();

        info!(
            account_id = %ctx.account_id,
            revoked,
            "Revoked-password check complete"
        );

        Ok(revoked)
    }

    /// Upgrade gate
    ///
    /// Evaluated lazily per call and never cached: read-only mode is
    /// externally controlled and can change between calls.
    fn should_upgrade(&self, ctx: &VerificationContext) -> bool {
        if !ctx.upgrades_enabled() {
            return false;
        }
        if self.guard.is_read_only() {
            debug!(
                account_id = %ctx.account_id,
                "System read-only; skipping hash upgrades"
            );
            return false;
        }
        true
    }
}

