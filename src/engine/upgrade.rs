//! Opportunistic hash-upgrade pipeline
//!
//! Re-encodes matched legacy records under the preferred algorithm and
//! emits one audit event per upgraded record. Best-effort relative to the
//! verification result: per-record failures are logged and the remaining
//! records are still processed.

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::core::{CredentialRecord, VerificationContext};
use crate::hashers::HasherRegistry;
use crate::traits::{AuditSink, CredentialStore, UpgradeEvent, WriteGuard};
use crate::utils::SecretString;

/// Upgrade every eligible matched record
///
/// Filters the match set to records whose stored algorithm reports itself
/// upgradable; if none qualify, nothing happens. The unguarded-write token
/// is minted immediately before the loop and dropped immediately after,
/// never held across unrelated code.
pub(crate) async fn upgrade_matches(
    matches: &[CredentialRecord],
    secret: &SecretString,
    ctx: &VerificationContext,
    registry: &HasherRegistry,
    store: &dyn CredentialStore,
    audit: &dyn AuditSink,
    guard: &dyn WriteGuard,
) {
    let eligible: Vec<&CredentialRecord> = matches
        .iter()
        .filter(|record| registry.is_upgradable(&record.hash.algorithm))
        .collect();

    if eligible.is_empty() {
        debug!(
            account_id = %ctx.account_id,
            matched = matches.len(),
            "No matched records eligible for hash upgrade"
        );
        return;
    }

    // Content source is guaranteed by the caller's upgrade gate.
    let content_source = ctx.content_source().unwrap_or_default().to_string();
    let preferred = registry.preferred();
    let new_algorithm = preferred.algorithm();

    let write = guard.unguarded();
    for record in eligible {
        let old_algorithm = record.hash.algorithm.clone();

        let new_hash = match preferred.hash(secret) {
            Ok(hash) => hash,
            Err(e) => {
                warn!(
                    record_id = %record.id,
                    account_id = %ctx.account_id,
                    algorithm = %new_algorithm,
                    error = %e,
                    "Recomputing hash for upgrade failed; record left unchanged"
                );
                continue;
            }
        };

        if let Err(e) = store.replace_hash(&record.id, new_hash, &write).await {
            warn!(
                record_id = %record.id,
                account_id = %ctx.account_id,
                error = %e,
                "Hash replacement failed; record left unchanged"
            );
            continue;
        }

        info!(
            record_id = %record.id,
            account_id = %ctx.account_id,
            old_algorithm = %old_algorithm,
            new_algorithm = %new_algorithm,
            "Credential hash upgraded"
        );

        let event = UpgradeEvent {
            account_id: ctx.account_id.clone(),
            actor: ctx.actor.clone(),
            content_source: content_source.clone(),
            old_algorithm,
            new_algorithm: new_algorithm.clone(),
            trace_id: ctx.trace_id,
            occurred_at: Utc::now(),
        };

        if let Err(e) = audit.record(event).await {
            warn!(
                record_id = %record.id,
                account_id = %ctx.account_id,
                error = %e,
                "Audit record for hash upgrade failed"
            );
        }
    }
    drop(write);
}
