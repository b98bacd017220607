//! Credential store trait

use async_trait::async_trait;

use crate::core::{AccountId, CredentialFilter, CredentialRecord, PasswordHash, RecordId, StoreError};
use crate::traits::UnguardedWrite;

/// Trait for persistent credential storage
///
/// The engine treats query results as an unordered set; no ordering
/// guarantee is required. Hash replacement must be atomic from the
/// perspective of any concurrent reader of that record: a reader observes
/// either the old or the new representation, never a torn intermediate
/// state. Ordering and atomicity come from the store's own transaction
/// mechanism, not from the [`UnguardedWrite`] token.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Query credential records for one account
    ///
    /// Account scope is applied first; `filter` narrows by type partition
    /// and revocation state.
    async fn find(
        &self,
        account_id: &AccountId,
        filter: &CredentialFilter,
    ) -> Result<Vec<CredentialRecord>, StoreError>;

    /// Replace a record's hash representation in place
    ///
    /// Same record identity, new algorithm tag and digest. The revoked flag
    /// is never touched by this path. Requires an [`UnguardedWrite`] token
    /// because the call originates from a read-only request path; the token
    /// only bypasses the global write-lock policy, it grants no concurrency
    /// safety by itself.
    async fn replace_hash(
        &self,
        record_id: &RecordId,
        new_hash: PasswordHash,
        write: &UnguardedWrite,
    ) -> Result<(), StoreError>;
}
