//! In-memory credential store
//!
//! Provides account-keyed storage with error injection for exercising the
//! engine's failure paths.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::{
    AccountId, CredentialFilter, CredentialRecord, PasswordHash, RecordId, StoreError,
};
use crate::traits::{CredentialStore, UnguardedWrite};

#[derive(Default)]
struct Inner {
    records: HashMap<AccountId, Vec<CredentialRecord>>,
    fail_queries: bool,
    fail_replace_for: HashSet<RecordId>,
}

/// In-memory credential store with error injection
///
/// Each record's hash replacement happens under one write lock, so
/// concurrent readers observe either the old or the new representation,
/// never a torn intermediate state.
#[derive(Clone, Default)]
pub struct MemoryCredentialStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryCredentialStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record (test/seeding helper)
    pub async fn insert(&self, record: CredentialRecord) {
        let mut inner = self.inner.write().await;
        inner
            .records
            .entry(record.account_id.clone())
            .or_default()
            .push(record);
    }

    /// Fetch one record by ID (test helper)
    pub async fn get(&self, record_id: &RecordId) -> Option<CredentialRecord> {
        let inner = self.inner.read().await;
        inner
            .records
            .values()
            .flatten()
            .find(|record| &record.id == record_id)
            .cloned()
    }

    /// Make every query fail (error simulation)
    pub async fn fail_queries(&self, fail: bool) {
        self.inner.write().await.fail_queries = fail;
    }

    /// Make hash replacement fail for one record (error simulation)
    pub async fn fail_replace_for(&self, record_id: RecordId) {
        self.inner.write().await.fail_replace_for.insert(record_id);
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find(
        &self,
        account_id: &AccountId,
        filter: &CredentialFilter,
    ) -> Result<Vec<CredentialRecord>, StoreError> {
        let inner = self.inner.read().await;

        if inner.fail_queries {
            return Err(StoreError::QueryFailed {
                account_id: account_id.to_string(),
                reason: "simulated query failure".to_string(),
            });
        }

        Ok(inner
            .records
            .get(account_id)
            .map(|records| {
                records
                    .iter()
                    .filter(|record| filter.matches(record))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn replace_hash(
        &self,
        record_id: &RecordId,
        new_hash: PasswordHash,
        _write: &UnguardedWrite,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;

        if inner.fail_replace_for.contains(record_id) {
            return Err(StoreError::WriteFailed {
                record_id: record_id.to_string(),
                reason: "simulated write failure".to_string(),
            });
        }

        let record = inner
            .records
            .values_mut()
            .flatten()
            .find(|record| &record.id == record_id)
            .ok_or_else(|| StoreError::RecordNotFound {
                record_id: record_id.to_string(),
            })?;

        record.hash = new_hash;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AlgorithmId, CredentialType};
    use crate::traits::WriteGuard;

    struct Writable;

    impl WriteGuard for Writable {
        fn is_read_only(&self) -> bool {
            false
        }
    }

    fn record(account: &str, credential_type: &str, digest: &str) -> CredentialRecord {
        CredentialRecord::new(
            AccountId::new(account).unwrap(),
            CredentialType::new(credential_type).unwrap(),
            PasswordHash::new(AlgorithmId::new("sha256"), digest),
        )
    }

    #[tokio::test]
    async fn test_find_scopes_by_account() {
        let store = MemoryCredentialStore::new();
        store.insert(record("alice", "login", "aa")).await;
        store.insert(record("bob", "login", "bb")).await;

        let found = store
            .find(&AccountId::new("alice").unwrap(), &CredentialFilter::all())
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].hash.digest, "aa");
    }

    #[tokio::test]
    async fn test_find_applies_filter() {
        let store = MemoryCredentialStore::new();
        store.insert(record("alice", "login", "aa")).await;
        store.insert(record("alice", "login", "bb").revoked()).await;

        let active = store
            .find(
                &AccountId::new("alice").unwrap(),
                &CredentialFilter::active_of_type(CredentialType::new("login").unwrap()),
            )
            .await
            .unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].hash.digest, "aa");
    }

    #[tokio::test]
    async fn test_replace_hash() {
        let store = MemoryCredentialStore::new();
        let rec = record("alice", "login", "aa");
        let id = rec.id;
        store.insert(rec).await;

        let write = Writable.unguarded();
        store
            .replace_hash(
                &id,
                PasswordHash::new(AlgorithmId::new("argon2id"), "$argon2id$new"),
                &write,
            )
            .await
            .unwrap();

        let updated = store.get(&id).await.unwrap();
        assert_eq!(updated.hash.algorithm.as_str(), "argon2id");
        assert!(!updated.revoked, "replacement must not touch revoked flag");
    }

    #[tokio::test]
    async fn test_replace_missing_record() {
        let store = MemoryCredentialStore::new();
        let write = Writable.unguarded();
        let result = store
            .replace_hash(
                &RecordId::new(),
                PasswordHash::new(AlgorithmId::new("argon2id"), "x"),
                &write,
            )
            .await;
        assert!(matches!(result, Err(StoreError::RecordNotFound { .. })));
    }

    #[tokio::test]
    async fn test_query_failure_injection() {
        let store = MemoryCredentialStore::new();
        store.fail_queries(true).await;

        let result = store
            .find(&AccountId::new("alice").unwrap(), &CredentialFilter::all())
            .await;
        assert!(matches!(result, Err(StoreError::QueryFailed { .. })));
    }
}
