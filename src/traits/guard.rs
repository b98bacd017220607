//! Write guard and the unguarded-write token
//!
//! The surrounding system rejects writes that originate from read-only
//! request paths. Opportunistic upgrades are exactly such a write, so the
//! relaxation is modeled as an explicit capability token minted by the
//! guard rather than ambient global mode-switching.

/// Token permitting writes from a read-only request path
///
/// Only a [`WriteGuard`] can mint one; the private field keeps it
/// unconstructible elsewhere. The engine scopes the token tightly around
/// the upgrade loop and drops it immediately after. Holding a token grants
/// no additional concurrency safety.
#[derive(Debug)]
pub struct UnguardedWrite {
    _priv: (),
}

/// Trait answering the process-wide write policy
///
/// Read-only mode is externally controlled state that can change between
/// calls from unrelated administrative action, so the engine re-checks it
/// on every call and never caches the answer.
pub trait WriteGuard: Send + Sync {
    /// Whether the system is currently in read-only operating mode
    fn is_read_only(&self) -> bool;

    /// Mint a scoped unguarded-write token
    ///
    /// Callers must drop the token as soon as the write batch completes;
    /// it must never be left open across unrelated code.
    fn unguarded(&self) -> UnguardedWrite {
        UnguardedWrite { _priv: () }
    }
}
