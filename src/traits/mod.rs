//! Capability traits for external collaborators
//!
//! The engine consumes its collaborators as trait objects: a credential
//! store, per-algorithm hashers, an audit sink, and the write guard that
//! answers the process-wide read-only question.

mod audit;
mod guard;
mod hasher;
mod store;

pub use audit::{AuditSink, UpgradeEvent};
pub use guard::{UnguardedWrite, WriteGuard};
pub use hasher::PasswordHasher;
pub use store::CredentialStore;
