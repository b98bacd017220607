//! In-memory collaborator implementations
//!
//! Back the integration tests and small embeddings; production deployments
//! implement the traits over their own storage and audit infrastructure.

mod audit;
mod guard;
mod memory;

pub use audit::MemoryAuditSink;
pub use guard::ProcessWriteGuard;
pub use memory::MemoryCredentialStore;
