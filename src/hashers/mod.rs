//! Built-in hash algorithm implementations
//!
//! Ships an argon2id hasher as the preferred algorithm and a legacy
//! unsalted SHA-256 hasher that reports itself upgradable, plus the
//! registry mapping algorithm tags to implementations.

mod argon2;
mod registry;
mod sha256;

pub use self::argon2::Argon2Hasher;
pub use registry::HasherRegistry;
pub use sha256::Sha256Hasher;
