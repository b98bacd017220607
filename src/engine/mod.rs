//! Credential verification engine
//!
//! Hosts the three public checks (valid / unique / revoked), the match
//! accumulation loop, and the opportunistic upgrade pipeline.

mod matching;
mod upgrade;
mod verifier;

pub use verifier::CredentialVerifier;
