//! Utility modules

pub mod secret;

pub use secret::SecretString;
