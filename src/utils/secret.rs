//! Zeroizing secret wrapper
//!
//! Holds the caller-supplied plaintext secret for the duration of one
//! verification call. The wrapped value is zeroized on drop and redacted
//! from `Debug` output; nothing in this crate logs or persists it.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// A plaintext secret with zeroize-on-drop semantics
///
/// # Examples
///
/// ```
/// use credence::SecretString;
///
/// let secret = SecretString::new("correct-horse");
/// assert_eq!(secret.expose(), "correct-horse");
/// assert_eq!(format!("{:?}", secret), "SecretString(***)");
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretString(String);

impl SecretString {
    /// Wrap a plaintext secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Borrow the plaintext
    ///
    /// Callers must not persist or log the returned slice; it is intended
    /// solely for handing to a hash algorithm's compare/recompute.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether the secret is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretString(***)")
    }
}

impl From<&str> for SecretString {
    fn from(secret: &str) -> Self {
        Self::new(secret)
    }
}

impl From<String> for SecretString {
    fn from(secret: String) -> Self {
        Self(secret)
    }
}
