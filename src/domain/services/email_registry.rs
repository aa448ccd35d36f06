//! Email uniqueness registry.
//!
//! Tracks every email address ever claimed by a successful user
//! construction. Shared across threads by reference, typically wrapped
//! in an `Arc` by callers that construct users concurrently.

use dashmap::DashSet;

use crate::shared::error::ValidationError;

/// Lock-free set of claimed email addresses.
///
/// Addresses are compared exact-case: `Alice@example.com` and
/// `alice@example.com` are distinct claims.
#[derive(Debug, Default)]
pub struct EmailRegistry {
    emails: DashSet<String>,
}

impl EmailRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim an address for a new user.
    ///
    /// The insert is the uniqueness check: under concurrent claims of the
    /// same address, exactly one caller wins.
    pub(crate) fn claim(&self, email: &str) -> Result<(), ValidationError> {
        if self.emails.insert(email.to_owned()) {
            tracing::debug!(email = %email, "email claimed");
            Ok(())
        } else {
            let err = ValidationError::EmailTaken {
                email: email.to_owned(),
            };
            tracing::debug!(email = %email, reason = err.kind(), "email claim rejected");
            Err(err)
        }
    }

    /// Check whether an address has been claimed.
    pub fn is_registered(&self, email: &str) -> bool {
        self.emails.contains(email)
    }

    /// Number of claimed addresses.
    pub fn len(&self) -> usize {
        self.emails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }
}
