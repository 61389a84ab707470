//! EmailAddress value object.

use super::errors::ValidationError;
use std::fmt;

/// A syntactically valid email address.
///
/// Used for the configured sender identity, which must be well formed
/// before the server starts. Recipient addresses supplied by the
/// orchestrator are *not* forced through this type; the mail transport is
/// the final judge of those.
///
/// # Example
///
/// ```
/// use jarvis_mcp_server::domain::EmailAddress;
///
/// let email = EmailAddress::new("  jarvis@example.com ").unwrap();
/// assert_eq!(email.as_str(), "jarvis@example.com");
/// assert!(EmailAddress::new("jarvis@localhost").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress {
    address: String,
}

impl EmailAddress {
    /// Create a new EmailAddress from trimmed input.
    ///
    /// # Validation Rules
    ///
    /// - Exactly one '@', with a non-empty local part
    /// - No whitespace anywhere
    /// - Domain has at least one '.', and no empty labels
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the address is malformed.
    pub fn new(email: impl AsRef<str>) -> Result<Self, ValidationError> {
        let address = email.as_ref().trim();

        if Self::is_well_formed(address) {
            Ok(Self {
                address: address.to_string(),
            })
        } else {
            Err(ValidationError::InvalidEmail(address.to_string()))
        }
    }

    fn is_well_formed(address: &str) -> bool {
        if address.chars().any(char::is_whitespace) {
            return false;
        }

        let Some((local, domain)) = address.split_once('@') else {
            return false;
        };

        !local.is_empty()
            && !domain.contains('@')
            && domain.contains('.')
            && !domain.split('.').any(str::is_empty)
    }

    pub fn as_str(&self) -> &str {
        &self.address
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}
