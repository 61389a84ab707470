//! Contact channel dispatch.
//!
//! A raw contact string from the orchestrator is classified exactly once by
//! [`ContactChannel::parse`]. The rule is narrow: anything
//! containing '@' is treated as an email address, a string made of phone
//! characters is a phone number, everything else is unknown.

use super::errors::ValidationError;
use std::fmt;

/// Characters allowed in a phone number besides digits.
const PHONE_PUNCTUATION: &[char] = &[' ', '-', '(', ')', '+', '.'];

/// Where a message for a contact should be delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactChannel {
    /// Anything containing '@'. Not validated further; the mail transport
    /// rejects addresses it cannot deliver to.
    Email(String),

    /// A phone number (digits plus common formatting).
    Phone(PhoneNumber),

    /// Neither of the above, including absent or blank input.
    Unknown(String),
}

impl ContactChannel {
    /// Classify a raw contact string.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();

        if raw.contains('@') {
            return Self::Email(raw.to_string());
        }

        match PhoneNumber::new(raw) {
            Ok(phone) => Self::Phone(phone),
            Err(_) => Self::Unknown(raw.to_string()),
        }
    }

    /// Classify optional contact info; `None` is `Unknown("")`.
    pub fn from_optional(raw: Option<&str>) -> Self {
        raw.map(Self::parse)
            .unwrap_or_else(|| Self::Unknown(String::new()))
    }

    /// Human-facing channel name, as used in scheduling replies.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Email(_) => "email",
            Self::Phone(_) => "mobile",
            Self::Unknown(_) => "unknown",
        }
    }

    pub fn is_email(&self) -> bool {
        matches!(self, Self::Email(_))
    }
}

/// A phone number as typed by the user.
///
/// Must contain at least one digit and nothing but digits and
/// `PHONE_PUNCTUATION`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        let has_digit = phone.chars().any(|c| c.is_ascii_digit());
        let all_allowed = phone
            .chars()
            .all(|c| c.is_ascii_digit() || PHONE_PUNCTUATION.contains(&c));

        if has_digit && all_allowed {
            Ok(Self(phone))
        } else {
            Err(ValidationError::InvalidPhone(phone))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The number with formatting stripped, e.g. for an SMS gateway.
    pub fn digits(&self) -> String {
        self.0
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect()
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
