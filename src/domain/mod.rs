//! Domain value objects and types.
//!
//! Type-safe wrappers for the addresses the scheduling flow dispatches on.
//! Parsing happens once, at the edge, so handlers can pattern-match on
//! [`ContactChannel`] instead of re-inspecting raw strings.

pub mod channel;
pub mod email;
pub mod errors;

pub use channel::{ContactChannel, PhoneNumber};
pub use email::EmailAddress;
pub use errors::ValidationError;
