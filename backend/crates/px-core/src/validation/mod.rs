//! Pure request validation.
//!
//! Each function inspects its inputs once and returns every failing field as
//! a [`FieldError`]. An empty vector means the request may be handed to the
//! session orchestrator. At most one error is reported per field: the first
//! rule that field breaks.

pub mod field_error;
pub mod rules;

/// Shortest accepted password, in bytes
pub const MIN_PASSWORD_LENGTH: usize = 8;
/// Longest accepted password, in bytes (argon2 accepts more, the original contract does not)
pub const MAX_PASSWORD_LENGTH: usize = 72;
pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_NAME_LENGTH: usize = 72;
/// Longest accepted email, in bytes
pub const MAX_EMAIL_LENGTH: usize = 254;
