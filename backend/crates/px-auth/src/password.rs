//! Argon2id credential hashing.
//!
//! Hashes are PHC strings carrying their own salt and parameters, so a
//! stored hash stays verifiable if the defaults change later.

use crate::{AuthError, Result as AuthErrorResult};

use px_core::ErrorLocation;

use std::panic::Location;
use std::sync::OnceLock;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Hash a plaintext password with a fresh random salt
#[track_caller]
pub fn hash_password(password: &str) -> AuthErrorResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// Check a plaintext password against a stored hash.
///
/// A malformed hash is a mismatch, never an error.
pub fn verify_password(hash: &str, password: &str) -> bool {
    let parsed = match PasswordHash::new(hash) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::warn!("Stored password hash is malformed: {e}");
            return false;
        }
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

fn dummy_hash() -> Option<&'static str> {
    DUMMY_HASH
        .get_or_init(|| match hash_password("px-timing-equaliser") {
            Ok(hash) => Some(hash),
            Err(e) => {
                log::error!("Failed to build timing equaliser hash: {e}");
                None
            }
        })
        .as_deref()
}

/// Build the throwaway hash behind [`verify_password_timing_only`] ahead of
/// the first failed lookup. Returns whether the hash is available.
pub fn prepare_timing_equaliser() -> bool {
    dummy_hash().is_some()
}

/// Run a verification against a throwaway hash and discard the result.
///
/// Used when no identity matched so that the unknown-email path costs the
/// same as a wrong-password path.
pub fn verify_password_timing_only(password: &str) {
    if let Some(hash) = dummy_hash() {
        let _ = verify_password(hash, password);
    }
}
