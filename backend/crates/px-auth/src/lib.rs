pub mod claims;
pub mod error;
pub mod password;
pub mod principal;
pub mod token_issuer;
pub mod token_kind;
pub mod token_pair;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use password::{
    hash_password, prepare_timing_equaliser, verify_password, verify_password_timing_only,
};
pub use principal::Principal;
pub use token_issuer::TokenIssuer;
pub use token_kind::TokenKind;
pub use token_pair::TokenPair;

#[cfg(test)]
mod tests;
