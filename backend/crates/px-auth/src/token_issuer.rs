use crate::{AuthError, Claims, Result as AuthErrorResult, TokenKind, TokenPair};

use px_core::{ErrorLocation, User};

use std::panic::Location;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// Mints and verifies HS256 session tokens
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    header: Header,
    validation: Validation,
    access_lifetime: Duration,
    refresh_lifetime: Duration,
}

impl TokenIssuer {
    /// Create issuer with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8], access_lifetime: Duration, refresh_lifetime: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.validate_nbf = false;
        validation.leeway = 0; // no clock skew tolerance

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            header: Header::new(Algorithm::HS256),
            validation,
            access_lifetime,
            refresh_lifetime,
        }
    }

    pub fn refresh_lifetime(&self) -> Duration {
        self.refresh_lifetime
    }

    /// Mint an access + refresh pair for the identity, timestamped now
    #[track_caller]
    pub fn issue_pair(&self, user: &User) -> AuthErrorResult<TokenPair> {
        self.issue_pair_at(user, Utc::now())
    }

    /// Mint an access + refresh pair for the identity at the given instant
    #[track_caller]
    pub fn issue_pair_at(&self, user: &User, issued_at: DateTime<Utc>) -> AuthErrorResult<TokenPair> {
        let access = Claims::for_user(user, TokenKind::Access, issued_at, self.access_lifetime);
        let refresh = Claims::for_user(user, TokenKind::Refresh, issued_at, self.refresh_lifetime);

        Ok(TokenPair {
            access_token: self.sign(&access)?,
            refresh_token: self.sign(&refresh)?,
            issued_at,
        })
    }

    /// Verify signature and expiry, then return claims.
    ///
    /// A token is expired from its `exp` second onwards.
    #[track_caller]
    pub fn parse(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::InvalidToken {
                        message: e.to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        // decode lets `exp == now` through even with zero leeway
        let claims = token_data.claims;
        if claims.exp <= Utc::now().timestamp() {
            return Err(AuthError::TokenExpired {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        claims.validate()?;

        Ok(claims)
    }

    /// Parse and require a specific token kind
    #[track_caller]
    pub fn parse_kind(&self, token: &str, kind: TokenKind) -> AuthErrorResult<Claims> {
        let claims = self.parse(token)?;
        if claims.kind != kind {
            return Err(AuthError::InvalidToken {
                message: format!("expected {} token, got {}", kind.as_str(), claims.kind.as_str()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(claims)
    }

    #[track_caller]
    fn sign(&self, claims: &Claims) -> AuthErrorResult<String> {
        encode(&self.header, claims, &self.encoding_key).map_err(|source| AuthError::TokenSigning {
            source,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
