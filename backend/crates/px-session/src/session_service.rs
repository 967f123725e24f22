//! Session orchestration: register, login, refresh and logout.
//!
//! Every operation ends in the same issue-session step. A signed access
//! token whose refresh record failed to persist is not revoked; it simply
//! runs out at its own expiry.

use crate::{AuthResponse, LoginRequest, RegisterRequest, Result as SessionResult, SessionError};

use px_auth::{Principal, TokenIssuer, TokenKind};
use px_core::{ErrorLocation, RefreshToken, User, UserRole, UserSummary};
use px_db::{IdentityStore, RefreshTokenStore};

use std::panic::Location;
use std::sync::Arc;

use chrono::Utc;

pub struct SessionService {
    identities: Arc<dyn IdentityStore>,
    refresh_tokens: Arc<dyn RefreshTokenStore>,
    issuer: Arc<TokenIssuer>,
}

impl SessionService {
    pub fn new(
        identities: Arc<dyn IdentityStore>,
        refresh_tokens: Arc<dyn RefreshTokenStore>,
        issuer: Arc<TokenIssuer>,
    ) -> Self {
        if !px_auth::prepare_timing_equaliser() {
            log::warn!("Unknown-email logins will skip password verification");
        }

        Self {
            identities,
            refresh_tokens,
            issuer,
        }
    }

    pub fn identities(&self) -> Arc<dyn IdentityStore> {
        Arc::clone(&self.identities)
    }

    /// Create an identity and open its first session.
    ///
    /// The store's uniqueness constraint decides whether the email is taken;
    /// there is no lookup beforehand. The requested role is ignored.
    pub async fn register(&self, request: RegisterRequest) -> SessionResult<AuthResponse> {
        let password = request.password;
        let password_hash = blocking(move || px_auth::hash_password(&password)).await??;

        let user = User::new(
            request.first_name,
            request.last_name,
            request.email,
            password_hash,
            UserRole::User,
            request.favorite_genres,
        );

        if let Err(e) = self.identities.create(&user).await {
            let err = SessionError::from(e);
            if let SessionError::DuplicateIdentity { .. } = err {
                log::info!("Registration rejected: email already registered");
            }
            return Err(err);
        }

        log::info!("Registered identity {}", user.id);
        self.issue_session(&user).await
    }

    /// Unknown email and wrong password are indistinguishable to the caller
    pub async fn login(&self, request: LoginRequest) -> SessionResult<AuthResponse> {
        let LoginRequest { email, password } = request;

        let Some(user) = self.identities.find_by_email(&email).await? else {
            blocking(move || px_auth::verify_password_timing_only(&password)).await?;
            log::warn!("Login failed: invalid credentials");
            return Err(SessionError::invalid_credentials());
        };

        let hash = user.password_hash.clone();
        let verified = blocking(move || px_auth::verify_password(&hash, &password)).await?;
        if !verified {
            log::warn!("Login failed: invalid credentials for identity {}", user.id);
            return Err(SessionError::invalid_credentials());
        }

        log::info!("Identity {} logged in", user.id);
        self.issue_session(&user).await
    }

    /// Exchange a refresh token for a new pair. The presented token is
    /// consumed atomically, so at most one of several concurrent exchanges
    /// of the same token succeeds.
    pub async fn refresh(&self, refresh_token: &str) -> SessionResult<AuthResponse> {
        let claims = self
            .issuer
            .parse_kind(refresh_token, TokenKind::Refresh)
            .map_err(|e| {
                log::warn!("Refresh rejected: {}", e.error_code());
                SessionError::invalid_token()
            })?;

        let record = self
            .refresh_tokens
            .consume_valid(refresh_token, Utc::now())
            .await?
            .ok_or_else(|| {
                log::warn!("Refresh rejected: no live record for identity {}", claims.user_id);
                SessionError::invalid_token()
            })?;

        if record.user_id != claims.user_id {
            log::warn!(
                "Refresh rejected: record owner {} does not match claims {}",
                record.user_id,
                claims.user_id
            );
            return Err(SessionError::invalid_token());
        }

        let user = self
            .identities
            .find_by_id(claims.user_id)
            .await?
            .ok_or_else(|| {
                log::warn!("Refresh rejected: identity {} no longer exists", claims.user_id);
                SessionError::invalid_token()
            })?;

        log::info!("Identity {} refreshed its session", user.id);
        self.issue_session(&user).await
    }

    /// Delete the matching refresh record. Unknown tokens are not an error.
    pub async fn logout(&self, refresh_token: &str) -> SessionResult<()> {
        self.refresh_tokens.delete_by_token(refresh_token).await?;
        log::debug!("Logout processed");
        Ok(())
    }

    /// Verify an access token and build the request principal
    pub fn authenticate(&self, access_token: &str) -> SessionResult<Principal> {
        self.issuer
            .parse_kind(access_token, TokenKind::Access)
            .and_then(Principal::from_claims)
            .map_err(|e| {
                log::debug!("Access token rejected: {}", e.error_code());
                SessionError::invalid_token()
            })
    }

    async fn issue_session(&self, user: &User) -> SessionResult<AuthResponse> {
        let pair = self.issuer.issue_pair(user)?;

        let record = RefreshToken::issue(
            user.id,
            pair.refresh_token.clone(),
            pair.issued_at,
            self.issuer.refresh_lifetime(),
        );
        self.refresh_tokens.create(record).await?;

        Ok(AuthResponse {
            user: UserSummary::from(user),
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        })
    }
}

/// Run CPU-heavy hashing off the async workers
#[track_caller]
fn blocking<T, F>(f: F) -> impl Future<Output = SessionResult<T>>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let location = ErrorLocation::from(Location::caller());
    let handle = tokio::task::spawn_blocking(f);

    async move {
        handle.await.map_err(|e| SessionError::Internal {
            message: format!("Credential task failed: {}", e),
            location,
        })
    }
}
