use std::sync::Arc;

use time::OffsetDateTime;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::auth::error::AuthError;
use crate::auth::jwt::{TokenIssuer, TOKEN_TTL};
use crate::auth::model::{Credential, ProfileView, RegistrationRequest, UserAccount};
use crate::auth::password::PasswordHasher;
use crate::auth::store::UserStore;

/// Orchestrates registration, login, logout, session resolution and
/// profile projection over the store, hasher and issuer collaborators.
///
/// Holds no locks of its own; concurrent logins for the same account race
/// last-writer-wins on `current_token`, with atomicity left to the store.
pub struct AccountAuthService {
    store: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
    issuer: Arc<dyn TokenIssuer>,
}

impl AccountAuthService {
    pub fn new(
        store: Arc<dyn UserStore>,
        hasher: Arc<dyn PasswordHasher>,
        issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            store,
            hasher,
            issuer,
        }
    }

    /// Create a new account with a hashed password. No token is issued.
    #[instrument(skip(self, request))]
    pub async fn register(&self, request: RegistrationRequest) -> Result<UserAccount, AuthError> {
        if self.store.exists_by_email(&request.email).await? {
            warn!(email = %request.email, "email already registered");
            return Err(AuthError::DuplicateUser);
        }

        let password_hash = self.hasher.hash(&request.password)?;
        let account = UserAccount {
            id: Uuid::new_v4(),
            email: request.email,
            password_hash,
            current_token: None,
            created_at: OffsetDateTime::now_utc(),
        };
        self.store.save(&account).await?;

        info!(user_id = %account.id, email = %account.email, "user registered");
        Ok(account)
    }

    /// Verify the credential and issue a fresh session token. The new token
    /// replaces any previously stored one, so at most one session per
    /// account is ever live.
    #[instrument(skip(self, credential))]
    pub async fn login(&self, credential: Credential) -> Result<String, AuthError> {
        let mut account = self.find_by_email(&credential.email).await?;

        if !self
            .hasher
            .verify(&credential.password, &account.password_hash)?
        {
            warn!(email = %account.email, "login with incorrect password");
            return Err(AuthError::InvalidPassword);
        }

        let token = self
            .issuer
            .sign(&account.email, OffsetDateTime::now_utc() + TOKEN_TTL)?;
        account.current_token = Some(token.clone());
        self.store.save(&account).await?;

        info!(user_id = %account.id, email = %account.email, "user logged in");
        Ok(token)
    }

    /// Clear the live session token. A no-op success if the account is
    /// already logged out.
    #[instrument(skip(self, account))]
    pub async fn logout(&self, account: &mut UserAccount) -> Result<(), AuthError> {
        account.current_token = None;
        self.store.save(account).await?;
        info!(user_id = %account.id, "user logged out");
        Ok(())
    }

    /// Per-request session check: the presented token must equal the stored
    /// `current_token` exactly. Signature verification happens upstream when
    /// the token is parsed; this only enforces that the presented token is
    /// the latest one issued.
    #[instrument(skip(self, token))]
    pub async fn resolve_session(
        &self,
        email: &str,
        token: &str,
    ) -> Result<UserAccount, AuthError> {
        let account = self.find_by_email(email).await?;
        match &account.current_token {
            Some(current) if current == token => Ok(account),
            _ => {
                warn!(email = %account.email, "presented token is not the live session");
                Err(AuthError::InvalidToken)
            }
        }
    }

    /// Project the non-sensitive account fields.
    pub fn profile(&self, account: &UserAccount) -> ProfileView {
        ProfileView {
            id: account.id,
            email: account.email.clone(),
            created_at: account.created_at,
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<UserAccount, AuthError> {
        match self.store.find_by_email(email).await? {
            Some(account) => Ok(account),
            None => {
                warn!(email = %email, "unknown user");
                Err(AuthError::UserNotFound)
            }
        }
    }
}
