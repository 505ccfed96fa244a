use std::sync::Arc;

use async_trait::async_trait;
use auth_core::AuthenticationError;
use auth_core::Authenticator;

use crate::domain::user::errors::AuthError;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::Username;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Orchestrates the sign-up and sign-in flows.
///
/// Owns nothing stateful itself: user records live behind the repository
/// port, hashing and token issuance behind the [`Authenticator`].
pub struct AuthService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
    authenticator: Authenticator,
}

impl<R> AuthService<R>
where
    R: UserRepository,
{
    pub fn new(repository: Arc<R>, authenticator: Authenticator) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<R> AuthServicePort for AuthService<R>
where
    R: UserRepository,
{
    async fn sign_up(&self, username: Username, password: String) -> Result<String, AuthError> {
        let password_hash = self.authenticator.hash_password(&password)?;

        let user = self
            .repository
            .create(NewUser::new(username, password_hash))
            .await
            .map_err(|e| {
                if let AuthError::UsernameAlreadyExists(name) = &e {
                    tracing::warn!(username = %name, "sign-up for a username that already exists");
                }
                e
            })?;

        tracing::info!(username = %user.username, id = %user.id, "registered new user");

        Ok(self.authenticator.issue_token(user.username.as_str())?)
    }

    async fn sign_in(&self, username: Username, password: String) -> Result<String, AuthError> {
        let user = match self.repository.find_by_username(&username).await? {
            Some(user) => user,
            None => {
                tracing::warn!(username = %username, "sign-in for unknown username");
                return Err(AuthError::InvalidCredentials);
            }
        };

        if !user.is_active() {
            tracing::warn!(username = %username, "sign-in for inactive account");
            return Err(AuthError::InvalidCredentials);
        }

        let result = self
            .authenticator
            .authenticate(&password, &user.password_hash, user.username.as_str())
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::warn!(username = %username, "sign-in with wrong password");
                    AuthError::InvalidCredentials
                }
                AuthenticationError::Password(e) => AuthError::Password(e),
                AuthenticationError::Token(e) => AuthError::Token(e),
            })?;

        Ok(result.access_token)
    }
}
