use async_trait::async_trait;

use crate::domain::user::errors::AuthError;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;

/// Port for the authentication flows.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user and issue the first token for it.
    ///
    /// # Returns
    /// Signed bearer token for the new username
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - the username is taken
    /// * `DatabaseError` - store operation failed
    async fn sign_up(&self, username: Username, password: String) -> Result<String, AuthError>;

    /// Verify credentials and issue a token for the verified username.
    ///
    /// # Errors
    /// * `InvalidCredentials` - unknown username, wrong password, or inactive account
    /// * `DatabaseError` - store operation failed
    async fn sign_in(&self, username: Username, password: String) -> Result<String, AuthError>;
}

/// Persistence operations for user records.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// Username uniqueness is enforced atomically by the store itself; a
    /// conflicting insert surfaces as `UsernameAlreadyExists`, never as a
    /// partially applied write.
    ///
    /// # Returns
    /// The created user with its store-assigned identifier
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - the username is taken
    /// * `DatabaseError` - store operation failed
    async fn create(&self, user: NewUser) -> Result<User, AuthError>;

    /// Retrieve a user by username.
    ///
    /// # Returns
    /// Optional user record (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - store operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, AuthError>;
}
