use std::collections::HashMap;
use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth_core::Authenticator;
use auth_core::TokenCodec;
use auth_service::domain::user::errors::AuthError;
use auth_service::domain::user::models::NewUser;
use auth_service::domain::user::models::User;
use auth_service::domain::user::models::UserId;
use auth_service::domain::user::models::Username;
use auth_service::domain::user::ports::UserRepository;
use auth_service::domain::user::service::AuthService;
use auth_service::inbound::http::router::create_router;
use axum::Router;
use chrono::Duration;
use chrono::Utc;

pub const TEST_SECRET: &[u8] =
    b"test-secret-key-for-token-signing-at-least-64-bytes-long-for-hs512!";

/// User store backed by a mutexed map. Matches the production store's
/// contract: the insert itself enforces username uniqueness atomically.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<String, User>>,
    next_id: AtomicI64,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, AuthError> {
        let mut users = self.users.lock().unwrap();

        if users.contains_key(user.username.as_str()) {
            return Err(AuthError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let user = User {
            id: UserId(id),
            username: user.username,
            password_hash: user.password_hash,
            enabled: user.enabled,
            account_non_expired: user.account_non_expired,
            account_non_locked: user.account_non_locked,
            credentials_non_expired: user.credentials_non_expired,
            created_at: Utc::now(),
        };
        users.insert(user.username.as_str().to_string(), user.clone());

        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, AuthError> {
        Ok(self.users.lock().unwrap().get(username.as_str()).cloned())
    }
}

/// The application router wired up as in production, over an in-memory store.
pub fn spawn_app() -> (Router, Arc<TokenCodec>) {
    let codec = Arc::new(TokenCodec::new(TEST_SECRET, Duration::hours(5)));
    let repository = Arc::new(InMemoryUserRepository::default());
    let auth_service = Arc::new(AuthService::new(
        repository,
        Authenticator::new(Arc::clone(&codec)),
    ));

    (create_router(auth_service, Arc::clone(&codec)), codec)
}

/// A token signed with the test secret that is already past its expiry.
pub fn expired_token(subject: &str) -> String {
    TokenCodec::new(TEST_SECRET, Duration::seconds(-30))
        .issue(subject)
        .unwrap()
}
