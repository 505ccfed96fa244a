use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::user::errors::AuthError;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password_hash: String,
    enabled: bool,
    account_non_expired: bool,
    account_non_locked: bool,
    credentials_non_expired: bool,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> Result<User, AuthError> {
        Ok(User {
            id: UserId(self.id),
            username: Username::new(self.username)?,
            password_hash: self.password_hash,
            enabled: self.enabled,
            account_non_expired: self.account_non_expired,
            account_non_locked: self.account_non_locked,
            credentials_non_expired: self.credentials_non_expired,
            created_at: self.created_at,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, AuthError> {
        // uniqueness rides on the users_username_key constraint; a lost
        // insert race surfaces here as a unique violation, never as a
        // duplicate row
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (username, password_hash, enabled, account_non_expired, account_non_locked, credentials_non_expired)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, username, password_hash, enabled, account_non_expired, account_non_locked, credentials_non_expired, created_at
            "#,
        )
        .bind(user.username.as_str())
        .bind(&user.password_hash)
        .bind(user.enabled)
        .bind(user.account_non_expired)
        .bind(user.account_non_locked)
        .bind(user.credentials_non_expired)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AuthError::UsernameAlreadyExists(user.username.as_str().to_string());
                }
            }
            AuthError::DatabaseError(e.to_string())
        })?;

        row.into_user()
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, AuthError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, password_hash, enabled, account_non_expired, account_non_locked, credentials_non_expired, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        row.map(UserRow::into_user).transpose()
    }
}
