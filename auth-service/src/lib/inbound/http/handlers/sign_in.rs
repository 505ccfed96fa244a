use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ApiError;
use super::ApiSuccess;
use super::AuthRequestBody;
use super::AuthResponseData;
use crate::domain::user::models::Username;
use crate::domain::user::ports::AuthServicePort;
use crate::domain::user::ports::UserRepository;
use crate::inbound::http::router::AppState;

/// Sign-in endpoint: verifies credentials and returns a fresh token.
pub async fn sign_in<R: UserRepository>(
    State(state): State<AppState<R>>,
    Json(body): Json<AuthRequestBody>,
) -> Result<ApiSuccess<AuthResponseData>, ApiError> {
    // a username that cannot exist is indistinguishable from bad credentials
    let username = Username::new(body.username)
        .map_err(|_| ApiError::Unauthorized("invalid credentials".to_string()))?;

    let token = state.auth_service.sign_in(username, body.password).await?;

    Ok(ApiSuccess::new(StatusCode::OK, AuthResponseData { token }))
}
