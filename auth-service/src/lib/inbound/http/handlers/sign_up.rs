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

/// Registration endpoint: creates the user and returns its first token.
pub async fn sign_up<R: UserRepository>(
    State(state): State<AppState<R>>,
    Json(body): Json<AuthRequestBody>,
) -> Result<ApiSuccess<AuthResponseData>, ApiError> {
    let username = Username::new(body.username)?;

    let token = state.auth_service.sign_up(username, body.password).await?;

    Ok(ApiSuccess::new(StatusCode::OK, AuthResponseData { token }))
}
