use std::sync::Arc;

use auth_core::TokenCodec;
use auth_core::TokenError;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use super::handlers::ApiError;

/// Identity established by the bearer-token filter, stored in request
/// extensions for the remainder of request handling. No authorities exist;
/// the username is the whole identity.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub username: String,
}

/// Bearer-token filter that runs ahead of every route.
///
/// Establishes an [`AuthenticatedUser`] when the request carries a valid
/// token and otherwise lets the request continue unauthenticated. An
/// expired token and an unverifiable one get the same treatment, just
/// different log levels. Rejecting anonymous requests is the job of
/// [`require_authenticated`] on the routes that need it.
pub async fn authenticate(
    State(codec): State<Arc<TokenCodec>>,
    mut req: Request,
    next: Next,
) -> Response {
    if let Some(token) = bearer_token(&req) {
        match codec.extract_subject(token) {
            Ok(subject) => {
                req.extensions_mut()
                    .insert(AuthenticatedUser { username: subject });
            }
            Err(TokenError::Expired) => {
                tracing::debug!("request carried an expired token");
            }
            Err(e) => {
                tracing::warn!(error = %e, "request carried an unverifiable token");
            }
        }
    }

    next.run(req).await
}

/// Rejects requests that reached a protected route without an identity.
pub async fn require_authenticated(req: Request, next: Next) -> Result<Response, ApiError> {
    if req.extensions().get::<AuthenticatedUser>().is_none() {
        return Err(ApiError::Unauthorized("authentication required".to_string()));
    }

    Ok(next.run(req).await)
}

/// The token part of an `Authorization: Bearer <token>` header.
///
/// The scheme match is exact: a missing header, a different scheme, or
/// `Bearer` without its trailing space all yield `None`.
fn bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    value.strip_prefix("Bearer ")
}
