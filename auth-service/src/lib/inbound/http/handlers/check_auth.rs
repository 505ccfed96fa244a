use axum::Extension;

use crate::inbound::http::middleware::AuthenticatedUser;

/// Probe endpoint for checking that a bearer token authenticates.
///
/// Reachable only through [`require_authenticated`], so the identity
/// extension is always present here.
///
/// [`require_authenticated`]: crate::inbound::http::middleware::require_authenticated
pub async fn check_auth(Extension(user): Extension<AuthenticatedUser>) -> &'static str {
    tracing::debug!(username = %user.username, "token check passed");
    "authenticated successfully"
}
