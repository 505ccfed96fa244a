use std::sync::Arc;
use std::time::Duration;

use auth_core::TokenCodec;
use axum::body::Body;
use axum::extract::FromRef;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::check_auth::check_auth;
use super::handlers::sign_in::sign_in;
use super::handlers::sign_up::sign_up;
use super::middleware::authenticate;
use super::middleware::require_authenticated;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::service::AuthService;

pub struct AppState<R>
where
    R: UserRepository,
{
    pub auth_service: Arc<AuthService<R>>,
    pub codec: Arc<TokenCodec>,
}

impl<R: UserRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            auth_service: Arc::clone(&self.auth_service),
            codec: Arc::clone(&self.codec),
        }
    }
}

// The bearer-token filter depends on the codec alone.
impl<R: UserRepository> FromRef<AppState<R>> for Arc<TokenCodec> {
    fn from_ref(state: &AppState<R>) -> Self {
        Arc::clone(&state.codec)
    }
}

pub fn create_router<R: UserRepository>(
    auth_service: Arc<AuthService<R>>,
    codec: Arc<TokenCodec>,
) -> Router {
    let state = AppState {
        auth_service,
        codec,
    };

    let public_routes = Router::new()
        .route("/auth/sign-up", post(sign_up::<R>))
        .route("/auth/sign-in", post(sign_in::<R>));

    let protected_routes = Router::new()
        .route("/auth", get(check_auth))
        .route_layer(middleware::from_fn(require_authenticated));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(middleware::from_fn_with_state(state.clone(), authenticate))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
