//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::routes::{
    create_alert_handler, health_handler, nearby_alerts_handler, send_verification_handler,
    verify_code_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub deps: Arc<ServerDeps>,
}

/// Build the Axum application router
///
/// The verification endpoints sit behind a per-IP rate limit; each one costs
/// a real SMS, so abuse is expensive. The feed and health endpoints are not
/// throttled.
pub fn build_app(pool: PgPool, deps: Arc<ServerDeps>) -> Router {
    let app_state = AppState {
        db_pool: pool,
        deps,
    };

    // CORS configuration - allow any origin for development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    // Rate limiting: 10 requests per second per IP with bursts up to 20
    let rate_limit_config = std::sync::Arc::new(
        GovernorConfigBuilder::default()
            .per_second(10)
            .burst_size(20)
            .use_headers() // Extract IP from X-Forwarded-For header
            .finish()
            .expect("Rate limiter configuration is valid and should never fail"),
    );

    let verification_routes = Router::new()
        .route("/send-verification", post(send_verification_handler))
        .route("/verify-code", post(verify_code_handler))
        .layer(GovernorLayer {
            config: rate_limit_config,
        });

    Router::new()
        .merge(verification_routes)
        .route("/alerts", post(create_alert_handler))
        .route("/alerts/nearby", get(nearby_alerts_handler))
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
