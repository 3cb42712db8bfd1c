use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::{handlers, system};

/// Configuration of all application routes
pub fn configure_routes() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM AUTH ROUTES (PUBLIC)
        // ========================================
        .route(
            "/api/system/auth/login",
            post(system::handlers::auth::login),
        )
        .route(
            "/api/system/auth/register",
            post(system::handlers::auth::register),
        )
        .route(
            "/api/system/auth/refresh",
            post(system::handlers::auth::refresh),
        )
        .route(
            "/api/system/auth/logout",
            post(system::handlers::auth::logout),
        )
        // System auth routes (protected)
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_user)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        // ========================================
        // BUSINESS ROUTES (all require a signed-in user)
        // ========================================
        // A001 Project handlers
        .route(
            "/api/project",
            get(handlers::a001_project::list_my).post(handlers::a001_project::create)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        // A002 Dataset handlers
        .route(
            "/api/dataset/upload",
            post(handlers::a002_dataset::upload)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        .route(
            "/api/dataset/template",
            post(handlers::a002_dataset::from_template)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        .route(
            "/api/dataset/by-project/:project_id",
            get(handlers::a002_dataset::list_by_project)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        .route(
            "/api/dataset/:id",
            get(handlers::a002_dataset::get_by_id)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        // A003 Generation handlers
        .route(
            "/api/generation",
            get(handlers::a003_generation::list_my).post(handlers::a003_generation::create)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        .route(
            "/api/generation/:id",
            get(handlers::a003_generation::get_by_id)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        // D400 Dashboard summary
        .route(
            "/api/d400/summary",
            get(handlers::d400_dashboard::get_summary)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        .fallback_service(ServeDir::new("dist"))
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors)
}
