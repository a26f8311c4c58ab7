//! Leaderboard API Server
//!
//! Tracks students' LeetCode progress for a college coding leaderboard.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{LeetCodeGraphqlClient, PostgresPlatformStatsRepository, PostgresStudentRepository};
use app::{PlatformStatsService, StudentService};
use config::Config;

type Stats = PlatformStatsService<
    PostgresStudentRepository,
    PostgresPlatformStatsRepository,
    LeetCodeGraphqlClient,
>;
type Students = StudentService<
    PostgresStudentRepository,
    PostgresPlatformStatsRepository,
    LeetCodeGraphqlClient,
>;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub student_service: Arc<Students>,
    pub stats_service: Arc<Stats>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,leaderboard_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting leaderboard API...");

    let config = Config::from_env()?;

    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Adapters
    let student_repo = Arc::new(PostgresStudentRepository::new(db.clone()));
    let stats_repo = Arc::new(PostgresPlatformStatsRepository::new(db));
    let leetcode = Arc::new(
        LeetCodeGraphqlClient::new(config.leetcode_graphql_url.clone(), config.leetcode_timeout)
            .context("Failed to build LeetCode client")?,
    );
    tracing::info!(
        endpoint = %config.leetcode_graphql_url,
        weights = ?config.score_weights,
        "LeetCode client ready"
    );

    // Services
    let stats_service = Arc::new(PlatformStatsService::new(
        student_repo.clone(),
        stats_repo,
        leetcode,
        Arc::new(config.score_weights),
    ));
    let student_service = Arc::new(StudentService::new(student_repo, stats_service.clone()));

    let state = AppState {
        student_service,
        stats_service,
    };

    // Routes that reach LeetCode: 2 req/sec sustained, burst of 5 per peer IP
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
            .context("Failed to build governor config")?,
    );

    let rate_limited_routes = Router::new()
        .route("/students/submit", post(handlers::submit))
        .route("/students/:id/refresh", post(handlers::refresh_student))
        .layer(GovernorLayer {
            config: governor_config,
        });

    let api = Router::new()
        .route("/students", get(handlers::list_students))
        .route("/students/:id", get(handlers::get_student))
        .route(
            "/students/:id/platform-stats",
            get(handlers::get_student_stats).post(handlers::merge_student_stats),
        )
        .route("/platform-stats", get(handlers::list_platform_stats))
        .route("/platform-stats/:id", get(handlers::get_platform_stats))
        .merge(rate_limited_routes);

    let app = Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
