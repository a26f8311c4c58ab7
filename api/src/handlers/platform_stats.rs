//! Platform stats handlers
//!
//! Read-only access to stored stats records.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::domain::entities::{PlatformStats, PlatformStatsId};
use crate::error::AppError;
use crate::AppState;

/// GET /api/platform-stats
pub async fn list_platform_stats(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlatformStats>>, AppError> {
    Ok(Json(state.stats_service.list_all().await?))
}

/// GET /api/platform-stats/:id
pub async fn get_platform_stats(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PlatformStats>, AppError> {
    Ok(Json(
        state.stats_service.get_by_id(&PlatformStatsId(id)).await?,
    ))
}
