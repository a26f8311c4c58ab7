//! Student handlers
//!
//! Endpoints for registering students and reading or refreshing their stats.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::app::StudentWithStats;
use crate::domain::entities::{DifficultyCounts, NewStudent, Platform, PlatformStats, StudentId};
use crate::error::AppError;
use crate::AppState;

/// Request body for student submission
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    pub full_name: String,
    pub roll_number: String,
    pub email: String,
    pub department: String,
    pub year: Option<i32>,
    #[serde(default)]
    pub profile_pic: Option<String>,
    #[serde(default)]
    pub platforms: Vec<Platform>,
}

impl From<SubmitRequest> for NewStudent {
    fn from(request: SubmitRequest) -> Self {
        NewStudent {
            full_name: request.full_name.trim().to_string(),
            roll_number: request.roll_number.trim().to_string(),
            email: request.email.trim().to_string(),
            department: request.department,
            year: request.year,
            profile_pic: request.profile_pic.filter(|p| !p.trim().is_empty()),
            platforms: request.platforms,
        }
    }
}

/// Response body for student submission
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub student: StudentWithStats,
    /// Set when the student was saved but the initial stats fetch failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats_error: Option<String>,
    pub message: String,
}

/// Request body for a manual stats merge
#[derive(Debug, Deserialize)]
pub struct MergeStatsRequest {
    #[serde(default)]
    pub easy: u32,
    #[serde(default)]
    pub medium: u32,
    #[serde(default)]
    pub hard: u32,
}

/// POST /api/students/submit
///
/// Register a student and fetch their LeetCode stats.
pub async fn submit(
    State(state): State<AppState>,
    Json(request): Json<SubmitRequest>,
) -> Result<(StatusCode, Json<SubmitResponse>), AppError> {
    let registration = state.student_service.register(request.into()).await?;

    let message = match &registration.stats_error {
        None => "Profile submitted successfully!".to_string(),
        Some(_) => "Profile submitted, but stats could not be fetched yet".to_string(),
    };

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            student: StudentWithStats {
                student: registration.student,
                platform_stats: registration.stats,
            },
            stats_error: registration.stats_error,
            message,
        }),
    ))
}

/// GET /api/students
pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentWithStats>>, AppError> {
    Ok(Json(state.student_service.list().await?))
}

/// GET /api/students/:id
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<StudentWithStats>, AppError> {
    Ok(Json(state.student_service.get(&StudentId(id)).await?))
}

/// POST /api/students/:id/refresh
///
/// Fetch LeetCode stats again. Adds onto the stored totals.
pub async fn refresh_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PlatformStats>, AppError> {
    Ok(Json(state.student_service.refresh(&StudentId(id)).await?))
}

/// GET /api/students/:id/platform-stats
pub async fn get_student_stats(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PlatformStats>, AppError> {
    let student_id = StudentId(id);
    state
        .stats_service
        .get_by_student(&student_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No stats for student {}", student_id)))
}

/// POST /api/students/:id/platform-stats
///
/// Merge counts into the student's stats, creating the record if needed.
pub async fn merge_student_stats(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<MergeStatsRequest>,
) -> Result<Json<PlatformStats>, AppError> {
    let counts = DifficultyCounts::new(request.easy, request.medium, request.hard);
    Ok(Json(
        state
            .stats_service
            .merge_or_create(counts, &StudentId(id))
            .await?,
    ))
}
