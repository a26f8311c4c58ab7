//! PostgreSQL adapter for PlatformStatsRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, SqlErr,
};

use crate::domain::entities::{
    DifficultyCounts, NewPlatformStats, PlatformStats, PlatformStatsId, StudentId,
};
use crate::domain::ports::PlatformStatsRepository;
use crate::entity::platform_stats;
use crate::error::DomainError;

/// PostgreSQL implementation of PlatformStatsRepository
pub struct PostgresPlatformStatsRepository {
    db: DatabaseConnection,
}

impl PostgresPlatformStatsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PlatformStatsRepository for PostgresPlatformStatsRepository {
    async fn find_all(&self) -> Result<Vec<PlatformStats>, DomainError> {
        let results = platform_stats::Entity::find()
            .order_by_asc(platform_stats::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(PlatformStats::try_from).collect()
    }

    async fn find_by_id(&self, id: &PlatformStatsId) -> Result<Option<PlatformStats>, DomainError> {
        let result = platform_stats::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(PlatformStats::try_from).transpose()
    }

    async fn find_by_student(
        &self,
        student_id: &StudentId,
    ) -> Result<Option<PlatformStats>, DomainError> {
        let result = platform_stats::Entity::find()
            .filter(platform_stats::Column::StudentId.eq(student_id.0))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(PlatformStats::try_from).transpose()
    }

    async fn create(&self, stats: &NewPlatformStats) -> Result<PlatformStats, DomainError> {
        let model = platform_stats::ActiveModel {
            student_id: Set(stats.student_id.0),
            easy: Set(to_column(stats.counts.easy)?),
            medium: Set(to_column(stats.counts.medium)?),
            hard: Set(to_column(stats.counts.hard)?),
            total_score: Set(score_to_column(stats.total_score)?),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| map_write_error(e, &stats.student_id))?;

        result.try_into()
    }

    async fn update(&self, stats: &PlatformStats) -> Result<PlatformStats, DomainError> {
        let result = platform_stats::ActiveModel {
            id: Set(stats.id.0),
            easy: Set(to_column(stats.counts.easy)?),
            medium: Set(to_column(stats.counts.medium)?),
            hard: Set(to_column(stats.counts.hard)?),
            total_score: Set(score_to_column(stats.total_score)?),
            updated_at: Set(stats.updated_at.fixed_offset()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated => {
                DomainError::NotFound(format!("PlatformStats {} not found", stats.id))
            }
            e => DomainError::Database(e.to_string()),
        })?;

        result.try_into()
    }
}

/// A second insert for the same student hits the unique index
fn map_write_error(e: DbErr, student_id: &StudentId) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => DomainError::AlreadyExists(format!(
            "Stats for student {} already exist",
            student_id
        )),
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            DomainError::NotFound(format!("Student {} not found", student_id))
        }
        _ => DomainError::Database(e.to_string()),
    }
}

fn to_column(count: u32) -> Result<i32, DomainError> {
    i32::try_from(count)
        .map_err(|_| DomainError::Validation(format!("Count {} does not fit in storage", count)))
}

fn score_to_column(score: u64) -> Result<i64, DomainError> {
    i64::try_from(score)
        .map_err(|_| DomainError::Validation(format!("Score {} does not fit in storage", score)))
}

fn from_column(value: i32, column: &str, id: i64) -> Result<u32, DomainError> {
    u32::try_from(value).map_err(|_| {
        DomainError::Internal(format!(
            "Negative {} ({}) stored for platform stats {}",
            column, value, id
        ))
    })
}

/// Convert SeaORM model to domain entity
impl TryFrom<platform_stats::Model> for PlatformStats {
    type Error = DomainError;

    fn try_from(model: platform_stats::Model) -> Result<Self, Self::Error> {
        let counts = DifficultyCounts {
            easy: from_column(model.easy, "easy", model.id)?,
            medium: from_column(model.medium, "medium", model.id)?,
            hard: from_column(model.hard, "hard", model.id)?,
        };
        let total_score = u64::try_from(model.total_score).map_err(|_| {
            DomainError::Internal(format!(
                "Negative total_score stored for platform stats {}",
                model.id
            ))
        })?;

        Ok(PlatformStats {
            id: PlatformStatsId(model.id),
            student_id: StudentId(model.student_id),
            counts,
            total_score,
            updated_at: model.updated_at.with_timezone(&Utc),
        })
    }
}
