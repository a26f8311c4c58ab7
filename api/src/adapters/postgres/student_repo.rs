//! PostgreSQL adapter for StudentRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::entities::{NewStudent, Platform, Student, StudentId};
use crate::domain::ports::StudentRepository;
use crate::entity::students;
use crate::error::DomainError;

/// PostgreSQL implementation of StudentRepository
pub struct PostgresStudentRepository {
    db: DatabaseConnection,
}

impl PostgresStudentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StudentRepository for PostgresStudentRepository {
    async fn find_by_id(&self, id: &StudentId) -> Result<Option<Student>, DomainError> {
        let result = students::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(Student::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, DomainError> {
        let result = students::Entity::find()
            .filter(students::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(Student::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Student>, DomainError> {
        let results = students::Entity::find()
            .order_by_asc(students::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(Student::try_from).collect()
    }

    async fn create(&self, student: &NewStudent) -> Result<Student, DomainError> {
        let platforms = serde_json::to_value(&student.platforms)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let model = students::ActiveModel {
            full_name: Set(student.full_name.clone()),
            roll_number: Set(student.roll_number.clone()),
            email: Set(student.email.clone()),
            department: Set(student.department.clone()),
            year: Set(student.year),
            profile_pic: Set(student.profile_pic.clone()),
            platforms: Set(platforms),
            created_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            if matches!(e.sql_err(), Some(sea_orm::SqlErr::UniqueConstraintViolation(_))) {
                DomainError::AlreadyExists(format!(
                    "Student with email '{}' already exists",
                    student.email
                ))
            } else {
                DomainError::Database(e.to_string())
            }
        })?;

        result.try_into()
    }
}

/// Convert SeaORM model to domain entity
impl TryFrom<students::Model> for Student {
    type Error = DomainError;

    fn try_from(model: students::Model) -> Result<Self, Self::Error> {
        let platforms: Vec<Platform> = serde_json::from_value(model.platforms).map_err(|e| {
            DomainError::Internal(format!("Corrupt platforms for student {}: {}", model.id, e))
        })?;

        Ok(Student {
            id: StudentId(model.id),
            full_name: model.full_name,
            roll_number: model.roll_number,
            email: model.email,
            department: model.department,
            year: model.year,
            profile_pic: model.profile_pic,
            platforms,
            created_at: model.created_at.with_timezone(&Utc),
        })
    }
}
