//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use crate::domain::entities::{
    NewPlatformStats, NewStudent, PlatformStats, PlatformStatsId, Student, StudentId,
    SubmissionCount,
};
use crate::domain::ports::{LeetCodeClient, PlatformStatsRepository, StudentRepository};
use crate::error::{DomainError, LeetCodeError};

// ============================================================================
// In-Memory Student Repository
// ============================================================================

pub struct InMemoryStudentRepository {
    students: Arc<RwLock<HashMap<StudentId, Student>>>,
    next_id: AtomicI64,
}

impl Default for InMemoryStudentRepository {
    fn default() -> Self {
        Self {
            students: Arc::default(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a student for testing
    pub fn with_student(self, student: Student) -> Self {
        self.next_id.fetch_max(student.id.0 + 1, Ordering::SeqCst);
        self.students.write().unwrap().insert(student.id, student);
        self
    }

    pub fn len(&self) -> usize {
        self.students.read().unwrap().len()
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn find_by_id(&self, id: &StudentId) -> Result<Option<Student>, DomainError> {
        let students = self.students.read().unwrap();
        Ok(students.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, DomainError> {
        let students = self.students.read().unwrap();
        Ok(students.values().find(|s| s.email == email).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Student>, DomainError> {
        let students = self.students.read().unwrap();
        let mut all: Vec<_> = students.values().cloned().collect();
        all.sort_by_key(|s| s.id.0);
        Ok(all)
    }

    async fn create(&self, new_student: &NewStudent) -> Result<Student, DomainError> {
        let student = Student {
            id: StudentId(self.next_id.fetch_add(1, Ordering::SeqCst)),
            full_name: new_student.full_name.clone(),
            roll_number: new_student.roll_number.clone(),
            email: new_student.email.clone(),
            department: new_student.department.clone(),
            year: new_student.year,
            profile_pic: new_student.profile_pic.clone(),
            platforms: new_student.platforms.clone(),
            created_at: Utc::now(),
        };

        let mut students = self.students.write().unwrap();
        students.insert(student.id, student.clone());
        Ok(student)
    }
}

// ============================================================================
// In-Memory PlatformStats Repository
// ============================================================================

pub struct InMemoryPlatformStatsRepository {
    stats: Arc<RwLock<HashMap<PlatformStatsId, PlatformStats>>>,
    next_id: AtomicI64,
    writes: AtomicUsize,
    fail_writes: bool,
}

impl Default for InMemoryPlatformStatsRepository {
    fn default() -> Self {
        Self {
            stats: Arc::default(),
            next_id: AtomicI64::new(1),
            writes: AtomicUsize::new(0),
            fail_writes: false,
        }
    }
}

impl InMemoryPlatformStatsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository whose inserts and updates fail with a database error
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a stats record for testing
    pub fn with_stats(self, stats: PlatformStats) -> Self {
        self.next_id.fetch_max(stats.id.0 + 1, Ordering::SeqCst);
        self.stats.write().unwrap().insert(stats.id, stats);
        self
    }

    /// Number of inserts plus updates performed
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.stats.read().unwrap().len()
    }

    fn record_write(&self) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::Database("connection reset".to_string()));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl PlatformStatsRepository for InMemoryPlatformStatsRepository {
    async fn find_all(&self) -> Result<Vec<PlatformStats>, DomainError> {
        let stats = self.stats.read().unwrap();
        let mut all: Vec<_> = stats.values().cloned().collect();
        all.sort_by_key(|s| s.id.0);
        Ok(all)
    }

    async fn find_by_id(&self, id: &PlatformStatsId) -> Result<Option<PlatformStats>, DomainError> {
        let stats = self.stats.read().unwrap();
        Ok(stats.get(id).cloned())
    }

    async fn find_by_student(
        &self,
        student_id: &StudentId,
    ) -> Result<Option<PlatformStats>, DomainError> {
        let found = {
            let stats = self.stats.read().unwrap();
            stats.values().find(|s| s.student_id == *student_id).cloned()
        };
        // Give concurrent merges a chance to interleave between read and write
        tokio::task::yield_now().await;
        Ok(found)
    }

    async fn create(&self, new_stats: &NewPlatformStats) -> Result<PlatformStats, DomainError> {
        self.record_write()?;

        let mut stats = self.stats.write().unwrap();
        if stats.values().any(|s| s.student_id == new_stats.student_id) {
            return Err(DomainError::AlreadyExists(format!(
                "Stats for student {} already exist",
                new_stats.student_id
            )));
        }

        let record = PlatformStats {
            id: PlatformStatsId(self.next_id.fetch_add(1, Ordering::SeqCst)),
            student_id: new_stats.student_id,
            counts: new_stats.counts,
            total_score: new_stats.total_score,
            updated_at: Utc::now(),
        };
        stats.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update(&self, record: &PlatformStats) -> Result<PlatformStats, DomainError> {
        self.record_write()?;

        let mut stats = self.stats.write().unwrap();
        match stats.get_mut(&record.id) {
            Some(existing) => {
                *existing = record.clone();
                Ok(existing.clone())
            }
            None => Err(DomainError::NotFound(format!(
                "PlatformStats {} not found",
                record.id
            ))),
        }
    }
}

// ============================================================================
// Mock LeetCode Client
// ============================================================================

/// What the mock client answers with
#[derive(Debug, Clone)]
pub enum MockLeetCodeResponse {
    Submissions(Vec<SubmissionCount>),
    MissingData,
    UserStatsMissing,
    RateLimited,
}

pub struct MockLeetCodeClient {
    response: MockLeetCodeResponse,
    calls: AtomicUsize,
    usernames: Mutex<Vec<String>>,
}

impl MockLeetCodeClient {
    pub fn new(response: MockLeetCodeResponse) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
            usernames: Mutex::new(Vec::new()),
        }
    }

    /// Client answering with the given entries
    pub fn with_submissions(entries: Vec<SubmissionCount>) -> Self {
        Self::new(MockLeetCodeResponse::Submissions(entries))
    }

    /// Client answering with a body lacking `data`
    pub fn missing_data() -> Self {
        Self::new(MockLeetCodeResponse::MissingData)
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Usernames requested so far, in order
    pub fn requested_usernames(&self) -> Vec<String> {
        self.usernames.lock().unwrap().clone()
    }
}

#[async_trait]
impl LeetCodeClient for MockLeetCodeClient {
    async fn accepted_submissions(
        &self,
        username: &str,
    ) -> Result<Vec<SubmissionCount>, LeetCodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.usernames.lock().unwrap().push(username.to_string());

        let username = username.to_string();
        match &self.response {
            MockLeetCodeResponse::Submissions(entries) => Ok(entries.clone()),
            MockLeetCodeResponse::MissingData => Err(LeetCodeError::MissingData { username }),
            MockLeetCodeResponse::UserStatsMissing => {
                Err(LeetCodeError::UserStatsMissing { username })
            }
            MockLeetCodeResponse::RateLimited => Err(LeetCodeError::RateLimited),
        }
    }
}
