use crate::DbError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgPool;
use sqlx::FromRow;

/// A row from the `mst_student` table.
///
/// The `id` is caller-supplied, never generated; uniqueness is enforced only
/// by the table's constraint, not by application logic.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub address: String,
    pub birth_date: DateTime<Utc>,
    pub gender: String,
}

/// The storage contract the handler layer depends on.
///
/// This trait is the seam between the web server and the database, allowing
/// the underlying implementation (live repository or in-memory substitute)
/// to be swapped out.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Fetches every student row, in storage iteration order.
    async fn list(&self) -> Result<Vec<Student>, DbError>;

    /// Fetches the single student with the given id.
    ///
    /// Returns [`DbError::NotFound`] when no row matches; any other failure
    /// is a [`DbError::QueryError`].
    async fn get(&self, id: i32) -> Result<Student, DbError>;

    /// Inserts a full record, including the caller-supplied id.
    async fn insert(&self, student: &Student) -> Result<(), DbError>;

    /// Replaces every non-id column of the row with the given id.
    async fn update(&self, id: i32, student: &Student) -> Result<(), DbError>;

    /// Deletes the row with the given id.
    async fn delete(&self, id: i32) -> Result<(), DbError>;
}

/// The PostgreSQL-backed implementation of [`StudentStore`]. It encapsulates
/// all SQL queries and holds the shared connection pool.
#[derive(Debug, Clone)]
pub struct StudentRepository {
    pool: PgPool,
}

impl StudentRepository {
    /// Creates a new `StudentRepository` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentStore for StudentRepository {
    async fn list(&self) -> Result<Vec<Student>, DbError> {
        // No ORDER BY: callers see storage iteration order.
        let students = sqlx::query_as::<_, Student>(
            "SELECT id, name, email, address, birth_date, gender FROM mst_student",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(students)
    }

    async fn get(&self, id: i32) -> Result<Student, DbError> {
        let student = sqlx::query_as::<_, Student>(
            "SELECT id, name, email, address, birth_date, gender FROM mst_student WHERE id = $1",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::RowNotFound = e {
                DbError::NotFound
            } else {
                e.into()
            }
        })?;

        Ok(student)
    }

    async fn insert(&self, student: &Student) -> Result<(), DbError> {
        // No duplicate-id pre-check: a unique-constraint violation surfaces
        // as a query error from the driver.
        sqlx::query(
            "INSERT INTO mst_student (id, name, email, address, birth_date, gender) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(student.id)
        .bind(&student.name)
        .bind(&student.email)
        .bind(&student.address)
        .bind(student.birth_date)
        .bind(&student.gender)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, id: i32, student: &Student) -> Result<(), DbError> {
        // The affected-row count is deliberately ignored: updating an id
        // that does not exist succeeds without touching storage.
        sqlx::query(
            "UPDATE mst_student SET name = $2, email = $3, address = $4, \
             birth_date = $5, gender = $6 WHERE id = $1",
        )
        .bind(id)
        .bind(&student.name)
        .bind(&student.email)
        .bind(&student.address)
        .bind(student.birth_date)
        .bind(&student.gender)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), DbError> {
        // Idempotent for the same reason: no affected-row check.
        sqlx::query("DELETE FROM mst_student WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
