use crate::{error::AppError, AppState};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use database::Student;
use serde::Deserialize;
use std::sync::Arc;

/// The PUT request body. Unlike Create, any field may be omitted; absent
/// fields fall back to their zero values, which are written to storage and
/// echoed back. The `id` field, if present, is ignored for the lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentUpdate {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default = "zero_birth_date")]
    pub birth_date: DateTime<Utc>,
    #[serde(default)]
    pub gender: String,
}

// The zero value for an omitted birth_date.
fn zero_birth_date() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}

impl From<StudentUpdate> for Student {
    fn from(update: StudentUpdate) -> Self {
        Student {
            id: update.id,
            name: update.name,
            email: update.email,
            address: update.address,
            birth_date: update.birth_date,
            gender: update.gender,
        }
    }
}

/// # GET /students
/// Fetches every student as a JSON array. An empty table yields `[]`.
pub async fn list_students(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Student>>, AppError> {
    let students = state.store.list().await?;
    Ok(Json(students))
}

/// # GET /students/:id
pub async fn get_student(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Student>, AppError> {
    let id = parse_id(&id)?;
    let student = state.store.get(id).await?;
    Ok(Json(student))
}

/// # POST /students
/// Inserts a full record, including the caller-supplied id, and echoes the
/// input back. The response is never re-fetched from storage.
pub async fn create_student(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Student>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(student) = payload.map_err(bad_request)?;
    state.store.insert(&student).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// # PUT /students/:id
/// Replaces all non-id fields of the row named by the path. The body may be
/// partial; omitted fields take their zero values. The body's own `id`
/// field is ignored for the lookup but echoed back. An id with no matching
/// row succeeds silently.
pub async fn update_student(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    payload: Result<Json<StudentUpdate>, JsonRejection>,
) -> Result<Json<Student>, AppError> {
    let id = parse_id(&id)?;
    let Json(update) = payload.map_err(bad_request)?;
    let student = Student::from(update);
    state.store.update(id, &student).await?;
    Ok(Json(student))
}

/// # DELETE /students/:id
/// Deletes the row if present. Repeated deletes of the same id all succeed.
pub async fn delete_student(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// Path ids are parsed by hand so a bad segment reports "Invalid ID" before
// any storage access.
fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.parse().map_err(|_| AppError::InvalidId)
}

fn bad_request(rejection: JsonRejection) -> AppError {
    AppError::BadRequest(rejection.body_text())
}
