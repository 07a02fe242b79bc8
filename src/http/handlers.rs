//! Route handlers for `/students`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::info;

use super::error::ApiError;
use crate::store::StudentStore;
use crate::student::{Student, StudentInput};

/// Body returned by create, update and delete.
#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub message: &'static str,
    pub student: Student,
}

impl StudentResponse {
    fn json(message: &'static str, student: Student) -> Json<Self> {
        Json(Self { message, student })
    }
}

/// `GET /students`
pub async fn list_students(
    State(store): State<StudentStore>,
) -> Result<Json<Vec<Student>>, ApiError> {
    Ok(Json(store.list()?))
}

/// `POST /students`
pub async fn create_student(
    State(store): State<StudentStore>,
    Json(input): Json<StudentInput>,
) -> Result<(StatusCode, Json<StudentResponse>), ApiError> {
    let student = store.create(input)?;
    info!(id = %student.id, "student added");
    Ok((
        StatusCode::CREATED,
        StudentResponse::json("Student added", student),
    ))
}

/// `PUT /students/:id`
pub async fn update_student(
    State(store): State<StudentStore>,
    Path(id): Path<String>,
    Json(input): Json<StudentInput>,
) -> Result<Json<StudentResponse>, ApiError> {
    let student = store.update(&id, input)?;
    info!(id = %student.id, "student updated");
    Ok(StudentResponse::json("Student updated", student))
}

/// `DELETE /students/:id`
pub async fn delete_student(
    State(store): State<StudentStore>,
    Path(id): Path<String>,
) -> Result<Json<StudentResponse>, ApiError> {
    let student = store.delete(&id)?;
    info!(id = %student.id, "student deleted");
    Ok(StudentResponse::json("Student deleted", student))
}
