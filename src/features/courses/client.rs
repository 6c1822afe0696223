//! Client for the course persistence API. Calls are best-effort: the pages
//! mutate their local list first and only surface the remote outcome as a
//! notification. The API takes no auth header and offers no pagination.

use crate::{
    app_lib::{AppError, delete_json, get_json, post_json},
    features::courses::types::Course,
};
use serde::Serialize;

#[derive(Serialize)]
struct DeleteCourseRequest {
    id: u32,
}

/// Fetches the persisted course list.
pub async fn fetch_courses() -> Result<Vec<Course>, AppError> {
    get_json("/api/course").await
}

/// Upserts a course; the body's `id` decides between insert and update.
pub async fn save_course(course: &Course) -> Result<(), AppError> {
    post_json("/api/addEditCourse", course).await
}

/// Deletes a course by id.
pub async fn delete_course(id: u32) -> Result<(), AppError> {
    delete_json("/api/addEditCourse", &DeleteCourseRequest { id }).await
}
