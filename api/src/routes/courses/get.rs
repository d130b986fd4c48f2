use axum::extract::State;
use axum::response::Html;
use db::models::course::Model as CourseModel;
use util::state::AppState;

use crate::{error::AppError, response};

/// GET /minicursos
///
/// Renders the course listing page.
pub async fn list_courses(State(app_state): State<AppState>) -> Result<Html<String>, AppError> {
    let courses = CourseModel::get_all(app_state.db()).await?;
    Ok(response::courses_page(&courses))
}
