use axum::extract::State;
use axum::response::Redirect;
use axum::Form;
use db::models::course::Model as CourseModel;
use util::state::AppState;

use crate::error::AppError;
use crate::routes::courses::common::CourseForm;

/// POST /adicionar_minicurso
///
/// Creates a course from the submitted title and redirects back to the
/// listing. A whitespace-only title and an exact (case-sensitive) title
/// collision both fail before anything is written.
pub async fn create_course(
    State(app_state): State<AppState>,
    Form(req): Form<CourseForm>,
) -> Result<Redirect, AppError> {
    let db = app_state.db();

    if req.title.trim().is_empty() {
        return Err(AppError::EmptyTitle);
    }

    if CourseModel::find_by_title(db, &req.title).await?.is_some() {
        return Err(AppError::DuplicateTitle);
    }

    let course = CourseModel::create(db, &req.title).await?;
    tracing::info!(course_id = course.id, "course created");

    Ok(Redirect::to("/minicursos"))
}
