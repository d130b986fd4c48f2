use axum::extract::{Path, State};
use axum::response::Redirect;
use db::models::course::Model as CourseModel;
use util::state::AppState;

use crate::error::AppError;

/// POST /remover_minicurso/{id}
///
/// Deletes the course and every participant registered to it, then redirects
/// to the listing. Removing an unknown id is a silent no-op.
pub async fn remove_course(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    CourseModel::delete_cascade(app_state.db(), id).await?;
    tracing::info!(course_id = id, "course removed");

    Ok(Redirect::to("/minicursos"))
}
