use axum::extract::State;
use axum::response::Html;
use db::models::course::Model as CourseModel;
use db::models::participant::Model as ParticipantModel;
use util::state::AppState;

use crate::{error::AppError, response};

/// GET /participantes
///
/// Renders the participant listing. Courses are fetched alongside so the
/// page can show course titles and fill the course selectors.
pub async fn list_participants(
    State(app_state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let db = app_state.db();

    let participants = ParticipantModel::get_all(db).await?;
    let courses = CourseModel::get_all(db).await?;

    Ok(response::participants_page(&participants, &courses))
}
