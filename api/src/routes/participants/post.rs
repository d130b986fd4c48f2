use axum::extract::State;
use axum::response::Redirect;
use axum::Form;
use db::models::course::Model as CourseModel;
use db::models::participant::Model as ParticipantModel;
use util::state::AppState;

use crate::error::AppError;
use crate::routes::participants::common::{ParticipantForm, parse_i32, parse_i64};

/// POST /adicionar_participante
///
/// Registers a participant to an existing course and redirects back to the
/// listing. The referenced course must exist; nothing is written otherwise.
pub async fn create_participant(
    State(app_state): State<AppState>,
    Form(req): Form<ParticipantForm>,
) -> Result<Redirect, AppError> {
    let db = app_state.db();

    let age = parse_i32(&req.age, "age")?;
    let course_id = parse_i64(&req.minicurso_id, "minicurso_id")?;

    if CourseModel::get_by_id(db, course_id).await?.is_none() {
        return Err(AppError::CourseNotFound);
    }

    let participant = ParticipantModel::create(db, &req.name, age, &req.phone, course_id).await?;
    tracing::info!(participant_id = participant.id, course_id, "participant created");

    Ok(Redirect::to("/participantes"))
}
