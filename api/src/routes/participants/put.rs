use axum::extract::State;
use axum::response::Redirect;
use axum::Form;
use db::models::participant::Model as ParticipantModel;
use util::state::AppState;

use crate::error::AppError;
use crate::routes::participants::common::{UpdateParticipantForm, parse_i32, parse_i64};

/// POST /alterar_participante
///
/// Overwrites every field of an existing participant and redirects to the
/// listing. Only the participant id is checked for existence; the new
/// course id is accepted as-is, unlike creation, which matches the published
/// behavior of these pages.
pub async fn edit_participant(
    State(app_state): State<AppState>,
    Form(req): Form<UpdateParticipantForm>,
) -> Result<Redirect, AppError> {
    let db = app_state.db();

    let participant_id = parse_i64(&req.participant_id, "participant_id")?;
    let age = parse_i32(&req.age, "age")?;
    let course_id = parse_i64(&req.minicurso_id, "minicurso_id")?;

    if ParticipantModel::get_by_id(db, participant_id).await?.is_none() {
        return Err(AppError::ParticipantNotFound);
    }

    ParticipantModel::update(db, participant_id, &req.name, age, &req.phone, course_id).await?;
    tracing::info!(participant_id, "participant updated");

    Ok(Redirect::to("/participantes"))
}
