use axum::extract::{Path, State};
use axum::response::Redirect;
use db::models::participant::Model as ParticipantModel;
use util::state::AppState;

use crate::error::AppError;

/// POST /remover_participante/{id}
///
/// Deletes a participant and redirects to the listing. Removing an unknown
/// id is a silent no-op.
pub async fn remove_participant(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    ParticipantModel::delete(app_state.db(), id).await?;
    tracing::info!(participant_id = id, "participant removed");

    Ok(Redirect::to("/participantes"))
}
