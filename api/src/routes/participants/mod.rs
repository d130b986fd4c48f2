use axum::Router;
use axum::routing::{get, post};
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use delete::remove_participant;
use get::list_participants;
use post::create_participant;
use put::edit_participant;

pub fn participant_routes() -> Router<AppState> {
    Router::new()
        .route("/participantes", get(list_participants))
        .route("/adicionar_participante", post(create_participant))
        // HTML forms cannot issue PUT; the update endpoint is a POST.
        .route("/alterar_participante", post(edit_participant))
        .route("/remover_participante/{id}", post(remove_participant))
}
