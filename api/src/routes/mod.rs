//! HTTP route entry point.
//!
//! Route groups:
//! - `/` → redirect to the course listing
//! - `/minicursos`, `/adicionar_minicurso`, `/remover_minicurso/{id}` → courses
//! - `/participantes`, `/adicionar_participante`, `/alterar_participante`,
//!   `/remover_participante/{id}` → participants
//!
//! Paths keep the Portuguese names the pages were published under.

use axum::{Router, response::Redirect, routing::get};
use util::state::AppState;

pub mod courses;
pub mod participants;

use courses::course_routes;
use participants::participant_routes;

/// Builds the complete application router for all HTTP endpoints.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .merge(course_routes())
        .merge(participant_routes())
        .with_state(app_state)
}

/// GET / — the landing page is the course listing.
async fn home() -> Redirect {
    Redirect::to("/minicursos")
}
