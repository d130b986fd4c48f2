use axum::Router;
use axum::routing::{get, post};
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;

use delete::remove_course;
use get::list_courses;
use post::create_course;

pub fn course_routes() -> Router<AppState> {
    Router::new()
        .route("/minicursos", get(list_courses))
        .route("/adicionar_minicurso", post(create_course))
        .route("/remover_minicurso/{id}", post(remove_course))
}
