use axum::http::StatusCode;
use axum::http::header::LOCATION;
use db::models::course::Model as CourseModel;
use db::models::participant::Model as ParticipantModel;

use super::{body_text, get, post_form, test_app};

#[tokio::test]
async fn home_redirects_to_course_listing() {
    let (app, _db) = test_app().await;

    let response = get(&app, "/").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], "/minicursos");
}

#[tokio::test]
async fn created_course_appears_in_listing() {
    let (app, _db) = test_app().await;

    let response = post_form(&app, "/adicionar_minicurso", &[("title", "Python 101")]).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], "/minicursos");

    let page = body_text(get(&app, "/minicursos").await).await;
    assert!(page.contains("Python 101"));
}

#[tokio::test]
async fn whitespace_title_renders_error_and_writes_nothing() {
    let (app, db) = test_app().await;

    let response = post_form(&app, "/adicionar_minicurso", &[("title", "   ")]).await;

    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains("cannot be empty"));
    assert!(CourseModel::get_all(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_title_renders_error_and_keeps_one_row() {
    let (app, db) = test_app().await;

    post_form(&app, "/adicionar_minicurso", &[("title", "A")]).await;
    let response = post_form(&app, "/adicionar_minicurso", &[("title", "A")]).await;

    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains("already exists"));

    let all = CourseModel::get_all(&db).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "A");
}

#[tokio::test]
async fn title_collision_is_case_sensitive() {
    let (app, db) = test_app().await;

    post_form(&app, "/adicionar_minicurso", &[("title", "A")]).await;
    let response = post_form(&app, "/adicionar_minicurso", &[("title", "a")]).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(CourseModel::get_all(&db).await.unwrap().len(), 2);
}

#[tokio::test]
async fn removing_course_cascades_and_frees_no_new_registrations() {
    let (app, db) = test_app().await;

    let course = CourseModel::create(&db, "B").await.unwrap();
    ParticipantModel::create(&db, "Ana", 20, "1111", course.id)
        .await
        .unwrap();

    let response = post_remove_course(&app, course.id).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], "/minicursos");

    assert!(CourseModel::get_all(&db).await.unwrap().is_empty());
    assert!(ParticipantModel::get_all(&db).await.unwrap().is_empty());

    // Registering against the deleted id must fail.
    let response = post_form(
        &app,
        "/adicionar_participante",
        &[
            ("name", "Bia"),
            ("age", "22"),
            ("phone", "2222"),
            ("minicurso_id", &course.id.to_string()),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains("Course not found"));
    assert!(ParticipantModel::get_all(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn non_numeric_course_id_in_path_is_a_bad_request() {
    let (app, db) = test_app().await;
    CourseModel::create(&db, "Kept").await.unwrap();

    let response = post_form(&app, "/remover_minicurso/abc", &[]).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(CourseModel::get_all(&db).await.unwrap().len(), 1);
}

#[tokio::test]
async fn removing_unknown_course_silently_redirects() {
    let (app, _db) = test_app().await;

    let response = post_remove_course(&app, 9999).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

async fn post_remove_course(app: &axum::Router, id: i64) -> axum::http::Response<axum::body::Body> {
    post_form(app, &format!("/remover_minicurso/{id}"), &[]).await
}
