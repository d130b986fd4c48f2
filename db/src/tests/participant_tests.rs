use crate::models::course::Model as CourseModel;
use crate::models::participant::Model as ParticipantModel;
use crate::test_utils::setup_test_db;

#[tokio::test]
async fn creating_a_participant_stores_all_fields() {
    let db = setup_test_db().await;
    let course = CourseModel::create(&db, "Python 101").await.unwrap();

    let created = ParticipantModel::create(&db, "Ana", 20, "1111", course.id)
        .await
        .unwrap();

    let fetched = ParticipantModel::get_by_id(&db, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.name, "Ana");
    assert_eq!(fetched.age, 20);
    assert_eq!(fetched.phone, "1111");
    assert_eq!(fetched.course_id, course.id);
}

#[tokio::test]
async fn updating_overwrites_every_field() {
    let db = setup_test_db().await;
    let first = CourseModel::create(&db, "First").await.unwrap();
    let second = CourseModel::create(&db, "Second").await.unwrap();
    let participant = ParticipantModel::create(&db, "Ana", 20, "1111", first.id)
        .await
        .unwrap();

    ParticipantModel::update(&db, participant.id, "Beatriz", 21, "2222", second.id)
        .await
        .unwrap();

    let fetched = ParticipantModel::get_by_id(&db, participant.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.name, "Beatriz");
    assert_eq!(fetched.age, 21);
    assert_eq!(fetched.phone, "2222");
    assert_eq!(fetched.course_id, second.id);
}

#[tokio::test]
async fn updating_participant_accepts_dangling_course_id() {
    // The update path only checks the participant id; the course id is
    // taken as-is, unlike creation. Callers that want the stricter check
    // must change this test knowingly.
    let db = setup_test_db().await;
    let course = CourseModel::create(&db, "Only").await.unwrap();
    let participant = ParticipantModel::create(&db, "Ana", 20, "1111", course.id)
        .await
        .unwrap();

    ParticipantModel::update(&db, participant.id, "Ana", 20, "1111", 9999)
        .await
        .unwrap();

    let fetched = ParticipantModel::get_by_id(&db, participant.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.course_id, 9999);
}

#[tokio::test]
async fn deleting_a_participant_removes_the_row() {
    let db = setup_test_db().await;
    let course = CourseModel::create(&db, "Python 101").await.unwrap();
    let participant = ParticipantModel::create(&db, "Ana", 20, "1111", course.id)
        .await
        .unwrap();

    ParticipantModel::delete(&db, participant.id).await.unwrap();

    assert!(
        ParticipantModel::get_by_id(&db, participant.id)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn deleting_an_unknown_participant_is_a_noop() {
    let db = setup_test_db().await;

    ParticipantModel::delete(&db, 42).await.unwrap();

    assert!(ParticipantModel::get_all(&db).await.unwrap().is_empty());
}
