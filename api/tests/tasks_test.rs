//! Task CRUD tests, including the change events mutations publish to the
//! WebSocket feed.

mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::json;

use dh_api::app::create_app;
use dh_api::realtime::ChangeEvent;

use common::{build_state, send};

#[actix_web::test]
async fn task_crud_round_trip() {
    let (state, _) = build_state();
    let app = test::init_service(create_app(state)).await;

    // Empty board to start.
    let req = test::TestRequest::get().uri("/tasks").to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);

    // Create.
    let req = test::TestRequest::post()
        .uri("/tasks")
        .set_json(json!({
            "title": "Replace toner",
            "description": "Printer on floor 2",
            "priority": "high"
        }))
        .to_request();
    let (status, created) = send(&app, req).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["title"], "Replace toner");
    assert_eq!(created["priority"], "high");
    assert_eq!(created["status"], "pending");
    let id = created["id"].as_i64().unwrap();

    // Patch a single field; the others keep their values.
    let req = test::TestRequest::patch()
        .uri(&format!("/tasks/{}", id))
        .set_json(json!({"status": "in_progress"}))
        .to_request();
    let (status, patched) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["status"], "in_progress");
    assert_eq!(patched["title"], "Replace toner");

    // Full replace.
    let req = test::TestRequest::put()
        .uri(&format!("/tasks/{}", id))
        .set_json(json!({
            "title": "Replace toner cartridge",
            "description": "Done by facilities",
            "priority": "low",
            "status": "done"
        }))
        .to_request();
    let (status, replaced) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(replaced["status"], "done");
    assert_eq!(replaced["priority"], "low");

    // Delete, then the listing is empty again.
    let req = test::TestRequest::delete()
        .uri(&format!("/tasks/{}", id))
        .to_request();
    let (status, deleted) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["id"], id);

    let req = test::TestRequest::get().uri("/tasks").to_request();
    let (_, body) = send(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn non_numeric_id_is_400_and_unknown_id_is_404() {
    let (state, _) = build_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::patch()
        .uri("/tasks/abc")
        .set_json(json!({"status": "done"}))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_ID");

    let req = test::TestRequest::patch()
        .uri("/tasks/999")
        .set_json(json!({"status": "done"}))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");

    let req = test::TestRequest::delete().uri("/tasks/999").to_request();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn mutations_publish_change_events() {
    let (state, _) = build_state();
    let mut feed = state.events.subscribe();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/tasks")
        .set_json(json!({"title": "Check backups", "description": ""}))
        .to_request();
    let (status, created) = send(&app, req).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();

    let envelope = feed.recv().await.unwrap();
    assert!(envelope.origin.is_none());
    match envelope.event {
        ChangeEvent::TaskUpdated { task } => assert_eq!(task.title, "Check backups"),
        other => panic!("unexpected event: {:?}", other),
    }

    let req = test::TestRequest::delete()
        .uri(&format!("/tasks/{}", id))
        .to_request();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);

    let envelope = feed.recv().await.unwrap();
    assert!(matches!(
        envelope.event,
        ChangeEvent::TaskDeleted { id: deleted } if deleted == id
    ));
}

#[actix_web::test]
async fn failed_mutations_publish_nothing() {
    let (state, _) = build_state();
    let events = state.events.clone();
    let mut feed = events.subscribe();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::delete().uri("/tasks/999").to_request();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Nothing was published for the failed delete.
    assert!(feed.try_recv().is_err());
}
