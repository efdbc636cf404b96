use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::shell::http::router;
use crate::shell::state::AppState;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn create_list_delete_then_get_is_not_found() {
    let app = router(AppState::in_memory());
    let standup = serde_json::json!({
        "id": "1",
        "title": "Standup",
        "description": "daily",
        "date": "2024-01-01T09:00:00Z"
    });

    let (status, created) = send(&app, json_request("POST", "/events", standup.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created, standup);

    let (status, listed) = send(&app, empty_request("GET", "/events")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, serde_json::json!([standup.clone()]));

    let (status, fetched) = send(&app, empty_request("GET", "/events/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, standup);

    let (status, _) = send(&app, empty_request("DELETE", "/events/1")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, listed) = send(&app, empty_request("GET", "/events")).await;
    assert_eq!(listed, serde_json::json!([]));

    let (status, _) = send(&app, empty_request("GET", "/events/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_keeps_the_id_and_the_count() {
    let app = router(AppState::in_memory());
    for (id, title) in [("1", "Standup"), ("2", "Lunch")] {
        send(
            &app,
            json_request(
                "POST",
                "/events",
                serde_json::json!({
                    "id": id,
                    "title": title,
                    "description": "",
                    "date": "2024-01-01T09:00:00Z"
                }),
            ),
        )
        .await;
    }

    let (status, updated) = send(
        &app,
        json_request(
            "PUT",
            "/events/1",
            serde_json::json!({"title": "Standup v2", "date": "2024-01-01T09:30:00Z"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], "1");
    assert_eq!(updated["title"], "Standup v2");
    assert_eq!(updated["date"], "2024-01-01T09:30:00Z");

    let (_, listed) = send(&app, empty_request("GET", "/events")).await;
    let listed = listed.as_array().unwrap().clone();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["title"], "Standup v2");
    assert_eq!(listed[1]["title"], "Lunch");
}

#[tokio::test]
async fn deleting_a_duplicate_id_removes_one_entry_at_a_time() {
    let app = router(AppState::in_memory());
    for title in ["first", "second"] {
        send(
            &app,
            json_request(
                "POST",
                "/events",
                serde_json::json!({
                    "id": "dup",
                    "title": title,
                    "description": "",
                    "date": "2024-01-01T09:00:00Z"
                }),
            ),
        )
        .await;
    }

    let (_, fetched) = send(&app, empty_request("GET", "/events/dup")).await;
    assert_eq!(fetched["title"], "first");

    let (status, _) = send(&app, empty_request("DELETE", "/events/dup")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, listed) = send(&app, empty_request("GET", "/events")).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["title"], "second");
}

#[tokio::test]
async fn concurrent_creates_are_all_kept() {
    let state = AppState::in_memory();
    let app = router(state.clone());

    let requests: Vec<_> = (0..32)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                send(
                    &app,
                    json_request(
                        "POST",
                        "/events",
                        serde_json::json!({
                            "id": format!("e-{i}"),
                            "title": "load",
                            "description": "",
                            "date": "2024-01-01T09:00:00Z"
                        }),
                    ),
                )
                .await
            })
        })
        .collect();
    for request in requests {
        assert_eq!(request.await.unwrap().0, StatusCode::OK);
    }

    let (_, listed) = send(&app, empty_request("GET", "/events")).await;
    assert_eq!(listed.as_array().unwrap().len(), 32);
}
