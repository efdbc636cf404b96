use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::modules::events::adapters::outbound::event_store::EventStore;
use crate::modules::events::core::event::Event;
use crate::shared::infrastructure::console::Console;
use crate::shell::cli::run;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::events::EventBuilder;

#[tokio::test]
async fn a_scripted_session_walks_every_menu_option() {
    let state = AppState::in_memory();
    let script = "\
1
3
2024-01-01 09:00
1
Standup
daily
2
1
4
1

standup notes
2024-01-01 09:15
5
1
2
1
6
";
    let mut console = Console::new(script.as_bytes(), Vec::new());

    run(&state, &mut console).await.unwrap();

    let output = String::from_utf8(console.into_writer()).unwrap();
    let expected_order = [
        "No events available.",
        "Event added successfully.",
        "ID: 1 | Title: Standup | Description: daily | Date: 2024-01-01 09:00",
        "Event updated successfully.",
        "Event deleted successfully.",
        "Event not found.",
        "Exiting CLI.",
    ];
    let mut cursor = 0;
    for line in expected_order {
        let found = output[cursor..]
            .find(line)
            .unwrap_or_else(|| panic!("missing {line:?} after offset {cursor} in {output}"));
        cursor += found + line.len();
    }
    assert_eq!(state.event_store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn events_added_in_the_cli_are_served_by_the_api() {
    let state = AppState::in_memory();
    let mut console = Console::new(
        "3\n2024-01-01 09:00\n1\nStandup\ndaily\n6\n".as_bytes(),
        Vec::new(),
    );

    run(&state, &mut console).await.unwrap();

    let response = router(state)
        .oneshot(Request::get("/events/1").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let event: Event = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(event, EventBuilder::new().build());
}

#[tokio::test]
async fn events_created_through_the_api_show_up_in_the_cli() {
    let state = AppState::in_memory();
    let response = router(state.clone())
        .oneshot(
            Request::post("/events")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"id":"7","title":"Demo","description":"sprint review","date":"2024-06-28T15:00:00Z"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let mut console = Console::new("1\n6\n".as_bytes(), Vec::new());
    run(&state, &mut console).await.unwrap();

    let output = String::from_utf8(console.into_writer()).unwrap();
    assert!(output.contains(
        "ID: 7 | Title: Demo | Description: sprint review | Date: 2024-06-28 15:00"
    ));
}
