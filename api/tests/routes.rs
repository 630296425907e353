use std::sync::Arc;

use adapter::store::memory::MemoryStore;
use api::route::v1;
use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use registry::AppRegistry;
use serde_json::{json, Value};
use shared::config::AuthConfig;
use tower::ServiceExt;

fn build_app(persist_new_users: bool) -> Router {
    let registry = AppRegistry::new(
        Arc::new(MemoryStore::new()),
        &AuthConfig { persist_new_users },
    );
    v1::routes().with_state(registry)
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> anyhow::Result<(StatusCode, Value)> {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body)?))?,
        None => request.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, json))
}

async fn register_club(app: &Router, name: &str) -> anyhow::Result<()> {
    let (status, _) = send(
        app,
        Method::POST,
        "/api/v1/clubs",
        Some(json!({ "name": name, "description": "", "categories": ["Social"] })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    Ok(())
}

#[tokio::test]
async fn health_endpoints_respond() -> anyhow::Result<()> {
    let app = build_app(false);
    assert_eq!(send(&app, Method::GET, "/api/v1/health", None).await?.0, StatusCode::OK);
    assert_eq!(
        send(&app, Method::GET, "/api/v1/health/store", None).await?.0,
        StatusCode::OK
    );
    Ok(())
}

#[tokio::test]
async fn club_lifecycle() -> anyhow::Result<()> {
    let app = build_app(false);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/clubs",
        Some(json!({
            "name": "Chess Club",
            "description": "Weekly games",
            "categories": ["Games"],
            "imageUrl": "https://example.edu/chess.png"
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], "Chess Club");

    let (status, body) = send(&app, Method::GET, "/api/v1/clubs/Chess%20Club", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Chess Club");
    assert_eq!(body["description"], "Weekly games");
    assert_eq!(body["imageUrl"], "https://example.edu/chess.png");
    assert_eq!(body["events"], json!([]));

    let (status, _) = send(&app, Method::DELETE, "/api/v1/clubs/Chess%20Club", None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::GET, "/api/v1/clubs/Chess%20Club", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Deleting again still succeeds.
    let (status, _) = send(&app, Method::DELETE, "/api/v1/clubs/Chess%20Club", None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    Ok(())
}

#[tokio::test]
async fn club_listing_and_search() -> anyhow::Result<()> {
    let app = build_app(false);

    let (status, body) = send(&app, Method::GET, "/api/v1/clubs", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"], json!([]));

    for name in ["Robotics Club Of University", "University Robotics Club", "Chess Club"] {
        register_club(&app, name).await?;
    }

    let (_, body) = send(&app, Method::GET, "/api/v1/clubs", None).await?;
    assert_eq!(body["items"].as_array().map(Vec::len), Some(3));

    let (status, body) =
        send(&app, Method::GET, "/api/v1/clubs?name=robotics%20club", None).await?;
    assert_eq!(status, StatusCode::OK);
    let items = body["items"].as_array().cloned().unwrap_or_default();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], "Robotics Club Of University");
    Ok(())
}

#[tokio::test]
async fn rejects_invalid_club_payload() -> anyhow::Result<()> {
    let app = build_app(false);
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/clubs",
        Some(json!({ "name": "", "description": "" })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn club_events() -> anyhow::Result<()> {
    let app = build_app(false);
    register_club(&app, "Chess Club").await?;

    let event = json!({
        "name": "Blitz Night",
        "description": "Three-minute games",
        "location": "Student Union 210",
        "startTime": "2024-10-04T18:00:00Z",
        "endTime": "2024-10-04T20:00:00Z"
    });
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/clubs/Chess%20Club/events",
        Some(event.clone()),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    let event_id = body["id"].as_str().unwrap_or_default().to_owned();
    assert!(!event_id.is_empty());

    let (_, club) = send(&app, Method::GET, "/api/v1/clubs/Chess%20Club", None).await?;
    assert_eq!(club["events"], json!([event_id]));

    let (status, body) =
        send(&app, Method::GET, &format!("/api/v1/events/{event_id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hostClub"], "Chess Club");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/clubs/Ghost%20Club/events",
        Some(event),
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::GET, "/api/v1/clubs/Chess%20Club/events", None).await?;
    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);

    let (status, _) =
        send(&app, Method::DELETE, &format!("/api/v1/events/{event_id}"), None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) =
        send(&app, Method::GET, &format!("/api/v1/events/{event_id}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn rejects_event_ending_before_start() -> anyhow::Result<()> {
    let app = build_app(false);
    register_club(&app, "Chess Club").await?;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/clubs/Chess%20Club/events",
        Some(json!({
            "name": "Backwards",
            "startTime": "2024-10-04T20:00:00Z",
            "endTime": "2024-10-04T18:00:00Z"
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    Ok(())
}

#[tokio::test]
async fn users() -> anyhow::Result<()> {
    let app = build_app(false);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/users",
        Some(json!({ "firstName": "Ada", "lastName": "Lovelace" })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    let user_id = body["id"].as_str().unwrap_or_default().to_owned();

    let (status, body) = send(&app, Method::GET, &format!("/api/v1/users/{user_id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["firstName"], "Ada");
    assert_eq!(body["role"], "Student");

    let (status, _) = send(&app, Method::GET, "/api/v1/users/nobody", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) =
        send(&app, Method::DELETE, &format!("/api/v1/users/{user_id}"), None).await?;
    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    Ok(())
}

#[tokio::test]
async fn session_for_unknown_identity() -> anyhow::Result<()> {
    let identity = json!({ "id": "google-991", "name": "Mary Jackson", "email": "mj@example.edu" });

    let app = build_app(false);
    let (status, body) =
        send(&app, Method::POST, "/api/v1/auth/session", Some(identity.clone())).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], "google-991");
    assert!(body["user"].get("role").is_none());
    let (status, _) = send(&app, Method::GET, "/api/v1/users/google-991", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let app = build_app(true);
    let (_, body) = send(&app, Method::POST, "/api/v1/auth/session", Some(identity)).await?;
    assert_eq!(body["user"]["role"], "Student");
    assert_eq!(body["user"]["firstName"], "Mary");
    let (status, _) = send(&app, Method::GET, "/api/v1/users/google-991", None).await?;
    assert_eq!(status, StatusCode::OK);
    Ok(())
}
