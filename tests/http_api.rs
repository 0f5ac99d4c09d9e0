use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode};
use filmorate_service::api;
use filmorate_service::common::init;
use filmorate_service::common::state::AppState;
use filmorate_service::models::relationships::FriendshipMode;
use serde_json::{Value, json};
use std::time::Duration;
use tempfile::TempDir;
use tower::ServiceExt;

async fn app() -> (TempDir, Router) {
    let dir = tempfile::tempdir().expect("tempdir");
    let url = format!("sqlite://{}/api.db?mode=rwc", dir.path().display());
    let db = init::connect_db(&url, 4, Duration::from_secs(5))
        .await
        .expect("database");
    let state = AppState {
        db,
        friendship_mode: FriendshipMode::RequestConfirm,
    };
    (dir, api::router().with_state(state))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body");
    if bytes.is_empty() {
        return (status, Value::Null);
    }
    let payload = serde_json::from_slice(&bytes).expect("json body");
    (status, payload)
}

async fn create_user(app: &Router, login: &str) -> i64 {
    let body = json!({
        "email": format!("{login}@example.com"),
        "login": login,
        "birthday": "1990-04-12",
    });
    let (status, user) = send(app, Method::POST, "/users", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    user["id"].as_i64().expect("user id")
}

async fn create_film(app: &Router, name: &str) -> i64 {
    let body = json!({
        "name": name,
        "description": "",
        "releaseDate": "1999-03-31",
        "duration": 136,
        "mpaId": 4,
        "genreIds": [4, 6],
    });
    let (status, film) = send(app, Method::POST, "/films", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    film["id"].as_i64().expect("film id")
}

#[tokio::test]
async fn friendship_lifecycle_over_http() {
    let (_dir, app) = app().await;
    let a = create_user(&app, "neo").await;
    let b = create_user(&app, "trinity").await;

    let (status, _) = send(&app, Method::PUT, &format!("/users/{a}/friends/{b}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, error) = send(
        &app,
        Method::PUT,
        &format!("/users/{a}/friends/{b}/confirm"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "relationships.request_missing");

    let (_, incoming) = send(&app, Method::GET, &format!("/users/{b}/friends/incoming"), None).await;
    assert_eq!(incoming[0]["id"], a);

    send(&app, Method::PUT, &format!("/users/{b}/friends/{a}"), None).await;
    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/users/{b}/friends/{a}/confirm"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, friends) = send(&app, Method::GET, &format!("/users/{a}/friends"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(friends.as_array().map(Vec::len), Some(1));
    assert_eq!(friends[0]["login"], "trinity");

    let (_, state) = send(&app, Method::GET, &format!("/users/{a}/friends/{b}/state"), None).await;
    assert_eq!(state["state"], "confirmed");

    let (status, _) = send(&app, Method::DELETE, &format!("/users/{a}/friends/{b}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, Method::DELETE, &format!("/users/{a}/friends/{b}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn errors_map_to_status_codes() {
    let (_dir, app) = app().await;
    let a = create_user(&app, "smith").await;
    let film = create_film(&app, "The Matrix").await;

    let (status, error) = send(&app, Method::GET, "/users/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "users.not_found");

    let (status, error) = send(&app, Method::PUT, &format!("/users/{a}/friends/{a}"), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "relationships.self_friendship");

    let (status, error) = send(&app, Method::GET, "/users/0/friends", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "invalid_id");

    let like = format!("/films/{film}/like/{a}");
    let (status, _) = send(&app, Method::PUT, &like, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, error) = send(&app, Method::PUT, &like, None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["code"], "likes.already_exists");

    let (status, error) = send(&app, Method::PUT, &format!("/films/{film}/like/404"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "users.not_found");
}

#[tokio::test]
async fn popular_films_over_http() {
    let (_dir, app) = app().await;
    let u1 = create_user(&app, "critic").await;
    let first = create_film(&app, "First").await;
    let second = create_film(&app, "Second").await;
    send(&app, Method::PUT, &format!("/films/{second}/like/{u1}"), None).await;

    let (status, popular) = send(&app, Method::GET, "/films/popular", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(popular[0]["id"], second);
    assert_eq!(popular[0]["likeCount"], 1);
    assert_eq!(popular[0]["mpa"]["name"], "R");
    assert_eq!(popular[1]["id"], first);
    assert_eq!(popular[1]["likeCount"], 0);

    let (_, floor) = send(&app, Method::GET, "/films/popular?count=0", None).await;
    assert_eq!(floor.as_array().map(Vec::len), Some(1));

    let (_, liked_by) = send(&app, Method::GET, &format!("/films/{second}/likes"), None).await;
    assert_eq!(liked_by, json!([u1]));
}

#[tokio::test]
async fn catalogs_are_seeded() {
    let (_dir, app) = app().await;

    let (status, genres) = send(&app, Method::GET, "/genres", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(genres.as_array().map(Vec::len), Some(6));

    let (_, rating) = send(&app, Method::GET, "/mpa/3", None).await;
    assert_eq!(rating["name"], "PG-13");

    let (status, _) = send(&app, Method::GET, "/mpa/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
