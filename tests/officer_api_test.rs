use std::env;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::{get, post},
    Router,
};
use rand::Rng;
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;
use uuid::Uuid;

use registration_backend::{routes, AppState};

fn test_app(state: AppState) -> Router {
    Router::new()
        .route("/admin/login", post(routes::admin::login))
        .route("/admin/officers", get(routes::admin::list_officers))
        .route("/admin/activate", post(routes::admin::activate_subscription))
        .route("/login", post(routes::officer::login))
        .route("/signup", post(routes::officer::signup))
        .route("/submit-transaction", post(routes::officer::submit_transaction))
        .route("/officer/status", post(routes::officer::status))
        .route("/officer/reset-password", post(routes::officer::reset_password))
        .with_state(state)
}

async fn post_json(app: &Router, uri: &str, body: JsonValue) -> (StatusCode, JsonValue) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null);
    (status, body)
}

fn random_username() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("officer_{}", &suffix[..12])
}

fn random_mobile() -> String {
    rand::thread_rng()
        .gen_range(1_000_000_000u64..10_000_000_000u64)
        .to_string()
}

fn random_transaction_id() -> String {
    rand::thread_rng()
        .gen_range(100_000_000_000u64..1_000_000_000_000u64)
        .to_string()
}

async fn signup(app: &Router, username: &str, mobile: &str, password: &str) -> (StatusCode, JsonValue) {
    post_json(
        app,
        "/signup",
        json!({
            "name": "A",
            "address": "X",
            "mobile": mobile,
            "username": username,
            "password": password
        }),
    )
    .await
}

async fn setup() -> Option<AppState> {
    dotenvy::dotenv().ok();
    if env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL not set, skipping integration test");
        return None;
    }
    env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    env::set_var("ADMIN_DEFAULT_PASSWORD", "admin-test-password");
    env::set_var("PUBLIC_RPS", "1000");
    env::set_var("TRANSACTION_RPS", "1000");
    let _ = registration_backend::config::init_config();

    let pool = registration_backend::database::pool::create_pool()
        .await
        .expect("pool");
    sqlx::migrate!("./migrations").run(&pool).await.expect("migrations");
    Some(AppState::new(pool))
}

#[tokio::test]
async fn signup_subscription_flow_end_to_end() {
    let Some(state) = setup().await else { return };
    let pool = state.pool.clone();
    let app = test_app(state);

    let username = random_username();
    let (status, body) = signup(&app, &username, &random_mobile(), "p1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["officer"].get("password").is_none());
    assert!(body["officer"].get("password_hash").is_none());
    assert_eq!(body["officer"]["username"], json!(username));
    assert_eq!(body["officer"]["subscribed"], json!(false));

    let stored: String =
        sqlx::query_scalar("SELECT password_hash FROM officers WHERE username = $1")
            .bind(&username)
            .fetch_one(&pool)
            .await
            .expect("stored officer");
    assert_ne!(stored, "p1");

    let (status, _) =
        post_json(&app, "/login", json!({ "username": username, "password": "wrong" })).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) =
        post_json(&app, "/login", json!({ "username": username, "password": "p1" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["subscribed"], json!(false));
    assert!(body["officer"].get("password_hash").is_none());

    let txid = random_transaction_id();
    let (status, body) = post_json(
        &app,
        "/submit-transaction",
        json!({ "username": username, "transactionId": txid }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["transactionId"], json!(txid));

    let (status, _) = post_json(&app, "/admin/activate", json!({ "transactionId": txid })).await;
    assert_eq!(status, StatusCode::OK);

    // a second identical activation must be rejected
    let (status, _) = post_json(&app, "/admin/activate", json!({ "transactionId": txid })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = post_json(&app, "/officer/status", json!({ "username": username })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["activated"], json!(true));
}

#[tokio::test]
async fn signup_rejects_bad_mobile_and_duplicates() {
    let Some(state) = setup().await else { return };
    let app = test_app(state);

    let username = random_username();
    let (status, _) = signup(&app, &username, "12345", "p1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = signup(&app, &username, "12345abcde", "p1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mobile = random_mobile();
    let (status, _) = signup(&app, &username, &mobile, "p1").await;
    assert_eq!(status, StatusCode::OK);

    // same username, different mobile
    let (status, _) = signup(&app, &username, &random_mobile(), "p2").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // first record unaffected, original password still works
    let (status, _) =
        post_json(&app, "/login", json!({ "username": username, "password": "p1" })).await;
    assert_eq!(status, StatusCode::OK);

    // same mobile, different username
    let (status, _) = signup(&app, &random_username(), &mobile, "p3").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn transaction_id_cannot_be_claimed_twice() {
    let Some(state) = setup().await else { return };
    let app = test_app(state);

    let first = random_username();
    let second = random_username();
    signup(&app, &first, &random_mobile(), "p1").await;
    signup(&app, &second, &random_mobile(), "p2").await;

    let txid = random_transaction_id();
    let (status, _) = post_json(
        &app,
        "/submit-transaction",
        json!({ "username": first, "transactionId": txid }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = post_json(
        &app,
        "/submit-transaction",
        json!({ "username": second, "transactionId": txid }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = post_json(&app, "/officer/status", json!({ "username": second })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["activated"], json!(false));
}

#[tokio::test]
async fn submit_transaction_validates_input() {
    let Some(state) = setup().await else { return };
    let app = test_app(state);

    let username = random_username();
    signup(&app, &username, &random_mobile(), "p1").await;

    let (status, _) = post_json(
        &app,
        "/submit-transaction",
        json!({ "username": username, "transactionId": "12345" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_json(
        &app,
        "/submit-transaction",
        json!({ "username": "no_such_user", "transactionId": random_transaction_id() }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn activation_of_unknown_transaction_is_not_found() {
    let Some(state) = setup().await else { return };
    let app = test_app(state);

    let (status, _) = post_json(
        &app,
        "/admin/activate",
        json!({ "transactionId": "000000000001" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) =
        post_json(&app, "/admin/activate", json!({ "transactionId": "12ab" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn resubmission_resets_subscription_until_reactivated() {
    let Some(state) = setup().await else { return };
    let app = test_app(state);

    let username = random_username();
    signup(&app, &username, &random_mobile(), "p1").await;

    let txid = random_transaction_id();
    post_json(
        &app,
        "/submit-transaction",
        json!({ "username": username, "transactionId": txid }),
    )
    .await;
    post_json(&app, "/admin/activate", json!({ "transactionId": txid })).await;

    // a new payment reference puts the officer back into the pending state
    let (status, _) = post_json(
        &app,
        "/submit-transaction",
        json!({ "username": username, "transactionId": random_transaction_id() }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = post_json(&app, "/officer/status", json!({ "username": username })).await;
    assert_eq!(body["activated"], json!(false));
}

#[tokio::test]
async fn password_reset_requires_matching_mobile() {
    let Some(state) = setup().await else { return };
    let app = test_app(state);

    let username = random_username();
    let mobile = random_mobile();
    signup(&app, &username, &mobile, "old-pass").await;

    let (status, _) = post_json(
        &app,
        "/officer/reset-password",
        json!({ "username": username, "mobile": random_mobile(), "password": "new-pass" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = post_json(
        &app,
        "/officer/reset-password",
        json!({ "username": username, "mobile": mobile, "password": "new-pass" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) =
        post_json(&app, "/login", json!({ "username": username, "password": "old-pass" })).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) =
        post_json(&app, "/login", json!({ "username": username, "password": "new-pass" })).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn officer_listing_is_newest_first_without_passwords() {
    let Some(state) = setup().await else { return };
    let app = test_app(state);

    let earlier = random_username();
    let later = random_username();
    signup(&app, &earlier, &random_mobile(), "p1").await;
    // keep created_at strictly ordered
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    signup(&app, &later, &random_mobile(), "p2").await;

    let req = Request::builder()
        .method("GET")
        .uri("/admin/officers")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = to_bytes(resp.into_body(), 4 * 1024 * 1024).await.unwrap();
    let body: JsonValue = serde_json::from_slice(&bytes).unwrap();
    let officers = body.as_array().expect("array of officers");

    let pos = |name: &str| {
        officers
            .iter()
            .position(|o| o["username"] == json!(name))
            .expect("officer present")
    };
    assert!(pos(&later) < pos(&earlier));
    for officer in officers {
        assert!(officer.get("password").is_none());
        assert!(officer.get("password_hash").is_none());
    }
}
