//! Black-box tests for the passthrough routes: catalog listing, login, and
//! the fallback behavior for unmatched routes.

mod common;

use reqwest::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn products_are_sorted_case_insensitively_by_title() {
    let (base, _state) = common::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{base}/products"))
        .send()
        .await
        .expect("request sends");
    assert_eq!(response.status(), StatusCode::OK);

    let products: Vec<Value> = response.json().await.expect("json body");
    let titles: Vec<&str> = products
        .iter()
        .map(|p| p["title"].as_str().expect("title is a string"))
        .collect();

    // Stub catalog is ["Widget", "amplifier", "Beacon"]; a case-sensitive
    // sort would put "Widget" before "amplifier".
    assert_eq!(titles, vec!["amplifier", "Beacon", "Widget"]);
}

#[tokio::test]
async fn login_maps_upstream_session_to_user() {
    let (base, _state) = common::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/auth/login"))
        .json(&json!({ "username": "emilys", "password": "emilyspass" }))
        .send()
        .await
        .expect("request sends");
    assert_eq!(response.status(), StatusCode::OK);

    let user: Value = response.json().await.expect("json body");
    assert_eq!(user["username"], "emilys");
    assert_eq!(user["firstName"], "Emily");
    assert_eq!(user["lastName"], "Johnson");
    assert_eq!(user["avatar"], "https://cdn.example.com/emily.png");
    assert_eq!(user["token"], common::TOKEN_C1);
    assert!(user.get("image").is_none());
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let (base, _state) = common::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/auth/login"))
        .json(&json!({ "username": "emilys", "password": "wrong" }))
        .send()
        .await
        .expect("request sends");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response.text().await.expect("body");
    assert!(body.contains("invalid credentials"));
}

#[tokio::test]
async fn login_with_unreachable_upstream_is_a_generic_failure() {
    // Point the app at a port nothing listens on.
    let (base, _state) = common::spawn_app("http://127.0.0.1:1").await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/auth/login"))
        .json(&json!({ "username": "emilys", "password": "emilyspass" }))
        .send()
        .await
        .expect("request sends");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn root_greets() {
    let (base, _state) = common::spawn().await;

    let response = reqwest::get(format!("{base}/")).await.expect("request sends");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.expect("body"), "Hello, World!");
}

#[tokio::test]
async fn unmatched_routes_get_an_empty_not_found() {
    let (base, _state) = common::spawn().await;

    let response = reqwest::get(format!("{base}/no-such-route"))
        .await
        .expect("request sends");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.text().await.expect("body"), "");
}
