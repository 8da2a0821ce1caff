//! Shared harness for black-box API tests.
//!
//! Boots two local servers per test: a stub upstream (catalog + identity
//! authority) and the real application router pointed at it. Tests drive the
//! app over HTTP with `reqwest` and can also inspect cart state directly
//! through the returned `AppState`.

// Not every test binary uses every helper.
#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::Path,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};

use shopfront_server::config::ServerConfig;
use shopfront_server::state::AppState;

/// Token the stub authority accepts for customer 15.
pub const TOKEN_C1: &str = "token-for-customer-15";
/// Token the stub authority accepts for customer 16.
pub const TOKEN_C2: &str = "token-for-customer-16";
/// Token the stub authority rejects as expired.
pub const TOKEN_EXPIRED: &str = "token-expired";
/// Token that makes the stub authority fail with a server error.
pub const TOKEN_BROKEN: &str = "token-broken";

/// Customer ID the verifier derives from `TOKEN_C1`.
pub const CUSTOMER_C1: &str = "15";
/// Customer ID the verifier derives from `TOKEN_C2`.
pub const CUSTOMER_C2: &str = "16";

fn product(id: i64, title: &str, price: f64) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("{title} description"),
        "price": price,
        "thumbnail": format!("https://cdn.example.com/{id}.png"),
    })
}

/// The stub catalog. Titles are deliberately mixed-case and unsorted.
fn catalog() -> Vec<Value> {
    vec![
        product(7, "Widget", 9.99),
        product(8, "amplifier", 1.50),
        product(9, "Beacon", 2.25),
    ]
}

async fn stub_products() -> Json<Value> {
    Json(json!({ "products": catalog() }))
}

/// Product ID the stub catalog always fails on with a server error.
pub const PRODUCT_BROKEN: i64 = 500;

async fn stub_product(Path(id): Path<i64>) -> Response {
    if id == PRODUCT_BROKEN {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    match catalog().into_iter().find(|p| p["id"] == json!(id)) {
        Some(p) => Json(p).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": format!("Product with id '{id}' not found") })),
        )
            .into_response(),
    }
}

async fn stub_login(Json(body): Json<Value>) -> Response {
    if body["username"] == json!("emilys") && body["password"] == json!("emilyspass") {
        Json(json!({
            "username": "emilys",
            "firstName": "Emily",
            "lastName": "Johnson",
            "image": "https://cdn.example.com/emily.png",
            "token": TOKEN_C1,
        }))
        .into_response()
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Invalid credentials" })),
        )
            .into_response()
    }
}

async fn stub_me(headers: HeaderMap) -> Response {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .unwrap_or_default();

    match token {
        TOKEN_C1 => Json(json!({ "id": 15, "username": "emilys" })).into_response(),
        TOKEN_C2 => Json(json!({ "id": 16, "username": "michaelw" })).into_response(),
        TOKEN_BROKEN => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Token Expired!" })),
        )
            .into_response(),
    }
}

/// Serve a router on an ephemeral local port, returning its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}")
}

/// Start the stub upstream and return its base URL.
pub async fn spawn_upstream() -> String {
    let router = Router::new()
        .route("/products", get(stub_products))
        .route("/products/{id}", get(stub_product))
        .route("/auth/login", post(stub_login))
        .route("/auth/me", get(stub_me));
    serve(router).await
}

/// Start the application against the given upstream.
///
/// Returns the app's base URL and its state for direct store assertions.
pub async fn spawn_app(upstream_url: &str) -> (String, AppState) {
    let config =
        ServerConfig::with_upstream(upstream_url.parse().expect("valid upstream url"));
    let state = AppState::new(config).expect("state builds");
    let base = serve(shopfront_server::app(state.clone())).await;
    (base, state)
}

/// Start the stub upstream plus the app in one call.
pub async fn spawn() -> (String, AppState) {
    let upstream = spawn_upstream().await;
    spawn_app(&upstream).await
}

/// POST an add-to-cart request with an optional bearer token.
pub async fn add_item(
    client: &reqwest::Client,
    base: &str,
    token: Option<&str>,
    product_id: i64,
) -> reqwest::Response {
    let mut request = client
        .post(format!("{base}/cart/items"))
        .json(&json!({ "productId": product_id }));
    if let Some(token) = token {
        request = request.bearer_auth(token);
    }
    request.send().await.expect("request sends")
}
