//! Stub dupe search service for client integration tests.
//!
//! Serves canned `/dupes`, `/names` and `/health` replies on an ephemeral
//! localhost port; the `name` query parameter picks the reply.

use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::collections::HashMap;

async fn dupes(Query(q): Query<HashMap<String, String>>) -> Response {
    let name = q.get("name").cloned().unwrap_or_default();
    match name.as_str() {
        "missing" => (StatusCode::NOT_FOUND, Json(json!({ "error": "'missing' not found" }))).into_response(),
        "boom" => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        "garbage" => (StatusCode::OK, "<html>not json</html>").into_response(),
        "pricey" if q.get("cheaper_than").map(String::as_str) == Some("true") => Json(json!({
            "query": { "name": "Pricey", "brand": "Lux", "price": 5.0 },
            "params": q,
            "results": []
        }))
        .into_response(),
        "lonely" => Json(json!({
            "query": { "name": "Lonely", "brand": null, "price": null },
            "params": {},
            "results": []
        }))
        .into_response(),
        // Echo the received parameters so tests can check the encoding
        _ => Json(json!({
            "query": { "name": "Original", "brand": "Lux", "price": 120.0 },
            "params": q,
            "results": [
                { "name": "Rose", "brand": "Acme", "price": 19.5, "similarity": 0.873 },
                { "name": "Amber", "brand": "Zed", "price": null, "similarity": 0.61 }
            ]
        }))
        .into_response(),
    }
}

async fn names() -> Json<Vec<&'static str>> {
    Json(vec!["Amber", "Original", "Rose"])
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Start the stub service and return its origin, e.g. `http://127.0.0.1:38211`.
pub async fn spawn_stub() -> String {
    let app = Router::new()
        .route("/dupes", get(dupes))
        .route("/names", get(names))
        .route("/health", get(health));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
    let addr = listener.local_addr().expect("stub addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });
    format!("http://{addr}")
}
