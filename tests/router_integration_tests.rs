//! End-to-end tests through an axum router.
//!
//! A small router wires the responder and exception handler into real
//! handlers, then requests are driven with `tower::ServiceExt::oneshot`
//! the way the service itself would serve them.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use serde_json::{json, Map, Value};
use tower::ServiceExt;

use api_response::{ApiException, ApiExceptionHandler, ApiResponder, Environment};

#[derive(Clone)]
struct AppState {
    responder: ApiResponder,
    exception_handler: Arc<ApiExceptionHandler>,
}

async fn list_users(State(state): State<AppState>) -> Response {
    state.responder.success(
        Some(json!([{"id": 1, "name": "John Doe"}])),
        None,
        Map::new(),
        200,
    )
}

async fn create_user(State(state): State<AppState>) -> Response {
    let errors = match json!({"email": ["Email is required"]}) {
        Value::Object(map) => map,
        _ => unreachable!(),
    };
    state.responder.validation_error(errors, None)
}

async fn broken(State(state): State<AppState>) -> Response {
    state
        .exception_handler
        .handle(&ApiException::query("Connection refused by peer"))
}

fn test_router(environment: Environment) -> Router {
    let responder = ApiResponder::new(environment);
    let state = AppState {
        exception_handler: Arc::new(ApiExceptionHandler::new(responder.clone())),
        responder,
    };

    Router::new()
        .route("/users", get(list_users))
        .route("/users", post(create_user))
        .route("/broken", get(broken))
        .with_state(state)
}

async fn extract_json_response(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn success_envelope_over_http() {
    let app = test_router(Environment::Testing);

    let request = Request::builder()
        .uri("/users")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), 200);
    let body = extract_json_response(response).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"][0]["name"], "John Doe");
}

#[tokio::test]
async fn validation_envelope_over_http() {
    let app = test_router(Environment::Testing);

    let request = Request::builder()
        .method("POST")
        .uri("/users")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), 422);
    let body = extract_json_response(response).await;
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "The given data was invalid");
    assert_eq!(body["errors"], json!({"email": ["Email is required"]}));
    assert_eq!(body["env"], "testing");
}

#[tokio::test]
async fn error_envelope_over_http() {
    let app = test_router(Environment::Testing);

    let request = Request::builder()
        .uri("/broken")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), 500);
    let body = extract_json_response(response).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Database Error");
    assert_eq!(body["errors"], json!({"database": "Database connection failed."}));
    assert!(body["ref"].as_str().unwrap().starts_with("ERR-"));
}

#[tokio::test]
async fn production_router_hides_debug_detail() {
    let app = test_router(Environment::Production);

    let request = Request::builder()
        .uri("/broken")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    let body = extract_json_response(response).await;
    assert!(body.get("debug").is_none());
}
