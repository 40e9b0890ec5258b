mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use backend::middleware::request_trace::REQUEST_ID_HEADER;
use backend::test_support::create_test_app;
use backend::AppState;
use serde_json::{json, Value};

#[actix_web::test]
async fn root_returns_hello_world() {
    let state = common::fresh_state().await;
    let app = create_test_app(state).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let content_type = resp
        .headers()
        .get(actix_web::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("application/json"));

    let body = test::read_body(resp).await;
    let json: Value = serde_json::from_slice(&body).expect("json body");
    assert_eq!(json, json!({ "message": "Hello World" }));
}

#[actix_web::test]
async fn root_is_served_without_a_database() {
    let app = create_test_app(AppState::new_without_db()).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["message"], "Hello World");
}

#[actix_web::test]
async fn root_ignores_query_string() {
    let app = create_test_app(AppState::new_without_db()).await;

    let req = test::TestRequest::get().uri("/?name=anything").to_request();
    let json: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(json, json!({ "message": "Hello World" }));
}

#[actix_web::test]
async fn every_response_carries_a_request_id() {
    let app = create_test_app(AppState::new_without_db()).await;

    let first = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let second = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

    let id_of = |resp: &actix_web::dev::ServiceResponse| {
        resp.headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .expect("x-request-id header")
            .to_string()
    };
    assert_ne!(id_of(&first), id_of(&second));
}

#[actix_web::test]
async fn only_get_root_is_routed() {
    let app = create_test_app(AppState::new_without_db()).await;

    let missing = test::call_service(
        &app,
        test::TestRequest::get().uri("/modules").to_request(),
    )
    .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let post = test::call_service(&app, test::TestRequest::post().uri("/").to_request()).await;
    assert!(post.status().is_client_error());
}
