#![allow(dead_code, unused_imports)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tower::ServiceExt;

/// Send a request with an optional JSON body and bearer token, collecting the
/// raw response.
async fn send(
    app: &Router,
    method: Method,
    path: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> (u16, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(path);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status().as_u16();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, body_bytes.to_vec())
}

/// Deserialize `bytes` into `T`, panicking with a diagnostic message on failure.
fn deserialize_or_panic<T: DeserializeOwned>(status: u16, path: &str, bytes: &[u8]) -> T {
    serde_json::from_slice(bytes).unwrap_or_else(|e| {
        panic!(
            "Failed to deserialize response into {}\n\
             Status: {status} | Path: {path}\n\
             Error : {e}\n\
             Body  : {}",
            std::any::type_name::<T>(),
            String::from_utf8_lossy(bytes)
        )
    })
}

/// Helper to make JSON POST requests and deserialize response
pub async fn post_json<T: DeserializeOwned>(app: &Router, path: &str, body: Value) -> (u16, T) {
    let (status, body_bytes) = send(app, Method::POST, path, Some(body), None).await;
    let response_body: T = deserialize_or_panic(status, path, &body_bytes);
    (status, response_body)
}

/// Authenticated JSON POST
pub async fn post_json_auth<T: DeserializeOwned>(
    app: &Router,
    path: &str,
    body: Value,
    token: &str,
) -> (u16, T) {
    let (status, body_bytes) = send(app, Method::POST, path, Some(body), Some(token)).await;
    let response_body: T = deserialize_or_panic(status, path, &body_bytes);
    (status, response_body)
}

/// Authenticated JSON PUT
pub async fn put_json_auth<T: DeserializeOwned>(
    app: &Router,
    path: &str,
    body: Value,
    token: &str,
) -> (u16, T) {
    let (status, body_bytes) = send(app, Method::PUT, path, Some(body), Some(token)).await;
    let response_body: T = deserialize_or_panic(status, path, &body_bytes);
    (status, response_body)
}

/// Authenticated JSON PATCH
pub async fn patch_json_auth<T: DeserializeOwned>(
    app: &Router,
    path: &str,
    body: Value,
    token: &str,
) -> (u16, T) {
    let (status, body_bytes) = send(app, Method::PATCH, path, Some(body), Some(token)).await;
    let response_body: T = deserialize_or_panic(status, path, &body_bytes);
    (status, response_body)
}

/// Helper for GET requests (optionally with query parameters in `path`)
pub async fn get_json<T: DeserializeOwned>(app: &Router, path: &str) -> (u16, T) {
    let (status, body_bytes) = send(app, Method::GET, path, None, None).await;
    let response_body: T = deserialize_or_panic(status, path, &body_bytes);
    (status, response_body)
}

/// Authenticated GET
pub async fn get_json_auth<T: DeserializeOwned>(app: &Router, path: &str, token: &str) -> (u16, T) {
    let (status, body_bytes) = send(app, Method::GET, path, None, Some(token)).await;
    let response_body: T = deserialize_or_panic(status, path, &body_bytes);
    (status, response_body)
}

/// Helper to GET and get back a raw `serde_json::Value` (never fails on shape).
pub async fn get_json_value(app: &Router, path: &str) -> (u16, Value) {
    let (status, body_bytes) = send(app, Method::GET, path, None, None).await;
    let value: Value = serde_json::from_slice(&body_bytes).unwrap_or_else(|e| {
        panic!(
            "Response is not valid JSON\nStatus: {status} | Path: {path}\nError: {e}\nBody: {}",
            String::from_utf8_lossy(&body_bytes)
        )
    });
    (status, value)
}

/// Helper for GET requests returning raw string body
pub async fn get_raw(app: &Router, path: &str) -> (u16, String) {
    let (status, body_bytes) = send(app, Method::GET, path, None, None).await;
    (status, String::from_utf8_lossy(&body_bytes).to_string())
}

/// Raw status for requests that do not need body assertions
pub async fn get_status_auth(app: &Router, path: &str, token: &str) -> u16 {
    let (status, _) = send(app, Method::GET, path, None, Some(token)).await;
    status
}

/// Unauthenticated GET status
pub async fn get_status(app: &Router, path: &str) -> u16 {
    let (status, _) = send(app, Method::GET, path, None, None).await;
    status
}
