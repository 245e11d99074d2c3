// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AppState, SalonHandle, build_router};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use petgroom::{Salon, SystemClock};
use petgroom_persistence::Persistence;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Builds a router over a fresh in-memory salon.
pub fn create_test_app() -> Router {
    let persistence: Persistence =
        Persistence::new_in_memory().expect("Failed to create in-memory persistence");
    let salon: SalonHandle =
        Salon::open(persistence, SystemClock).expect("Failed to open salon");
    build_router(AppState::new(salon))
}

/// Sends one request and returns the status and decoded JSON body.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request: Request<Body> = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status: StatusCode = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };
    (status, value)
}

pub async fn create_client(app: &Router, tutor_name: &str, pet_name: &str) -> Value {
    let (status, client) = send(
        app,
        "POST",
        "/clients",
        Some(json!({
            "tutorName": tutor_name,
            "petNames": [pet_name],
            "phone": "555-0100",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    client
}

pub async fn create_groomer(app: &Router, name: &str, rate: u8) -> Value {
    let (status, groomer) = send(
        app,
        "POST",
        "/groomers",
        Some(json!({ "name": name, "status": "available", "commissionRate": rate })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    groomer
}

pub fn appointment_body(client: &Value, date: &str) -> Value {
    json!({
        "clientId": client["id"],
        "petName": client["petNames"][0],
        "date": date,
        "time": "10:00",
        "serviceType": "both",
        "price": 6000,
    })
}

pub async fn create_appointment(app: &Router, client: &Value, date: &str) -> Value {
    let (status, appointment) = send(
        app,
        "POST",
        "/appointments",
        Some(appointment_body(client, date)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    appointment
}
