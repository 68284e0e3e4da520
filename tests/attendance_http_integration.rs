//! Integration tests for the attendance HTTP API.
//!
//! Drives the full router (middleware included) with `oneshot` requests
//! against a store backed by in-memory document storage.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use clp_attendance::adapters::http::{build_router, AttendanceAppState};
use clp_attendance::adapters::{DocumentAttendanceStore, InMemoryDocumentStorage};
use clp_attendance::config::ServerConfig;
use clp_attendance::domain::attendance::{AttendanceDocument, Class, NewClass, Professor, Session};
use clp_attendance::domain::auth::{Role, UserRecord};
use clp_attendance::domain::foundation::{ClassId, ProfessorId, SessionNumber, UserId};
use clp_attendance::ports::DocumentStorage;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn seed() -> AttendanceDocument {
    let class = Class::new(
        ClassId::new(1),
        NewClass::new("Algorithms", Some("CS 3310"), Some(1), Some("Fall 2025")).unwrap(),
    )
    .with_session(Session::new(SessionNumber::new(1), "2025-11-20"));

    AttendanceDocument {
        users: vec![
            UserRecord::new(UserId::new(1), "student", "student123", Role::Student),
            UserRecord::new(UserId::new(3), "harsch", "prof123", Role::Professor),
        ],
        professors: vec![Professor::new(ProfessorId::new(3), "Dr. Harsch", UserId::new(3)).with_class(class)],
    }
}

async fn app() -> (Router, InMemoryDocumentStorage) {
    let storage = InMemoryDocumentStorage::with_document(&seed()).unwrap();
    let store = Arc::new(
        DocumentAttendanceStore::load(Arc::new(storage.clone()))
            .await
            .unwrap(),
    );
    let state = AttendanceAppState::new(store.clone(), store);
    (build_router(state, &ServerConfig::default()), storage)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

const SESSION_URI: &str = "/api/professors/3/classes/1/sessions/1";

// =============================================================================
// Health & Login
// =============================================================================

#[tokio::test]
async fn health_reports_ok() {
    let (app, _) = app().await;
    let (status, body) = send(&app, Method::GET, "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn professor_login_returns_role_and_professor_id() {
    let (app, _) = app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/login",
        Some(json!({"username": "harsch", "password": "prof123"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["role"], "professor");
    assert_eq!(body["professorId"], 3);
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn bad_login_is_401() {
    let (app, _) = app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/login",
        Some(json!({"username": "harsch", "password": "wrong"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "INVALID_CREDENTIALS");
}

// =============================================================================
// Professors & Classes
// =============================================================================

#[tokio::test]
async fn lists_professors_and_classes() {
    let (app, _) = app().await;

    let (status, body) = send(&app, Method::GET, "/api/professors", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "Dr. Harsch");
    assert_eq!(body[0]["userId"], 3);

    let (status, body) = send(&app, Method::GET, "/api/professors/3/classes", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["professorName"], "Dr. Harsch");
    assert_eq!(body["classes"][0]["code"], "CS 3310");
}

#[tokio::test]
async fn unknown_professor_is_404() {
    let (app, _) = app().await;
    let (status, body) = send(&app, Method::GET, "/api/professors/99999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "PROFESSOR_NOT_FOUND");
}

#[tokio::test]
async fn class_create_and_delete() {
    let (app, storage) = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/professors/3/classes",
        Some(json!({"title": "Compilers", "code": "CS 4380", "semester": "Spring 2026"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 2);
    assert_eq!(body["section"], 1);
    assert_eq!(body["sessions"], json!([]));

    let (status, _) = send(&app, Method::DELETE, "/api/professors/3/classes/2", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, Method::DELETE, "/api/professors/3/classes/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "CLASS_NOT_FOUND");

    let persisted = storage.load().await.unwrap();
    assert_eq!(persisted.professors[0].classes().len(), 1);
}

#[tokio::test]
async fn blank_class_title_is_400() {
    let (app, _) = app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/professors/3/classes",
        Some(json!({"title": "  "})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn non_numeric_professor_id_is_json_400() {
    let (app, _) = app().await;
    let (status, body) = send(&app, Method::GET, "/api/professors/abc/classes", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn body_missing_required_field_is_json_error() {
    let (app, storage) = app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        &format!("{SESSION_URI}/attend"),
        Some(json!({"name": "Jane Doe"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_FAILED");
    assert_eq!(storage.save_count(), 0);
}

#[tokio::test]
async fn malformed_json_body_is_json_400() {
    let (app, _) = app().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/login")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn class_search_filters_listing() {
    let (app, _) = app().await;

    let (status, body) = send(&app, Method::GET, "/api/classes?search=harsch", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["professorName"], "Dr. Harsch");
    assert_eq!(body[0]["title"], "Algorithms");

    let (_, body) = send(&app, Method::GET, "/api/classes?search=physics", None).await;
    assert_eq!(body, json!([]));
}

// =============================================================================
// Attendance
// =============================================================================

#[tokio::test]
async fn manual_attend_and_remove() {
    let (app, _) = app().await;
    let attend = format!("{SESSION_URI}/attend");

    let (status, body) = send(
        &app,
        Method::POST,
        &attend,
        Some(json!({"studentName": "  Jane Doe "})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["attendees"], json!(["Jane Doe"]));

    let (status, body) = send(
        &app,
        Method::DELETE,
        &attend,
        Some(json!({"studentName": "Jane Doe"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["attendees"], json!([]));
}

#[tokio::test]
async fn blank_student_name_is_400() {
    let (app, storage) = app().await;
    let (status, _) = send(
        &app,
        Method::POST,
        &format!("{SESSION_URI}/attend"),
        Some(json!({"studentName": "   "})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(storage.save_count(), 0);
}

#[tokio::test]
async fn card_check_in_twice_records_once() {
    let (app, _) = app().await;
    let check_in = format!("{SESSION_URI}/check-in");

    for _ in 0..2 {
        let (status, body) = send(
            &app,
            Method::POST,
            &check_in,
            Some(json!({"payload": "%B^SMITH/ALICE^999?"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["studentName"], "ALICE SMITH");
    }

    let (status, body) = send(&app, Method::GET, SESSION_URI, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["attendees"], json!(["ALICE SMITH"]));
    assert_eq!(body["date"], "2025-11-20");
}

#[tokio::test]
async fn unreadable_card_is_422() {
    let (app, _) = app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        &format!("{SESSION_URI}/check-in"),
        Some(json!({"payload": "%B^NOSLASH^999?"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "INVALID_CARD_DATA");
}

#[tokio::test]
async fn missing_session_is_404() {
    let (app, _) = app().await;
    let (status, body) = send(
        &app,
        Method::GET,
        "/api/professors/3/classes/1/sessions/9",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "SESSION_NOT_FOUND");
}

#[tokio::test]
async fn storage_failure_is_500_and_changes_nothing() {
    let (app, storage) = app().await;
    storage.fail_saves(true);

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("{SESSION_URI}/attend"),
        Some(json!({"studentName": "Jane Doe"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "STORAGE_ERROR");

    let (_, body) = send(&app, Method::GET, SESSION_URI, None).await;
    assert_eq!(body["attendees"], json!([]));
}
