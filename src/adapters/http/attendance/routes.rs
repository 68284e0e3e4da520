//! Axum router configuration for attendance endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{
    add_class, check_in, get_professor, get_roster, health, list_all_classes,
    list_professor_classes, list_professors, login, record_attendance, remove_attendance,
    remove_class, AttendanceAppState,
};

/// Create the attendance API router.
///
/// # Routes
///
/// - `POST /login` - Credential check
/// - `GET /health` - Liveness
/// - `GET /classes?search=` - Every class with its professor
/// - `GET /professors` - All professors with classes
/// - `GET /professors/:pid` - One professor with classes
/// - `GET|POST /professors/:pid/classes` - List or create classes
/// - `DELETE /professors/:pid/classes/:cid` - Delete a class
/// - `GET /professors/:pid/classes/:cid/sessions/:sn` - Session roster
/// - `POST|DELETE /professors/:pid/classes/:cid/sessions/:sn/attend` - Manual add/remove
/// - `POST /professors/:pid/classes/:cid/sessions/:sn/check-in` - Card swipe
pub fn attendance_routes() -> Router<AttendanceAppState> {
    Router::new()
        .route("/login", post(login))
        .route("/health", get(health))
        .route("/classes", get(list_all_classes))
        .route("/professors", get(list_professors))
        .route("/professors/:pid", get(get_professor))
        .route(
            "/professors/:pid/classes",
            get(list_professor_classes).post(add_class),
        )
        .route(
            "/professors/:pid/classes/:cid",
            delete(remove_class),
        )
        .route(
            "/professors/:pid/classes/:cid/sessions/:sn",
            get(get_roster),
        )
        .route(
            "/professors/:pid/classes/:cid/sessions/:sn/attend",
            post(record_attendance).delete(remove_attendance),
        )
        .route(
            "/professors/:pid/classes/:cid/sessions/:sn/check-in",
            post(check_in),
        )
}

/// Create the complete attendance router, mounted at `/api`.
///
/// # Example
///
/// ```ignore
/// let app = attendance_router().with_state(AttendanceAppState::new(store, credentials));
/// ```
pub fn attendance_router() -> Router<AttendanceAppState> {
    Router::new().nest("/api", attendance_routes())
}
