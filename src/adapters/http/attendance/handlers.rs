//! HTTP handlers for attendance endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{
    AddClassCommand, AddClassHandler, CheckInCommand, CheckInHandler, GetProfessorHandler,
    GetProfessorQuery, GetRosterHandler, GetRosterQuery, ListAllClassesHandler,
    ListAllClassesQuery, ListProfessorClassesHandler, ListProfessorClassesQuery,
    ListProfessorsHandler, LoginCommand, LoginHandler, RecordAttendanceCommand,
    RecordAttendanceHandler, RemoveAttendanceCommand, RemoveAttendanceHandler,
    RemoveClassCommand, RemoveClassHandler,
};
use crate::domain::attendance::AttendanceError;
use crate::domain::auth::AuthError;
use crate::domain::foundation::{ClassId, ErrorCode, ProfessorId, SessionNumber};
use crate::ports::{AttendanceStore, CredentialStore};

use super::extract::{ApiJson, ApiPath, ApiQuery};
use super::dto::{
    AddClassRequest, AttendeeRequest, CheckInRequest, CheckInResponse, ClassListingResponse,
    ClassSearchParams, ErrorResponse, HealthResponse, LoginRequest, LoginResponse,
    ProfessorClassesResponse, RosterResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// Cloned for each request; dependencies are Arc-wrapped.
#[derive(Clone)]
pub struct AttendanceAppState {
    pub store: Arc<dyn AttendanceStore>,
    pub credentials: Arc<dyn CredentialStore>,
}

impl AttendanceAppState {
    pub fn new(store: Arc<dyn AttendanceStore>, credentials: Arc<dyn CredentialStore>) -> Self {
        Self { store, credentials }
    }

    /// Create handlers on demand from the shared state.
    pub fn login_handler(&self) -> LoginHandler {
        LoginHandler::new(self.credentials.clone(), self.store.clone())
    }

    pub fn list_professors_handler(&self) -> ListProfessorsHandler {
        ListProfessorsHandler::new(self.store.clone())
    }

    pub fn get_professor_handler(&self) -> GetProfessorHandler {
        GetProfessorHandler::new(self.store.clone())
    }

    pub fn list_professor_classes_handler(&self) -> ListProfessorClassesHandler {
        ListProfessorClassesHandler::new(self.store.clone())
    }

    pub fn list_all_classes_handler(&self) -> ListAllClassesHandler {
        ListAllClassesHandler::new(self.store.clone())
    }

    pub fn add_class_handler(&self) -> AddClassHandler {
        AddClassHandler::new(self.store.clone())
    }

    pub fn remove_class_handler(&self) -> RemoveClassHandler {
        RemoveClassHandler::new(self.store.clone())
    }

    pub fn get_roster_handler(&self) -> GetRosterHandler {
        GetRosterHandler::new(self.store.clone())
    }

    pub fn record_attendance_handler(&self) -> RecordAttendanceHandler {
        RecordAttendanceHandler::new(self.store.clone())
    }

    pub fn remove_attendance_handler(&self) -> RemoveAttendanceHandler {
        RemoveAttendanceHandler::new(self.store.clone())
    }

    pub fn check_in_handler(&self) -> CheckInHandler {
        CheckInHandler::new(self.store.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Auth
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/login - Verify credentials and return the account's role
pub async fn login(
    State(state): State<AttendanceAppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = LoginCommand {
        username: request.username,
        password: request.password,
    };
    let result = state.login_handler().handle(cmd).await?;
    Ok(Json(LoginResponse::from(result)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/health
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// GET /api/professors - All professors with their classes
pub async fn list_professors(
    State(state): State<AttendanceAppState>,
) -> Result<impl IntoResponse, ApiError> {
    let professors = state.list_professors_handler().handle().await?;
    Ok(Json(professors))
}

/// GET /api/professors/:pid - One professor with their classes
pub async fn get_professor(
    State(state): State<AttendanceAppState>,
    ApiPath(professor_id): ApiPath<ProfessorId>,
) -> Result<impl IntoResponse, ApiError> {
    let professor = state
        .get_professor_handler()
        .handle(GetProfessorQuery { professor_id })
        .await?;
    Ok(Json(professor))
}

/// GET /api/professors/:pid/classes - A professor's classes with their name
pub async fn list_professor_classes(
    State(state): State<AttendanceAppState>,
    ApiPath(professor_id): ApiPath<ProfessorId>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .list_professor_classes_handler()
        .handle(ListProfessorClassesQuery { professor_id })
        .await?;
    Ok(Json(ProfessorClassesResponse::from(result)))
}

/// GET /api/classes?search= - Every class, optionally filtered
pub async fn list_all_classes(
    State(state): State<AttendanceAppState>,
    ApiQuery(params): ApiQuery<ClassSearchParams>,
) -> Result<impl IntoResponse, ApiError> {
    let listings = state
        .list_all_classes_handler()
        .handle(ListAllClassesQuery {
            search: params.search,
        })
        .await?;
    let response = listings
        .into_iter()
        .map(ClassListingResponse::from)
        .collect::<Vec<_>>();
    Ok(Json(response))
}

/// GET /api/professors/:pid/classes/:cid/sessions/:sn - Session roster
pub async fn get_roster(
    State(state): State<AttendanceAppState>,
    ApiPath((professor_id, class_id, session_number)): ApiPath<(ProfessorId, ClassId, SessionNumber)>,
) -> Result<impl IntoResponse, ApiError> {
    let session = state
        .get_roster_handler()
        .handle(GetRosterQuery {
            professor_id,
            class_id,
            session_number,
        })
        .await?;
    Ok(Json(RosterResponse::new(professor_id, class_id, &session)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST/DELETE endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/professors/:pid/classes - Create a class
pub async fn add_class(
    State(state): State<AttendanceAppState>,
    ApiPath(professor_id): ApiPath<ProfessorId>,
    ApiJson(request): ApiJson<AddClassRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = AddClassCommand {
        professor_id,
        title: request.title,
        code: request.code,
        section: request.section,
        semester: request.semester,
    };
    let class = state.add_class_handler().handle(cmd).await?;
    Ok((StatusCode::CREATED, Json(class)))
}

/// DELETE /api/professors/:pid/classes/:cid - Delete a class
pub async fn remove_class(
    State(state): State<AttendanceAppState>,
    ApiPath((professor_id, class_id)): ApiPath<(ProfessorId, ClassId)>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .remove_class_handler()
        .handle(RemoveClassCommand {
            professor_id,
            class_id,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/professors/:pid/classes/:cid/sessions/:sn/attend - Manual add
pub async fn record_attendance(
    State(state): State<AttendanceAppState>,
    ApiPath((professor_id, class_id, session_number)): ApiPath<(ProfessorId, ClassId, SessionNumber)>,
    ApiJson(request): ApiJson<AttendeeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = RecordAttendanceCommand {
        professor_id,
        class_id,
        session_number,
        student_name: request.student_name,
    };
    let session = state.record_attendance_handler().handle(cmd).await?;
    Ok(Json(RosterResponse::new(professor_id, class_id, &session)))
}

/// DELETE /api/professors/:pid/classes/:cid/sessions/:sn/attend - Manual remove
pub async fn remove_attendance(
    State(state): State<AttendanceAppState>,
    ApiPath((professor_id, class_id, session_number)): ApiPath<(ProfessorId, ClassId, SessionNumber)>,
    ApiJson(request): ApiJson<AttendeeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = RemoveAttendanceCommand {
        professor_id,
        class_id,
        session_number,
        student_name: request.student_name,
    };
    let session = state.remove_attendance_handler().handle(cmd).await?;
    Ok(Json(RosterResponse::new(professor_id, class_id, &session)))
}

/// POST /api/professors/:pid/classes/:cid/sessions/:sn/check-in - Card swipe
pub async fn check_in(
    State(state): State<AttendanceAppState>,
    ApiPath((professor_id, class_id, session_number)): ApiPath<(ProfessorId, ClassId, SessionNumber)>,
    ApiJson(request): ApiJson<CheckInRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = CheckInCommand {
        payload: request.payload,
        professor_id,
        class_id,
        session_number,
    };
    let name = state.check_in_handler().handle(cmd).await?;
    Ok(Json(CheckInResponse {
        student_name: name.into_string(),
    }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    Attendance(AttendanceError),
    Auth(AuthError),
    /// The request path, query or body could not be extracted.
    Rejected { status: StatusCode, message: String },
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<AttendanceError> for ApiError {
    fn from(err: AttendanceError) -> Self {
        Self::Attendance(err)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self::Auth(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, code, message) = match &self {
            ApiError::Attendance(err) => {
                let status = match err {
                    AttendanceError::NotFound(_) => StatusCode::NOT_FOUND,
                    AttendanceError::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
                    AttendanceError::InvalidCardData => StatusCode::UNPROCESSABLE_ENTITY,
                    AttendanceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, err.code(), err.to_string())
            }
            ApiError::Auth(AuthError::InvalidCredentials) => (
                StatusCode::UNAUTHORIZED,
                ErrorCode::InvalidCredentials,
                "Invalid credentials".to_string(),
            ),
            ApiError::Auth(err @ AuthError::Unavailable(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::InternalError,
                err.to_string(),
            ),
            ApiError::Rejected { status, message } => {
                (*status, ErrorCode::ValidationFailed, message.clone())
            }
        };

        if status.is_server_error() {
            tracing::error!(code = %code, error = %message, "request failed");
        }

        let body = ErrorResponse::new(code.to_string(), message);
        (status, Json(body)).into_response()
    }
}
