// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, State as AxumState, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use seatline_api::{
    ApiError, BookingService, CancelBookingRequest, CancelBookingResponse, CreateBookingRequest,
    CreateBookingResponse, DashboardResponse, ListEventsResponse, MarkNotificationReadResponse,
    MyBookingsResponse, MyNotificationsResponse, Principal,
};
use seatline_domain::{Capacity, Event, EventStatus, Role, Tenant, User};
use seatline_persistence::{BookingStore, MemoryStore};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::{error, info};

/// Seatline Server - HTTP server for the Seatline booking system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The booking service over the in-memory store.
    service: Arc<BookingService<MemoryStore>>,
}

/// API request body for booking a seat.
///
/// The field is optional so a missing `event_id` surfaces as this
/// server's own validation error rather than a deserialization
/// rejection.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct BookEventApiRequest {
    /// The event to book.
    event_id: Option<i64>,
}

/// API request body for canceling a booking.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CancelBookingApiRequest {
    /// The booking to cancel.
    booking_id: Option<i64>,
}

/// API request for creating a tenant.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateTenantApiRequest {
    /// The tenant's display name (unique).
    name: String,
}

/// API response for a created tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CreateTenantApiResponse {
    /// The assigned tenant identifier.
    tenant_id: i64,
    /// The tenant's display name.
    name: String,
}

/// API request for creating a user.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateUserApiRequest {
    /// The user's name.
    name: String,
    /// The user's role (attendee, organizer, or admin).
    role: String,
    /// The tenant the user belongs to.
    tenant_id: i64,
}

/// API response for a created user.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CreateUserApiResponse {
    /// The assigned user identifier.
    user_id: i64,
    /// The user's name.
    name: String,
    /// The user's role.
    role: String,
    /// The tenant the user belongs to.
    tenant_id: i64,
}

/// API request for creating an event.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateEventApiRequest {
    /// The tenant the event belongs to.
    tenant_id: i64,
    /// The organizer who owns the event.
    organizer_id: i64,
    /// The event title.
    title: String,
    /// The event description.
    description: String,
    /// Optional location text.
    location: Option<String>,
    /// When the event takes place (RFC 3339).
    date: String,
    /// The maximum number of confirmed bookings.
    capacity: u32,
    /// The lifecycle state (draft, published, or cancelled).
    status: String,
}

/// API response for a created event.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CreateEventApiResponse {
    /// The assigned event identifier.
    event_id: i64,
    /// The event title.
    title: String,
    /// The lifecycle state.
    status: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
#[derive(Debug)]
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Unwraps a JSON body, mapping any extractor rejection (malformed
/// JSON, wrong content type, type mismatch) to a 400 in this server's
/// error shape.
fn require_json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, HttpError> {
    body.map(|Json(req)| req).map_err(|rejection| {
        HttpError::from(ApiError::Validation {
            field: String::from("body"),
            message: rejection.body_text(),
        })
    })
}

/// Unwraps a required request field, mapping a missing value to a 400
/// naming the field.
fn require_field<T>(value: Option<T>, field: &str, message: &str) -> Result<T, HttpError> {
    value.ok_or_else(|| {
        HttpError::from(ApiError::Validation {
            field: field.to_string(),
            message: message.to_string(),
        })
    })
}

/// Resolves the calling principal from the `x-user-id` header.
///
/// The header carries the caller's numeric user identifier; the role
/// and tenant come from the stored user record. Credential validation
/// is out of scope, identification is not.
fn resolve_principal(
    service: &BookingService<MemoryStore>,
    headers: &HeaderMap,
) -> Result<Principal, HttpError> {
    let raw: &str = headers
        .get("x-user-id")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| HttpError::from(ApiError::Unauthorized {
            reason: String::from("missing x-user-id header"),
        }))?;
    let user_id: i64 = raw.parse().map_err(|_| {
        HttpError::from(ApiError::Unauthorized {
            reason: format!("invalid x-user-id header: '{raw}'"),
        })
    })?;
    let user: User = service
        .store()
        .user(user_id)
        .map_err(|e| {
            error!(error = %e, "user lookup failed");
            HttpError {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: e.to_string(),
            }
        })?
        .ok_or_else(|| {
            HttpError::from(ApiError::Unauthorized {
                reason: format!("unknown user {user_id}"),
            })
        })?;
    Ok(Principal::new(user.user_id, user.role, user.tenant_id))
}

/// Handler for POST `/book-event` endpoint.
///
/// Books a seat at an event for the caller.
async fn handle_book_event(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    body: Result<Json<BookEventApiRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateBookingResponse>), HttpError> {
    let principal: Principal = resolve_principal(&app_state.service, &headers)?;
    let req: BookEventApiRequest = require_json_body(body)?;
    let event_id: i64 = require_field(req.event_id, "event_id", "Event ID is required")?;
    info!(
        user_id = principal.user_id,
        event_id, "Handling book_event request"
    );

    let response: CreateBookingResponse = app_state
        .service
        .create_booking(&principal, &CreateBookingRequest { event_id })?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for POST `/cancel-booking` endpoint.
///
/// Cancels one of the caller's bookings.
async fn handle_cancel_booking(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    body: Result<Json<CancelBookingApiRequest>, JsonRejection>,
) -> Result<Json<CancelBookingResponse>, HttpError> {
    let principal: Principal = resolve_principal(&app_state.service, &headers)?;
    let req: CancelBookingApiRequest = require_json_body(body)?;
    let booking_id: i64 = require_field(req.booking_id, "booking_id", "Booking ID is required")?;
    info!(
        user_id = principal.user_id,
        booking_id, "Handling cancel_booking request"
    );

    let response: CancelBookingResponse = app_state
        .service
        .cancel_booking(&principal, &CancelBookingRequest { booking_id })?;
    Ok(Json(response))
}

/// Handler for GET `/my-bookings` endpoint.
///
/// Lists the caller's bookings, newest first.
async fn handle_my_bookings(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Json<MyBookingsResponse>, HttpError> {
    let principal: Principal = resolve_principal(&app_state.service, &headers)?;
    let response: MyBookingsResponse = app_state.service.list_my_bookings(&principal)?;
    Ok(Json(response))
}

/// Handler for GET `/my-notifications` endpoint.
///
/// Lists the caller's unread notifications, newest first.
async fn handle_my_notifications(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Json<MyNotificationsResponse>, HttpError> {
    let principal: Principal = resolve_principal(&app_state.service, &headers)?;
    let response: MyNotificationsResponse = app_state.service.list_my_notifications(&principal)?;
    Ok(Json(response))
}

/// Handler for POST `/notifications/{id}/read` endpoint.
///
/// Marks one of the caller's notifications as read.
async fn handle_mark_notification_read(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Path(notification_id): Path<i64>,
) -> Result<Json<MarkNotificationReadResponse>, HttpError> {
    let principal: Principal = resolve_principal(&app_state.service, &headers)?;
    info!(
        user_id = principal.user_id,
        notification_id, "Handling mark_notification_read request"
    );

    let response: MarkNotificationReadResponse = app_state
        .service
        .mark_notification_read(&principal, notification_id)?;
    Ok(Json(response))
}

/// Handler for GET `/dashboard` endpoint.
///
/// Returns the tenant dashboard for an organizer or admin.
async fn handle_dashboard(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Json<DashboardResponse>, HttpError> {
    let principal: Principal = resolve_principal(&app_state.service, &headers)?;
    let response: DashboardResponse = app_state.service.dashboard(&principal)?;
    Ok(Json(response))
}

/// Handler for GET `/events` endpoint.
///
/// Lists published events visible to the caller.
async fn handle_list_events(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Json<ListEventsResponse>, HttpError> {
    let principal: Principal = resolve_principal(&app_state.service, &headers)?;
    let response: ListEventsResponse = app_state.service.list_events(&principal)?;
    Ok(Json(response))
}

/// Handler for POST `/tenants` endpoint.
///
/// Creates a tenant. Thin plumbing so the system is operable without a
/// separate seeder; no engine logic runs here.
async fn handle_create_tenant(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateTenantApiRequest>,
) -> Result<(StatusCode, Json<CreateTenantApiResponse>), HttpError> {
    info!(name = %req.name, "Handling create_tenant request");

    let tenant: Tenant = app_state
        .service
        .store()
        .create_tenant(&req.name)
        .map_err(|e| HttpError::from(seatline_api::translate_persistence_error(e)))?;
    Ok((
        StatusCode::CREATED,
        Json(CreateTenantApiResponse {
            tenant_id: tenant.tenant_id,
            name: tenant.name,
        }),
    ))
}

/// Handler for POST `/users` endpoint.
///
/// Creates a user within a tenant.
async fn handle_create_user(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateUserApiRequest>,
) -> Result<(StatusCode, Json<CreateUserApiResponse>), HttpError> {
    info!(name = %req.name, role = %req.role, tenant_id = req.tenant_id, "Handling create_user request");

    let role: Role = Role::from_str(&req.role).map_err(|e| HttpError {
        status: StatusCode::BAD_REQUEST,
        message: e.to_string(),
    })?;
    let user: User = app_state
        .service
        .store()
        .create_user(&req.name, role, req.tenant_id)
        .map_err(|e| HttpError::from(seatline_api::translate_persistence_error(e)))?;
    Ok((
        StatusCode::CREATED,
        Json(CreateUserApiResponse {
            user_id: user.user_id,
            name: user.name,
            role: user.role.to_string(),
            tenant_id: user.tenant_id,
        }),
    ))
}

/// Handler for POST `/events` endpoint.
///
/// Creates an event within a tenant.
async fn handle_create_event(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateEventApiRequest>,
) -> Result<(StatusCode, Json<CreateEventApiResponse>), HttpError> {
    info!(title = %req.title, tenant_id = req.tenant_id, "Handling create_event request");

    let status: EventStatus = EventStatus::from_str(&req.status).map_err(|e| HttpError {
        status: StatusCode::BAD_REQUEST,
        message: e.to_string(),
    })?;
    let capacity: Capacity = Capacity::new(req.capacity).map_err(|e| HttpError {
        status: StatusCode::BAD_REQUEST,
        message: e.to_string(),
    })?;
    let date: OffsetDateTime = OffsetDateTime::parse(&req.date, &Rfc3339).map_err(|e| {
        HttpError {
            status: StatusCode::BAD_REQUEST,
            message: format!("Invalid date '{}': {e}", req.date),
        }
    })?;
    let event: Event = app_state
        .service
        .store()
        .create_event(
            req.tenant_id,
            req.organizer_id,
            &req.title,
            &req.description,
            req.location.as_deref(),
            date,
            capacity,
            status,
        )
        .map_err(|e| HttpError::from(seatline_api::translate_persistence_error(e)))?;
    Ok((
        StatusCode::CREATED,
        Json(CreateEventApiResponse {
            event_id: event.event_id,
            title: event.title,
            status: event.status.to_string(),
        }),
    ))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/book-event", post(handle_book_event))
        .route("/cancel-booking", post(handle_cancel_booking))
        .route("/my-bookings", get(handle_my_bookings))
        .route("/my-notifications", get(handle_my_notifications))
        .route("/notifications/{id}/read", post(handle_mark_notification_read))
        .route("/dashboard", get(handle_dashboard))
        .route("/events", get(handle_list_events))
        .route("/events", post(handle_create_event))
        .route("/tenants", post(handle_create_tenant))
        .route("/users", post(handle_create_user))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Seatline Server");

    let store: Arc<MemoryStore> = Arc::new(MemoryStore::new());
    let app_state: AppState = AppState {
        service: Arc::new(BookingService::new(store)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
