use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::time::{CreateReservationTimeDto, ReservationTimeDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::time::ReservationTimeService,
        state::AppState,
    },
};

/// List all time slots.
///
/// # Returns
/// - `200 OK` - All slots ordered by start time
pub async fn get_times(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ReservationTimeService::new(&state.db);

    let times = service.read_times().await?;

    let dtos: Vec<ReservationTimeDto> = times.into_iter().map(|time| time.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a new time slot.
///
/// # Access Control
/// - `Admin` - Only admins can manage time slots
///
/// # Returns
/// - `201 Created` - Slot created; `Location` points at the resource
/// - `400 Bad Request` - Start time does not match `HH:mm`
/// - `401 Unauthorized` / `403 Forbidden` - Not logged in / not an admin
pub async fn create_time(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateReservationTimeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = ReservationTimeService::new(&state.db);

    let time = service.create_time(&payload.start_at).await?;

    let dto = time.into_dto();

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/times/{}", dto.id))],
        Json(dto),
    ))
}

/// Delete a time slot.
///
/// # Access Control
/// - `Admin` - Only admins can manage time slots
///
/// # Returns
/// - `204 No Content` - Slot deleted
/// - `400 Bad Request` - A reservation still references the slot
/// - `404 Not Found` - No slot with that id
pub async fn delete_time(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = ReservationTimeService::new(&state.db);

    service.delete_time(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
