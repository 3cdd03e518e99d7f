use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::reservation::{AdminCreateReservationDto, CreateReservationDto, ReservationDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::reservation::ReservationService,
        state::AppState,
    },
};

/// List all reservations.
///
/// # Returns
/// - `200 OK` - Reservations with embedded time slot and theme
pub async fn get_reservations(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReservationService::new(&state.db);

    let reservations = service.read_reservations().await?;

    let dtos: Vec<ReservationDto> = reservations
        .into_iter()
        .map(|reservation| reservation.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a reservation for the logged-in member.
///
/// # Access Control
/// - Any logged-in member
///
/// # Returns
/// - `201 Created` - Reservation created; `Location` points at the resource
/// - `400 Bad Request` - Malformed date, unknown time/theme, past slot, or
///   slot already booked
/// - `401 Unauthorized` - No member is logged in
pub async fn create_reservation(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = ReservationService::new(&state.db);

    let reservation = service
        .create_reservation(member, &payload.date, payload.time_id, payload.theme_id)
        .await?;

    let dto = reservation.into_dto();

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/reservations/{}", dto.id))],
        Json(dto),
    ))
}

/// Create a reservation on behalf of a named member.
///
/// # Access Control
/// - `Admin` - Only admins can book for other members
///
/// # Returns
/// - `201 Created` - Reservation created; `Location` points at the resource
/// - `400 Bad Request` - Unknown member, or any reservation validation failure
/// - `401 Unauthorized` / `403 Forbidden` - Not logged in / not an admin
pub async fn create_admin_reservation(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AdminCreateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = ReservationService::new(&state.db);

    let reservation = service
        .create_reservation_for_member(
            payload.member_id,
            &payload.date,
            payload.time_id,
            payload.theme_id,
        )
        .await?;

    let dto = reservation.into_dto();

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/reservations/{}", dto.id))],
        Json(dto),
    ))
}

/// Delete a reservation.
///
/// # Access Control
/// - Any logged-in member
///
/// # Returns
/// - `204 No Content` - Reservation deleted
/// - `404 Not Found` - No reservation with that id
pub async fn delete_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = ReservationService::new(&state.db);

    service.delete_reservation(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
