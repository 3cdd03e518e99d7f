use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::member::LoginDto,
    server::{error::AppError, middleware::auth::AuthGuard, service::member::MemberService, state::AppState},
};

/// Log a member in.
///
/// Verifies the submitted email and password pair and establishes a session.
/// The session layer issues the HTTP-only `token` cookie carrying the opaque
/// session id; the member id itself never reaches the client.
///
/// # Returns
/// - `200 OK` - Credentials match; `token` cookie set
/// - `401 Unauthorized` - No member matches the pair; no cookie set
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = MemberService::new(&state.db);

    service.login(&session, payload).await?;

    Ok(StatusCode::OK)
}

/// Log the member out.
///
/// Clears the session; the cookie no longer identifies anyone.
///
/// # Returns
/// - `204 No Content` - Session cleared (also for anonymous callers)
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let service = MemberService::new(&state.db);

    service.logout(&session).await;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the logged-in member.
///
/// # Returns
/// - `200 OK` - Member behind the session (id, name, email, role)
/// - `401 Unauthorized` - No member is logged in
pub async fn login_check(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}
