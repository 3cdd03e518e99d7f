use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::theme::{CreateThemeDto, ThemeDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::theme::ThemeService,
        state::AppState,
    },
};

/// List all themes.
///
/// # Returns
/// - `200 OK` - All themes ordered by id
pub async fn get_themes(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ThemeService::new(&state.db);

    let themes = service.read_themes().await?;

    let dtos: Vec<ThemeDto> = themes.into_iter().map(|theme| theme.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// List themes ranked by popularity.
///
/// Themes ordered by reservation count over the most recent completed
/// seven-day window, most reserved first.
///
/// # Returns
/// - `200 OK` - Ranked themes
pub async fn get_popular_themes(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = ThemeService::new(&state.db);

    let themes = service.read_popular_themes().await?;

    let dtos: Vec<ThemeDto> = themes.into_iter().map(|theme| theme.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a new theme.
///
/// # Access Control
/// - `Admin` - Only admins can manage themes
///
/// # Returns
/// - `201 Created` - Theme created; `Location` points at the resource
/// - `400 Bad Request` - A theme with that name already exists
/// - `401 Unauthorized` / `403 Forbidden` - Not logged in / not an admin
pub async fn create_theme(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateThemeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = ThemeService::new(&state.db);

    let theme = service
        .create_theme(payload.name, payload.description, payload.thumbnail)
        .await?;

    let dto = theme.into_dto();

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/themes/{}", dto.id))],
        Json(dto),
    ))
}

/// Delete a theme.
///
/// # Access Control
/// - `Admin` - Only admins can manage themes
///
/// # Returns
/// - `204 No Content` - Theme deleted
/// - `400 Bad Request` - A reservation still references the theme
/// - `404 Not Found` - No theme with that id
pub async fn delete_theme(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = ThemeService::new(&state.db);

    service.delete_theme(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
