use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::server::{
    controller::{
        auth::{login, login_check, logout},
        reservation::{
            create_admin_reservation, create_reservation, delete_reservation, get_reservations,
        },
        theme::{create_theme, delete_theme, get_popular_themes, get_themes},
        time::{create_time, delete_time, get_times},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/login/check", get(login_check))
        .route("/logout", post(logout))
        .route("/reservations", get(get_reservations).post(create_reservation))
        .route("/reservations/{id}", delete(delete_reservation))
        .route("/admin/reservations", post(create_admin_reservation))
        .route("/times", get(get_times).post(create_time))
        .route("/times/{id}", delete(delete_time))
        .route("/themes", get(get_themes).post(create_theme))
        .route("/themes/popular", get(get_popular_themes))
        .route("/themes/{id}", delete(delete_theme))
}
