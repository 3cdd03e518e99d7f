use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No member matches the submitted email and password pair.
    ///
    /// Distinct from a malformed request: the request body was well-formed but
    /// the credentials are unknown. Results in a 401 Unauthorized response and
    /// no session cookie is established.
    #[error("No member matches the given email and password")]
    InvalidCredentials,

    /// The session carries no logged-in member.
    ///
    /// The request reached an endpoint that requires authentication without a
    /// valid `token` cookie. Results in a 401 Unauthorized response.
    #[error("No member is logged in to this session")]
    MemberNotInSession,

    /// The session names a member id that no longer exists.
    ///
    /// The session outlived its member row. Results in a 404 Not Found response.
    #[error("Member {0} from session no longer exists")]
    MemberNotInDatabase(i32),

    /// The member lacks the permission required by the endpoint.
    ///
    /// Results in a 403 Forbidden response. The message is logged server-side;
    /// the client receives a generic denial.
    #[error("Member {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-facing
/// error messages:
/// - `InvalidCredentials` / `MemberNotInSession` → 401 Unauthorized
/// - `MemberNotInDatabase` → 404 Not Found with "Member not found"
/// - `AccessDenied` → 403 Forbidden with a generic message
///
/// Client-facing messages stay generic to avoid leaking which part of the
/// credentials was wrong or what the denied operation was.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid email or password".to_string(),
                }),
            )
                .into_response(),
            Self::MemberNotInSession => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Login required".to_string(),
                }),
            )
                .into_response(),
            Self::MemberNotInDatabase(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "Member not found".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(member_id, reason) => {
                tracing::debug!("access denied for member {}: {}", member_id, reason);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You don't have permission to perform this action".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
