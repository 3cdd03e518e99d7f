//! HTTP request handlers for the API.
//!
//! Controllers translate between the wire format (DTOs) and the service layer:
//! they resolve the session to a member where an endpoint requires one, convert
//! request bodies into service calls, and map results to status codes, bodies,
//! and headers.

pub mod auth;
pub mod reservation;
pub mod theme;
pub mod time;
