//! Server-side domain models.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities with their validation rules. Domain models are converted from
//! entity models at the repository boundary and transformed to DTOs at the controller
//! boundary. Constructors validate raw input (date and time strings), so a value of
//! one of these types is well-formed by construction.

pub mod member;
pub mod reservation;
pub mod theme;
pub mod time;
