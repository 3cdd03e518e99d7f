//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating repository calls across entities
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod member;
pub mod reservation;
pub mod theme;
pub mod time;
