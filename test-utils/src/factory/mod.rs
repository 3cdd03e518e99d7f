//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let member = factory::member::create_member(&db).await?;
//!     let theme = factory::theme::create_theme(&db).await?;
//!
//!     // Create with all dependencies
//!     let (member, time, theme, reservation) =
//!         factory::helpers::create_reservation_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let member = factory::member::MemberFactory::new(&db)
//!     .email("admin@example.com")
//!     .role(entity::member::Role::Admin)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `member` - Create member entities
//! - `reservation_time` - Create reservation time slot entities
//! - `theme` - Create theme entities
//! - `reservation` - Create reservation entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod helpers;
pub mod member;
pub mod reservation;
pub mod reservation_time;
pub mod theme;

// Re-export commonly used factory functions for concise usage
pub use member::{create_admin, create_member};
pub use reservation::create_reservation;
pub use reservation_time::{create_time, create_time_at};
pub use theme::create_theme;
