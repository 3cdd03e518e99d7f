//! Member factory for creating test member entities.
//!
//! This module provides factory methods for creating member entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use entity::member::Role;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test members with customizable fields.
///
/// Provides a builder pattern for creating member entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::member::MemberFactory;
///
/// let member = MemberFactory::new(&db)
///     .email("admin@example.com")
///     .password("secret")
///     .role(Role::Admin)
///     .build()
///     .await?;
/// ```
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    password: String,
    role: Role,
}

impl<'a> MemberFactory<'a> {
    /// Creates a new MemberFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Member {id}"` where id is auto-incremented
    /// - email: `"member{id}@example.com"`
    /// - password: `"password"`
    /// - role: `Role::User`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Member {}", id),
            email: format!("member{}@example.com", id),
            password: "password".to_string(),
            role: Role::User,
        }
    }

    /// Sets the display name for the member.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the email address for the member.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the password for the member.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Sets the role for the member.
    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Builds and inserts the member entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::member::Model)` - Created member entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::member::Model, DbErr> {
        entity::member::ActiveModel {
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(self.password),
            role: ActiveValue::Set(self.role),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a member with default values.
///
/// Shorthand for `MemberFactory::new(db).build().await`.
pub async fn create_member(db: &DatabaseConnection) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db).build().await
}

/// Creates a member with the admin role.
///
/// Shorthand for `MemberFactory::new(db).role(Role::Admin).build().await`.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db).role(Role::Admin).build().await
}
