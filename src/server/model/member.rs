//! Member domain model.

use entity::member::Role;

use crate::model::member::MemberDto;

/// A registered member.
///
/// The stored password never crosses the repository boundary: credential
/// matching happens in the database query, and this model carries identity
/// and role only.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl Member {
    /// Converts an entity model to a member domain model at the repository
    /// boundary, dropping the password column.
    pub fn from_entity(entity: entity::member::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            role: entity.role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Converts the member domain model to a DTO for API responses.
    pub fn into_dto(self) -> MemberDto {
        MemberDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role.as_str().to_string(),
        }
    }
}
