//! Theme domain model.

use crate::model::theme::ThemeDto;

/// A room-escape game variant offered for reservation.
///
/// Name, description, and thumbnail are all required by construction.
/// Name uniqueness is a business rule enforced by the theme service.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub thumbnail: String,
}

impl Theme {
    pub fn new(id: i32, name: String, description: String, thumbnail: String) -> Self {
        Self {
            id,
            name,
            description,
            thumbnail,
        }
    }

    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::theme::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            thumbnail: entity.thumbnail,
        }
    }

    pub fn into_dto(self) -> ThemeDto {
        ThemeDto {
            id: self.id,
            name: self.name,
            description: self.description,
            thumbnail: self.thumbnail,
        }
    }
}
