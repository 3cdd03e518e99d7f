//! Theme factory for creating test theme entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test themes with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::theme::ThemeFactory;
///
/// let theme = ThemeFactory::new(&db)
///     .name("Escape the Library")
///     .build()
///     .await?;
/// ```
pub struct ThemeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
    thumbnail: String,
}

impl<'a> ThemeFactory<'a> {
    /// Creates a new ThemeFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Theme {id}"` where id is auto-incremented
    /// - description: `"Description {id}"`
    /// - thumbnail: `"https://example.com/thumbnails/{id}.jpg"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Theme {}", id),
            description: format!("Description {}", id),
            thumbnail: format!("https://example.com/thumbnails/{}.jpg", id),
        }
    }

    /// Sets the name for the theme.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the description for the theme.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the thumbnail URL for the theme.
    pub fn thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = thumbnail.into();
        self
    }

    /// Builds and inserts the theme entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::theme::Model)` - Created theme entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::theme::Model, DbErr> {
        entity::theme::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            thumbnail: ActiveValue::Set(self.thumbnail),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a theme with default values.
///
/// Shorthand for `ThemeFactory::new(db).build().await`.
pub async fn create_theme(db: &DatabaseConnection) -> Result<entity::theme::Model, DbErr> {
    ThemeFactory::new(db).build().await
}
