//! Theme repository for database operations, including the popularity ranking query.

use chrono::NaiveDate;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, ExprTrait, JoinType, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};

use crate::server::model::theme::Theme;

/// Repository providing database operations for themes.
pub struct ThemeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ThemeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new theme.
    ///
    /// # Returns
    /// - `Ok(Theme)` - The created theme with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        name: String,
        description: String,
        thumbnail: String,
    ) -> Result<Theme, DbErr> {
        let entity = entity::theme::ActiveModel {
            name: ActiveValue::Set(name),
            description: ActiveValue::Set(description),
            thumbnail: ActiveValue::Set(thumbnail),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Theme::from_entity(entity))
    }

    /// Gets all themes ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Theme>, DbErr> {
        let entities = entity::prelude::Theme::find()
            .order_by_asc(entity::theme::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Theme::from_entity).collect())
    }

    /// Finds a theme by id.
    ///
    /// # Returns
    /// - `Ok(Some(Theme))` - Theme found
    /// - `Ok(None)` - No theme with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Theme>, DbErr> {
        let entity = entity::prelude::Theme::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Theme::from_entity))
    }

    /// Checks whether a theme with the given name already exists.
    ///
    /// Used by the theme service to enforce name uniqueness before insert.
    pub async fn exists_by_name(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Theme::find()
            .filter(entity::theme::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Ranks themes by how often they were reserved within a date window.
    ///
    /// Joins themes to their reservations, keeps reservations whose date falls
    /// inside `[start, end]` (inclusive), and orders by reservation count
    /// descending. Equal counts order by theme id ascending so the ranking is
    /// deterministic. Themes without an in-window reservation are not ranked.
    ///
    /// # Arguments
    /// - `start`: First date of the window (inclusive)
    /// - `end`: Last date of the window (inclusive)
    ///
    /// # Returns
    /// - `Ok(themes)`: Ranked themes, most reserved first
    /// - `Err(DbErr)`: Database error
    pub async fn ranked_by_reservation_count(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Theme>, DbErr> {
        let entities = entity::prelude::Theme::find()
            .join(JoinType::InnerJoin, entity::theme::Relation::Reservation.def())
            .filter(entity::reservation::Column::Date.between(start, end))
            .group_by(entity::theme::Column::Id)
            .order_by(
                Expr::col((
                    entity::reservation::Entity,
                    entity::reservation::Column::Id,
                ))
                .count(),
                Order::Desc,
            )
            .order_by_asc(entity::theme::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Theme::from_entity).collect())
    }

    /// Deletes a theme by id.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Theme::delete_by_id(id).exec(self.db).await?;
        Ok(())
    }
}
