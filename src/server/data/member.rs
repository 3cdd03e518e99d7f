//! Member data repository for database operations.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::server::model::member::Member;

/// Repository providing database operations for members.
pub struct MemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a member by id.
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - Member found
    /// - `Ok(None)` - No member with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Member>, DbErr> {
        let entity = entity::prelude::Member::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Member::from_entity))
    }

    /// Finds a member matching the given email and password pair.
    ///
    /// Credential matching happens in the query; the password never leaves the
    /// data layer. A `None` here means the login attempt must be rejected.
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - Credentials match a member
    /// - `Ok(None)` - No member matches the pair
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Member>, DbErr> {
        let entity = entity::prelude::Member::find()
            .filter(entity::member::Column::Email.eq(email))
            .filter(entity::member::Column::Password.eq(password))
            .one(self.db)
            .await?;

        Ok(entity.map(Member::from_entity))
    }
}
