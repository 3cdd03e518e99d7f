//! Member service for login and logout.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    model::member::LoginDto,
    server::{
        data::member::MemberRepository,
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        model::member::Member,
    },
};

/// Service providing login and logout for members.
pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies the submitted credentials and establishes a logged-in session.
    ///
    /// Credential matching happens against the email and password pair as
    /// stored. When no member matches, the attempt is rejected and the session
    /// stays untouched, so no cookie value ever identifies a member.
    ///
    /// # Returns
    /// - `Ok(Member)` - Credentials match; the session now carries the member id
    /// - `Err(AuthError::InvalidCredentials)` - No member matches the pair
    pub async fn login(&self, session: &Session, credentials: LoginDto) -> Result<Member, AppError> {
        let member_repo = MemberRepository::new(self.db);

        let Some(member) = member_repo
            .find_by_email_and_password(&credentials.email, &credentials.password)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        AuthSession::new(session).set_member_id(member.id).await?;

        Ok(member)
    }

    /// Clears the session, logging the member out.
    pub async fn logout(&self, session: &Session) {
        AuthSession::new(session).clear().await;
    }
}
