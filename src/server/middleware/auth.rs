use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::member::MemberRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::member::Member,
};

pub enum Permission {
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session to a member and checks the required permissions.
    ///
    /// An empty permission list grants access to any logged-in member; admin
    /// endpoints pass `&[Permission::Admin]`.
    ///
    /// # Returns
    /// - `Ok(Member)` - Logged-in member satisfying every permission
    /// - `Err(AuthError::MemberNotInSession)` - No member id in the session
    /// - `Err(AuthError::MemberNotInDatabase)` - Session names a deleted member
    /// - `Err(AuthError::AccessDenied)` - Member lacks a required permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<Member, AppError> {
        let member_repo = MemberRepository::new(self.db);

        let Some(member_id) = AuthSession::new(self.session).get_member_id().await? else {
            return Err(AuthError::MemberNotInSession.into());
        };

        let Some(member) = member_repo.find_by_id(member_id).await? else {
            return Err(AuthError::MemberNotInDatabase(member_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !member.is_admin() {
                        return Err(AuthError::AccessDenied(
                            member_id,
                            "Member attempted an admin operation without the admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(member)
    }
}
