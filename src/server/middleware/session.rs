//! Type-safe session management wrapper.
//!
//! The raw tower-sessions `Session` is a stringly-typed key/value store. This
//! module wraps it behind a focused interface so the member-id key is written
//! and read in exactly one place, preventing typos and type mismatches.

use tower_sessions::Session;

use crate::server::error::AppError;

/// Name of the session cookie issued to clients.
///
/// The cookie value is the opaque tower-sessions id; the member id itself
/// never leaves the server.
pub const SESSION_COOKIE_NAME: &str = "token";

/// Session key holding the logged-in member's id.
const SESSION_AUTH_MEMBER_ID: &str = "auth:member";

/// Authentication session management.
///
/// Handles the logged-in member's identity: storing the member id after a
/// successful login, reading it back on authenticated requests, and clearing
/// it on logout.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the member's id in the session.
    ///
    /// Called after successful credential verification to establish a
    /// logged-in session.
    ///
    /// # Returns
    /// - `Ok(())` - Member id successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_member_id(&self, member_id: i32) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_MEMBER_ID, member_id)
            .await?;
        Ok(())
    }

    /// Retrieves the logged-in member's id from the session.
    ///
    /// # Returns
    /// - `Ok(Some(member_id))` - A member is logged in
    /// - `Ok(None)` - No member in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_member_id(&self) -> Result<Option<i32>, AppError> {
        let member_id = self.session.get::<i32>(SESSION_AUTH_MEMBER_ID).await?;
        Ok(member_id)
    }

    /// Checks if a member is currently logged in.
    ///
    /// # Returns
    /// - `Ok(true)` - A member is logged in
    /// - `Ok(false)` - No member in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.get_member_id().await?.is_some())
    }

    /// Clears all data from the session.
    ///
    /// Used during logout to drop the authentication state.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
