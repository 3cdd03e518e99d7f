//! Theme service, including the popularity ranking.

use chrono::{Days, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{reservation::ReservationRepository, theme::ThemeRepository},
    error::AppError,
    model::theme::Theme,
};

/// Number of days back the popularity window opens.
const POPULARITY_WINDOW_FIRST_DAY: u64 = 7;
/// Number of days back the popularity window closes.
const POPULARITY_WINDOW_LAST_DAY: u64 = 1;

/// Service providing business logic for themes.
pub struct ThemeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ThemeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all themes ordered by id.
    pub async fn read_themes(&self) -> Result<Vec<Theme>, AppError> {
        let repo = ThemeRepository::new(self.db);

        let themes = repo.get_all().await?;

        Ok(themes)
    }

    /// Ranks themes by reservation count over the most recent completed
    /// seven-day window.
    ///
    /// The window is `[today - 7 days, today - 1 day]` inclusive, today being
    /// the current UTC date, so today's still-accumulating reservations never
    /// influence the ranking. Ties order by theme id ascending.
    pub async fn read_popular_themes(&self) -> Result<Vec<Theme>, AppError> {
        let repo = ThemeRepository::new(self.db);

        let today = Utc::now().date_naive();
        let start = today - Days::new(POPULARITY_WINDOW_FIRST_DAY);
        let end = today - Days::new(POPULARITY_WINDOW_LAST_DAY);

        let themes = repo.ranked_by_reservation_count(start, end).await?;

        Ok(themes)
    }

    /// Creates a new theme, enforcing name uniqueness.
    ///
    /// # Returns
    /// - `Ok(Theme)` - Created theme with its assigned id
    /// - `Err(AppError::BadRequest)` - A theme with that name already exists
    pub async fn create_theme(
        &self,
        name: String,
        description: String,
        thumbnail: String,
    ) -> Result<Theme, AppError> {
        let repo = ThemeRepository::new(self.db);

        if repo.exists_by_name(&name).await? {
            return Err(AppError::BadRequest(
                "A theme with that name already exists".to_string(),
            ));
        }

        let theme = repo.create(name, description, thumbnail).await?;

        Ok(theme)
    }

    /// Deletes a theme, refusing while any reservation references it.
    ///
    /// # Returns
    /// - `Ok(())` - Theme deleted
    /// - `Err(AppError::NotFound)` - No theme with that id
    /// - `Err(AppError::BadRequest)` - A reservation still uses the theme
    pub async fn delete_theme(&self, id: i32) -> Result<(), AppError> {
        let theme_repo = ThemeRepository::new(self.db);
        let reservation_repo = ReservationRepository::new(self.db);

        if theme_repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Theme not found".to_string()));
        }

        if reservation_repo.exists_by_theme(id).await? {
            return Err(AppError::BadRequest(
                "A reservation using this theme exists".to_string(),
            ));
        }

        theme_repo.delete(id).await?;

        Ok(())
    }
}
