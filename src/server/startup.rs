use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{config::Config, error::AppError, middleware::session::SESSION_COOKIE_NAME};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer that issues the login cookie.
///
/// Sessions are stored in the same Sqlite database as the application data,
/// using the underlying SQLx pool of the SeaORM connection. The cookie is
/// HTTP-only and named `token`; its value is the opaque session id, and it
/// expires after the configured period of inactivity.
///
/// # Arguments
/// - `db` - Connected database whose pool backs the session store
/// - `config` - Application configuration containing the session expiry
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Session layer ready to be applied to the router
/// - `Err(AppError)` - Failed to create the session store table
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let store = SqliteStore::new(pool.clone());

    store.migrate().await?;

    Ok(SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(
            config.session_expiry_days,
        ))))
}
