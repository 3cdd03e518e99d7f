use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SESSION_EXPIRY_DAYS: i64 = 7;

pub struct Config {
    pub database_url: String,
    pub server_addr: String,
    pub session_expiry_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let session_expiry_days = match std::env::var("SESSION_EXPIRY_DAYS") {
            Ok(value) => value
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "SESSION_EXPIRY_DAYS".to_string(),
                    value,
                })?,
            Err(_) => DEFAULT_SESSION_EXPIRY_DAYS,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            server_addr: std::env::var("SERVER_ADDR")
                .unwrap_or_else(|_| DEFAULT_SERVER_ADDR.to_string()),
            session_expiry_days,
        })
    }
}
