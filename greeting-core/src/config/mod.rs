use crate::error::AppError;
use std::env;

/// TCP port used when `PORT` is unset or empty.
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// `PORT` selects the listen port and falls back to [`DEFAULT_PORT`] when
    /// unset or empty. A non-empty value that is not a port number is a
    /// configuration error.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let port = match env::var("PORT") {
            Ok(value) if !value.is_empty() => value.parse().map_err(|_| {
                AppError::ConfigError(anyhow::anyhow!(
                    "PORT must be a TCP port number, got {:?}",
                    value
                ))
            })?,
            _ => {
                tracing::info!("defaulting to port {}", DEFAULT_PORT);
                DEFAULT_PORT
            }
        };

        Ok(Config { port })
    }
}
