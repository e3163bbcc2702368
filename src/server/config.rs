use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://nskk_school.db?mode=rwc";
const DEFAULT_SECRET_KEY: &str = "dev-secret-key-change-in-production";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

/// Shortest secret accepted for deriving the session cookie signing key.
pub const MIN_SECRET_KEY_LEN: usize = 32;

pub struct Config {
    pub database_url: String,
    pub secret_key: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Every variable has a default. Values that are present but unusable are
    /// rejected rather than silently replaced.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let secret_key = match lookup("SECRET_KEY") {
            Some(key) => key,
            None => {
                tracing::warn!("SECRET_KEY is not set, using the insecure development default");
                DEFAULT_SECRET_KEY.to_string()
            }
        };
        if secret_key.len() < MIN_SECRET_KEY_LEN {
            return Err(ConfigError::InvalidEnvVar {
                name: "SECRET_KEY".to_string(),
                reason: format!("must be at least {} bytes long", MIN_SECRET_KEY_LEN),
            }
            .into());
        }

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(value) => value.parse::<u16>().map_err(|e| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            secret_key,
            host,
            port,
        })
    }
}
