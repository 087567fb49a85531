use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    pub db_max_connections: u32,
    pub db_acquire_timeout_secs: u64,
    pub run_migrations: bool,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: parse_env("PORT", 8080).context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            db_max_connections: parse_env("DB_MAX_CONNECTIONS", 10)
                .context("DB_MAX_CONNECTIONS must be a positive integer")?,
            db_acquire_timeout_secs: parse_env("DB_ACQUIRE_TIMEOUT_SECS", 5)
                .context("DB_ACQUIRE_TIMEOUT_SECS must be a number of seconds")?,
            run_migrations: parse_env("RUN_MIGRATIONS", true)
                .context("RUN_MIGRATIONS must be true or false")?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 20 * 1024 * 1024)
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("invalid value '{raw}' for {key}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_accepts_trimmed_numbers() {
        let port: u16 = parse_value("PORT", " 9090 ").unwrap();
        assert_eq!(port, 9090);
    }

    #[test]
    fn test_parse_value_rejects_garbage() {
        let err = parse_value::<u16>("PORT", "eighty").unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_parse_value_bool() {
        assert!(!parse_value::<bool>("RUN_MIGRATIONS", "false").unwrap());
        assert!(parse_value::<bool>("RUN_MIGRATIONS", "yes").is_err());
    }

    #[test]
    fn test_parse_env_falls_back_to_default() {
        let size: usize = parse_env("JOBASSIST_TEST_UNSET_VARIABLE", 42).unwrap();
        assert_eq!(size, 42);
    }
}
