use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub store: StoreConfig,
    pub quiz: QuizConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Origin sent in `Access-Control-Allow-Origin` on every response
    pub cors_allowed_origin: String,
}

/// Which persistence backend serves the API
#[derive(Debug, Clone)]
pub enum StoreConfig {
    Postgres(DatabaseConfig),
    Memory,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

#[derive(Debug, Clone)]
pub struct QuizConfig {
    /// Fixed seed for reproducible quiz draws
    pub rng_seed: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// `.env` is expected to have been loaded already.
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            app: AppConfig::from_env()?,
            store: StoreConfig::from_env()?,
            quiz: QuizConfig::from_env()?,
            swagger: SwaggerConfig::from_env(),
        })
    }
}

/// Parse `name` from the environment, falling back to `default` when unset
fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, String> {
    match env::var(name) {
        Ok(raw) => parse_value(name, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T: FromStr>(name: &str, raw: &str) -> Result<T, String> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| format!("{} must be a valid number", name))
}

impl AppConfig {
    const DEFAULT_PORT: u16 = 5000;
    const DEFAULT_CORS_ALLOWED_ORIGIN: &'static str = "http://localhost:3000";

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = parse_var("PORT", Self::DEFAULT_PORT)?;
        let cors_allowed_origin = env::var("CORS_ALLOWED_ORIGIN")
            .map(|s| s.trim().to_string())
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_CORS_ALLOWED_ORIGIN.to_string());

        Ok(Self {
            host,
            port,
            cors_allowed_origin,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, String> {
        let backend = env::var("STORE_BACKEND").unwrap_or_else(|_| "postgres".to_string());

        match backend.trim().to_lowercase().as_str() {
            "postgres" => Ok(StoreConfig::Postgres(DatabaseConfig::from_env()?)),
            "memory" => Ok(StoreConfig::Memory),
            other => Err(format!(
                "STORE_BACKEND must be 'postgres' or 'memory', got '{}'",
                other
            )),
        }
    }
}

impl DatabaseConfig {
    // Default values for database connection pool (conservative defaults for small-medium apps)
    const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes

    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;

        Ok(Self {
            url,
            max_connections: parse_var("DB_MAX_CONNECTIONS", Self::DEFAULT_MAX_CONNECTIONS)?,
            min_connections: parse_var("DB_MIN_CONNECTIONS", Self::DEFAULT_MIN_CONNECTIONS)?,
            acquire_timeout_secs: parse_var(
                "DB_ACQUIRE_TIMEOUT_SECS",
                Self::DEFAULT_ACQUIRE_TIMEOUT_SECS,
            )?,
            idle_timeout_secs: parse_var("DB_IDLE_TIMEOUT_SECS", Self::DEFAULT_IDLE_TIMEOUT_SECS)?,
            max_lifetime_secs: parse_var("DB_MAX_LIFETIME_SECS", Self::DEFAULT_MAX_LIFETIME_SECS)?,
        })
    }
}

impl QuizConfig {
    pub fn from_env() -> Result<Self, String> {
        let rng_seed = match env::var("QUIZ_RNG_SEED") {
            Ok(raw) if !raw.trim().is_empty() => Some(parse_value("QUIZ_RNG_SEED", &raw)?),
            _ => None,
        };

        Ok(Self { rng_seed })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Self {
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Trivia API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "API documentation for the trivia game backend".to_string());

        Self {
            title,
            version,
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value::<u16>("PORT", " 8080 "), Ok(8080));
        assert_eq!(
            parse_value::<u16>("PORT", "eighty"),
            Err("PORT must be a valid number".to_string())
        );
        assert_eq!(parse_value::<u64>("QUIZ_RNG_SEED", "12345"), Ok(12345));
    }

    #[test]
    fn test_server_address() {
        let config = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 5000,
            cors_allowed_origin: "http://localhost:3000".to_string(),
        };
        assert_eq!(config.server_address(), "0.0.0.0:5000");
    }
}
