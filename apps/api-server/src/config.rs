//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use postdex_infra::database::DatabaseConfig;
use postdex_infra::search::Analyzer;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub search: Option<SearchConfig>,
}

/// Search cluster settings; `None` in [`AppConfig`] selects the in-memory index.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub url: String,
    pub index: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub analyzer: Analyzer,
    pub timeout: Duration,
    pub max_results: usize,
    pub refresh_on_write: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| {
            let mut config = DatabaseConfig::new(url);
            config.max_connections = parse_var("DB_MAX_CONNECTIONS").unwrap_or(100);
            config.min_connections = parse_var("DB_MIN_CONNECTIONS").unwrap_or(10);
            config.sql_logging = flag_var("DB_SQL_LOGGING").unwrap_or(false);
            config
        });

        let search = env::var("ELASTICSEARCH_URL").ok().map(|url| SearchConfig {
            url,
            index: env::var("ELASTICSEARCH_INDEX").unwrap_or_else(|_| "post".to_string()),
            username: env::var("ELASTICSEARCH_USERNAME").ok(),
            password: env::var("ELASTICSEARCH_PASSWORD").ok(),
            analyzer: Self::parse_analyzer(),
            timeout: Duration::from_secs(parse_var("ELASTICSEARCH_TIMEOUT_SECS").unwrap_or(10)),
            max_results: parse_var("ELASTICSEARCH_MAX_RESULTS").unwrap_or(10_000),
            refresh_on_write: flag_var("ELASTICSEARCH_REFRESH").unwrap_or(true),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(8080),
            database,
            search,
        }
    }

    /// ELASTICSEARCH_ANALYZER=standard|nori, falling back to `standard`.
    fn parse_analyzer() -> Analyzer {
        match env::var("ELASTICSEARCH_ANALYZER") {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("{}. Using the standard analyzer.", e);
                Analyzer::Standard
            }),
            Err(_) => Analyzer::Standard,
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}

fn flag_var(key: &str) -> Option<bool> {
    env::var(key)
        .ok()
        .map(|v| v == "true" || v == "1")
}
