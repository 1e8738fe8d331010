use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub sqlite_path: String,
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub sqlx_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sqlite_path: "./data/social.sqlite".to_string(),
            database_url: None,
            max_connections: 5,
            sqlx_logging: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let sqlite_path = env::var("SQLITE_PATH").unwrap_or(defaults.sqlite_path);
        let database_url = env::var("DATABASE_URL").ok().filter(|v| !v.trim().is_empty());

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(defaults.max_connections);

        let sqlx_logging = env::var("SQLX_LOGGING")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(defaults.sqlx_logging);

        Self {
            sqlite_path,
            database_url,
            max_connections,
            sqlx_logging,
        }
    }

    /// In-memory database, single connection so every query sees the same schema.
    pub fn in_memory() -> Self {
        Self {
            database_url: Some("sqlite::memory:".to_string()),
            max_connections: 1,
            ..Self::default()
        }
    }

    pub fn database_url(&self) -> String {
        if let Some(url) = &self.database_url {
            return url.clone();
        }

        let path = self.sqlite_path.trim();
        if path.starts_with("sqlite:") || path.starts_with("file:") {
            return path.to_string();
        }
        format!("sqlite://{}", path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_url_prefers_explicit_url() {
        let config = AppConfig {
            database_url: Some("sqlite::memory:".to_string()),
            ..AppConfig::default()
        };
        assert_eq!(config.database_url(), "sqlite::memory:");
    }

    #[test]
    fn database_url_from_plain_path() {
        let config = AppConfig {
            sqlite_path: " /tmp/social.sqlite ".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.database_url(), "sqlite:///tmp/social.sqlite");
    }

    #[test]
    fn database_url_keeps_sqlite_scheme() {
        let config = AppConfig {
            sqlite_path: "sqlite://data/x.sqlite".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.database_url(), "sqlite://data/x.sqlite");
    }

    #[test]
    fn in_memory_uses_single_connection() {
        let config = AppConfig::in_memory();
        assert_eq!(config.max_connections, 1);
        assert_eq!(config.database_url(), "sqlite::memory:");
    }
}
