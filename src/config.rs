use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub frontend_url: String,

    /// Upper bound for an attached progress photo, in bytes
    pub max_photo_bytes: usize,

    /// Insert the sample entries into an empty store on startup
    pub seed_sample_data: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://weight_tracker.db?mode=rwc".into()),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),

            max_photo_bytes: env::var("MAX_PHOTO_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10 * 1024 * 1024), // 10 MiB

            seed_sample_data: env::var("SEED_SAMPLE_DATA")
                .unwrap_or_else(|_| "false".into())
                .parse()
                .unwrap_or(false),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite::memory:".into(),
            host: "127.0.0.1".into(),
            port: 8080,
            frontend_url: "http://localhost:3000".into(),
            max_photo_bytes: 10 * 1024 * 1024,
            seed_sample_data: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listen_addr_joins_host_and_port() {
        let config = Config {
            host: "0.0.0.0".into(),
            port: 9090,
            ..Config::default()
        };
        assert_eq!(config.listen_addr(), "0.0.0.0:9090");
    }

    #[test]
    fn test_default_is_local_and_in_memory() {
        let config = Config::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.database_url, "sqlite::memory:");
        assert!(!config.seed_sample_data);
    }
}
