use std::path::{Path, PathBuf};

/// Storefront configuration
///
/// # Environment variables
///
/// Every field can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | STOREFRONT_DATA_DIR | ./data | where the persisted store lives |
/// | STOREFRONT_API_URL | http://localhost:5000 | backend base URL |
/// | STOREFRONT_LOG_LEVEL | info | log level passed to the logger |
/// | STOREFRONT_ENV | development | runtime environment |
///
/// # Example
///
/// ```ignore
/// STOREFRONT_DATA_DIR=/var/lib/storefront STOREFRONT_ENV=production cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the persisted store file
    pub data_dir: String,
    /// Base URL for the contact, account and order endpoints
    pub api_url: String,
    /// Log level: trace | debug | info | warn | error
    pub log_level: String,
    /// Runtime environment: development | production
    pub environment: String,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("STOREFRONT_DATA_DIR").unwrap_or_else(|_| "./data".into()),
            api_url: std::env::var("STOREFRONT_API_URL")
                .unwrap_or_else(|_| "http://localhost:5000".into()),
            log_level: std::env::var("STOREFRONT_LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            environment: std::env::var("STOREFRONT_ENV")
                .unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the fields tests care about, keeping the rest from the
    /// environment
    pub fn with_overrides(data_dir: impl Into<String>, api_url: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.data_dir = data_dir.into();
        config.api_url = api_url.into();
        config
    }

    /// Path of the persisted store file inside `data_dir`
    pub fn store_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join("storefront.redb")
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_data_dir_and_api_url() {
        let config = Config::with_overrides("/tmp/shop", "http://localhost:9999/");
        assert_eq!(config.data_dir, "/tmp/shop");
        assert_eq!(config.api_url, "http://localhost:9999/");
    }

    #[test]
    fn test_store_path_joins_data_dir() {
        let config = Config::with_overrides("/tmp/shop", "http://localhost:5000");
        assert_eq!(config.store_path(), PathBuf::from("/tmp/shop/storefront.redb"));
    }
}
