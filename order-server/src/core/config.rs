use std::path::PathBuf;

/// Host configuration for the order core
///
/// # Environment variables
///
/// All settings can be overridden through environment variables:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | /var/lib/plateful | Working directory for embedded stores and logs |
/// | ENVIRONMENT | development | Runtime environment |
/// | CLASSIFIER_URL | (unset = disabled) | Chat-completions endpoint for tag suggestions |
/// | CLASSIFIER_API_KEY | (empty) | Bearer token for the classifier endpoint |
/// | CLASSIFIER_MODEL | gpt-3.5-turbo | Model requested from the classifier |
/// | CLASSIFIER_TIMEOUT_MS | 15000 | Classifier request timeout (milliseconds) |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/plateful CLASSIFIER_URL=https://api.openai.com cargo test
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory holding the catalog and order databases
    pub work_dir: String,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Classifier endpoint base URL; `None` disables tag suggestions
    pub classifier_url: Option<String>,
    /// Bearer token for the classifier endpoint
    pub classifier_api_key: String,
    /// Model requested from the classifier
    pub classifier_model: String,
    /// Classifier request timeout (milliseconds)
    pub classifier_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/plateful".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            classifier_url: std::env::var("CLASSIFIER_URL").ok().filter(|v| !v.is_empty()),
            classifier_api_key: std::env::var("CLASSIFIER_API_KEY").unwrap_or_default(),
            classifier_model: std::env::var("CLASSIFIER_MODEL")
                .unwrap_or_else(|_| "gpt-3.5-turbo".into()),
            classifier_timeout_ms: std::env::var("CLASSIFIER_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(15_000),
        }
    }

    /// Override the working directory (used by tests)
    pub fn with_work_dir(work_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config
    }

    /// Path of the embedded catalog database
    pub fn catalog_db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("catalog.redb")
    }

    /// Path of the embedded order database
    pub fn orders_db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("orders.redb")
    }

    /// Check for production environment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Check for development environment
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
