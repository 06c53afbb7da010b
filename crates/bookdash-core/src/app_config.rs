#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    /// Connection string for the persistence store. Optional: the
    /// harvest-to-CSV path runs without one; commands that touch the store
    /// fail fast when it is absent.
    pub database_url: Option<String>,
    pub env: Environment,
    pub log_level: String,
    /// Listing page URL template with a `{page}` substitution point.
    pub catalogue_url: String,
    /// Upper bound on the number of listing pages to attempt.
    pub page_count: u32,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Delay between page requests, applied after every page except the
    /// first. Zero disables the delay.
    pub inter_request_delay_ms: u64,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "database_url",
                &self.database_url.as_ref().map(|_| "[redacted]"),
            )
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("catalogue_url", &self.catalogue_url)
            .field("page_count", &self.page_count)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("inter_request_delay_ms", &self.inter_request_delay_ms)
            .field("db_max_connections", &self.db_max_connections)
            .field("db_min_connections", &self.db_min_connections)
            .field("db_acquire_timeout_secs", &self.db_acquire_timeout_secs)
            .finish()
    }
}
