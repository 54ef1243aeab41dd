pub mod entities;
pub mod services;

/// Number of most recent emails scanned when matching emails to a casino by name.
pub const DEFAULT_EMAIL_SCAN_LIMIT: u64 = 10_000;

#[derive(Clone, Debug)]
pub struct CrmConfig {
    pub database: DatabaseConfig,
    pub email: EmailConfig,
    pub query: QueryConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "mysql://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

#[derive(Clone, Debug)]
pub struct EmailConfig {
    pub scan_limit: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            scan_limit: DEFAULT_EMAIL_SCAN_LIMIT,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct QueryConfig {
    /// Reject unknown `filter_*` and `sortField` names instead of ignoring them.
    pub strict_fields: bool,
}
