use casino_crm_core::domain::common::{
    CrmConfig, DEFAULT_EMAIL_SCAN_LIMIT, DatabaseConfig, EmailConfig, QueryConfig,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "casino-crm", version, about = "Casino research CRM API")]
pub struct Args {
    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub email: EmailArgs,

    #[command(flatten)]
    pub query: QueryArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(id = "server-host", long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(id = "server-port", long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(id = "database-host", long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(id = "database-port", long = "database-port", env = "DATABASE_PORT", default_value_t = 3306)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "crm")]
    pub user: String,

    #[arg(long = "database-password", env = "DATABASE_PASSWORD")]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "casino_crm")]
    pub name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct EmailArgs {
    /// How many of the most recent emails are scanned when matching by casino name.
    #[arg(
        long = "email-scan-limit",
        env = "EMAIL_SCAN_LIMIT",
        default_value_t = DEFAULT_EMAIL_SCAN_LIMIT
    )]
    pub scan_limit: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct QueryArgs {
    /// Answer 400 on unknown `filter_*` or `sortField` names instead of ignoring them.
    #[arg(long = "strict-query-fields", env = "STRICT_QUERY_FIELDS")]
    pub strict_fields: bool,
}

impl From<Args> for CrmConfig {
    fn from(args: Args) -> Self {
        CrmConfig {
            database: DatabaseConfig {
                host: args.database.host,
                port: args.database.port,
                username: args.database.user,
                password: args.database.password,
                name: args.database.name,
            },
            email: EmailConfig {
                scan_limit: args.email.scan_limit,
            },
            query: QueryConfig {
                strict_fields: args.query.strict_fields,
            },
        }
    }
}
