use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

#[derive(Debug, Clone)]
pub struct MySqlConfig {
    pub database_url: String,
}

#[derive(Debug, Clone)]
pub struct MySql {
    db: DatabaseConnection,
}

impl MySql {
    pub async fn new(config: MySqlConfig) -> Result<Self, anyhow::Error> {
        let mut options = ConnectOptions::new(config.database_url);
        options.sqlx_logging(false);

        let db = Database::connect(options).await?;
        info!("Connected to MySQL");

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
