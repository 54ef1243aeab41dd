use crate::{
    domain::common::{CrmConfig, services::Service},
    infrastructure::{
        casino::MySqlCasinoRepository,
        db::mysql::{MySql, MySqlConfig},
        email::MySqlEmailRepository,
    },
};

pub type CrmService = Service<MySqlCasinoRepository, MySqlEmailRepository>;

pub async fn create_service(config: CrmConfig) -> Result<CrmService, anyhow::Error> {
    let mysql = MySql::new(MySqlConfig {
        database_url: config.database.url(),
    })
    .await?;

    Ok(Service::new(
        MySqlCasinoRepository::new(mysql.get_db()),
        MySqlEmailRepository::new(mysql.get_db()),
        config,
    ))
}
