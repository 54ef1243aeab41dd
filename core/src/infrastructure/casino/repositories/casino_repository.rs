use sea_orm::{DatabaseBackend, DatabaseConnection, FromQueryResult, Statement};
use tracing::error;

use crate::domain::{
    casino::{
        entities::Casino,
        ports::CasinoRepository,
        value_objects::{CASINO_FIELDS, CasinoName},
    },
    common::entities::app_errors::CoreError,
    query::{Page, QueryParams, build_limit_clause},
};
use crate::infrastructure::{
    casino::mappers::{CasinoNameRow, CasinoRow},
    db::CountRow,
};

const CASINO_COLUMNS: &str =
    "c.id, c.name, c.website, c.status, c.country, c.license, c.created_at, c.updated_at";

#[derive(Debug, Clone)]
pub struct MySqlCasinoRepository {
    pub db: DatabaseConnection,
}

impl MySqlCasinoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl CasinoRepository for MySqlCasinoRepository {
    async fn list_casinos(&self, params: QueryParams) -> Result<Page<Casino>, CoreError> {
        let conditions = CASINO_FIELDS.conditions(&params);
        let order_by = CASINO_FIELDS.order_by_clause(&params.pagination);
        let limit = build_limit_clause(params.pagination.page, params.pagination.page_size);

        let count_stmt = Statement::from_sql_and_values(
            DatabaseBackend::MySql,
            format!(
                "SELECT COUNT(*) AS total FROM casinos c {}",
                conditions.clause
            ),
            conditions.params.clone(),
        );

        let total = CountRow::find_by_statement(count_stmt)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count casinos: {}", e);
                CoreError::InternalServerError
            })?
            .map(|row| row.total)
            .unwrap_or(0);

        let mut values = conditions.params;
        values.extend(limit.params);

        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::MySql,
            format!(
                "SELECT {} FROM casinos c {} {} {}",
                CASINO_COLUMNS, conditions.clause, order_by, limit.clause
            ),
            values,
        );

        let casinos = CasinoRow::find_by_statement(stmt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch casinos: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Casino::from)
            .collect::<Vec<Casino>>();

        Ok(Page::new(casinos, total.max(0) as u64, &params.pagination))
    }

    async fn get_by_id(&self, casino_id: i64) -> Result<Option<Casino>, CoreError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::MySql,
            format!("SELECT {} FROM casinos c WHERE c.id = ?", CASINO_COLUMNS),
            [casino_id.into()],
        );

        let casino = CasinoRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get casino by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Casino::from);

        Ok(casino)
    }

    async fn fetch_names(&self) -> Result<Vec<CasinoName>, CoreError> {
        let stmt = Statement::from_string(
            DatabaseBackend::MySql,
            "SELECT c.id, c.name FROM casinos c ORDER BY c.id ASC",
        );

        let names = CasinoNameRow::find_by_statement(stmt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch casino names: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(CasinoName::from)
            .collect();

        Ok(names)
    }
}
