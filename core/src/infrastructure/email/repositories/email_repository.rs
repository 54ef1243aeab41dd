use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, FromQueryResult, Statement};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    email::{entities::Email, ports::EmailRepository, value_objects::EMAIL_FIELDS},
    query::{Page, QueryParams, build_limit_clause},
};
use crate::infrastructure::{db::CountRow, email::mappers::EmailRow};

const EMAIL_COLUMNS: &str =
    "e.id, e.casino_id, e.from_name, e.from_email, e.subject, e.received_at";

#[derive(Debug, Clone)]
pub struct MySqlEmailRepository {
    pub db: DatabaseConnection,
}

impl MySqlEmailRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn fetch(&self, stmt: Statement, context: &str) -> Result<Vec<Email>, CoreError> {
        let emails = EmailRow::find_by_statement(stmt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to {}: {}", context, e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Email::from)
            .collect();

        Ok(emails)
    }
}

impl EmailRepository for MySqlEmailRepository {
    async fn list_emails(&self, params: QueryParams) -> Result<Page<Email>, CoreError> {
        let conditions = EMAIL_FIELDS.conditions(&params);
        let order_by = EMAIL_FIELDS.order_by_clause(&params.pagination);
        let limit = build_limit_clause(params.pagination.page, params.pagination.page_size);

        let count_stmt = Statement::from_sql_and_values(
            DatabaseBackend::MySql,
            format!(
                "SELECT COUNT(*) AS total FROM emails e {}",
                conditions.clause
            ),
            conditions.params.clone(),
        );

        let total = CountRow::find_by_statement(count_stmt)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count emails: {}", e);
                CoreError::InternalServerError
            })?
            .map(|row| row.total)
            .unwrap_or(0);

        let mut values = conditions.params;
        values.extend(limit.params);

        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::MySql,
            format!(
                "SELECT {} FROM emails e {} {} {}",
                EMAIL_COLUMNS, conditions.clause, order_by, limit.clause
            ),
            values,
        );

        let emails = self.fetch(stmt, "fetch emails").await?;

        Ok(Page::new(emails, total.max(0) as u64, &params.pagination))
    }

    async fn fetch_recent(&self, limit: u64) -> Result<Vec<Email>, CoreError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::MySql,
            format!(
                "SELECT {} FROM emails e ORDER BY e.received_at DESC LIMIT ?",
                EMAIL_COLUMNS
            ),
            [limit.into()],
        );

        self.fetch(stmt, "fetch recent emails").await
    }

    async fn fetch_unlinked(&self) -> Result<Vec<Email>, CoreError> {
        let stmt = Statement::from_string(
            DatabaseBackend::MySql,
            format!(
                "SELECT {} FROM emails e WHERE e.casino_id IS NULL ORDER BY e.id ASC",
                EMAIL_COLUMNS
            ),
        );

        self.fetch(stmt, "fetch unlinked emails").await
    }

    async fn link_to_casino(&self, email_id: i64, casino_id: i64) -> Result<bool, CoreError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::MySql,
            "UPDATE emails SET casino_id = ? WHERE id = ? AND casino_id IS NULL",
            [casino_id.into(), email_id.into()],
        );

        let result = self.db.execute(stmt).await.map_err(|e| {
            error!("Failed to link email {} to casino {}: {}", email_id, casino_id, e);
            CoreError::InternalServerError
        })?;

        Ok(result.rows_affected() > 0)
    }
}
