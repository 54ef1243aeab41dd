pub mod mysql;

use sea_orm::FromQueryResult;

/// Result row of a `SELECT COUNT(*) AS total` query.
#[derive(Debug, FromQueryResult)]
pub struct CountRow {
    pub total: i64,
}
