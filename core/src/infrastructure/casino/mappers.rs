use chrono::{NaiveDateTime, TimeZone, Utc};
use sea_orm::FromQueryResult;

use crate::domain::casino::{entities::Casino, value_objects::CasinoName};

#[derive(Debug, Clone, FromQueryResult)]
pub struct CasinoRow {
    pub id: i64,
    pub name: String,
    pub website: Option<String>,
    pub status: String,
    pub country: Option<String>,
    pub license: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct CasinoNameRow {
    pub id: i64,
    pub name: String,
}

impl From<CasinoRow> for Casino {
    fn from(row: CasinoRow) -> Self {
        Casino {
            id: row.id,
            name: row.name,
            website: row.website,
            status: row.status,
            country: row.country,
            license: row.license,
            created_at: Utc.from_utc_datetime(&row.created_at),
            updated_at: Utc.from_utc_datetime(&row.updated_at),
        }
    }
}

impl From<CasinoNameRow> for CasinoName {
    fn from(row: CasinoNameRow) -> Self {
        CasinoName {
            id: row.id,
            name: row.name,
        }
    }
}
