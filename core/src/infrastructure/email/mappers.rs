use chrono::{NaiveDateTime, TimeZone, Utc};
use sea_orm::FromQueryResult;

use crate::domain::email::entities::Email;

#[derive(Debug, Clone, FromQueryResult)]
pub struct EmailRow {
    pub id: i64,
    pub casino_id: Option<i64>,
    pub from_name: Option<String>,
    pub from_email: Option<String>,
    pub subject: Option<String>,
    pub received_at: NaiveDateTime,
}

impl From<EmailRow> for Email {
    fn from(row: EmailRow) -> Self {
        Email {
            id: row.id,
            casino_id: row.casino_id,
            from_name: row.from_name,
            from_email: row.from_email,
            subject: row.subject,
            received_at: Utc.from_utc_datetime(&row.received_at),
        }
    }
}
