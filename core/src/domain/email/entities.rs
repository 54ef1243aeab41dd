use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::email::matcher::Sender;

/// An ingested email, optionally linked to the casino it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Email {
    pub id: i64,
    pub casino_id: Option<i64>,
    pub from_name: Option<String>,
    pub from_email: Option<String>,
    pub subject: Option<String>,
    pub received_at: DateTime<Utc>,
}

impl Email {
    pub fn sender(&self) -> Sender<'_> {
        Sender {
            from_name: self.from_name.as_deref(),
            from_email: self.from_email.as_deref(),
        }
    }

    /// Case-insensitive substring search over subject and sender fields.
    pub fn contains_text(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        [&self.subject, &self.from_name, &self.from_email]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}
