use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::email::matcher::NameKey;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Casino {
    pub id: i64,
    pub name: String,
    pub website: Option<String>,
    pub status: String,
    pub country: Option<String>,
    pub license: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Casino {
    pub fn name_key(&self) -> NameKey {
        NameKey::new(&self.name)
    }
}
