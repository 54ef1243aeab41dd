use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::query::EntityFields;

/// Filterable, sortable and searchable columns of `emails e`.
pub const EMAIL_FIELDS: EntityFields = EntityFields {
    filters: &[("casino_id", "e.casino_id"), ("from_email", "e.from_email")],
    sorts: &[
        ("id", "e.id"),
        ("received_at", "e.received_at"),
        ("from_email", "e.from_email"),
        ("subject", "e.subject"),
    ],
    search: &["e.subject", "e.from_name", "e.from_email"],
    default_sort: "e.received_at",
};

#[derive(Debug, Clone, Default)]
pub struct AutoLinkInput {
    /// Report matches without persisting them.
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmailLink {
    pub email_id: i64,
    pub casino_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AutoLinkReport {
    pub scanned: u64,
    pub matched: u64,
    pub linked: u64,
    pub dry_run: bool,
    pub links: Vec<EmailLink>,
}
