use crate::domain::query::EntityFields;

/// Filterable, sortable and searchable columns of `casinos c`.
pub const CASINO_FIELDS: EntityFields = EntityFields {
    filters: &[
        ("status", "c.status"),
        ("country", "c.country"),
        ("license", "c.license"),
    ],
    sorts: &[
        ("id", "c.id"),
        ("name", "c.name"),
        ("status", "c.status"),
        ("country", "c.country"),
        ("created_at", "c.created_at"),
        ("updated_at", "c.updated_at"),
    ],
    search: &["c.name", "c.website"],
    default_sort: "c.created_at",
};

/// Casino id and display name, all that name matching needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CasinoName {
    pub id: i64,
    pub name: String,
}
