//! Parameterized SQL fragments for hand-written queries.
//!
//! Every builder returns the SQL text together with its positional bind
//! values. Identifiers are only ever taken from caller-supplied allow-lists;
//! values are always bound, never interpolated. Placeholders use the `?`
//! style expected by the MySQL backend.

use sea_orm::Value;

use super::params::{FilterValue, Filters, SortOrder};

/// SQL text paired with the positional parameters it binds.
///
/// `clause` and `params` must always travel together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SqlFragment {
    pub clause: String,
    pub params: Vec<Value>,
}

impl SqlFragment {
    pub fn new(clause: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            clause: clause.into(),
            params,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.clause.is_empty()
    }

    /// Appends a bare condition (such as a search clause) to a `WHERE` fragment.
    ///
    /// Starts the `WHERE` itself when `self` is empty. Parameters stay in
    /// clause order.
    pub fn and(mut self, condition: SqlFragment) -> SqlFragment {
        if condition.is_empty() {
            return self;
        }
        if self.is_empty() {
            return SqlFragment::new(format!("WHERE {}", condition.clause), condition.params);
        }

        self.clause = format!("{} AND {}", self.clause, condition.clause);
        self.params.extend(condition.params);
        self
    }
}

fn qualify(field: &str, table_alias: Option<&str>) -> String {
    match table_alias {
        Some(alias) if !alias.is_empty() => format!("{alias}.{field}"),
        _ => field.to_string(),
    }
}

/// Builds a `WHERE` clause from allow-listed filters.
///
/// Fields missing from `allowed_fields` and empty-string values are skipped.
/// Lists expand to one placeholder per element (an empty list matches
/// nothing), booleans bind `1`/`0`, and the literals `"null"` / `"not_null"`
/// become `IS NULL` / `IS NOT NULL`.
pub fn build_where_clause(
    filters: &Filters,
    allowed_fields: &[&str],
    table_alias: Option<&str>,
) -> SqlFragment {
    let mut conditions = Vec::new();
    let mut params: Vec<Value> = Vec::new();

    for (field, value) in filters.iter() {
        if !allowed_fields.contains(&field) || value.is_blank() {
            continue;
        }

        let column = qualify(field, table_alias);
        match value {
            FilterValue::List(values) if values.is_empty() => {
                conditions.push("1 = 0".to_string());
            }
            FilterValue::List(values) => {
                let placeholders = vec!["?"; values.len()].join(", ");
                conditions.push(format!("{column} IN ({placeholders})"));
                params.extend(values.iter().cloned().map(Value::from));
            }
            FilterValue::Bool(flag) => {
                conditions.push(format!("{column} = ?"));
                params.push(Value::from(if *flag { 1i32 } else { 0i32 }));
            }
            FilterValue::Text(text) if text == "null" => {
                conditions.push(format!("{column} IS NULL"));
            }
            FilterValue::Text(text) if text == "not_null" => {
                conditions.push(format!("{column} IS NOT NULL"));
            }
            FilterValue::Text(text) => {
                conditions.push(format!("{column} = ?"));
                params.push(Value::from(text.clone()));
            }
            FilterValue::Int(number) => {
                conditions.push(format!("{column} = ?"));
                params.push(Value::from(*number));
            }
        }
    }

    if conditions.is_empty() {
        return SqlFragment::empty();
    }

    SqlFragment::new(format!("WHERE {}", conditions.join(" AND ")), params)
}

/// Builds `(f1 LIKE ? OR f2 LIKE ? ...)` binding `%search%` once per field.
pub fn build_search_clause(
    search: Option<&str>,
    search_fields: &[&str],
    table_alias: Option<&str>,
) -> SqlFragment {
    let search = match search {
        Some(search) if !search.is_empty() => search,
        _ => return SqlFragment::empty(),
    };
    if search_fields.is_empty() {
        return SqlFragment::empty();
    }

    let pattern = format!("%{search}%");
    let conditions = search_fields
        .iter()
        .map(|field| format!("{} LIKE ?", qualify(field, table_alias)))
        .collect::<Vec<String>>();
    let params = search_fields
        .iter()
        .map(|_| Value::from(pattern.clone()))
        .collect();

    SqlFragment::new(format!("({})", conditions.join(" OR ")), params)
}

/// Builds `ORDER BY`, falling back to `default_field` when `sort_field` is
/// absent or not allow-listed.
pub fn build_order_by_clause(
    sort_field: Option<&str>,
    sort_order: SortOrder,
    allowed_fields: &[&str],
    default_field: &str,
    table_alias: Option<&str>,
) -> String {
    let field = match sort_field {
        Some(field) if allowed_fields.contains(&field) => field,
        _ => default_field,
    };

    format!(
        "ORDER BY {} {}",
        qualify(field, table_alias),
        sort_order.as_sql()
    )
}

/// `LIMIT ? OFFSET ?` for a 1-indexed page.
pub fn build_limit_clause(page: u64, page_size: u64) -> SqlFragment {
    let offset = page.saturating_sub(1).saturating_mul(page_size);
    SqlFragment::new(
        "LIMIT ? OFFSET ?",
        vec![Value::from(page_size), Value::from(offset)],
    )
}

pub fn calculate_total_pages(total: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}
