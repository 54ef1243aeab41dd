use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 20;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Query keys starting with this prefix are read as equality filters.
pub const FILTER_PREFIX: &str = "filter_";

/// Raw query string pairs, kept in the order they appeared in the URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawQuery {
    pairs: Vec<(String, String)>,
}

impl RawQuery {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// First value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawQuery
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Only the exact lowercase literal `desc` selects descending order.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Filter operator for a filter condition.
///
/// Only the implicit equality path is wired into the WHERE builder; the
/// remaining operators describe the condition shape callers may construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    Like,
    In,
    Between,
}

impl FromStr for FilterOperator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(FilterOperator::Eq),
            "ne" => Ok(FilterOperator::Ne),
            "gt" => Ok(FilterOperator::Gt),
            "gte" => Ok(FilterOperator::Gte),
            "lt" => Ok(FilterOperator::Lt),
            "lte" => Ok(FilterOperator::Lte),
            "like" => Ok(FilterOperator::Like),
            "in" => Ok(FilterOperator::In),
            "between" => Ok(FilterOperator::Between),
            _ => Err(()),
        }
    }
}

/// Filter condition for a single field
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCondition {
    pub field: String,
    pub operator: FilterOperator,
    pub value: FilterValue,
}

/// Value attached to a filter key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Text(String),
    List(Vec<String>),
    Bool(bool),
    Int(i64),
}

impl FilterValue {
    /// Empty strings are treated as absent filters.
    pub fn is_blank(&self) -> bool {
        matches!(self, FilterValue::Text(text) if text.is_empty())
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Bool(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Int(value)
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(value: Vec<String>) -> Self {
        FilterValue::List(value)
    }
}

/// Filters keyed by field name, iterated in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    entries: Vec<(String, FilterValue)>,
}

impl Filters {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Sets `field`, replacing an existing value in place.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FilterValue>) {
        let field = field.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == field) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((field, value)),
        }
    }

    /// Appends a raw query value; a field seen twice becomes a list.
    pub fn push_raw(&mut self, field: &str, value: &str) {
        let Some(index) = self.entries.iter().position(|(k, _)| k == field) else {
            self.entries
                .push((field.to_string(), FilterValue::Text(value.to_string())));
            return;
        };
        let existing = &mut self.entries[index].1;

        let mut values = match std::mem::replace(existing, FilterValue::List(Vec::new())) {
            FilterValue::List(values) => values,
            FilterValue::Text(text) => vec![text],
            FilterValue::Bool(flag) => vec![flag.to_string()],
            FilterValue::Int(number) => vec![number.to_string()],
        };
        values.push(value.to_string());
        *existing = FilterValue::List(values);
    }

    /// The conditions these filters express: `In` for lists, `Eq` otherwise.
    pub fn conditions(&self) -> Vec<FilterCondition> {
        self.entries
            .iter()
            .filter(|(_, value)| !value.is_blank())
            .map(|(field, value)| FilterCondition {
                field: field.clone(),
                operator: match value {
                    FilterValue::List(_) => FilterOperator::In,
                    _ => FilterOperator::Eq,
                },
                value: value.clone(),
            })
            .collect()
    }

    pub fn get(&self, field: &str) -> Option<&FilterValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == field)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Filters
where
    K: Into<String>,
    V: Into<FilterValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut filters = Filters::new();
        for (field, value) in iter {
            filters.insert(field, value);
        }
        filters
    }
}

/// Pagination and sort parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationParams {
    pub page: u64,
    pub page_size: u64,
    pub sort_field: Option<String>,
    pub sort_order: SortOrder,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE as u64,
            page_size: DEFAULT_PAGE_SIZE as u64,
            sort_field: None,
            sort_order: SortOrder::Asc,
        }
    }
}

impl PaginationParams {
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }
}

/// Combined query parameters (pagination, sort, search, filters)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pub pagination: PaginationParams,
    pub search: Option<String>,
    pub filters: Filters,
}

/// Reads an optional sign and the leading run of digits, ignoring whatever
/// follows (`"35.5"` is 35, `"50abc"` is 50). Overflow saturates. `None` when
/// no digit leads the value.
fn parse_integer(raw: Option<&str>) -> Option<i64> {
    let value = raw?.trim_start();
    let (negative, unsigned) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let mut digits = unsigned
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|b| i64::from(b - b'0'))
        .peekable();
    digits.peek()?;

    let parsed = digits.fold(0_i64, |acc, digit| {
        let shifted = acc.saturating_mul(10);
        if negative {
            shifted.saturating_sub(digit)
        } else {
            shifted.saturating_add(digit)
        }
    });

    Some(parsed)
}

/// Parses `page`, `pageSize`, `sortField` and `sortOrder`.
///
/// Never fails: values without leading digits fall back to their defaults
/// and out-of-range numbers are clamped (`page >= 1`, `1 <= pageSize <= 100`).
pub fn parse_pagination_params(query: &RawQuery) -> PaginationParams {
    let page = parse_integer(query.get("page"))
        .unwrap_or(DEFAULT_PAGE)
        .max(1);
    let page_size = parse_integer(query.get("pageSize"))
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);

    PaginationParams {
        page: page as u64,
        page_size: page_size as u64,
        sort_field: query.get("sortField").map(str::to_string),
        sort_order: SortOrder::from_raw(query.get("sortOrder")),
    }
}

/// Parses pagination plus `search` and every non-empty `filter_<field>` key.
pub fn parse_query_params(query: &RawQuery) -> QueryParams {
    let mut filters = Filters::new();
    for (key, value) in query.iter() {
        if let Some(field) = key.strip_prefix(FILTER_PREFIX)
            && !value.is_empty()
        {
            filters.push_raw(field, value);
        }
    }

    QueryParams {
        pagination: parse_pagination_params(query),
        search: query.get("search").map(str::to_string),
        filters,
    }
}

/// Helper trait for parsing query parameters out of a raw query
pub trait QueryParamsExt {
    fn parse_query_params(&self) -> QueryParams;
}

impl QueryParamsExt for RawQuery {
    fn parse_query_params(&self) -> QueryParams {
        parse_query_params(self)
    }
}
