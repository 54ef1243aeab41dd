//! List-endpoint query handling: query-string parsing, allow-listed SQL
//! fragments and result pages.

use thiserror::Error;

pub mod fields;
pub mod page;
pub mod params;
pub mod sql;

pub use fields::EntityFields;
pub use page::{Page, PageInfo};
pub use params::{
    FilterCondition, FilterOperator, FilterValue, Filters, PaginationParams, QueryParams,
    QueryParamsExt, RawQuery, SortOrder, parse_pagination_params, parse_query_params,
};
pub use sql::{
    SqlFragment, build_limit_clause, build_order_by_clause, build_search_clause,
    build_where_clause, calculate_total_pages,
};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("unknown filter field `{0}`")]
    UnknownFilterField(String),

    #[error("unknown sort field `{0}`")]
    UnknownSortField(String),
}
