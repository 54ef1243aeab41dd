use axum::{extract::FromRequestParts, http::request::Parts};
use casino_crm_core::domain::query::{QueryParams, QueryParamsExt, RawQuery, SortOrder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::application::http::server::api_entities::api_error::ApiError;

/// Extractor for list-endpoint query parameters: pagination, sorting,
/// free-text search and `filter_<field>` entries.
///
/// Usage:
/// ```rust,ignore
/// async fn handler(
///     QueryParamsExtractor(params): QueryParamsExtractor,
/// ) -> Result<Response<T>, ApiError> {
///     // params.pagination, params.search, params.filters
/// }
/// ```
#[derive(Debug, Clone)]
pub struct QueryParamsExtractor(pub QueryParams);

impl<S> FromRequestParts<S> for QueryParamsExtractor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        // Repeated keys are kept in order so `filter_x=a&filter_x=b` becomes a list.
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query_string)
            .map_err(|e| ApiError::BadRequest(format!("Malformed query string: {}", e)))?;

        Ok(QueryParamsExtractor(RawQuery::new(pairs).parse_query_params()))
    }
}

/// Documentation of the query keys read by [`QueryParamsExtractor`].
/// Any additional `filter_<field>` key filters on that field.
#[allow(dead_code)]
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// 1-based page number, defaults to 1.
    pub page: Option<i64>,
    /// Rows per page, clamped to 1..=100, defaults to 20.
    pub page_size: Option<i64>,
    pub sort_field: Option<String>,
    pub sort_order: Option<SortOrder>,
    /// Case-insensitive substring match over the searchable columns.
    pub search: Option<String>,
}
