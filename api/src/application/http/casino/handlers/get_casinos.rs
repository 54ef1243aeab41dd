use crate::application::http::query_extractor::{ListQuery, QueryParamsExtractor};
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use casino_crm_core::domain::casino::{entities::Casino, ports::CasinoService};
use casino_crm_core::domain::query::PageInfo;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCasinosResponse {
    pub data: Vec<Casino>,
    pub pagination: PageInfo,
}

#[utoipa::path(
    get,
    path = "",
    tag = "casino",
    summary = "List casinos",
    description = "Lists casinos with pagination, sorting and free-text search. \
        `filter_status`, `filter_country` and `filter_license` narrow the result; \
        repeating a filter key matches any of the given values.",
    params(ListQuery),
    responses(
        (status = 200, body = GetCasinosResponse),
        (status = 400, description = "Unknown filter or sort field")
    ),
)]
pub async fn get_casinos(
    State(state): State<AppState>,
    QueryParamsExtractor(params): QueryParamsExtractor,
) -> Result<Response<GetCasinosResponse>, ApiError> {
    let page = state
        .service
        .list_casinos(params)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetCasinosResponse {
        data: page.data,
        pagination: page.pagination,
    }))
}
