use crate::application::http::query_extractor::{ListQuery, QueryParamsExtractor};
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use casino_crm_core::domain::email::{entities::Email, ports::EmailService};
use casino_crm_core::domain::query::PageInfo;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCasinoEmailsResponse {
    pub data: Vec<Email>,
    pub pagination: PageInfo,
}

#[utoipa::path(
    get,
    path = "/{casino_id}/emails",
    tag = "casino",
    summary = "List casino emails",
    description = "Lists emails linked to the casino or whose sender name, address or \
        domain matches the casino name. Results are always newest first; only \
        `page`, `pageSize` and `search` are honoured.",
    params(
        ("casino_id" = i64, Path, description = "Casino ID"),
        ListQuery
    ),
    responses(
        (status = 200, body = GetCasinoEmailsResponse),
        (status = 404, description = "Casino not found")
    ),
)]
pub async fn get_casino_emails(
    Path(casino_id): Path<i64>,
    State(state): State<AppState>,
    QueryParamsExtractor(params): QueryParamsExtractor,
) -> Result<Response<GetCasinoEmailsResponse>, ApiError> {
    let page = state
        .service
        .list_casino_emails(casino_id, params)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetCasinoEmailsResponse {
        data: page.data,
        pagination: page.pagination,
    }))
}
