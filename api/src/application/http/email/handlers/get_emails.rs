use crate::application::http::query_extractor::{ListQuery, QueryParamsExtractor};
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use casino_crm_core::domain::email::{entities::Email, ports::EmailService};
use casino_crm_core::domain::query::PageInfo;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetEmailsResponse {
    pub data: Vec<Email>,
    pub pagination: PageInfo,
}

#[utoipa::path(
    get,
    path = "",
    tag = "email",
    summary = "List emails",
    description = "Lists emails with pagination, sorting and free-text search over \
        subject and sender. Supports `filter_casino_id` and `filter_from_email`.",
    params(ListQuery),
    responses(
        (status = 200, body = GetEmailsResponse),
        (status = 400, description = "Unknown filter or sort field")
    ),
)]
pub async fn get_emails(
    State(state): State<AppState>,
    QueryParamsExtractor(params): QueryParamsExtractor,
) -> Result<Response<GetEmailsResponse>, ApiError> {
    let page = state
        .service
        .list_emails(params)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetEmailsResponse {
        data: page.data,
        pagination: page.pagination,
    }))
}
