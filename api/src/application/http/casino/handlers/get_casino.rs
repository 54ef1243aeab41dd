use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use casino_crm_core::domain::casino::{entities::Casino, ports::CasinoService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCasinoResponse {
    pub data: Casino,
}

#[utoipa::path(
    get,
    path = "/{casino_id}",
    tag = "casino",
    summary = "Get casino",
    params(
        ("casino_id" = i64, Path, description = "Casino ID"),
    ),
    responses(
        (status = 200, body = GetCasinoResponse),
        (status = 404, description = "Casino not found")
    ),
)]
pub async fn get_casino(
    Path(casino_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response<GetCasinoResponse>, ApiError> {
    let casino = state
        .service
        .get_casino(casino_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetCasinoResponse { data: casino }))
}
