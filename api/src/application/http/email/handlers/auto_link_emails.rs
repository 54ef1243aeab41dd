use crate::application::http::email::validators::AutoLinkValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateOptionalJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use casino_crm_core::domain::email::{
    ports::EmailService,
    value_objects::{AutoLinkInput, AutoLinkReport},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AutoLinkEmailsResponse {
    pub data: AutoLinkReport,
}

#[utoipa::path(
    post,
    path = "/auto-link",
    tag = "email",
    summary = "Auto-link emails",
    description = "Matches every unlinked email against the casino names and links it \
        to the matching casino. With `dry_run` the matches are only reported. \
        The body is optional.",
    request_body = AutoLinkValidator,
    responses(
        (status = 200, body = AutoLinkEmailsResponse)
    ),
)]
pub async fn auto_link_emails(
    State(state): State<AppState>,
    ValidateOptionalJson(payload): ValidateOptionalJson<AutoLinkValidator>,
) -> Result<Response<AutoLinkEmailsResponse>, ApiError> {
    let report = state
        .service
        .auto_link_emails(AutoLinkInput {
            dry_run: payload.dry_run,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AutoLinkEmailsResponse { data: report }))
}
