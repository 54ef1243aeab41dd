use super::handlers::auto_link_emails::{__path_auto_link_emails, auto_link_emails};
use super::handlers::get_emails::{__path_get_emails, get_emails};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_emails, auto_link_emails))]
pub struct EmailApiDoc;

pub fn email_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/emails", state.args.server.root_path),
            get(get_emails),
        )
        .route(
            &format!("{}/emails/auto-link", state.args.server.root_path),
            post(auto_link_emails),
        )
}
