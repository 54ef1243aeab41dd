use super::handlers::get_casino::{__path_get_casino, get_casino};
use super::handlers::get_casino_emails::{__path_get_casino_emails, get_casino_emails};
use super::handlers::get_casinos::{__path_get_casinos, get_casinos};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_casinos, get_casino, get_casino_emails))]
pub struct CasinoApiDoc;

pub fn casino_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/casinos", state.args.server.root_path),
            get(get_casinos),
        )
        .route(
            &format!("{}/casinos/{{casino_id}}", state.args.server.root_path),
            get(get_casino),
        )
        .route(
            &format!(
                "{}/casinos/{{casino_id}}/emails",
                state.args.server.root_path
            ),
            get(get_casino_emails),
        )
}
