use crate::application::http::{casino::router::CasinoApiDoc, email::router::EmailApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Casino CRM API"
    ),
    nest(
        (path = "/casinos", api = CasinoApiDoc),
        (path = "/emails", api = EmailApiDoc),
    )
)]
pub struct ApiDoc;
