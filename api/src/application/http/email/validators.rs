use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct AutoLinkValidator {
    /// Report the matches without writing them.
    #[serde(default)]
    pub dry_run: bool,
}
