use tracing::warn;

use crate::domain::{
    casino::ports::CasinoRepository,
    common::{CrmConfig, entities::app_errors::CoreError},
    email::ports::EmailRepository,
    query::{EntityFields, QueryParams},
};

/// Aggregate service: every domain service trait is implemented on this type.
#[derive(Clone)]
pub struct Service<C, E>
where
    C: CasinoRepository,
    E: EmailRepository,
{
    pub casino_repository: C,
    pub email_repository: E,
    pub config: CrmConfig,
}

impl<C, E> Service<C, E>
where
    C: CasinoRepository,
    E: EmailRepository,
{
    pub fn new(casino_repository: C, email_repository: E, config: CrmConfig) -> Self {
        Self {
            casino_repository,
            email_repository,
            config,
        }
    }

    /// Unknown filter and sort names are ignored unless strict mode is on.
    pub(crate) fn check_query(
        &self,
        fields: &EntityFields,
        params: &QueryParams,
    ) -> Result<(), CoreError> {
        if !self.config.query.strict_fields {
            return Ok(());
        }

        fields.check_strict(params).map_err(|e| {
            warn!("Rejected list query: {}", e);
            CoreError::from(e)
        })
    }
}
