use std::future::Future;

use crate::domain::{
    casino::{entities::Casino, value_objects::CasinoName},
    common::entities::app_errors::CoreError,
    query::{Page, QueryParams},
};

#[cfg_attr(test, mockall::automock)]
pub trait CasinoService: Send + Sync {
    fn list_casinos(
        &self,
        params: QueryParams,
    ) -> impl Future<Output = Result<Page<Casino>, CoreError>> + Send;

    fn get_casino(
        &self,
        casino_id: i64,
    ) -> impl Future<Output = Result<Casino, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait CasinoRepository: Send + Sync {
    fn list_casinos(
        &self,
        params: QueryParams,
    ) -> impl Future<Output = Result<Page<Casino>, CoreError>> + Send;

    fn get_by_id(
        &self,
        casino_id: i64,
    ) -> impl Future<Output = Result<Option<Casino>, CoreError>> + Send;

    /// Every casino name, ordered by id.
    fn fetch_names(&self) -> impl Future<Output = Result<Vec<CasinoName>, CoreError>> + Send;
}
