use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    email::{
        entities::Email,
        value_objects::{AutoLinkInput, AutoLinkReport},
    },
    query::{Page, QueryParams},
};

#[cfg_attr(test, mockall::automock)]
pub trait EmailService: Send + Sync {
    fn list_emails(
        &self,
        params: QueryParams,
    ) -> impl Future<Output = Result<Page<Email>, CoreError>> + Send;

    fn list_casino_emails(
        &self,
        casino_id: i64,
        params: QueryParams,
    ) -> impl Future<Output = Result<Page<Email>, CoreError>> + Send;

    fn auto_link_emails(
        &self,
        input: AutoLinkInput,
    ) -> impl Future<Output = Result<AutoLinkReport, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait EmailRepository: Send + Sync {
    fn list_emails(
        &self,
        params: QueryParams,
    ) -> impl Future<Output = Result<Page<Email>, CoreError>> + Send;

    /// The `limit` most recently received emails, newest first.
    fn fetch_recent(
        &self,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<Email>, CoreError>> + Send;

    /// Emails with no casino yet, oldest first.
    fn fetch_unlinked(&self) -> impl Future<Output = Result<Vec<Email>, CoreError>> + Send;

    /// Links an email that is still unlinked. Returns whether a row changed.
    fn link_to_casino(
        &self,
        email_id: i64,
        casino_id: i64,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
