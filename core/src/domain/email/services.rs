use tracing::{debug, info};

use crate::domain::{
    casino::ports::CasinoRepository,
    common::{entities::app_errors::CoreError, services::Service},
    email::{
        entities::Email,
        index::CasinoNameIndex,
        matcher::NormalizedSender,
        ports::{EmailRepository, EmailService},
        value_objects::{AutoLinkInput, AutoLinkReport, EMAIL_FIELDS, EmailLink},
    },
    query::{Page, QueryParams},
};

impl<C, E> EmailService for Service<C, E>
where
    C: CasinoRepository,
    E: EmailRepository,
{
    async fn list_emails(&self, params: QueryParams) -> Result<Page<Email>, CoreError> {
        self.check_query(&EMAIL_FIELDS, &params)?;

        self.email_repository.list_emails(params).await
    }

    async fn list_casino_emails(
        &self,
        casino_id: i64,
        params: QueryParams,
    ) -> Result<Page<Email>, CoreError> {
        let casino = self
            .casino_repository
            .get_by_id(casino_id)
            .await?
            .ok_or(CoreError::CasinoNotFound)?;
        let key = casino.name_key();

        let recent = self
            .email_repository
            .fetch_recent(self.config.email.scan_limit)
            .await?;
        let scanned = recent.len();

        let mut emails = recent
            .into_iter()
            .filter(|email| {
                email.casino_id == Some(casino.id)
                    || NormalizedSender::new(email.sender()).matches(&key)
            })
            .filter(|email| match params.search.as_deref() {
                Some(search) if !search.is_empty() => email.contains_text(search),
                _ => true,
            })
            .collect::<Vec<Email>>();
        emails.sort_by(|a, b| b.received_at.cmp(&a.received_at));

        debug!(
            casino_id,
            scanned,
            matched = emails.len(),
            "matched emails to casino"
        );

        Ok(Page::from_items(emails, &params.pagination))
    }

    async fn auto_link_emails(&self, input: AutoLinkInput) -> Result<AutoLinkReport, CoreError> {
        let casinos = self.casino_repository.fetch_names().await?;
        let index = CasinoNameIndex::new(casinos.iter().map(|c| (c.id, c.name.as_str())));

        let emails = self.email_repository.fetch_unlinked().await?;

        let mut report = AutoLinkReport {
            scanned: emails.len() as u64,
            dry_run: input.dry_run,
            ..Default::default()
        };

        for email in &emails {
            let Some(casino_id) = index.find_match(&NormalizedSender::new(email.sender())) else {
                continue;
            };
            report.matched += 1;

            if !input.dry_run
                && self
                    .email_repository
                    .link_to_casino(email.id, casino_id)
                    .await?
            {
                report.linked += 1;
            }

            report.links.push(EmailLink {
                email_id: email.id,
                casino_id,
            });
        }

        info!(
            scanned = report.scanned,
            matched = report.matched,
            linked = report.linked,
            casinos = index.len(),
            dry_run = input.dry_run,
            "auto-link finished"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::domain::{
        casino::{entities::Casino, value_objects::CasinoName},
        common::{CrmConfig, DatabaseConfig, EmailConfig, QueryConfig},
        query::{PaginationParams, RawQuery, parse_query_params},
    };

    struct InMemoryCasinos {
        casinos: Vec<Casino>,
    }

    impl CasinoRepository for InMemoryCasinos {
        async fn list_casinos(&self, params: QueryParams) -> Result<Page<Casino>, CoreError> {
            Ok(Page::from_items(self.casinos.clone(), &params.pagination))
        }

        async fn get_by_id(&self, casino_id: i64) -> Result<Option<Casino>, CoreError> {
            Ok(self.casinos.iter().find(|c| c.id == casino_id).cloned())
        }

        async fn fetch_names(&self) -> Result<Vec<CasinoName>, CoreError> {
            Ok(self
                .casinos
                .iter()
                .map(|c| CasinoName {
                    id: c.id,
                    name: c.name.clone(),
                })
                .collect())
        }
    }

    struct InMemoryEmails {
        emails: Mutex<Vec<Email>>,
    }

    impl EmailRepository for InMemoryEmails {
        async fn list_emails(&self, params: QueryParams) -> Result<Page<Email>, CoreError> {
            let emails = self.emails.lock().unwrap().clone();
            Ok(Page::from_items(emails, &params.pagination))
        }

        async fn fetch_recent(&self, limit: u64) -> Result<Vec<Email>, CoreError> {
            let mut emails = self.emails.lock().unwrap().clone();
            emails.sort_by(|a, b| b.received_at.cmp(&a.received_at));
            emails.truncate(limit as usize);
            Ok(emails)
        }

        async fn fetch_unlinked(&self) -> Result<Vec<Email>, CoreError> {
            Ok(self
                .emails
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.casino_id.is_none())
                .cloned()
                .collect())
        }

        async fn link_to_casino(&self, email_id: i64, casino_id: i64) -> Result<bool, CoreError> {
            let mut emails = self.emails.lock().unwrap();
            match emails
                .iter_mut()
                .find(|e| e.id == email_id && e.casino_id.is_none())
            {
                Some(email) => {
                    email.casino_id = Some(casino_id);
                    Ok(true)
                }
                None => Ok(false),
            }
        }
    }

    fn casino(id: i64, name: &str) -> Casino {
        let now = Utc::now();
        Casino {
            id,
            name: name.to_string(),
            website: None,
            status: "active".to_string(),
            country: None,
            license: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn email(id: i64, casino_id: Option<i64>, from_name: &str, from_email: &str) -> Email {
        Email {
            id,
            casino_id,
            from_name: Some(from_name.to_string()),
            from_email: Some(from_email.to_string()),
            subject: Some(format!("Offer #{id}")),
            received_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, id as u32).unwrap(),
        }
    }

    fn config(strict_fields: bool, scan_limit: u64) -> CrmConfig {
        CrmConfig {
            database: DatabaseConfig {
                host: "localhost".to_string(),
                port: 3306,
                username: "crm".to_string(),
                password: "crm".to_string(),
                name: "crm".to_string(),
            },
            email: EmailConfig { scan_limit },
            query: QueryConfig { strict_fields },
        }
    }

    fn service(
        emails: Vec<Email>,
        strict_fields: bool,
    ) -> Service<InMemoryCasinos, InMemoryEmails> {
        Service::new(
            InMemoryCasinos {
                casinos: vec![
                    casino(1, "Lucky Casino"),
                    casino(2, "Royal Spins"),
                    casino(3, "Bet"),
                ],
            },
            InMemoryEmails {
                emails: Mutex::new(emails),
            },
            config(strict_fields, 10_000),
        )
    }

    fn query(pairs: &[(&str, &str)]) -> QueryParams {
        parse_query_params(&pairs.iter().copied().collect::<RawQuery>())
    }

    #[tokio::test]
    async fn test_auto_link_assigns_matching_casinos() {
        let service = service(
            vec![
                email(1, None, "Lucky Casino", "promo@luckycasino.com"),
                email(2, None, "Newsletter", "news@royalspins.io"),
                email(3, None, "Betting Tips", "tips@bettingtips.com"),
                email(4, Some(2), "Lucky Casino", "promo@luckycasino.com"),
            ],
            false,
        );

        let report = service
            .auto_link_emails(AutoLinkInput::default())
            .await
            .unwrap();

        assert_eq!(report.scanned, 3);
        assert_eq!(report.matched, 2);
        assert_eq!(report.linked, 2);
        assert_eq!(
            report.links,
            vec![
                EmailLink {
                    email_id: 1,
                    casino_id: 1
                },
                EmailLink {
                    email_id: 2,
                    casino_id: 2
                },
            ]
        );

        let stored = service.email_repository.emails.lock().unwrap().clone();
        assert_eq!(stored[0].casino_id, Some(1));
        assert_eq!(stored[1].casino_id, Some(2));
        assert_eq!(stored[2].casino_id, None);
        assert_eq!(stored[3].casino_id, Some(2));
    }

    #[tokio::test]
    async fn test_auto_link_dry_run_writes_nothing() {
        let service = service(
            vec![email(1, None, "Lucky Casino", "promo@luckycasino.com")],
            false,
        );

        let report = service
            .auto_link_emails(AutoLinkInput { dry_run: true })
            .await
            .unwrap();

        assert!(report.dry_run);
        assert_eq!(report.matched, 1);
        assert_eq!(report.linked, 0);
        assert_eq!(report.links.len(), 1);
        assert_eq!(
            service.email_repository.emails.lock().unwrap()[0].casino_id,
            None
        );
    }

    #[tokio::test]
    async fn test_casino_emails_include_linked_and_matched() {
        let service = service(
            vec![
                email(1, None, "Lucky Casino", "promo@luckycasino.com"),
                email(2, Some(1), "Support", "help@helpdesk.com"),
                email(3, None, "Royal Spins", "news@royalspins.io"),
                email(4, None, "Team", "vip@luckycasino.com"),
            ],
            false,
        );

        let page = service
            .list_casino_emails(1, QueryParams::default())
            .await
            .unwrap();

        let ids: Vec<i64> = page.data.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![4, 2, 1]);
        assert_eq!(page.pagination.total, 3);
    }

    #[tokio::test]
    async fn test_casino_emails_search_and_paginate() {
        let service = service(
            (1..=5)
                .map(|id| email(id, None, "Lucky Casino", "promo@luckycasino.com"))
                .collect(),
            false,
        );

        let page = service
            .list_casino_emails(1, query(&[("pageSize", "2"), ("page", "2")]))
            .await
            .unwrap();
        let ids: Vec<i64> = page.data.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 2]);
        assert_eq!(page.pagination.total_pages, 3);

        let page = service
            .list_casino_emails(1, query(&[("search", "offer #4")]))
            .await
            .unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].id, 4);
    }

    #[tokio::test]
    async fn test_casino_emails_respect_scan_limit() {
        let mut service = service(
            (1..=5)
                .map(|id| email(id, None, "Lucky Casino", "promo@luckycasino.com"))
                .collect(),
            false,
        );
        service.config.email.scan_limit = 2;

        let page = service
            .list_casino_emails(1, QueryParams::default())
            .await
            .unwrap();
        assert_eq!(page.pagination.total, 2);
    }

    #[tokio::test]
    async fn test_casino_emails_unknown_casino() {
        let service = service(Vec::new(), false);
        let result = service
            .list_casino_emails(99, QueryParams::default())
            .await;
        assert_eq!(result, Err(CoreError::CasinoNotFound));
    }

    #[tokio::test]
    async fn test_list_emails_strict_mode() {
        let permissive = service(Vec::new(), false);
        assert!(
            permissive
                .list_emails(query(&[("filter_colour", "red")]))
                .await
                .is_ok()
        );

        let strict = service(Vec::new(), true);
        let result = strict.list_emails(query(&[("filter_colour", "red")])).await;
        assert!(matches!(result, Err(CoreError::InvalidQuery(_))));

        let result = strict
            .list_emails(query(&[("filter_casino_id", "null"), ("sortField", "id")]))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_list_casinos_and_get_casino() {
        use crate::domain::casino::ports::CasinoService;

        let service = service(Vec::new(), true);
        let page = service
            .list_casinos(QueryParams {
                pagination: PaginationParams {
                    page_size: 2,
                    ..Default::default()
                },
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.pagination.total, 3);

        let rejected = service
            .list_casinos(query(&[("sortField", "revenue")]))
            .await;
        assert!(matches!(rejected, Err(CoreError::InvalidQuery(_))));

        assert_eq!(service.get_casino(2).await.unwrap().name, "Royal Spins");
        assert_eq!(
            service.get_casino(42).await,
            Err(CoreError::CasinoNotFound)
        );
    }
}
