use tracing::debug;

use crate::domain::{
    casino::{
        entities::Casino,
        ports::{CasinoRepository, CasinoService},
        value_objects::CASINO_FIELDS,
    },
    common::{entities::app_errors::CoreError, services::Service},
    email::ports::EmailRepository,
    query::{Page, QueryParams},
};

impl<C, E> CasinoService for Service<C, E>
where
    C: CasinoRepository,
    E: EmailRepository,
{
    async fn list_casinos(&self, params: QueryParams) -> Result<Page<Casino>, CoreError> {
        self.check_query(&CASINO_FIELDS, &params)?;

        let page = self.casino_repository.list_casinos(params).await?;
        debug!(
            total = page.pagination.total,
            returned = page.data.len(),
            "listed casinos"
        );

        Ok(page)
    }

    async fn get_casino(&self, casino_id: i64) -> Result<Casino, CoreError> {
        self.casino_repository
            .get_by_id(casino_id)
            .await?
            .ok_or(CoreError::CasinoNotFound)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::{
        casino::value_objects::CasinoName,
        common::{CrmConfig, DatabaseConfig, EmailConfig, QueryConfig},
        email::ports::MockEmailRepository,
        query::{QueryParamsExt, RawQuery},
    };

    struct FixedCasinos(Vec<Casino>);

    impl CasinoRepository for FixedCasinos {
        async fn list_casinos(&self, params: QueryParams) -> Result<Page<Casino>, CoreError> {
            Ok(Page::from_items(self.0.clone(), &params.pagination))
        }

        async fn get_by_id(&self, casino_id: i64) -> Result<Option<Casino>, CoreError> {
            Ok(self.0.iter().find(|c| c.id == casino_id).cloned())
        }

        async fn fetch_names(&self) -> Result<Vec<CasinoName>, CoreError> {
            Ok(Vec::new())
        }
    }

    fn service(strict_fields: bool) -> Service<FixedCasinos, MockEmailRepository> {
        let now = Utc::now();
        let casinos = (1..=3)
            .map(|id| Casino {
                id,
                name: format!("Casino {id}"),
                website: None,
                status: "active".to_string(),
                country: None,
                license: None,
                created_at: now,
                updated_at: now,
            })
            .collect();

        Service::new(
            FixedCasinos(casinos),
            MockEmailRepository::new(),
            CrmConfig {
                database: DatabaseConfig {
                    host: "localhost".to_string(),
                    port: 3306,
                    username: "crm".to_string(),
                    password: "crm".to_string(),
                    name: "crm".to_string(),
                },
                email: EmailConfig::default(),
                query: QueryConfig { strict_fields },
            },
        )
    }

    fn params(query: &[(&str, &str)]) -> QueryParams {
        query
            .iter()
            .copied()
            .collect::<RawQuery>()
            .parse_query_params()
    }

    #[tokio::test]
    async fn test_list_casinos_paginates() {
        let page = service(false)
            .list_casinos(params(&[("pageSize", "2"), ("page", "2")]))
            .await
            .unwrap();

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.pagination.total, 3);
        assert_eq!(page.pagination.total_pages, 2);
    }

    #[tokio::test]
    async fn test_unknown_fields_ignored_when_permissive() {
        let result = service(false)
            .list_casinos(params(&[("filter_owner", "x"), ("sortField", "owner")]))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_unknown_fields_rejected_when_strict() {
        let service = service(true);

        let error = service
            .list_casinos(params(&[("filter_owner", "x")]))
            .await
            .unwrap_err();
        assert!(matches!(error, CoreError::InvalidQuery(_)));

        let error = service
            .list_casinos(params(&[("sortField", "owner")]))
            .await
            .unwrap_err();
        assert!(matches!(error, CoreError::InvalidQuery(_)));

        let ok = service
            .list_casinos(params(&[("filter_status", "active"), ("sortField", "name")]))
            .await;
        assert!(ok.is_ok());
    }

    #[tokio::test]
    async fn test_get_casino() {
        let service = service(false);

        assert_eq!(service.get_casino(2).await.unwrap().name, "Casino 2");
        assert_eq!(
            service.get_casino(42).await.unwrap_err(),
            CoreError::CasinoNotFound
        );
    }
}
