use super::response::{parse_login, parse_query, QueryPage};
use async_trait::async_trait;
use pardot_embed_application::ports::EntityFetcher;
use pardot_embed_domain::config::PardotConfig;
use pardot_embed_domain::{CatalogEntity, DomainError, EntityKind};
use reqwest::StatusCode;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, info, instrument};

/// Largest page the query endpoints return.
const PAGE_SIZE: usize = 200;

/// HTTP client for the Pardot v3/v4 API.
///
/// Logs in on first use and keeps the API key for the client's lifetime;
/// expired keys are not renewed.
pub struct PardotApiClient {
    http: reqwest::Client,
    base_url: String,
    api_version: u8,
    email: String,
    password: String,
    user_key: String,
    api_key: OnceCell<String>,
}

impl PardotApiClient {
    pub fn new(config: &PardotConfig) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| DomainError::InvalidConfig(format!("HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_version: config.api_version,
            email: config.email.clone(),
            password: config.password.clone(),
            user_key: config.user_key.clone(),
            api_key: OnceCell::new(),
        })
    }

    fn endpoint(&self, object: &str, action: &str) -> String {
        format!(
            "{}/api/{}/version/{}/{}",
            self.base_url, object, self.api_version, action
        )
    }

    fn query_object(kind: EntityKind) -> &'static str {
        match kind {
            EntityKind::Form => "form",
            EntityKind::DynamicContent => "dynamicContent",
        }
    }

    async fn api_key(&self) -> Result<&str, DomainError> {
        self.api_key
            .get_or_try_init(|| self.login())
            .await
            .map(String::as_str)
    }

    #[instrument(skip(self))]
    async fn login(&self) -> Result<String, DomainError> {
        if self.email.is_empty() || self.password.is_empty() || self.user_key.is_empty() {
            return Err(DomainError::AuthenticationError(
                "no API credentials configured".to_string(),
            ));
        }

        let url = format!("{}/api/login/version/{}", self.base_url, self.api_version);
        let response = self
            .http
            .post(&url)
            .form(&[
                ("email", self.email.as_str()),
                ("password", self.password.as_str()),
                ("user_key", self.user_key.as_str()),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|e| DomainError::RemoteUnavailable(format!("login request failed: {e}")))?;

        let body = read_body(response, "login").await?;
        let api_key = parse_login(&body)?;
        info!("Authenticated with Pardot API");
        Ok(api_key)
    }

    async fn query_page(
        &self,
        kind: EntityKind,
        api_key: &str,
        offset: usize,
    ) -> Result<QueryPage, DomainError> {
        let url = self.endpoint(Self::query_object(kind), "do/query");
        let offset = offset.to_string();
        let limit = PAGE_SIZE.to_string();

        let response = self
            .http
            .get(&url)
            .header(
                "Authorization",
                format!("Pardot api_key={}, user_key={}", api_key, self.user_key),
            )
            .query(&[
                ("format", "json"),
                ("output", "full"),
                ("limit", limit.as_str()),
                ("offset", offset.as_str()),
            ])
            .send()
            .await
            .map_err(|e| DomainError::RemoteUnavailable(format!("{kind} query failed: {e}")))?;

        let body = read_body(response, Self::query_object(kind)).await?;
        parse_query(&body, kind)
    }
}

async fn read_body(response: reqwest::Response, what: &str) -> Result<String, DomainError> {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(DomainError::AuthenticationError(format!(
            "{what} rejected with HTTP {}",
            status.as_u16()
        )));
    }
    if !status.is_success() {
        return Err(DomainError::RemoteUnavailable(format!(
            "{what} returned HTTP {}: {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        )));
    }

    response
        .text()
        .await
        .map_err(|e| DomainError::RemoteUnavailable(format!("failed to read {what} body: {e}")))
}

/// A short page ends the query; a full one ends it only once the reported
/// total (when the API reports one) has been reached.
fn has_more_pages(page: &QueryPage, fetched: usize) -> bool {
    if page.records < PAGE_SIZE {
        return false;
    }
    match page.total_results {
        Some(total) => (fetched as u64) < total,
        None => true,
    }
}

#[async_trait]
impl EntityFetcher for PardotApiClient {
    #[instrument(skip(self))]
    async fn fetch(&self, kind: EntityKind) -> Result<Vec<CatalogEntity>, DomainError> {
        let api_key = self.api_key().await?;

        let mut entities = Vec::new();
        let mut offset = 0;
        loop {
            let mut page = self.query_page(kind, api_key, offset).await?;
            offset += page.records;
            entities.extend(std::mem::take(&mut page.entities));

            debug!(%kind, offset, total = ?page.total_results, "Fetched catalog page");

            if !has_more_pages(&page, offset) {
                break;
            }
        }

        Ok(entities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(config: PardotConfig) -> PardotApiClient {
        PardotApiClient::new(&config).unwrap()
    }

    #[test]
    fn test_endpoint_layout() {
        let c = client(PardotConfig {
            base_url: "https://pi.pardot.com/".to_string(),
            api_version: 4,
            ..PardotConfig::default()
        });

        assert_eq!(
            c.endpoint(PardotApiClient::query_object(EntityKind::DynamicContent), "do/query"),
            "https://pi.pardot.com/api/dynamicContent/version/4/do/query"
        );
        assert_eq!(
            c.endpoint(PardotApiClient::query_object(EntityKind::Form), "do/query"),
            "https://pi.pardot.com/api/form/version/4/do/query"
        );
    }

    fn page(records: usize, total_results: Option<u64>) -> QueryPage {
        QueryPage {
            entities: Vec::new(),
            records,
            total_results,
        }
    }

    #[test]
    fn test_short_page_ends_query() {
        assert!(!has_more_pages(&page(12, Some(500)), 12));
        assert!(!has_more_pages(&page(0, None), 0));
    }

    #[test]
    fn test_full_page_continues_until_total_reached() {
        assert!(has_more_pages(&page(PAGE_SIZE, Some(450)), 200));
        assert!(!has_more_pages(&page(PAGE_SIZE, Some(400)), 400));
    }

    #[test]
    fn test_full_page_without_total_keeps_paging() {
        assert!(has_more_pages(&page(PAGE_SIZE, None), 200));
        assert!(has_more_pages(&page(PAGE_SIZE, None), 400));
    }

    #[tokio::test]
    async fn test_fetch_without_credentials_is_auth_error() {
        let c = client(PardotConfig::default());

        let result = c.fetch(EntityKind::Form).await;

        assert!(matches!(result, Err(DomainError::AuthenticationError(_))));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_remote_unavailable() {
        let c = client(PardotConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            email: "ops@example.com".to_string(),
            password: "secret".to_string(),
            user_key: "key".to_string(),
            request_timeout_secs: 2,
            ..PardotConfig::default()
        });

        let result = c.fetch(EntityKind::Form).await;

        assert!(matches!(result, Err(DomainError::RemoteUnavailable(_))));
    }
}
