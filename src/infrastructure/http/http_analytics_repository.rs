//! `reqwest` implementation of the analytics repository.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use super::query::OffersViewsQuery;
use crate::domain::credential::AccessToken;
use crate::domain::date_window::DateWindow;
use crate::domain::entities::{ChartSeries, OfferViewRecord, OffersPage, SummaryTotals};
use crate::domain::filter::OfferFilter;
use crate::domain::repositories::{AnalyticsRepository, ChartKind};
use crate::error::AppError;

/// Path prefix of every analytics endpoint (spelled as the service spells it).
pub const ANALYTICS_BASE_PATH: &str = "/analitycs";

pub const SUMMARY_PATH: &str = "/summary";
pub const OFFERS_VIEWS_PATH: &str = "/offers-views";

/// Body of the listing endpoint: either the bare rows or an envelope that
/// also reports the record count.
#[derive(Deserialize)]
#[serde(untagged)]
enum OffersViewsPayload {
    Rows(Vec<OfferViewRecord>),
    Page {
        data: Vec<OfferViewRecord>,
        total: u64,
    },
}

impl From<OffersViewsPayload> for OffersPage {
    fn from(payload: OffersViewsPayload) -> Self {
        match payload {
            OffersViewsPayload::Rows(records) => OffersPage::new(records, None),
            OffersViewsPayload::Page { data, total } => OffersPage::new(data, Some(total)),
        }
    }
}

/// HTTP client for the analytics service.
///
/// Every request is a `GET` below `{api_url}/analitycs` carrying
/// `Authorization: Bearer <token>`. Timeouts are the `reqwest` defaults unless
/// one is set through [`HttpAnalyticsRepository::with_timeout`].
#[derive(Debug, Clone)]
pub struct HttpAnalyticsRepository {
    client: Client,
    base_url: String,
}

impl HttpAnalyticsRepository {
    /// Creates a repository with a default `reqwest` client.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(api_url: &Url) -> reqwest::Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(api_url, client))
    }

    /// Creates a repository reusing an existing client.
    pub fn with_client(api_url: &Url, client: Client) -> Self {
        let base_url = format!(
            "{}{}",
            api_url.as_str().trim_end_matches('/'),
            ANALYTICS_BASE_PATH
        );
        Self { client, base_url }
    }

    /// Creates a repository whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn with_timeout(api_url: &Url, timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(api_url, client))
    }

    /// Absolute URL of an endpoint path such as `/summary`.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get(&self, path: &str, token: &AccessToken) -> RequestBuilder {
        self.client
            .get(self.endpoint_url(path))
            .bearer_auth(token.as_str())
    }

    /// Sends the request and decodes a 2xx JSON body.
    ///
    /// Transport errors, non-success statuses and undecodable bodies all map to
    /// [`AppError::FetchFailed`].
    async fn execute<T: DeserializeOwned>(
        &self,
        path: &'static str,
        request: RequestBuilder,
    ) -> Result<T, AppError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(endpoint = path, error = %e, "Analytics request failed");
            AppError::fetch_failed(path, e)
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(endpoint = path, %status, "Analytics service returned an error status");
            return Err(AppError::fetch_failed(path, format!("HTTP status {status}")));
        }

        let body = response.json::<T>().await.map_err(|e| {
            tracing::warn!(endpoint = path, error = %e, "Failed to decode analytics response");
            AppError::fetch_failed(path, e)
        })?;

        tracing::debug!(endpoint = path, %status, "Analytics response received");
        Ok(body)
    }
}

#[async_trait]
impl AnalyticsRepository for HttpAnalyticsRepository {
    async fn summary(&self, token: &AccessToken) -> Result<SummaryTotals, AppError> {
        self.execute(SUMMARY_PATH, self.get(SUMMARY_PATH, token))
            .await
    }

    async fn offers_views(
        &self,
        token: &AccessToken,
        page: u32,
        filter: &OfferFilter,
    ) -> Result<OffersPage, AppError> {
        let query = OffersViewsQuery::new(page, filter);
        let request = self.get(OFFERS_VIEWS_PATH, token).query(&query);

        let payload: OffersViewsPayload = self.execute(OFFERS_VIEWS_PATH, request).await?;
        Ok(payload.into())
    }

    async fn chart(
        &self,
        token: &AccessToken,
        kind: ChartKind,
        window: &DateWindow,
    ) -> Result<ChartSeries, AppError> {
        let request = self.get(kind.path(), token).query(&window.query_params());
        self.execute(kind.path(), request).await
    }
}
