//! Fetch orchestration between triggers, the analytics service and the store.

use std::sync::Arc;

use crate::application::fetch_status::FetchStatus;
use crate::application::store::{Commit, Slot, StatisticsStore};
use crate::domain::credential::AccessToken;
use crate::domain::date_window::DateWindow;
use crate::domain::entities::{ChartSeries, OffersPage, SummaryTotals};
use crate::domain::filter::OfferFilter;
use crate::domain::repositories::{AnalyticsRepository, ChartKind};
use crate::error::AppError;

/// Outcome of loading every dashboard panel at once.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStatus {
    pub summary: FetchStatus<SummaryTotals>,
    pub offers: FetchStatus<OffersPage>,
    pub offers_views_chart: FetchStatus<ChartSeries>,
    pub codes_generated_chart: FetchStatus<ChartSeries>,
    pub codes_redeemed_chart: FetchStatus<ChartSeries>,
}

impl DashboardStatus {
    pub const PANELS: usize = 5;

    /// Number of panels whose fetch failed.
    pub fn failures(&self) -> usize {
        [
            self.summary.is_failure(),
            self.offers.is_failure(),
            self.offers_views_chart.is_failure(),
            self.codes_generated_chart.is_failure(),
            self.codes_redeemed_chart.is_failure(),
        ]
        .into_iter()
        .filter(|failed| *failed)
        .count()
    }

    pub fn all_failed(&self) -> bool {
        self.failures() == Self::PANELS
    }
}

/// Service issuing analytics fetches and committing their results.
///
/// Each fetch sends exactly one request. On success the decoded payload is
/// committed into the store and returned; on failure the error is returned and
/// the store is left untouched. Results arriving after a newer request for the
/// same field has already been committed are dropped by the store.
pub struct StatsService<R: AnalyticsRepository> {
    repository: Arc<R>,
    store: Arc<StatisticsStore>,
}

impl<R: AnalyticsRepository> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<R>, store: Arc<StatisticsStore>) -> Self {
        Self { repository, store }
    }

    pub fn store(&self) -> &Arc<StatisticsStore> {
        &self.store
    }

    /// Fetches the aggregate totals.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::FetchFailed`] if the request fails.
    pub async fn fetch_summary(&self, token: &AccessToken) -> Result<SummaryTotals, AppError> {
        let ticket = self.store.begin(Slot::Summary);
        let totals = self.repository.summary(token).await?;

        if self.store.commit(ticket, [Commit::SetSummary(totals)]) {
            tracing::debug!(
                total_views = totals.total_views,
                total_codes = totals.total_codes,
                total_redeemed = totals.total_redeemed,
                "Summary loaded"
            );
        }
        Ok(totals)
    }

    /// Fetches one page of the top-viewed offers.
    ///
    /// The rows become both the displayed listing and the base for local
    /// filtering. When the service reports a record count, `total` is updated
    /// as well.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::FetchFailed`] if the request fails.
    pub async fn fetch_offers_view(
        &self,
        token: &AccessToken,
        page: u32,
        filter: &OfferFilter,
    ) -> Result<OffersPage, AppError> {
        let ticket = self.store.begin(Slot::OffersView);
        let offers = self.repository.offers_views(token, page, filter).await?;

        let mut commits = vec![Commit::SetOffersView(offers.records.clone())];
        if let Some(total) = offers.total {
            commits.push(Commit::SetTotal(total));
        }

        if self.store.commit(ticket, commits) {
            tracing::info!(
                page,
                rubro = %filter.rubro,
                status = %filter.status,
                rows = offers.records.len(),
                "Offers listing loaded"
            );
        }
        Ok(offers)
    }

    /// Fetches the offer-view time series.
    pub async fn fetch_offers_view_chart(
        &self,
        token: &AccessToken,
        window: &DateWindow,
    ) -> Result<ChartSeries, AppError> {
        self.fetch_chart(token, ChartKind::OffersViews, window).await
    }

    /// Fetches the code-generation time series.
    pub async fn fetch_code_generated_chart(
        &self,
        token: &AccessToken,
        window: &DateWindow,
    ) -> Result<ChartSeries, AppError> {
        self.fetch_chart(token, ChartKind::CodesGenerated, window).await
    }

    /// Fetches the code-redemption time series.
    pub async fn fetch_code_redeemed_chart(
        &self,
        token: &AccessToken,
        window: &DateWindow,
    ) -> Result<ChartSeries, AppError> {
        self.fetch_chart(token, ChartKind::CodesRedeemed, window).await
    }

    /// Fetches a chart series and replaces the matching store field.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::FetchFailed`] if the request fails or a bucket's
    /// labels and values differ in length.
    pub async fn fetch_chart(
        &self,
        token: &AccessToken,
        kind: ChartKind,
        window: &DateWindow,
    ) -> Result<ChartSeries, AppError> {
        let ticket = self.store.begin(Slot::for_chart(kind));
        let series = self.repository.chart(token, kind, window).await?;

        if self
            .store
            .commit(ticket, [Commit::for_chart(kind, series.clone())])
        {
            tracing::debug!(
                chart = kind.title(),
                daily_points = series.daily.len(),
                monthly_points = series.monthly.len(),
                "Chart loaded"
            );
        }
        Ok(series)
    }

    /// Moves the listing cursor to `page` and fetches that page.
    pub async fn change_page(
        &self,
        token: &AccessToken,
        page: u32,
        filter: &OfferFilter,
    ) -> Result<OffersPage, AppError> {
        self.store.dispatch(Commit::SetPage(page));
        self.fetch_offers_view(token, page, filter).await
    }

    /// Narrows the displayed listing without a request.
    pub fn filter_locally(&self, filter: OfferFilter) {
        self.store.dispatch(Commit::SetOffersByFilter(filter));
    }

    /// Clears the displayed results (see [`Commit::CleanStatics`]).
    pub fn clear(&self) {
        self.store.dispatch(Commit::CleanStatics);
    }

    /// Loads every dashboard panel concurrently.
    ///
    /// The listing is fetched at the store's current page. A failing panel
    /// does not prevent the others from loading.
    pub async fn load_dashboard(
        &self,
        token: &AccessToken,
        filter: &OfferFilter,
        window: &DateWindow,
    ) -> DashboardStatus {
        let page = self.store.read(|state| state.page());

        let (summary, offers, offers_views_chart, codes_generated_chart, codes_redeemed_chart) =
            tokio::join!(
                self.fetch_summary(token),
                self.fetch_offers_view(token, page, filter),
                self.fetch_offers_view_chart(token, window),
                self.fetch_code_generated_chart(token, window),
                self.fetch_code_redeemed_chart(token, window),
            );

        let status = DashboardStatus {
            summary: summary.into(),
            offers: offers.into(),
            offers_views_chart: offers_views_chart.into(),
            codes_generated_chart: codes_generated_chart.into(),
            codes_redeemed_chart: codes_redeemed_chart.into(),
        };

        let failures = status.failures();
        if failures > 0 {
            tracing::warn!(failures, "Dashboard loaded with failed panels");
        } else {
            tracing::info!("Dashboard loaded");
        }
        status
    }
}
