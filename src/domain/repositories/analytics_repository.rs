//! Repository trait for the remote analytics service.

use async_trait::async_trait;

use crate::domain::credential::AccessToken;
use crate::domain::date_window::DateWindow;
use crate::domain::entities::{ChartSeries, OffersPage, SummaryTotals};
use crate::domain::filter::OfferFilter;
use crate::error::AppError;

/// Which time series a chart request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    OffersViews,
    CodesGenerated,
    CodesRedeemed,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [
        ChartKind::OffersViews,
        ChartKind::CodesGenerated,
        ChartKind::CodesRedeemed,
    ];

    /// Endpoint path relative to the analytics base path.
    pub fn path(&self) -> &'static str {
        match self {
            Self::OffersViews => "/offers-views-chart",
            Self::CodesGenerated => "/generated-chart",
            Self::CodesRedeemed => "/redeemed-chart",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::OffersViews => "Offer views",
            Self::CodesGenerated => "Codes generated",
            Self::CodesRedeemed => "Codes redeemed",
        }
    }
}

/// Read-only access to the analytics service.
///
/// Each method issues exactly one request. There is no retry and no
/// de-duplication; any failure is reported as [`AppError::FetchFailed`].
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpAnalyticsRepository`] - `reqwest` client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    /// Fetches the platform-wide totals.
    async fn summary(&self, token: &AccessToken) -> Result<SummaryTotals, AppError>;

    /// Fetches one zero-based page of the top-viewed offers, filtered
    /// server-side by rubro and status.
    async fn offers_views(
        &self,
        token: &AccessToken,
        page: u32,
        filter: &OfferFilter,
    ) -> Result<OffersPage, AppError>;

    /// Fetches a daily and monthly time series for `kind` over `window`.
    async fn chart(
        &self,
        token: &AccessToken,
        kind: ChartKind,
        window: &DateWindow,
    ) -> Result<ChartSeries, AppError>;
}
