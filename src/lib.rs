//! # Benefits Stats
//!
//! Statistics client and terminal dashboard for the analytics API of a
//! benefits/coupon platform: codes generated, codes redeemed, offer views and
//! summary totals.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Analytics entities, filtering, pagination
//!   and the repository trait for the remote service
//! - **Application Layer** ([`application`]) - Statistics store and fetch
//!   orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - `reqwest` client for the
//!   analytics service
//! - **Presentation** ([`report`]) - Terminal rendering of store snapshots
//!
//! ## Data Flow
//!
//! 1. A trigger (CLI command, page change, filter change) calls
//!    [`application::services::StatsService`]
//! 2. The service takes a request ticket from the store and calls the
//!    [`domain::repositories::AnalyticsRepository`]
//! 3. On success the payload is committed into the
//!    [`application::store::StatisticsStore`]; stale responses are dropped
//! 4. [`report`] renders a snapshot of the store
//!
//! ## Quick Start
//!
//! ```bash
//! export ANALYTICS_API_URL="https://api.example.com"
//! export ANALYTICS_TOKEN="..."
//!
//! cargo run -- dashboard
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod report;
pub mod telemetry;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::fetch_status::{FetchStatus, ViewLoader};
    pub use crate::application::services::{DashboardStatus, StatsService};
    pub use crate::application::store::{Commit, StatisticsState, StatisticsStore};
    pub use crate::domain::credential::AccessToken;
    pub use crate::domain::date_window::{DateRangeForm, DateWindow};
    pub use crate::domain::entities::{
        ChartBucket, ChartSeries, Company, OfferStatus, OfferViewRecord, OffersPage,
        SummaryTotals,
    };
    pub use crate::domain::filter::{Choice, OfferFilter};
    pub use crate::domain::repositories::{AnalyticsRepository, ChartKind};
    pub use crate::error::AppError;
    pub use crate::infrastructure::http::HttpAnalyticsRepository;
}
