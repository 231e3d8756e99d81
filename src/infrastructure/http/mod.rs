//! HTTP access to the remote analytics service.
//!
//! - [`HttpAnalyticsRepository`] - `reqwest` implementation of
//!   [`crate::domain::repositories::AnalyticsRepository`]
//! - [`query`] - Typed query strings

pub mod http_analytics_repository;
pub mod query;

pub use http_analytics_repository::{
    ANALYTICS_BASE_PATH, HttpAnalyticsRepository, OFFERS_VIEWS_PATH, SUMMARY_PATH,
};
