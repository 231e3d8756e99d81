//! Repository trait definitions for the domain layer.
//!
//! The analytics service is reached through a trait so the orchestration layer
//! can be exercised without a network. The HTTP implementation lives in
//! `crate::infrastructure::http`; a `mockall` mock is generated for unit tests.

pub mod analytics_repository;

pub use analytics_repository::{AnalyticsRepository, ChartKind};

#[cfg(test)]
pub use analytics_repository::MockAnalyticsRepository;
