//! Application layer: the statistics store and fetch orchestration.
//!
//! This layer coordinates repository calls and store commits. Presentation code
//! triggers fetches through the services and renders store snapshots.
//!
//! # Modules
//!
//! - [`store`] - Statistics state, commits and the shared store
//! - [`services`] - [`services::StatsService`] fetch orchestration
//! - [`fetch_status`] - Tagged per-view fetch status

pub mod fetch_status;
pub mod services;
pub mod store;
