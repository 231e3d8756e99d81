//! Domain layer: analytics data, filtering, pagination and date windows.
//!
//! Nothing here performs I/O. The repository trait describes the remote
//! analytics service; its implementation lives in the infrastructure layer.
//!
//! # Architecture
//!
//! - [`entities`] - Records, chart series and totals decoded from the service
//! - [`filter`] - Rubro/status filter and the pure local filtering function
//! - [`pagination`] - Fixed-size page arithmetic
//! - [`date_window`] - Daily/monthly chart ranges and the custom range form
//! - [`credential`] - Bearer access token
//! - [`repositories`] - Trait for the remote analytics service

pub mod credential;
pub mod date_window;
pub mod entities;
pub mod filter;
pub mod pagination;
pub mod repositories;
