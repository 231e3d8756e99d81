//! Client-side statistics store.
//!
//! - [`StatisticsState`] - The data and its named commit operations
//! - [`Commit`] - Commit operations as values, for dispatch
//! - [`StatisticsStore`] - Shared, lock-protected state with request tickets

pub mod state;
pub mod store;

pub use state::{Commit, StatisticsState};
pub use store::{RequestTicket, Slot, StatisticsStore};
