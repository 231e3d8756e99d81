//! Data returned by the analytics service.
//!
//! Entities are plain data structures decoded from the service's JSON. The only
//! logic they carry is the invariant checking needed to decode them safely.
//!
//! # Entity Types
//!
//! - [`OfferViewRecord`] - A row of the top-viewed offers listing
//! - [`ChartSeries`] - Daily and monthly buckets of one metric
//! - [`SummaryTotals`] - Platform-wide counters
//! - [`OffersPage`] - One page of the listing plus the optional record count

pub mod chart;
pub mod offer_view;
pub mod summary;

pub use chart::{ChartBucket, ChartSeries};
pub use offer_view::{Company, OfferStatus, OfferViewRecord};
pub use summary::SummaryTotals;

/// One page of the top-offers listing.
///
/// `total` is only known when the service wraps the rows in an envelope that
/// reports the record count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OffersPage {
    pub records: Vec<OfferViewRecord>,
    pub total: Option<u64>,
}

impl OffersPage {
    pub fn new(records: Vec<OfferViewRecord>, total: Option<u64>) -> Self {
        Self { records, total }
    }
}
