//! Aggregate totals shown in the dashboard header.

use serde::{Deserialize, Serialize};

/// Platform-wide counters returned by the summary endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryTotals {
    pub total_views: u64,
    pub total_codes: u64,
    pub total_redeemed: u64,
}

impl SummaryTotals {
    /// Share of generated codes that were redeemed, in percent.
    ///
    /// Returns `None` when no codes have been generated yet.
    pub fn redemption_rate(&self) -> Option<f64> {
        if self.total_codes == 0 {
            return None;
        }
        Some(self.total_redeemed as f64 * 100.0 / self.total_codes as f64)
    }
}
