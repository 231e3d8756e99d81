//! Pagination of the top-offers listing.
//!
//! The service pages the listing in fixed pages of [`PAGE_SIZE`] rows and
//! addresses them with a zero-based index (`pag`).

/// Rows per listing page.
pub const PAGE_SIZE: u64 = 10;

/// Number of pages needed for `total` records: `ceil(total / PAGE_SIZE)`.
pub fn page_count(total: u64) -> u64 {
    total.div_ceil(PAGE_SIZE)
}

/// Clamps a zero-based page index into `[0, page_count - 1]`.
///
/// With no records there are no pages and the index falls back to 0.
pub fn clamp_page(page: u32, total: u64) -> u32 {
    let last = page_count(total).saturating_sub(1);
    u64::from(page).min(last) as u32
}

/// Pagination metadata derived from the store's cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page: u32,
    pub total: u64,
    pub page_count: u64,
}

impl PageInfo {
    pub fn new(page: u32, total: u64) -> Self {
        Self {
            page,
            total,
            page_count: page_count(total),
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.page) + 1 < self.page_count
    }
}
