//! Statistics state and its commit operations.

use crate::domain::entities::{ChartSeries, OfferViewRecord, SummaryTotals};
use crate::domain::filter::{OfferFilter, filter_offers};
use crate::domain::pagination::{PageInfo, clamp_page};
use crate::domain::repositories::ChartKind;

/// Last-fetched analytics data plus the listing cursor.
///
/// Every data field is `None` until its first successful commit; `None` means
/// "not loaded", while `Some(vec![])` means "loaded, nothing to show".
///
/// All commit methods are synchronous, never fail, and are idempotent for a
/// repeated payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatisticsState {
    offers_view: Option<Vec<OfferViewRecord>>,
    original_offers: Option<Vec<OfferViewRecord>>,
    offers_view_chart: Option<ChartSeries>,
    code_generated: Option<ChartSeries>,
    code_redeemed: Option<ChartSeries>,
    summary: Option<SummaryTotals>,
    page: u32,
    total: u64,
}

impl StatisticsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offers_view(&self) -> Option<&[OfferViewRecord]> {
        self.offers_view.as_deref()
    }

    pub fn original_offers(&self) -> Option<&[OfferViewRecord]> {
        self.original_offers.as_deref()
    }

    pub fn offers_view_chart(&self) -> Option<&ChartSeries> {
        self.offers_view_chart.as_ref()
    }

    pub fn code_generated(&self) -> Option<&ChartSeries> {
        self.code_generated.as_ref()
    }

    pub fn code_redeemed(&self) -> Option<&ChartSeries> {
        self.code_redeemed.as_ref()
    }

    pub fn chart(&self, kind: ChartKind) -> Option<&ChartSeries> {
        match kind {
            ChartKind::OffersViews => self.offers_view_chart(),
            ChartKind::CodesGenerated => self.code_generated(),
            ChartKind::CodesRedeemed => self.code_redeemed(),
        }
    }

    pub fn summary(&self) -> Option<&SummaryTotals> {
        self.summary.as_ref()
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn page_info(&self) -> PageInfo {
        PageInfo::new(self.page, self.total)
    }

    pub fn set_summary(&mut self, totals: SummaryTotals) {
        self.summary = Some(totals);
    }

    /// Stores a freshly fetched listing page as both the displayed rows and
    /// the unfiltered base for local filtering.
    pub fn set_offers_view(&mut self, records: Vec<OfferViewRecord>) {
        self.original_offers = Some(records.clone());
        self.offers_view = Some(records);
    }

    /// Recomputes the displayed rows from the unfiltered base.
    ///
    /// Without a loaded base there is nothing to filter and the displayed rows
    /// stay absent.
    pub fn set_offers_by_filter(&mut self, filter: &OfferFilter) {
        self.offers_view = self
            .original_offers
            .as_deref()
            .map(|base| filter_offers(base, filter));
    }

    pub fn set_offers_chart(&mut self, series: ChartSeries) {
        self.offers_view_chart = Some(series);
    }

    pub fn set_code_generated(&mut self, series: ChartSeries) {
        self.code_generated = Some(series);
    }

    pub fn set_code_redeemed(&mut self, series: ChartSeries) {
        self.code_redeemed = Some(series);
    }

    /// Moves the listing cursor. Not checked against `total`.
    pub fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    /// Updates the record count and pulls `page` back into range.
    pub fn set_total(&mut self, total: u64) {
        self.total = total;
        self.page = clamp_page(self.page, total);
    }

    /// Clears the displayed results. The filter base and the cursor survive.
    pub fn set_clean_statics(&mut self) {
        self.offers_view = None;
        self.offers_view_chart = None;
        self.summary = None;
        self.code_generated = None;
        self.code_redeemed = None;
    }

    /// Returns every field to its initial value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Applies a commit value to the state.
    pub fn apply(&mut self, commit: Commit) {
        match commit {
            Commit::SetSummary(totals) => self.set_summary(totals),
            Commit::SetOffersView(records) => self.set_offers_view(records),
            Commit::SetOffersByFilter(filter) => self.set_offers_by_filter(&filter),
            Commit::SetOffersChart(series) => self.set_offers_chart(series),
            Commit::SetCodeGenerated(series) => self.set_code_generated(series),
            Commit::SetCodeRedeemed(series) => self.set_code_redeemed(series),
            Commit::SetPage(page) => self.set_page(page),
            Commit::SetTotal(total) => self.set_total(total),
            Commit::CleanStatics => self.set_clean_statics(),
            Commit::Reset => self.reset(),
        }
    }
}

/// A named state transition, as dispatched against the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Commit {
    SetSummary(SummaryTotals),
    SetOffersView(Vec<OfferViewRecord>),
    SetOffersByFilter(OfferFilter),
    SetOffersChart(ChartSeries),
    SetCodeGenerated(ChartSeries),
    SetCodeRedeemed(ChartSeries),
    SetPage(u32),
    SetTotal(u64),
    CleanStatics,
    Reset,
}

impl Commit {
    /// Commit storing a chart series into the field that holds `kind`.
    pub fn for_chart(kind: ChartKind, series: ChartSeries) -> Self {
        match kind {
            ChartKind::OffersViews => Commit::SetOffersChart(series),
            ChartKind::CodesGenerated => Commit::SetCodeGenerated(series),
            ChartKind::CodesRedeemed => Commit::SetCodeRedeemed(series),
        }
    }
}
