//! Terminal rendering of store snapshots.
//!
//! Renderers only read the state. A field that was never loaded (or whose
//! fetch failed) renders as "No data available"; a loaded but empty result
//! renders as "No records".

use colored::Colorize;
use std::fmt::Write;

use crate::application::services::DashboardStatus;
use crate::application::store::StatisticsState;
use crate::domain::entities::{ChartBucket, ChartSeries, OfferStatus};
use crate::domain::repositories::ChartKind;

const BAR_WIDTH: f64 = 40.0;
const NO_DATA: &str = "No data available";

/// Renders the aggregate totals.
pub fn summary(state: &StatisticsState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Summary".bright_blue().bold());

    let Some(totals) = state.summary() else {
        let _ = writeln!(out, "  {}", NO_DATA.yellow());
        return out;
    };

    let _ = writeln!(
        out,
        "  Total views:     {}",
        totals.total_views.to_string().bright_white().bold()
    );
    let _ = writeln!(
        out,
        "  Codes generated: {}",
        totals.total_codes.to_string().bright_white().bold()
    );
    let _ = writeln!(
        out,
        "  Codes redeemed:  {}",
        totals.total_redeemed.to_string().bright_white().bold()
    );
    if let Some(rate) = totals.redemption_rate() {
        let _ = writeln!(out, "  Redemption rate: {}", format!("{rate:.1}%").cyan());
    }
    out
}

/// Renders the displayed offers listing with its pagination footer.
pub fn offers(state: &StatisticsState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Top offers".bright_blue().bold());

    let Some(records) = state.offers_view() else {
        let _ = writeln!(out, "  {}", NO_DATA.yellow());
        return out;
    };

    if records.is_empty() {
        let _ = writeln!(out, "  {}", "No records".yellow());
    } else {
        let _ = writeln!(
            out,
            "  {:<6} {:<30} {:<20} {:<16} {:<9} {:>8} {:>8}",
            "ID", "Title", "Company", "Rubro", "Status", "Views", "Redeemed"
        );
        let _ = writeln!(out, "  {}", "─".repeat(103).bright_black());

        for record in records {
            let status = match record.status {
                OfferStatus::Vigente => record.status.as_str().green(),
                OfferStatus::Expirado => record.status.as_str().red(),
            };
            let _ = writeln!(
                out,
                "  {:<6} {:<30} {:<20} {:<16} {:<9} {:>8} {:>8}",
                record.id,
                truncate(&record.title, 30),
                truncate(&record.company.name, 20),
                truncate(record.rubro(), 16),
                status,
                record.views,
                record.redeemed
            );
        }
    }

    let info = state.page_info();
    if info.page_count > 0 {
        let _ = writeln!(
            out,
            "  Page {} of {} ({} records)",
            info.page + 1,
            info.page_count,
            info.total
        );
    } else {
        let _ = writeln!(out, "  Page {}", info.page + 1);
    }

    let mut hints = Vec::new();
    if info.has_previous() {
        hints.push(format!("previous: --page {}", info.page - 1));
    }
    if info.has_next() {
        hints.push(format!("next: --page {}", info.page + 1));
    }
    if !hints.is_empty() {
        let _ = writeln!(out, "  {}", hints.join("  ").bright_black());
    }
    out
}

/// Renders both buckets of one chart as horizontal bars.
pub fn chart(state: &StatisticsState, kind: ChartKind) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", kind.title().bright_blue().bold());

    match state.chart(kind) {
        None => {
            let _ = writeln!(out, "  {}", NO_DATA.yellow());
        }
        Some(ChartSeries { daily, monthly }) => {
            render_bucket(&mut out, "Daily", daily);
            render_bucket(&mut out, "Monthly", monthly);
        }
    }
    out
}

fn render_bucket(out: &mut String, name: &str, bucket: &ChartBucket) {
    let _ = writeln!(out, "  {}", name.bright_white().bold());
    if bucket.is_empty() {
        let _ = writeln!(out, "    {}", "No records".yellow());
        return;
    }

    let max = bucket.data().iter().copied().fold(0.0_f64, f64::max);
    for (label, value) in bucket.points() {
        let width = if max > 0.0 {
            (value / max * BAR_WIDTH).round().max(0.0) as usize
        } else {
            0
        };
        let _ = writeln!(
            out,
            "    {:<12} {:>10} {}",
            label,
            format_value(value),
            "█".repeat(width).cyan()
        );
    }
    let _ = writeln!(
        out,
        "    {:<12} {:>10}",
        "Total".bold(),
        format_value(bucket.sum()).bold()
    );
}

/// Renders every panel, prefixed by a line per failed fetch.
pub fn dashboard(state: &StatisticsState, status: &DashboardStatus) -> String {
    let mut out = String::new();

    let failed = [
        ("summary", status.summary.error()),
        ("offers listing", status.offers.error()),
        (
            ChartKind::OffersViews.title(),
            status.offers_views_chart.error(),
        ),
        (
            ChartKind::CodesGenerated.title(),
            status.codes_generated_chart.error(),
        ),
        (
            ChartKind::CodesRedeemed.title(),
            status.codes_redeemed_chart.error(),
        ),
    ];
    for (panel, error) in failed {
        if error.is_some() {
            let _ = writeln!(out, "{} {}", "Could not load".red(), panel);
        }
    }

    out.push_str(&summary(state));
    out.push('\n');
    out.push_str(&offers(state));
    for kind in ChartKind::ALL {
        out.push('\n');
        out.push_str(&chart(state, kind));
    }
    out
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut short: String = text.chars().take(max.saturating_sub(1)).collect();
    short.push('…');
    short
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fetch_status::FetchStatus;
    use crate::application::store::Commit;
    use crate::domain::entities::{Company, OfferViewRecord, SummaryTotals};
    use crate::error::AppError;

    fn loaded_state() -> StatisticsState {
        let mut state = StatisticsState::new();
        state.apply(Commit::SetSummary(SummaryTotals {
            total_views: 1500,
            total_codes: 200,
            total_redeemed: 50,
        }));
        state.apply(Commit::SetOffersView(vec![OfferViewRecord {
            id: 11,
            title: "Cinema 2x1".to_string(),
            image: None,
            status: OfferStatus::Vigente,
            company: Company {
                name: "Cine Sur".to_string(),
                rubro: "Entretenimiento".to_string(),
            },
            views: 340,
            redeemed: 21,
        }]));
        state.apply(Commit::SetTotal(11));
        state.apply(Commit::SetCodeRedeemed(ChartSeries {
            daily: ChartBucket::new(vec!["2024-05-01".to_string()], vec![7.0]).unwrap(),
            monthly: ChartBucket::default(),
        }));
        state
    }

    #[test]
    fn test_unloaded_sections_render_no_data() {
        let state = StatisticsState::new();

        assert!(summary(&state).contains(NO_DATA));
        assert!(offers(&state).contains(NO_DATA));
        assert!(chart(&state, ChartKind::OffersViews).contains(NO_DATA));
    }

    #[test]
    fn test_empty_listing_is_not_missing_data() {
        let mut state = StatisticsState::new();
        state.apply(Commit::SetOffersView(vec![]));

        let rendered = offers(&state);
        assert!(rendered.contains("No records"));
        assert!(!rendered.contains(NO_DATA));
    }

    #[test]
    fn test_loaded_sections() {
        let state = loaded_state();

        let rendered = summary(&state);
        assert!(rendered.contains("1500"));
        assert!(rendered.contains("25.0%"));

        let rendered = offers(&state);
        assert!(rendered.contains("Cinema 2x1"));
        assert!(rendered.contains("Entretenimiento"));
        assert!(rendered.contains("Page 1 of 2 (11 records)"));

        let rendered = chart(&state, ChartKind::CodesRedeemed);
        assert!(rendered.contains("2024-05-01"));
        assert!(rendered.contains("No records"));
    }

    #[test]
    fn test_page_hints() {
        let mut state = loaded_state();
        let rendered = offers(&state);
        assert!(!rendered.contains("previous:"));
        assert!(rendered.contains("next: --page 1"));

        state.apply(Commit::SetTotal(35));
        state.apply(Commit::SetPage(1));
        let rendered = offers(&state);
        assert!(rendered.contains("previous: --page 0"));
        assert!(rendered.contains("next: --page 2"));

        state.apply(Commit::SetPage(3));
        let rendered = offers(&state);
        assert!(rendered.contains("previous: --page 2"));
        assert!(!rendered.contains("next:"));
    }

    #[test]
    fn test_chart_bucket_total() {
        let mut state = StatisticsState::new();
        state.apply(Commit::SetOffersChart(ChartSeries {
            daily: ChartBucket::new(
                vec!["2024-05-01".to_string(), "2024-05-02".to_string()],
                vec![3.0, 4.5],
            )
            .unwrap(),
            monthly: ChartBucket::default(),
        }));

        let rendered = chart(&state, ChartKind::OffersViews);
        assert!(rendered.contains("Total"));
        assert!(rendered.contains("7.50"));
    }

    #[test]
    fn test_dashboard_lists_failed_panels() {
        let state = loaded_state();
        let status = DashboardStatus {
            summary: FetchStatus::Succeeded(SummaryTotals::default()),
            offers: FetchStatus::Failed(AppError::fetch_failed("/offers-views", "timeout")),
            offers_views_chart: FetchStatus::NotStarted,
            codes_generated_chart: FetchStatus::NotStarted,
            codes_redeemed_chart: FetchStatus::NotStarted,
        };

        let rendered = dashboard(&state, &status);
        assert!(rendered.contains("offers listing"));
        assert_eq!(rendered.matches("Could not load").count(), 1);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long title", 6), "a ver…");
    }
}
