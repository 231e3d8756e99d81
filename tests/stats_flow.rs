mod common;

use benefits_stats::prelude::*;
use common::{FakeAnalytics, OFFERS_JSON};

#[tokio::test]
async fn test_listing_success_updates_store() {
    let fake = FakeAnalytics::new();
    fake.respond("/analitycs/offers-views", 200, OFFERS_JSON);
    let api_url = fake.spawn().await;
    let service = common::service(&api_url);

    let mut view = ViewLoader::new();
    let status = view
        .load(service.fetch_offers_view(&common::token(), 0, &OfferFilter::all()))
        .await;

    assert!(status.is_success());
    let state = service.store().snapshot();
    assert_eq!(state.offers_view().map(<[_]>::len), Some(3));
    assert_eq!(state.original_offers(), state.offers_view());
}

#[tokio::test]
async fn test_listing_failure_leaves_store_untouched() {
    let fake = FakeAnalytics::new();
    fake.respond("/analitycs/offers-views", 500, "{}");
    let api_url = fake.spawn().await;
    let service = common::service(&api_url);

    let mut view = ViewLoader::new();
    let status = view
        .load(service.fetch_offers_view(&common::token(), 0, &OfferFilter::all()))
        .await;

    assert!(status.is_failure());
    assert_eq!(service.store().snapshot(), StatisticsState::new());
}

#[tokio::test]
async fn test_local_filter_after_fetch() {
    let fake = FakeAnalytics::new();
    fake.respond("/analitycs/offers-views", 200, OFFERS_JSON);
    let api_url = fake.spawn().await;
    let service = common::service(&api_url);

    service
        .fetch_offers_view(&common::token(), 0, &OfferFilter::all())
        .await
        .unwrap();

    service.filter_locally(
        OfferFilter::all()
            .with_rubro("Food")
            .with_status(OfferStatus::Expirado),
    );
    let state = service.store().snapshot();
    let ids: Vec<i64> = state.offers_view().unwrap().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3]);
    assert_eq!(state.original_offers().map(<[_]>::len), Some(3));

    service.filter_locally(OfferFilter::all());
    let state = service.store().snapshot();
    assert_eq!(state.offers_view(), state.original_offers());

    // Filtering is local: still one request.
    assert_eq!(fake.requests().len(), 1);
}

#[tokio::test]
async fn test_change_page_requests_that_page() {
    let fake = FakeAnalytics::new();
    fake.respond("/analitycs/offers-views", 200, OFFERS_JSON);
    let api_url = fake.spawn().await;
    let service = common::service(&api_url);

    service
        .change_page(&common::token(), 2, &OfferFilter::all().with_rubro("Food"))
        .await
        .unwrap();

    assert_eq!(service.store().read(|state| state.page()), 2);
    let request = &fake.requests_to("/analitycs/offers-views")[0];
    assert_eq!(request.param("pag"), Some("2"));
    assert_eq!(request.param("search"), Some("Food"));
}

#[tokio::test]
async fn test_dashboard_loads_every_panel() {
    let fake = FakeAnalytics::new();
    fake.respond_all_ok();
    let api_url = fake.spawn().await;
    let service = common::service(&api_url);

    let status = service
        .load_dashboard(&common::token(), &OfferFilter::all(), &common::window())
        .await;

    assert_eq!(status.failures(), 0);
    assert_eq!(fake.requests().len(), 5);

    let state = service.store().snapshot();
    assert_eq!(state.summary().map(|s| s.total_views), Some(1500));
    assert!(state.offers_view().is_some());
    for kind in ChartKind::ALL {
        assert_eq!(state.chart(kind).map(|series| series.daily.len()), Some(2));
    }
}

#[tokio::test]
async fn test_dashboard_isolates_failed_panel() {
    let fake = FakeAnalytics::new();
    fake.respond_all_ok()
        .respond("/analitycs/generated-chart", 503, "{}");
    let api_url = fake.spawn().await;
    let service = common::service(&api_url);

    let status = service
        .load_dashboard(&common::token(), &OfferFilter::all(), &common::window())
        .await;

    assert_eq!(status.failures(), 1);
    assert!(status.codes_generated_chart.is_failure());
    assert!(!status.all_failed());

    let state = service.store().snapshot();
    assert!(state.code_generated().is_none());
    assert!(state.code_redeemed().is_some());
    assert!(state.summary().is_some());
}

#[tokio::test]
async fn test_clear_keeps_listing_base() {
    let fake = FakeAnalytics::new();
    fake.respond_all_ok();
    let api_url = fake.spawn().await;
    let service = common::service(&api_url);

    service
        .load_dashboard(&common::token(), &OfferFilter::all(), &common::window())
        .await;
    service.clear();

    let state = service.store().snapshot();
    assert!(state.summary().is_none());
    assert!(state.offers_view().is_none());
    assert!(state.offers_view_chart().is_none());
    assert_eq!(state.original_offers().map(<[_]>::len), Some(3));
}
