#![allow(dead_code)]

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use benefits_stats::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use url::Url;

pub const TOKEN: &str = "test-token-123";

pub const SUMMARY_JSON: &str = r#"{"total_views":1500,"total_codes":200,"total_redeemed":50}"#;

pub const OFFERS_JSON: &str = r#"[
    {"id":1,"title":"Pizza 2x1","image":"https://cdn.example.com/pizza.png","status":"VIGENTE",
     "company":{"name":"Pizzeria Roma","rubro":"Food"},"views":320,"redeemed":41},
    {"id":2,"title":"Spa day","status":"EXPIRADO",
     "company":{"name":"Relax","rubro":"Health"},"views":180,"redeemed":9},
    {"id":3,"title":"Burger combo","status":"EXPIRADO",
     "company":{"name":"Grill House","rubro":"Food"},"views":95,"redeemed":12}
]"#;

pub const CHART_JSON: &str = r#"{
    "daily":{"labels":["2024-05-01","2024-05-02"],"data":[3,5]},
    "monthly":{"labels":["2024-04","2024-05"],"data":[40,52]}
}"#;

/// A request received by the fake analytics service.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: Vec<(String, String)>,
    pub authorization: Option<String>,
}

impl RecordedRequest {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// In-process stand-in for the analytics service.
///
/// Answers each path with the canned status and body registered through
/// [`FakeAnalytics::respond`] and records every request it receives.
/// Unregistered paths answer 404.
#[derive(Clone, Default)]
pub struct FakeAnalytics {
    responses: Arc<Mutex<HashMap<String, (StatusCode, String)>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the response for a full path such as `/analitycs/summary`.
    pub fn respond(&self, path: &str, status: u16, body: &str) -> &Self {
        self.responses.lock().unwrap().insert(
            path.to_string(),
            (StatusCode::from_u16(status).unwrap(), body.to_string()),
        );
        self
    }

    /// Registers a 200 response for every endpoint.
    pub fn respond_all_ok(&self) -> &Self {
        self.respond("/analitycs/summary", 200, SUMMARY_JSON)
            .respond("/analitycs/offers-views", 200, OFFERS_JSON);
        for kind in ChartKind::ALL {
            self.respond(&format!("/analitycs{}", kind.path()), 200, CHART_JSON);
        }
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.path == path)
            .collect()
    }

    /// Serves on an ephemeral local port and returns the API base URL.
    pub async fn spawn(&self) -> Url {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let app = Router::new().fallback(handle).with_state(self.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Url::parse(&format!("http://{addr}")).unwrap()
    }
}

async fn handle(State(fake): State<FakeAnalytics>, uri: Uri, headers: HeaderMap) -> Response {
    let query = uri
        .query()
        .map(|raw| {
            url::form_urlencoded::parse(raw.as_bytes())
                .into_owned()
                .collect()
        })
        .unwrap_or_default();

    fake.requests.lock().unwrap().push(RecordedRequest {
        path: uri.path().to_string(),
        query,
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
    });

    let canned = fake.responses.lock().unwrap().get(uri.path()).cloned();
    match canned {
        Some((status, body)) => {
            (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

pub fn token() -> AccessToken {
    AccessToken::new(TOKEN)
}

pub fn repository(api_url: &Url) -> HttpAnalyticsRepository {
    HttpAnalyticsRepository::new(api_url).unwrap()
}

pub fn service(api_url: &Url) -> StatsService<HttpAnalyticsRepository> {
    StatsService::new(
        Arc::new(repository(api_url)),
        Arc::new(StatisticsStore::new()),
    )
}

pub fn window() -> DateWindow {
    let end = chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    DateWindow::ending_on(end)
}
