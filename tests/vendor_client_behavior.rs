//! Behavior-driven tests for the JQData HTTP vendor client.
//!
//! These tests script the HTTP transport and verify the wire requests the
//! client sends and how it interprets the vendor's plain-text responses.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use jqfeed_core::{
    Datafeed, DatafeedSettings, Exchange, HistoryRequest, HttpClient, HttpError, HttpRequest,
    HttpResponse, Interval, JqDataClient, JqdataDatafeed, PriceQuery, VendorClient,
    VendorErrorKind, DEFAULT_TIMEOUT_MS, JQDATA_API_URL,
};
use serde_json::Value;
use time::macros::datetime;

struct ScriptedHttpClient {
    responses: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedHttpClient {
    fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn recorded_requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }

    fn recorded_bodies(&self) -> Vec<Value> {
        self.recorded_requests()
            .iter()
            .map(|request| {
                let body = request.body.as_deref().expect("request must carry a body");
                serde_json::from_str(body).expect("body must be JSON")
            })
            .collect()
    }
}

impl HttpClient for ScriptedHttpClient {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request);
        self.responses
            .lock()
            .expect("response script should not be poisoned")
            .pop_front()
            .expect("unexpected extra HTTP call")
    }
}

const PRICE_CSV: &str = "date,open,close,high,low,volume,money\n\
2023-01-03 09:31,7.10,7.15,7.20,7.05,120000,858000.0\n\
2023-01-03 09:32,7.15,7.12,7.16,7.11,80000,570000.0\n";

fn price_query(frequency: Option<&'static str>) -> PriceQuery {
    PriceQuery {
        security: String::from("600000.XSHG"),
        frequency,
        start_date: datetime!(2023-01-03 01:30:00 UTC),
        end_date: datetime!(2023-01-03 15:01:00 +8),
        panel: false,
    }
}

// =============================================================================
// Authentication
// =============================================================================

#[test]
fn auth_exchanges_credentials_for_a_cached_token() {
    // Given: A vendor that issues a token and then serves prices
    let http = Arc::new(ScriptedHttpClient::new(vec![
        Ok(HttpResponse::ok_text("5b6a9ba1b0f3f1f9\n")),
        Ok(HttpResponse::ok_text(PRICE_CSV)),
    ]));
    let client = JqDataClient::with_http_client(http.clone());

    // When: The client logs in and queries prices
    client.auth("13800000000", "secret").expect("auth should succeed");
    client
        .get_price(&price_query(Some("1m")))
        .expect("query should succeed");

    // Then: The login posts get_token and the query reuses the trimmed token
    let requests = http.recorded_requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].url, JQDATA_API_URL);
    assert_eq!(requests[0].timeout_ms, DEFAULT_TIMEOUT_MS);
    assert_eq!(
        requests[0].headers.get("content-type").map(String::as_str),
        Some("application/json")
    );

    let bodies = http.recorded_bodies();
    assert_eq!(bodies[0]["method"], "get_token");
    assert_eq!(bodies[0]["mob"], "13800000000");
    assert_eq!(bodies[0]["pwd"], "secret");
    assert_eq!(bodies[1]["token"], "5b6a9ba1b0f3f1f9");
    assert!(client.is_authenticated());
}

#[test]
fn auth_rejection_body_is_an_auth_error() {
    let http = Arc::new(ScriptedHttpClient::new(vec![Ok(HttpResponse::ok_text(
        "error: invalid username or password",
    ))]));
    let client = JqDataClient::with_http_client(http);

    let error = client.auth("user", "wrong").expect_err("must fail");

    assert_eq!(error.kind(), VendorErrorKind::Auth);
    assert!(error.message().contains("invalid username or password"));
    assert!(!client.is_authenticated());
}

#[test]
fn auth_transport_failure_stays_a_transport_error() {
    let http = Arc::new(ScriptedHttpClient::new(vec![Err(HttpError::new(
        "connection failed: refused",
    ))]));
    let client = JqDataClient::with_http_client(http);

    let error = client.auth("user", "pw").expect_err("must fail");
    assert_eq!(error.kind(), VendorErrorKind::Transport);
}

// =============================================================================
// Price queries
// =============================================================================

#[test]
fn price_query_sends_beijing_wall_clock_bounds() {
    // Given: An authenticated client
    let http = Arc::new(ScriptedHttpClient::new(vec![
        Ok(HttpResponse::ok_text("token")),
        Ok(HttpResponse::ok_text(PRICE_CSV)),
    ]));
    let client = JqDataClient::with_http_client(http.clone());
    client.auth("user", "pw").expect("auth should succeed");

    // When: A minute query with a UTC start is issued
    let frame = client
        .get_price(&price_query(Some("1m")))
        .expect("query should succeed")
        .expect("rows expected");

    // Then: Bounds are rendered as Beijing time and rows are parsed
    let body = &http.recorded_bodies()[1];
    assert_eq!(body["method"], "get_price_period");
    assert_eq!(body["code"], "600000.XSHG");
    assert_eq!(body["unit"], "1m");
    assert_eq!(body["date"], "2023-01-03 09:30:00");
    assert_eq!(body["end_date"], "2023-01-03 15:01:00");

    assert_eq!(frame.len(), 2);
    assert_eq!(frame.rows[1].index, datetime!(2023-01-03 09:32:00));
    assert_eq!(frame.rows[1].close, 7.12);
}

#[test]
fn absent_frequency_falls_back_to_vendor_daily_default() {
    let http = Arc::new(ScriptedHttpClient::new(vec![
        Ok(HttpResponse::ok_text("token")),
        Ok(HttpResponse::ok_text("date,open,close,high,low,volume,money\n")),
    ]));
    let client = JqDataClient::with_http_client(http.clone());
    client.auth("user", "pw").expect("auth should succeed");

    let frame = client
        .get_price(&price_query(None))
        .expect("query should succeed");

    assert_eq!(frame, None, "header-only table means no data");
    assert_eq!(http.recorded_bodies()[1]["unit"], "1d");
}

#[test]
fn upstream_status_failure_is_an_upstream_error() {
    let http = Arc::new(ScriptedHttpClient::new(vec![
        Ok(HttpResponse::ok_text("token")),
        Ok(HttpResponse {
            status: 502,
            body: String::from("bad gateway"),
        }),
    ]));
    let client = JqDataClient::with_http_client(http);
    client.auth("user", "pw").expect("auth should succeed");

    let error = client
        .get_price(&price_query(Some("1d")))
        .expect_err("must fail");
    assert_eq!(error.kind(), VendorErrorKind::Upstream);
    assert!(error.message().contains("502"));
}

#[test]
fn custom_endpoint_is_used_for_every_call() {
    let http = Arc::new(ScriptedHttpClient::new(vec![Ok(HttpResponse::ok_text(
        "token",
    ))]));
    let client =
        JqDataClient::with_http_client(http.clone()).with_endpoint("http://localhost:9000/apis");

    client.auth("user", "pw").expect("auth should succeed");

    assert_eq!(http.recorded_requests()[0].url, "http://localhost:9000/apis");
}

#[test]
fn configured_timeout_is_applied_to_every_call() {
    // Given: A client with a short per-call timeout
    let http = Arc::new(ScriptedHttpClient::new(vec![
        Ok(HttpResponse::ok_text("token")),
        Ok(HttpResponse::ok_text(PRICE_CSV)),
    ]));
    let client = JqDataClient::with_http_client(http.clone()).with_timeout_ms(2_500);

    // When: The client logs in and queries prices
    client.auth("user", "pw").expect("auth should succeed");
    client
        .get_price(&price_query(Some("1m")))
        .expect("query should succeed");

    // Then: Both wire requests carry the configured timeout
    let timeouts: Vec<u64> = http
        .recorded_requests()
        .iter()
        .map(|request| request.timeout_ms)
        .collect();
    assert_eq!(timeouts, vec![2_500, 2_500]);
}

// =============================================================================
// End to end through the datafeed
// =============================================================================

#[test]
fn datafeed_over_http_client_produces_cst_bars() {
    // Given: A datafeed whose vendor client talks to a scripted transport
    let http = Arc::new(ScriptedHttpClient::new(vec![
        Ok(HttpResponse::ok_text("token")),
        Ok(HttpResponse::ok_text(PRICE_CSV)),
    ]));
    let feed = JqdataDatafeed::new(
        DatafeedSettings::new("user", "pw"),
        Arc::new(JqDataClient::with_http_client(http.clone())),
    );
    let request = HistoryRequest::new(
        "600000",
        Exchange::Sse,
        Interval::Minute,
        datetime!(2023-01-03 09:30:00 +8),
        datetime!(2023-01-03 09:32:00 +8),
    )
    .expect("valid request");

    // When: History is requested
    let bars = feed
        .query_bar_history(&request)
        .expect("query should succeed")
        .expect("vendor is available");

    // Then: The wire query is normalized and extended, and bars are localized
    let body = &http.recorded_bodies()[1];
    assert_eq!(body["code"], "600000.XSHG");
    assert_eq!(body["unit"], "1m");
    assert_eq!(body["end_date"], "2023-01-03 09:33:00");

    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0].datetime, datetime!(2023-01-03 09:31:00 +8));
    assert_eq!(bars[0].vt_symbol(), "600000.SSE");
    assert_eq!(bars[0].open_interest, 0.0);
}

#[test]
fn datafeed_reports_unavailable_when_vendor_rejects_login() {
    let http = Arc::new(ScriptedHttpClient::new(vec![Ok(HttpResponse::ok_text(
        "error: account expired",
    ))]));
    let feed = JqdataDatafeed::new(
        DatafeedSettings::new("user", "pw"),
        Arc::new(JqDataClient::with_http_client(http.clone())),
    );
    let request = HistoryRequest::new(
        "600000",
        Exchange::Sse,
        Interval::Daily,
        datetime!(2023-01-01 00:00:00 +8),
        datetime!(2023-01-05 00:00:00 +8),
    )
    .expect("valid request");

    let result = feed.query_bar_history(&request).expect("not an error");

    assert_eq!(result, None);
    assert_eq!(http.recorded_requests().len(), 1, "no price query after failed login");
}
