//! HTTP API tests
//!
//! Exercises every route through a mock upstream provider.

use std::sync::{Arc, Mutex};

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use async_trait::async_trait;
use serde_json::{Value, json};

use ipgeo::api::app::CACHE_CONTROL_VALUE;
use ipgeo::api::build_app;
use ipgeo::config::ApiConfig;
use ipgeo::errors::{GatewayError, Result};
use ipgeo::services::{LookupGateway, LookupProvider, RawProviderResponse};

// =============================================================================
// Test Setup
// =============================================================================

/// Mock provider with canned responses
struct MockProvider {
    self_ip: Result<String>,
    info: Result<Value>,
    /// `fetch_info` 收到的 ip 参数
    info_requests: Mutex<Vec<String>>,
}

impl MockProvider {
    fn new(self_ip: Result<String>, info: Result<Value>) -> Arc<Self> {
        Arc::new(Self {
            self_ip,
            info,
            info_requests: Mutex::new(Vec::new()),
        })
    }

    fn info_requests(&self) -> Vec<String> {
        self.info_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LookupProvider for MockProvider {
    async fn fetch_self_ip(&self) -> Result<String> {
        self.self_ip.clone()
    }

    async fn fetch_info(&self, ip: &str) -> Result<RawProviderResponse> {
        self.info_requests.lock().unwrap().push(ip.to_string());
        match &self.info {
            Ok(Value::Object(map)) => Ok(map.clone()),
            Ok(_) => Err(GatewayError::upstream_malformed_body("not an object")),
            Err(e) => Err(e.clone()),
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

fn berlin() -> Value {
    json!({
        "ip": "203.0.113.7",
        "city": "Berlin",
        "country": "Germany",
        "asn": "AS64500"
    })
}

macro_rules! init_app {
    ($provider:expr) => {
        init_app!($provider, ApiConfig::default())
    };
    ($provider:expr, $api:expr) => {
        test::init_service(build_app(LookupGateway::new($provider), $api)).await
    };
}

// =============================================================================
// Static routes
// =============================================================================

#[actix_rt::test]
async fn test_root_lists_endpoints() {
    let app = init_app!(MockProvider::new(Ok("1.1.1.1".into()), Ok(berlin())));

    let req = TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("/help"));
    let endpoints = body["endpoints"].as_array().unwrap();
    assert!(endpoints.contains(&json!("/ip")));
    assert!(endpoints.contains(&json!("/geo")));
}

#[actix_rt::test]
async fn test_help_routes() {
    let app = init_app!(MockProvider::new(Ok("1.1.1.1".into()), Ok(berlin())));

    let req = TestRequest::get().uri("/help").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let help = body.as_object().unwrap();
    for key in ["/", "/ip", "/geo", "/help"] {
        let description = help[key].as_str().unwrap();
        assert!(!description.is_empty(), "{} has empty description", key);
    }
    let optional = ["/docs", "/redoc", "/all"];
    assert!(
        help.keys()
            .all(|k| ["/", "/ip", "/geo", "/help"].contains(&k.as_str())
                || optional.contains(&k.as_str()))
    );
}

#[actix_rt::test]
async fn test_unknown_path_is_404_json() {
    let app = init_app!(MockProvider::new(Ok("1.1.1.1".into()), Ok(berlin())));

    let req = TestRequest::get().uri("/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "Not Found" }));
}

#[actix_rt::test]
async fn test_request_id_header() {
    let app = init_app!(MockProvider::new(Ok("1.1.1.1".into()), Ok(berlin())));

    let req = TestRequest::get().uri("/help").to_request();
    let resp = test::call_service(&app, req).await;
    let generated = resp.headers().get("x-request-id").unwrap().to_str().unwrap();
    assert_eq!(generated.len(), 36);

    let req = TestRequest::get()
        .uri("/help")
        .insert_header(("X-Request-ID", "trace-abc-123"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.headers().get("x-request-id").unwrap(), "trace-abc-123");
}

#[actix_rt::test]
async fn test_default_headers_on_every_response() {
    let failing = init_app!(MockProvider::new(
        Err(GatewayError::upstream_unreachable("connection refused")),
        Ok(berlin())
    ));
    let healthy = init_app!(MockProvider::new(Ok("203.0.113.7".into()), Ok(berlin())));

    let cases = [
        (&healthy, "/geo", StatusCode::OK),
        (&failing, "/ip", StatusCode::INTERNAL_SERVER_ERROR),
        (&healthy, "/nope", StatusCode::NOT_FOUND),
    ];
    for (app, uri, status) in cases {
        let req = TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(app, req).await;
        assert_eq!(resp.status(), status, "{}", uri);

        let headers = resp.headers();
        assert_eq!(
            headers.get("cache-control").unwrap(),
            CACHE_CONTROL_VALUE,
            "{}",
            uri
        );
        assert!(headers.contains_key("x-request-id"), "{}", uri);
    }
}

// =============================================================================
// /ip
// =============================================================================

#[actix_rt::test]
async fn test_ip_success() {
    let app = init_app!(MockProvider::new(Ok("203.0.113.7".into()), Ok(berlin())));

    let req = TestRequest::get().uri("/ip").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "ip": "203.0.113.7" }));
}

#[actix_rt::test]
async fn test_ip_failure_is_500() {
    let app = init_app!(MockProvider::new(
        Err(GatewayError::upstream_unreachable("connection refused")),
        Ok(berlin())
    ));

    let req = TestRequest::get().uri("/ip").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("Error occurred:"));
    assert!(error.contains("connection refused"));
}

// =============================================================================
// /geo
// =============================================================================

#[actix_rt::test]
async fn test_geo_fills_missing_fields() {
    let provider = MockProvider::new(Ok("203.0.113.7".into()), Ok(berlin()));
    let app = init_app!(provider.clone());

    let req = TestRequest::get().uri("/geo").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "ip": "203.0.113.7",
            "city": "Berlin",
            "country": "Germany",
            "latitude": "",
            "longitude": ""
        })
    );
    // 地理位置查询使用刚解析出的本机 IP
    assert_eq!(provider.info_requests(), vec!["203.0.113.7".to_string()]);
}

#[actix_rt::test]
async fn test_geo_ip_failure_skips_info_lookup() {
    let provider = MockProvider::new(
        Err(GatewayError::upstream_bad_status("HTTP 503")),
        Ok(berlin()),
    );
    let app = init_app!(provider.clone());

    let req = TestRequest::get().uri("/geo").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("HTTP 503"));
    assert!(provider.info_requests().is_empty());
}

#[actix_rt::test]
async fn test_geo_info_failure_is_500() {
    let app = init_app!(MockProvider::new(
        Ok("1.2.3.4".into()),
        Err(GatewayError::upstream_unreachable("dns error: no such host"))
    ));

    let req = TestRequest::get().uri("/geo").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    let error = body["error"].as_str().unwrap();
    assert!(error.starts_with("Error occurred while fetching geolocation:"));
    assert!(error.contains("no such host"));
}

#[actix_rt::test]
async fn test_geo_is_deterministic() {
    let app = init_app!(MockProvider::new(Ok("203.0.113.7".into()), Ok(berlin())));

    let mut bodies = Vec::new();
    for _ in 0..2 {
        let req = TestRequest::get().uri("/geo").to_request();
        let resp = test::call_service(&app, req).await;
        let body: Value = test::read_body_json(resp).await;
        bodies.push(body);
    }
    assert_eq!(bodies[0], bodies[1]);
}

// =============================================================================
// /all
// =============================================================================

#[actix_rt::test]
async fn test_all_passes_through_raw_json() {
    let provider = MockProvider::new(Ok("unused".into()), Ok(berlin()));
    let app = init_app!(provider.clone());

    let req = TestRequest::get().uri("/all?ip=8.8.8.8").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, berlin());
    assert_eq!(provider.info_requests(), vec!["8.8.8.8".to_string()]);
}

#[actix_rt::test]
async fn test_all_keeps_upstream_key_order() {
    let provider = MockProvider::new(
        Ok("unused".into()),
        Ok(serde_json::from_str(r#"{"ip":"1.1.1.1","country":"DE","asn":"AS1"}"#).unwrap()),
    );
    let app = init_app!(provider);

    let req = TestRequest::get().uri("/all?ip=1.1.1.1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    assert_eq!(
        std::str::from_utf8(&body).unwrap(),
        r#"{"ip":"1.1.1.1","country":"DE","asn":"AS1"}"#
    );
}

#[actix_rt::test]
async fn test_all_repeated_ip_uses_last_value() {
    let provider = MockProvider::new(Ok("unused".into()), Ok(berlin()));
    let app = init_app!(provider.clone());

    let req = TestRequest::get().uri("/all?ip=a&ip=b").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(provider.info_requests(), vec!["b".to_string()]);
}

#[actix_rt::test]
async fn test_all_defaults_to_empty_ip() {
    let provider = MockProvider::new(Ok("unused".into()), Ok(berlin()));
    let app = init_app!(provider.clone());

    let req = TestRequest::get().uri("/all").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(provider.info_requests(), vec![String::new()]);
}

#[actix_rt::test]
async fn test_all_failure_is_200_by_default() {
    let app = init_app!(MockProvider::new(
        Ok("unused".into()),
        Err(GatewayError::upstream_bad_status("HTTP 429"))
    ));

    let req = TestRequest::get().uri("/all?ip=1.2.3.4").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let error = body["error"].as_str().unwrap();
    assert!(error.starts_with("Error occurred while fetching data from server:"));
    assert!(error.contains("HTTP 429"));
}

#[actix_rt::test]
async fn test_all_failure_can_be_500() {
    let app = init_app!(
        MockProvider::new(
            Ok("unused".into()),
            Err(GatewayError::upstream_bad_status("HTTP 429"))
        ),
        ApiConfig {
            all_errors_as_500: true
        }
    );

    let req = TestRequest::get().uri("/all").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
