// rest_api/tests/api_tests.rs
use std::fs;
use std::net::SocketAddr;
use std::sync::Arc;

use chrono::NaiveDateTime;
use lib::config::{AppConfig, FrontendConfig};
use lib::engine::{FixedClock, HeuristicEngine, LinearRegressor, ModelPair, RandomSource};
use lib::PredictionService;
use models::{BookingRecord, CrowdCategory, HealthResponse, PredictResponse};
use rest_api::{build_router, serve, AppState, FRONTEND_NOT_FOUND, HEALTH_MESSAGE};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

struct TestServer {
    base_url: String,
    client: reqwest::Client,
    _shutdown: oneshot::Sender<()>,
}

async fn spawn_app(state: AppState) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel::<()>();
    let app = build_router(state);
    tokio::spawn(async move {
        serve(listener, app, async {
            let _ = rx.await;
        })
        .await
        .unwrap();
    });
    TestServer {
        base_url: format!("http://{}", addr),
        client: reqwest::Client::new(),
        _shutdown: tx,
    }
}

fn pinned_clock() -> FixedClock {
    // Wednesday
    FixedClock(NaiveDateTime::parse_from_str("2024-05-15 18:20:00", "%Y-%m-%d %H:%M:%S").unwrap())
}

fn seeded_state(frontend: FrontendConfig) -> AppState {
    let service = PredictionService::new(
        HeuristicEngine::default(),
        Arc::new(pinned_clock()),
        RandomSource::from_seed(Some(1234)),
    );
    AppState::new(service, frontend)
}

fn missing_frontend() -> FrontendConfig {
    FrontendConfig {
        dir: "/nonexistent/akatsuki/frontend".into(),
        ..FrontendConfig::default()
    }
}

#[tokio::test]
async fn health_check_reports_ok() {
    let server = spawn_app(seeded_state(missing_frontend())).await;
    let res = server.client.get(format!("{}/", server.base_url)).send().await.unwrap();
    assert!(res.status().is_success());
    let body: HealthResponse = res.json().await.unwrap();
    assert_eq!(body, HealthResponse::ok(HEALTH_MESSAGE));
}

#[tokio::test]
async fn predict_returns_full_response() {
    let server = spawn_app(seeded_state(missing_frontend())).await;
    let res = server
        .client
        .post(format!("{}/predict", server.base_url))
        .json(&json!({ "hospital": "Apollo", "problem": "fracture", "pincode": "560001", "want_booking": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let body: PredictResponse = res.json().await.unwrap();
    assert_eq!(body.hospital, "Apollo");
    assert!((0.0..=10.0).contains(&body.crowd_score));
    assert_eq!(body.crowd_category, CrowdCategory::from_score(body.crowd_score));
    assert!(body.inflow_est >= 5);
    assert!(body.emergency_est >= 1);
    assert!(body.suggestions.len() <= 3);
    assert!(body.suggestions.iter().all(|s| s.hospital != "Apollo"));
    assert_eq!(
        body.recommended_slots,
        vec!["2024-05-15 18:30", "2024-05-15 19:00", "2024-05-15 19:30", "2024-05-15 20:00"]
    );
}

#[tokio::test]
async fn predict_wire_format_uses_expected_keys() {
    let server = spawn_app(seeded_state(missing_frontend())).await;
    let body: Value = server
        .client
        .post(format!("{}/predict", server.base_url))
        .json(&json!({ "hospital": "Unlisted Hospital", "hour": 30, "weekday": -2 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    for key in [
        "hospital",
        "crowd_score",
        "crowd_category",
        "wait_minutes",
        "inflow_est",
        "emergency_est",
        "suggestions",
        "recommended_slots",
    ] {
        assert!(body.get(key).is_some(), "missing key {}", key);
    }
    let category = body["crowd_category"].as_str().unwrap();
    assert!(["Low", "Moderate", "High"].contains(&category));
    assert!(body["suggestions"][0]["est_wait"].is_u64());
    assert_eq!(body["hospital"], "Unlisted Hospital");
}

#[tokio::test]
async fn predict_without_hospital_is_rejected() {
    let server = spawn_app(seeded_state(missing_frontend())).await;
    let res = server
        .client
        .post(format!("{}/predict", server.base_url))
        .json(&json!({ "hour": 9 }))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_client_error());
}

#[tokio::test]
async fn predict_reports_slot_overflow_as_server_error() {
    let service = PredictionService::new(
        HeuristicEngine::default(),
        Arc::new(FixedClock(NaiveDateTime::MAX)),
        RandomSource::from_seed(Some(1234)),
    );
    let server = spawn_app(AppState::new(service, missing_frontend())).await;
    let res = server
        .client
        .post(format!("{}/predict", server.base_url))
        .json(&json!({ "hospital": "Apollo" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 500);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "status": "error", "message": "Internal error: slot time out of range" }));
}

#[tokio::test]
async fn predict_accepts_whole_float_hour() {
    let server = spawn_app(seeded_state(missing_frontend())).await;
    let post = |body: Value| {
        server.client.post(format!("{}/predict", server.base_url)).json(&body).send()
    };

    let res = post(json!({ "hospital": "Apollo", "hour": 9.0 })).await.unwrap();
    assert_eq!(res.status(), 200);

    let res = post(json!({ "hospital": "Apollo", "hour": 9.5 })).await.unwrap();
    assert!(res.status().is_client_error());
}

#[tokio::test]
async fn predict_prefers_loaded_models() {
    let models = ModelPair::new(
        Arc::new(LinearRegressor::new(2.0, vec![0.0, 0.0, 0.5, 0.0])),
        Arc::new(LinearRegressor::new(12.0, vec![1.0, 0.0, 0.0, 0.0])),
    );
    let service = PredictionService::new(
        HeuristicEngine::default(),
        Arc::new(pinned_clock()),
        RandomSource::from_seed(Some(5)),
    )
    .with_models(Some(models));
    let server = spawn_app(AppState::new(service, missing_frontend())).await;

    let body: PredictResponse = server
        .client
        .post(format!("{}/predict", server.base_url))
        .json(&json!({ "hospital": "Fortis", "hour": 8, "problem": "accident" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // crowd = 2 + 0.5 * 4, wait = 12 + 8
    assert_eq!(body.crowd_score, 4.0);
    assert_eq!(body.crowd_category, CrowdCategory::Moderate);
    assert_eq!(body.wait_minutes, 20);
    assert_eq!(body.inflow_est, 5);
    assert_eq!(body.emergency_est, 1);
}

#[tokio::test]
async fn book_returns_mock_confirmation() {
    let server = spawn_app(seeded_state(missing_frontend())).await;
    let res = server
        .client
        .post(format!("{}/book", server.base_url))
        .json(&json!({
            "hospital": "Apollo",
            "slot": "2024-01-01 10:00",
            "name": "A",
            "phone": "1",
            "fee_paid": 0
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let booking: BookingRecord = res.json().await.unwrap();
    assert!(booking.booking_id.starts_with("BK20240515182000"));
    assert_eq!(booking.token.len(), 4);
    assert!(booking.token.parse::<u32>().is_ok());
    assert!(booking.estimated_wait >= 5);
    assert_eq!(booking.hospital, "Apollo");
    assert_eq!(booking.slot, "2024-01-01 10:00");
}

#[tokio::test]
async fn ui_reports_missing_frontend() {
    let server = spawn_app(seeded_state(missing_frontend())).await;
    let body: Value = server
        .client
        .get(format!("{}/ui", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!({ "error": FRONTEND_NOT_FOUND }));
}

#[tokio::test]
async fn ui_and_static_serve_frontend_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index1.html"), "<html><body>Akatsuki</body></html>").unwrap();
    fs::write(dir.path().join("script.js"), "console.log('hi');").unwrap();
    let frontend = FrontendConfig { dir: dir.path().to_path_buf(), ..FrontendConfig::default() };
    let server = spawn_app(seeded_state(frontend)).await;

    let res = server.client.get(format!("{}/ui", server.base_url)).send().await.unwrap();
    assert_eq!(res.status(), 200);
    let content_type = res.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));
    assert!(res.text().await.unwrap().contains("Akatsuki"));

    let script = server
        .client
        .get(format!("{}/static/script.js", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(script.status(), 200);
    assert_eq!(script.text().await.unwrap(), "console.log('hi');");
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let server = spawn_app(seeded_state(missing_frontend())).await;
    let res = server
        .client
        .get(format!("{}/", server.base_url))
        .header("Origin", "http://example.test")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn state_from_default_config_serves_predictions() {
    let mut config = AppConfig::default();
    config.frontend = missing_frontend();
    config.heuristic.seed = Some(77);
    let server = spawn_app(AppState::from_config(&config)).await;
    let res = server
        .client
        .post(format!("{}/predict", server.base_url))
        .json(&json!({ "hospital": "Govt PHC" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
}
