// rest_api/src/lib.rs
// HTTP surface of the hospital traffic predictor.

use std::future::Future;
use std::io;
use std::sync::Arc;

use anyhow::{Context, Error as AnyhowError};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use lib::config::{AppConfig, FrontendConfig};
use lib::{PredictionService, PredictorError};
use models::{BookRequest, BookingRecord, HealthResponse, PredictRequest, PredictResponse, UiError};
use serde_json::json;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

pub mod config;

pub const HEALTH_MESSAGE: &str = "Akatsuki API running";
pub const FRONTEND_NOT_FOUND: &str = "frontend not found";

#[derive(Debug, Error)]
pub enum RestApiError {
    #[error(transparent)]
    Predictor(#[from] PredictorError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

// Every failure is a plain 500 carrying the error text.
impl IntoResponse for RestApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        error!("Request failed: {}", message);
        let body = Json(json!({
            "status": "error",
            "message": message,
        }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PredictionService>,
    pub frontend: Arc<FrontendConfig>,
}

impl AppState {
    pub fn new(service: PredictionService, frontend: FrontendConfig) -> Self {
        AppState { service: Arc::new(service), frontend: Arc::new(frontend) }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        AppState::new(PredictionService::from_config(config), config.frontend.clone())
    }
}

// Handler for GET /
async fn home_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok(HEALTH_MESSAGE))
}

// Handler for GET /ui
async fn ui_handler(State(state): State<AppState>) -> Result<Response, RestApiError> {
    let index_path = state.frontend.index_path();
    if !tokio::fs::try_exists(&index_path).await.unwrap_or(false) {
        debug!("No frontend entry at {:?}", index_path);
        return Ok(Json(UiError { error: FRONTEND_NOT_FOUND.to_string() }).into_response());
    }
    let page = tokio::fs::read_to_string(&index_path).await?;
    Ok(Html(page).into_response())
}

// Handler for POST /predict
async fn predict_handler(
    State(state): State<AppState>,
    Json(payload): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, RestApiError> {
    let response = state.service.predict(&payload)?;
    Ok(Json(response))
}

// Handler for POST /book
async fn book_handler(
    State(state): State<AppState>,
    Json(payload): Json<BookRequest>,
) -> Result<Json<BookingRecord>, RestApiError> {
    let booking = state.service.book(&payload)?;
    Ok(Json(booking))
}

/// Any origin, any method, any header. Only suitable for a demo deployment.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn build_router(state: AppState) -> Router {
    let mut app = Router::new()
        .route("/", get(home_handler))
        .route("/ui", get(ui_handler))
        .route("/predict", post(predict_handler))
        .route("/book", post(book_handler));

    if state.frontend.dir.is_dir() {
        info!("Serving frontend from {:?} at /static", state.frontend.dir);
        app = app.nest_service("/static", ServeDir::new(&state.frontend.dir));
    }

    app.with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

/// Serves `app` on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), AnyhowError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
        .context("REST API server failed")
}

// Main function to start the REST API server
pub async fn start_server<F>(config: AppConfig, shutdown: F) -> Result<(), AnyhowError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config::socket_addr(&config.server)?;
    let state = AppState::from_config(&config);
    let app = build_router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to address: {}", addr))?;
    info!("REST API server listening on http://{}", addr);

    serve(listener, app, shutdown).await?;

    info!("REST API server stopped.");
    Ok(())
}
