use axum::{
    extract::{DefaultBodyLimit, Query, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;
use tracing::{error, info};

use crate::cli::ServeArgs;
use crate::dataset::source::DatasetSources;
use crate::dataset::store::Dataset;
use crate::dataset::vocabulary::DEFAULT_PAGE_SIZE;
use crate::matching::engine::MatchingConfig;
use crate::matching::predictor::DiseasePredictor;
use crate::matching::query::PredictError;
use crate::matching::ranking::PredictionOutcome;
use crate::matching::selection::SymptomSelection;
use crate::utils::validation::clamp_page_size;

/// Security configuration constants to prevent `DoS` attacks
pub const MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024; // 1MB
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const MAX_CONCURRENT_REQUESTS: usize = 100;

/// Shared application state
pub struct AppState {
    pub predictor: RwLock<DiseasePredictor>,
    pub sources: DatasetSources,
    /// Held for the whole fetch-and-swap so reloads apply in request order
    reload: Mutex<()>,
}

impl AppState {
    pub fn new(predictor: DiseasePredictor, sources: DatasetSources) -> Self {
        Self {
            predictor: RwLock::new(predictor),
            sources,
            reload: Mutex::new(()),
        }
    }

    /// Snapshot of the predictor; the dataset inside is shared, not copied
    fn snapshot(&self) -> DiseasePredictor {
        self.predictor
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Enhanced error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
    pub details: Option<String>,
}

#[derive(Deserialize)]
pub struct PredictRequest {
    /// Free-text, comma-separated symptoms
    #[serde(default)]
    pub symptoms: String,
    /// Symptoms picked from the vocabulary
    #[serde(default)]
    pub selected: Vec<String>,
}

impl PredictRequest {
    /// Typed text followed by the picked symptoms, as one matcher input
    pub fn to_input(&self) -> String {
        let selection: SymptomSelection = self.selected.iter().map(|s| s.trim()).collect();
        let typed = self.symptoms.trim();

        match (typed.is_empty(), selection.is_empty()) {
            (_, true) => typed.to_string(),
            (true, false) => selection.to_input(),
            (false, false) => format!("{typed}, {}", selection.to_input()),
        }
    }
}

#[derive(Deserialize)]
struct SymptomsParams {
    /// Case-insensitive substring filter
    q: Option<String>,
    /// Page size (default: 100, max: 500)
    limit: Option<usize>,
}

/// Create a safe error response that prevents information disclosure
/// while logging detailed errors server-side for debugging
pub fn create_safe_error_response(
    error_type: &str,
    user_message: &str,
    internal_error: Option<&str>,
) -> ErrorResponse {
    // Log detailed error server-side for debugging (not exposed to client)
    if let Some(internal_msg) = internal_error {
        error!("Internal error ({}): {}", error_type, internal_msg);
    }

    ErrorResponse {
        error: user_message.to_string(),
        error_type: error_type.to_string(),
        details: None, // Never expose internal details to prevent information disclosure
    }
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created or the server fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    // Build tokio runtime
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Routes and state, without the protective middleware
pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/predict", post(predict_handler))
        .route("/api/symptoms", get(symptoms_handler))
        .route("/api/dataset", get(dataset_handler))
        .route("/api/dataset/reload", post(reload_handler))
        .with_state(state)
}

/// Create the application router with all routes and middleware configured.
///
/// # Errors
///
/// Returns an error if the rate limiter configuration is rejected.
pub fn create_router(state: Arc<AppState>) -> anyhow::Result<Router> {
    // Configure IP-based rate limiting
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(10) // 10 requests per second per IP
        .burst_size(50) // Allow bursts of 50 requests
        .finish()
        .ok_or_else(|| anyhow::anyhow!("Invalid rate limiter configuration"))?;

    let app = api_routes(state).layer(
        ServiceBuilder::new()
            // Security headers for browser protection
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("x-content-type-options"),
                HeaderValue::from_static("nosniff"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("x-frame-options"),
                HeaderValue::from_static("DENY"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("referrer-policy"),
                HeaderValue::from_static("strict-origin-when-cross-origin"),
            ))
            // IP-based rate limiting to prevent abuse
            .layer(GovernorLayer {
                config: Arc::new(governor_conf),
            })
            // Request timeout to prevent slow client attacks
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                REQUEST_TIMEOUT,
            ))
            // Limit concurrent requests to prevent DOS
            .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_REQUESTS))
            .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_SIZE)),
    );

    Ok(app)
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let sources = args.sources.sources();

    // Start even if the dataset is unavailable; it can be reloaded later
    let mut predictor = DiseasePredictor::new(MatchingConfig::default());
    if let Err(e) = predictor.load(&sources).await {
        error!(error = %e, "Initial dataset load failed, prediction disabled until reload");
    }

    let state = Arc::new(AppState::new(predictor, sources));
    let app = create_router(state)?;

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting disease-predictor web server at http://{addr}");

    if args.open {
        let _ = open::that(format!("http://{addr}"));
    }

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Main page handler
async fn index_handler() -> Html<&'static str> {
    Html(include_str!("templates/index.html"))
}

/// API endpoint for predicting diseases from symptoms
async fn predict_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PredictRequest>,
) -> Response {
    let predictor = state.snapshot();

    if let Some(dataset) = predictor.dataset() {
        let vocabulary = dataset.vocabulary();
        if let Some(unknown) = request
            .selected
            .iter()
            .map(|s| s.trim())
            .find(|s| !vocabulary.contains(s))
        {
            return (
                StatusCode::BAD_REQUEST,
                Json(create_safe_error_response(
                    "unknown_symptom",
                    &format!("Unknown symptom selected: {unknown}"),
                    None,
                )),
            )
                .into_response();
        }
    }

    predict_response(&predictor, &request.to_input())
}

/// Build the prediction response for one request
pub fn predict_response(predictor: &DiseasePredictor, symptoms: &str) -> Response {
    match predictor.predict(symptoms) {
        Ok(outcome) => outcome_response(&outcome),
        Err(e) => predict_error_response(&e),
    }
}

fn outcome_response(outcome: &PredictionOutcome) -> Response {
    let status = if outcome.is_match() {
        "matches"
    } else {
        "no_matches"
    };

    Json(serde_json::json!({
        "status": status,
        "summary": outcome.summary(),
        "predictions": outcome.predictions(),
    }))
    .into_response()
}

fn predict_error_response(e: &PredictError) -> Response {
    let (status, error_type) = match e {
        PredictError::EmptyInput => (StatusCode::BAD_REQUEST, "empty_input"),
        PredictError::InputTooLong(_) => (StatusCode::BAD_REQUEST, "input_too_long"),
        PredictError::DatasetNotLoaded => (StatusCode::SERVICE_UNAVAILABLE, "dataset_not_loaded"),
    };

    (
        status,
        Json(create_safe_error_response(error_type, &e.to_string(), None)),
    )
        .into_response()
}

/// Search the symptom vocabulary
async fn symptoms_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SymptomsParams>,
) -> Response {
    let predictor = state.snapshot();
    let Some(dataset) = predictor.dataset() else {
        return predict_error_response(&PredictError::DatasetNotLoaded);
    };

    let vocabulary = dataset.vocabulary();
    let limit = clamp_page_size(params.limit.unwrap_or(DEFAULT_PAGE_SIZE));
    let page = vocabulary.page(params.q.as_deref().unwrap_or(""), limit);

    Json(serde_json::json!({
        "total": vocabulary.len(),
        "symptoms": page.symptoms,
        "remaining": page.remaining,
    }))
    .into_response()
}

/// Report loaded state and dataset provenance
async fn dataset_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let predictor = state.snapshot();

    let summary = predictor.dataset().map(|d| d.summary());
    Json(serde_json::json!({
        "loaded": predictor.is_loaded(),
        "max_results": predictor.config().max_results,
        "sources": state.sources,
        "summary": summary,
        "message": summary.as_ref().map(crate::dataset::store::LoadSummary::message),
    }))
}

/// Re-fetch both tables and swap them in
async fn reload_handler(State(state): State<Arc<AppState>>) -> Response {
    // Readers keep the predictor lock; only the swap is exclusive
    let _reload = state.reload.lock().await;
    match Dataset::load(&state.sources).await {
        Ok(dataset) => {
            let summary = state
                .predictor
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .replace(dataset);
            info!(fingerprint = %summary.fingerprint, "Dataset reloaded");

            Json(serde_json::json!({
                "loaded": true,
                "summary": summary,
                "message": summary.message(),
            }))
            .into_response()
        }
        Err(e) => (
            StatusCode::BAD_GATEWAY,
            Json(create_safe_error_response(
                "dataset_error",
                "Failed to load disease dataset. Please check if the dataset files are available.",
                Some(&e.to_string()),
            )),
        )
            .into_response(),
    }
}
