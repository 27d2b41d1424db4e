use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;
use crate::core::PriceEstimator;
use crate::models::{
    ErrorResponse, LocationsResponse, MessageResponse, PredictPriceRequest, PredictPriceResponse,
};
use crate::services::ParameterStore;
use std::sync::Arc;

const MISSING_PARAMETERS: &str = "Missing required parameters: location, total_sqft, bhk, bath";
const INVALID_PARAMETERS: &str =
    "Invalid parameters: location must be non-empty and total_sqft, bhk, bath must be positive";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ParameterStore>,
    pub estimator: PriceEstimator,
    pub confidence: u8,
}

impl AppState {
    pub fn new(store: Arc<ParameterStore>, confidence: u8) -> Self {
        Self {
            estimator: PriceEstimator::new(store.clone()),
            store,
            confidence,
        }
    }
}

/// Configure all prediction-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(root))
        .route("/health", web::get().to(health_check))
        .route("/get-location", web::get().to(get_locations))
        .route("/predict-price", web::post().to(predict_price));
}

fn error_response(status: StatusCode, error: &str, message: String) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: status.as_u16(),
    })
}

async fn root() -> impl Responder {
    HttpResponse::Ok().json(MessageResponse {
        message: "Hello World".to_string(),
    })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("healthy")
}

/// List known locations
///
/// GET /get-location
async fn get_locations(state: web::Data<AppState>) -> impl Responder {
    if let Err(e) = state.store.load() {
        tracing::error!("Failed to load model parameters: {}", e);
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string(), e.to_string());
    }

    HttpResponse::Ok().json(LocationsResponse {
        locations: state.store.locations().to_vec(),
    })
}

/// Estimate a dwelling price
///
/// POST /predict-price
///
/// Request body:
/// ```json
/// {
///   "location": "1st block",
///   "total_sqft": 1200,
///   "bhk": 2,
///   "bath": 2
/// }
/// ```
async fn predict_price(
    state: web::Data<AppState>,
    req: web::Json<PredictPriceRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for predict_price request: {:?}", errors);
        let error = if req.has_all_fields() { INVALID_PARAMETERS } else { MISSING_PARAMETERS };
        return error_response(StatusCode::BAD_REQUEST, error, errors.to_string());
    }

    let Some(query) = req.into_inner().into_query() else {
        return error_response(
            StatusCode::BAD_REQUEST,
            MISSING_PARAMETERS,
            MISSING_PARAMETERS.to_string(),
        );
    };

    if let Err(e) = state.store.load() {
        tracing::error!("Failed to load model parameters: {}", e);
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string(), e.to_string());
    }

    match state.estimator.estimate_query(&query) {
        Ok(estimated_price) => {
            tracing::info!(
                "Estimated {} for {} ({} sqft, {} bhk, {} bath)",
                estimated_price,
                query.location,
                query.total_sqft,
                query.bhk,
                query.bath
            );

            HttpResponse::Ok().json(PredictPriceResponse {
                estimated_price,
                confidence: state.confidence,
                location: query.location,
                total_sqft: query.total_sqft,
                bhk: query.bhk,
                bath: query.bath,
            })
        }
        Err(e) => {
            tracing::error!("Prediction failed for {}: {}", query.location, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string(), e.to_string())
        }
    }
}
