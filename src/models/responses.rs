use serde::{Deserialize, Serialize};

/// Response for the location listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationsResponse {
    pub locations: Vec<String>,
}

/// Response for the price estimate endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictPriceResponse {
    pub estimated_price: f64,
    pub confidence: u8,
    pub location: String,
    pub total_sqft: f64,
    pub bhk: f64,
    pub bath: f64,
}

/// Root probe response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
