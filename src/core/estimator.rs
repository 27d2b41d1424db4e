use std::sync::Arc;
use thiserror::Error;
use crate::core::encoding::{encode_features, round_to_cents, EncodedFeatures};
use crate::core::regression::PredictionError;
use crate::models::{LocationMatch, PriceQuery};
use crate::services::ParameterStore;

/// Errors that can occur while estimating a price
#[derive(Debug, Error, PartialEq)]
pub enum EstimateError {
    #[error("model parameters have not been loaded")]
    NotLoaded,

    #[error("prediction failed: {0}")]
    Prediction(#[from] PredictionError),
}

/// Turns dwelling attributes into a price estimate using the loaded model
///
/// The estimator never loads artifacts itself; the store must already be
/// populated, otherwise every call fails with [`EstimateError::NotLoaded`].
#[derive(Clone)]
pub struct PriceEstimator {
    store: Arc<ParameterStore>,
}

impl PriceEstimator {
    pub fn new(store: Arc<ParameterStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ParameterStore {
        &self.store
    }

    /// Encode the model input row without calling the model
    pub fn features(
        &self,
        location: &str,
        total_sqft: f64,
        bhk: f64,
        bath: f64,
    ) -> Result<EncodedFeatures, EstimateError> {
        let params = self.store.parameters().ok_or(EstimateError::NotLoaded)?;
        Ok(encode_features(params.schema(), location, total_sqft, bhk, bath))
    }

    /// Estimated price rounded to two decimal places
    pub fn estimate(
        &self,
        location: &str,
        total_sqft: f64,
        bhk: f64,
        bath: f64,
    ) -> Result<f64, EstimateError> {
        let params = self.store.parameters().ok_or(EstimateError::NotLoaded)?;
        let encoded = encode_features(params.schema(), location, total_sqft, bhk, bath);

        if encoded.location == LocationMatch::Unknown {
            tracing::debug!("Unknown location {:?}, using zero location encoding", location);
        }

        let raw = params.model().predict(&encoded.values)?;
        Ok(round_to_cents(raw))
    }

    pub fn estimate_query(&self, query: &PriceQuery) -> Result<f64, EstimateError> {
        self.estimate(&query.location, query.total_sqft, query.bhk, query.bath)
    }
}
