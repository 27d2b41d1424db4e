use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by a model's predict call
#[derive(Debug, Error, PartialEq)]
pub enum PredictionError {
    #[error("feature vector has {actual} values, model expects {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("model produced a non-finite estimate: {0}")]
    NonFinite(f64),
}

/// A trained model that maps one feature row to a scalar estimate
pub trait Regressor: Send + Sync {
    /// Number of features the model was trained on
    fn n_features(&self) -> usize;

    fn predict(&self, features: &[f64]) -> Result<f64, PredictionError>;
}

/// Ordinary least-squares model: `intercept + coefficients · features`
///
/// Serialized as `{"intercept": 1.5, "coefficients": [...]}` with one
/// coefficient per schema column, in schema order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl LinearModel {
    pub fn new(intercept: f64, coefficients: Vec<f64>) -> Self {
        Self { intercept, coefficients }
    }
}

impl Regressor for LinearModel {
    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    #[inline]
    fn predict(&self, features: &[f64]) -> Result<f64, PredictionError> {
        if features.len() != self.coefficients.len() {
            return Err(PredictionError::DimensionMismatch {
                expected: self.coefficients.len(),
                actual: features.len(),
            });
        }

        let estimate = self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(w, x)| w * x)
                .sum::<f64>();

        if !estimate.is_finite() {
            return Err(PredictionError::NonFinite(estimate));
        }

        Ok(estimate)
    }
}
