// Core estimation exports
pub mod encoding;
pub mod estimator;
pub mod regression;

pub use encoding::{encode_features, round_to_cents, EncodedFeatures};
pub use estimator::{EstimateError, PriceEstimator};
pub use regression::{LinearModel, PredictionError, Regressor};
