//! Dwelling Estimator - price estimation service for residential dwellings
//!
//! This library loads a pre-trained regression model together with its
//! feature schema and turns dwelling attributes (area, bathrooms, BHK and
//! location) into an estimated price. The HTTP layer in [`routes`] exposes
//! the estimator to the frontend client.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{encode_features, EstimateError, LinearModel, PredictionError, PriceEstimator, Regressor};
pub use crate::models::{FeatureSchema, LocationMatch, PredictPriceRequest, PredictPriceResponse, PriceQuery};
pub use crate::services::{ArtifactPaths, LoadError, ParameterStore};
