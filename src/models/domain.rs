use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// Number of continuous slots at the head of every feature vector
pub const FIXED_FEATURE_COUNT: usize = 3;

/// Slot positions the model was trained with. Not alphabetical: area, bath, bhk.
pub const TOTAL_AREA_INDEX: usize = 0;
pub const BATH_INDEX: usize = 1;
pub const BHK_INDEX: usize = 2;

/// Errors raised while building a feature schema
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("schema has {0} columns, expected at least {1} fixed numeric columns")]
    TooFewColumns(usize, usize),
}

/// On-disk schema document: `{"data_columns": [...]}`
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnsDocument {
    #[serde(default)]
    pub data_columns: Vec<String>,
}

/// Ordered feature names the model expects
///
/// The first three columns are the continuous inputs, every column after
/// that is one location in the one-hot block. Order is fixed once built.
#[derive(Debug, Clone)]
pub struct FeatureSchema {
    columns: Vec<String>,
    location_index: HashMap<String, usize>,
}

impl FeatureSchema {
    pub fn new(columns: Vec<String>) -> Result<Self, SchemaError> {
        if columns.len() < FIXED_FEATURE_COUNT {
            return Err(SchemaError::TooFewColumns(columns.len(), FIXED_FEATURE_COUNT));
        }

        let mut location_index = HashMap::with_capacity(columns.len() - FIXED_FEATURE_COUNT);
        for (position, name) in columns.iter().enumerate().skip(FIXED_FEATURE_COUNT) {
            // First occurrence wins on duplicate names
            location_index.entry(name.to_lowercase()).or_insert(position);
        }

        Ok(Self { columns, location_index })
    }

    /// Total vector length (fixed slots plus locations)
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Known location names, in schema order, without the fixed slots
    pub fn locations(&self) -> &[String] {
        &self.columns[FIXED_FEATURE_COUNT..]
    }

    /// Case-insensitive lookup of a location's vector position
    pub fn find_location(&self, location: &str) -> LocationMatch {
        match self.location_index.get(&location.to_lowercase()) {
            Some(&position) => LocationMatch::Known(position),
            None => LocationMatch::Unknown,
        }
    }
}

/// Outcome of matching a requested location against the schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationMatch {
    /// Vector position of the matched location column
    Known(usize),
    /// Not a known location; every location slot stays zero
    Unknown,
}

/// Validated inputs for a single price estimate
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuery {
    pub location: String,
    pub total_sqft: f64,
    pub bhk: f64,
    pub bath: f64,
}
