use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::PriceQuery;

/// Request body for a price estimate
///
/// Every field is optional at the serde layer so a missing field surfaces
/// as a validation failure rather than a JSON parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PredictPriceRequest {
    #[validate(required, length(min = 1))]
    pub location: Option<String>,
    #[validate(required, range(exclusive_min = 0.0))]
    pub total_sqft: Option<f64>,
    #[validate(required, range(exclusive_min = 0.0))]
    pub bhk: Option<f64>,
    #[validate(required, range(exclusive_min = 0.0))]
    pub bath: Option<f64>,
}

impl PredictPriceRequest {
    /// Whether every field was supplied, regardless of its value
    pub fn has_all_fields(&self) -> bool {
        self.location.is_some()
            && self.total_sqft.is_some()
            && self.bhk.is_some()
            && self.bath.is_some()
    }

    /// Convert into a query, `None` if any field is absent
    pub fn into_query(self) -> Option<PriceQuery> {
        match (self.location, self.total_sqft, self.bhk, self.bath) {
            (Some(location), Some(total_sqft), Some(bhk), Some(bath)) => Some(PriceQuery {
                location,
                total_sqft,
                bhk,
                bath,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> PredictPriceRequest {
        PredictPriceRequest {
            location: Some("1st block".to_string()),
            total_sqft: Some(1200.0),
            bhk: Some(2.0),
            bath: Some(2.0),
        }
    }

    #[test]
    fn test_complete_request_validates() {
        let req = full_request();
        assert!(req.validate().is_ok());
        let query = req.into_query().unwrap();
        assert_eq!(query.location, "1st block");
        assert_eq!(query.total_sqft, 1200.0);
    }

    #[test]
    fn test_missing_bath_fails_validation() {
        let req = PredictPriceRequest { bath: None, ..full_request() };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("bath"));
        assert!(!req.has_all_fields());
        assert!(req.into_query().is_none());
    }

    #[test]
    fn test_non_positive_values_fail_validation() {
        let req = PredictPriceRequest { total_sqft: Some(0.0), ..full_request() };
        assert!(req.validate().is_err());
        assert!(req.has_all_fields());

        let req = PredictPriceRequest { bhk: Some(-1.0), ..full_request() };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_empty_location_fails_validation() {
        let req = PredictPriceRequest { location: Some(String::new()), ..full_request() };
        assert!(req.validate().is_err());
    }
}
