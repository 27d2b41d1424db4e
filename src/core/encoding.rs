use crate::models::{
    FeatureSchema, LocationMatch, BATH_INDEX, BHK_INDEX, TOTAL_AREA_INDEX,
};

/// A single model input row plus how its location was resolved
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedFeatures {
    pub values: Vec<f64>,
    pub location: LocationMatch,
}

/// Build the model input row for one dwelling
///
/// Continuous slots are written at their trained positions and the
/// location is one-hot encoded. An unrecognized location leaves the whole
/// location block at zero.
pub fn encode_features(
    schema: &FeatureSchema,
    location: &str,
    total_sqft: f64,
    bhk: f64,
    bath: f64,
) -> EncodedFeatures {
    let mut values = vec![0.0; schema.len()];
    values[TOTAL_AREA_INDEX] = total_sqft;
    values[BATH_INDEX] = bath;
    values[BHK_INDEX] = bhk;

    let location = schema.find_location(location);
    match location {
        LocationMatch::Known(position) => values[position] = 1.0,
        LocationMatch::Unknown => {}
    }

    EncodedFeatures { values, location }
}

/// Round an estimate to two decimal places, ties to even
#[inline]
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema_with_locations(count: usize) -> FeatureSchema {
        let mut columns = vec![
            "total_sqft".to_string(),
            "bath".to_string(),
            "bhk".to_string(),
            "1st block".to_string(),
            "2nd phase".to_string(),
        ];
        columns.extend((2..count).map(|i| format!("location {}", i)));
        FeatureSchema::new(columns).unwrap()
    }

    #[test]
    fn test_known_location_vector() {
        let schema = schema_with_locations(20);
        assert_eq!(schema.len(), 23);

        let encoded = encode_features(&schema, "1st block", 1200.0, 2.0, 2.0);

        let mut expected = vec![0.0; 23];
        expected[0] = 1200.0;
        expected[1] = 2.0;
        expected[2] = 2.0;
        expected[3] = 1.0;
        assert_eq!(encoded.values, expected);
        assert_eq!(encoded.location, LocationMatch::Known(3));
    }

    #[test]
    fn test_unknown_location_vector() {
        let schema = schema_with_locations(20);

        let encoded = encode_features(&schema, "nonexistent place", 1000.0, 2.0, 2.0);

        assert_eq!(&encoded.values[..3], &[1000.0, 2.0, 2.0]);
        assert!(encoded.values[3..].iter().all(|&v| v == 0.0));
        assert_eq!(encoded.location, LocationMatch::Unknown);
    }

    #[test]
    fn test_bath_and_bhk_positions() {
        let schema = schema_with_locations(2);

        let encoded = encode_features(&schema, "2nd phase", 850.0, 3.0, 1.0);

        assert_eq!(encoded.values[TOTAL_AREA_INDEX], 850.0);
        assert_eq!(encoded.values[BATH_INDEX], 1.0);
        assert_eq!(encoded.values[BHK_INDEX], 3.0);
        assert_eq!(encoded.values[4], 1.0);
    }

    #[test]
    fn test_exactly_one_location_slot_set() {
        let schema = schema_with_locations(20);

        let encoded = encode_features(&schema, "LOCATION 7", 1500.0, 3.0, 2.0);

        let set = encoded.values[3..].iter().filter(|&&v| v == 1.0).count();
        assert_eq!(set, 1);
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(85.456), 85.46);
        assert_eq!(round_to_cents(85.454), 85.45);
        assert_eq!(round_to_cents(-12.3449), -12.34);
        assert_eq!(round_to_cents(100.0), 100.0);
    }

    #[test]
    fn test_round_to_cents_ties_to_even() {
        assert_eq!(round_to_cents(0.125), 0.12);
        assert_eq!(round_to_cents(0.375), 0.38);
        assert_eq!(round_to_cents(143.125), 143.12);
        assert_eq!(round_to_cents(-0.125), -0.12);
    }
}
