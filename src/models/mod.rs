// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    ColumnsDocument, FeatureSchema, LocationMatch, PriceQuery, SchemaError,
    BATH_INDEX, BHK_INDEX, FIXED_FEATURE_COUNT, TOTAL_AREA_INDEX,
};
pub use requests::PredictPriceRequest;
pub use responses::{ErrorResponse, LocationsResponse, MessageResponse, PredictPriceResponse};
