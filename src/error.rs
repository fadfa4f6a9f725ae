use thiserror::Error;

/// Hard failures of a CO2 lookup. The message prefixes tell the caller
/// which stage went wrong.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP req error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Key error: '{0}'")]
    MissingKey(String),
    #[error("Value error: {0}")]
    Value(String),
}

/// Reasons a coordinate pair is rejected before any outbound call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    #[error("Send a latitude/longitude request to get CO2 emissions data.")]
    Missing,
    #[error("Invalid {name}: '{value}' is not a number")]
    NotANumber { name: &'static str, value: String },
    #[error("Invalid data!")]
    OutOfRange,
}
