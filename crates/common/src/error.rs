use thiserror::Error;

// Custom Result type alias for convenient use across the project
pub type Result<T> = std::result::Result<T, TelemetryError>;

#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The request carried a telemetry type the dispatcher has no payload
    /// rule for. Holds the raw wire value for diagnostics.
    #[error("Unsupported telemetry type: {0}")]
    UnsupportedType(i32),

    #[error("Transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
