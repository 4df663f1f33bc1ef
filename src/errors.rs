use reqwest::StatusCode;

/// Error returned by SDK operations.
///
/// No variant is retried or suppressed internally; every failure surfaces
/// to the caller of the operation that triggered it.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// The response body could not be decoded into the expected shape.
    /// Carries the raw body for diagnosis.
    #[error("unable to parse response: {body}")]
    Parse { body: String },

    /// The server answered with a status code other than the expected one.
    #[error("unexpected response status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    /// Connection or protocol failure below the API contract.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Configuration could not be assembled.
    #[error("invalid configuration: {0}")]
    Config(#[from] figment::Error),
}
