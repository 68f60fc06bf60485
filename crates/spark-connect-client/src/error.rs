use spark_connect_common::error::CommonError;
use thiserror::Error;

pub type SparkResult<T> = Result<T, SparkError>;

#[derive(Debug, Error)]
pub enum SparkError {
    #[error("error in JSON serde: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
    #[error("missing argument: {0}")]
    MissingArgument(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("internal error: {0}")]
    InternalError(String),
    // The reader does not produce the following errors yet.
    // They are reserved for validation of read configuration.
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    #[error("invalid path: {0}")]
    InvalidPath(String),
    #[error("invalid table name: {0}")]
    InvalidTableName(String),
    #[error("conflicting options: {0}")]
    ConflictingOptions(String),
}

impl SparkError {
    pub fn missing(message: impl Into<String>) -> Self {
        SparkError::MissingArgument(message.into())
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        SparkError::InvalidArgument(message.into())
    }
}

impl From<CommonError> for SparkError {
    fn from(error: CommonError) -> Self {
        match error {
            CommonError::MissingArgument(message) => SparkError::MissingArgument(message),
            CommonError::InvalidArgument(message) => SparkError::InvalidArgument(message),
            CommonError::InternalError(message) => SparkError::InternalError(message),
        }
    }
}
