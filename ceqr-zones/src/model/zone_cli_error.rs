use super::ZoneError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZoneCliError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure simplifying traffic zones: {source}")]
    ZoneError {
        #[from]
        source: ZoneError,
    },
    #[error("failure decoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
}
