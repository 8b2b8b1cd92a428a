use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZoneError {
    #[error("failure reading geometry source {0}: {1}")]
    SourceReadError(String, String),
    #[error("record {0} has invalid geometry: {1}")]
    InvalidGeometry(String, String),
    #[error("record {0} is missing attribute '{1}'")]
    MissingAttribute(usize, String),
    #[error("block id '{0}' is too short to drop a {1}-character suffix")]
    InvalidBlockId(String, usize),
    #[error("zone unit {0} of zone '{1}' has no centroid")]
    MissingCentroid(usize, String),
    #[error("cannot build a nearest neighbor index without any zone units")]
    EmptyZoneIndex,
    #[error("invalid nearest neighbor parameters: {0}")]
    InvalidParameters(String),
    #[error("failure writing to file {0}: {1}")]
    WriteError(String, String),
}
