use thiserror::Error;

/// Failure taxonomy for fetching and querying country data.
///
/// Upstream and cache failures propagate unchanged through the aggregation
/// layer; mapping them to transport-level responses is the caller's job.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The upstream payload failed shape validation. A bad payload fails the
    /// entire fetch; no valid subset is salvaged.
    #[error("invalid upstream data format: {0}")]
    InvalidDataFormat(String),

    /// Network failure or timeout reaching the upstream source.
    #[error("upstream source unavailable: {0}")]
    UpstreamUnavailable(String),

    /// The requested country name has no match in the snapshot.
    #[error("country not found: {0:?}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
