//! Error taxonomy for the provider integration layer.
//!
//! Two categories exist with deliberately different propagation rules:
//!
//! - [`ProviderError`] covers everything that can go wrong while talking to
//!   the music provider. On the recommendation and featured-playlist paths
//!   these are absorbed into the fallback catalog and logged, never
//!   surfaced to the caller.
//! - [`SearchError`] is the only provider failure a caller ever sees. Search
//!   has no safe synthetic substitute, and the caller must be able to
//!   distinguish "no results" from "service unavailable".

use reqwest::StatusCode;
use thiserror::Error;

/// Failures of the provider integration layer.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No client ID/secret supplied. Expected in fallback-only deployments,
    /// reported once at startup via `info!` and never logged as an error.
    #[error("provider credentials are not configured")]
    ConfigurationMissing,

    /// No valid access token is currently held. Internal: callers on the
    /// recommendation path catch this and serve fallback data.
    #[error("no usable provider credential")]
    CredentialUnavailable,

    /// The bounded request timeout elapsed.
    #[error("provider request timed out")]
    Timeout,

    /// The provider answered with a non-2xx status.
    #[error("provider returned status {0}")]
    Http(StatusCode),

    /// The provider answered 2xx but the payload could not be decoded.
    #[error("malformed provider response: {0}")]
    Malformed(String),

    /// Connection-level failure (DNS, TLS, refused, reset).
    #[error("provider request failed: {0}")]
    Network(reqwest::Error),
}

impl From<reqwest::Error> for ProviderError {
    /// Classifies a transport error into the taxonomy. Timeouts and decode
    /// failures get their own variants so log lines stay diagnosable.
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout
        } else if err.is_decode() {
            ProviderError::Malformed(err.to_string())
        } else {
            ProviderError::Network(err)
        }
    }
}

/// Failures of the search operation, the only user-visible provider errors.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The query was empty or whitespace. Caller-correctable; an empty result
    /// set for a non-empty query is a valid response, not this error.
    #[error("search query must not be empty")]
    InvalidQuery,

    /// The provider failed or no credential is available. The caller is
    /// expected to render a retry affordance.
    #[error("search is currently unavailable: {0}")]
    Unavailable(#[source] ProviderError),
}
