//! # Provider Integration Layer
//!
//! Everything that knows how to talk to the music provider (Spotify Web API)
//! lives under this module; nothing outside it inspects provider-specific
//! field names or endpoints.
//!
//! ## Submodules
//!
//! - [`auth`] - app-level client-credentials token exchange
//! - [`credentials`] - credential lifecycle state machine with scheduled,
//!   generation-tagged renewal ([`CredentialManager`])
//! - [`client`] - raw HTTP calls with bounded timeouts ([`ProviderClient`])
//! - [`normalize`] - pure mapping of raw payloads into canonical records
//!
//! ## Credential lifecycle
//!
//! ```text
//! Unconfigured ──(no credentials; terminal for the process)
//!      │
//! Acquiring ──success──▶ Valid ──(expires_at − 60s)──▶ renewal ──▶ Acquiring
//!      │
//!      └──failure──▶ Failed (treated as unconfigured by callers; no retry loop)
//! ```
//!
//! The credential is a single immutable snapshot behind a lock-swapped slot:
//! concurrent readers either see the complete old token or the complete new
//! one, never a token from one generation paired with the expiry of another.
//! Exactly one renewal task is live per generation; an acquisition that
//! supersedes a credential aborts the prior task, and a stale task that fires
//! anyway bails out on the generation check.
//!
//! ## Failure policy
//!
//! Every request is subject to the bounded timeout from
//! [`ProviderConfig::timeout`]. Failures are classified into
//! [`crate::error::ProviderError`] and absorbed or surfaced by the caller
//! ([`crate::recommend::RecommendationClient`]), not here.

use std::time::Duration;

pub mod auth;
pub mod client;
pub mod credentials;
pub mod normalize;

pub use client::ProviderClient;
pub use credentials::CredentialManager;

/// Immutable provider connection settings, assembled once at startup by
/// [`crate::config::provider_config`].
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// App client ID; `None` or empty means the provider is unconfigured.
    pub client_id: Option<String>,
    /// App client secret; never logged.
    pub client_secret: Option<String>,
    /// Token exchange endpoint.
    pub token_url: String,
    /// Web API base URL (no trailing slash).
    pub api_url: String,
    /// Bounded timeout applied to every provider request.
    pub timeout: Duration,
}

impl ProviderConfig {
    /// True when both client ID and secret are present. When false, no
    /// network call is ever attempted.
    pub fn is_configured(&self) -> bool {
        self.client_id.as_deref().is_some_and(|v| !v.is_empty())
            && self.client_secret.as_deref().is_some_and(|v| !v.is_empty())
    }
}
