//! Credential lifecycle state machine.
//!
//! Owns the single app-level provider credential shared by all concurrent
//! requests and keeps it fresh without ever blocking the request path. The
//! stored credential is an immutable snapshot swapped as a unit, and renewal
//! is a generation-tagged fire-and-forget task scheduled 60 seconds before
//! expiry, so a renewal failure does not cause a visible outage and a stale
//! timer can never install an outdated token.

use std::{
    future::Future,
    pin::Pin,
    sync::{
        Arc, Mutex, RwLock,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use chrono::{DateTime, Utc};
use reqwest::Client;
use tokio::task::JoinHandle;

use crate::{
    error::ProviderError,
    info,
    provider::{ProviderConfig, auth},
    success, warning,
};

/// Safety margin between scheduled renewal and actual expiry. A renewal that
/// fails inside this window still leaves a valid token to serve requests
/// with until expiry.
pub const RENEWAL_MARGIN_SECS: u64 = 60;

/// One acquired credential. Immutable: renewal replaces the whole snapshot,
/// never individual fields, so no reader can observe a token from one
/// generation paired with the expiry of another.
#[derive(Debug, Clone)]
pub struct Credential {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
    pub generation: u64,
}

/// Lifecycle states. `Failed` is treated exactly like `Unconfigured` by
/// callers; the distinction only matters for logging and introspection.
#[derive(Debug, Clone)]
enum CredentialState {
    /// Process start, before `initialize` ran.
    Empty,
    /// No client ID/secret available. Terminal for the process; operators
    /// correct this by reconfiguring and restarting.
    Unconfigured,
    /// A token exchange is in flight.
    Acquiring,
    /// A token is present (may have expired; usability re-checks the clock).
    Valid(Arc<Credential>),
    /// The exchange failed. No automatic retry: a stuck provider must not
    /// spin, and the fallback catalog keeps recommendations available.
    Failed,
}

/// Maintains exactly one valid-or-absent provider credential.
///
/// `is_usable` and `current_token` are non-blocking and safe on the hot
/// request path; only `initialize` and the internal renewal task perform
/// network I/O.
pub struct CredentialManager {
    config: ProviderConfig,
    http: Client,
    state: RwLock<CredentialState>,
    generation: AtomicU64,
    renewal: Mutex<Option<JoinHandle<()>>>,
}

impl CredentialManager {
    pub fn new(config: ProviderConfig) -> Self {
        // A client without the bounded timeout must never be constructed
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("failed to build HTTP client");

        Self {
            config,
            http,
            state: RwLock::new(CredentialState::Empty),
            generation: AtomicU64::new(0),
            renewal: Mutex::new(None),
        }
    }

    /// Runs the initial token exchange, once.
    ///
    /// Without configured credentials this transitions straight to
    /// `Unconfigured` and performs no network call, now or ever. Calling
    /// `initialize` again while a fresh token is held is a no-op: no second
    /// exchange is issued and no extra renewal is scheduled.
    pub async fn initialize(self: &Arc<Self>) {
        if !self.config.is_configured() {
            self.swap_state(CredentialState::Unconfigured);
            info!("No provider credentials configured. Serving the local fallback catalog.");
            return;
        }

        if self.is_usable() {
            return;
        }

        self.swap_state(CredentialState::Acquiring);
        self.acquire().await;
    }

    /// True only while a configured, non-expired token is held. Pure and
    /// non-blocking; callable from the hot request path.
    pub fn is_usable(&self) -> bool {
        match &*self.state.read().expect("credential state lock poisoned") {
            CredentialState::Valid(credential) => Utc::now() < credential.expires_at,
            _ => false,
        }
    }

    /// Returns the bearer token if usable.
    ///
    /// # Errors
    ///
    /// [`ProviderError::CredentialUnavailable`] in every other state. The
    /// recommendation path catches this and serves fallback data.
    pub fn current_token(&self) -> Result<String, ProviderError> {
        match &*self.state.read().expect("credential state lock poisoned") {
            CredentialState::Valid(credential) if Utc::now() < credential.expires_at => {
                Ok(credential.access_token.clone())
            }
            _ => Err(ProviderError::CredentialUnavailable),
        }
    }

    /// Performs one token exchange and installs the result.
    ///
    /// On success the credential snapshot is swapped atomically and exactly
    /// one renewal is scheduled at `expires_at − 60s`. On failure the cause
    /// is logged and no retry is attempted; a still-valid token is kept in
    /// place until its real expiry, otherwise the state becomes `Failed`.
    async fn acquire(self: &Arc<Self>) {
        match auth::exchange_token(&self.config, &self.http).await {
            Ok(token) => {
                let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
                let credential = Arc::new(Credential {
                    access_token: token.access_token,
                    expires_at: Utc::now() + chrono::Duration::seconds(token.expires_in as i64),
                    generation,
                });

                self.swap_state(CredentialState::Valid(credential));
                success!(
                    "Provider credentials acquired (token valid for {}s).",
                    token.expires_in
                );

                self.schedule_renewal(generation, token.expires_in);
            }
            Err(ProviderError::ConfigurationMissing) => {
                self.swap_state(CredentialState::Unconfigured);
            }
            Err(e) => {
                // A failed renewal keeps the current snapshot: it has up to
                // the full 60s margin left and expiry is re-checked on every
                // read, so the state falls out of use on its own.
                if self.is_usable() {
                    warning!(
                        "Provider token renewal failed: {}. Serving the current token until it expires.",
                        e
                    );
                } else {
                    self.swap_state(CredentialState::Failed);
                    warning!(
                        "Provider token exchange failed: {}. Serving the fallback catalog for the rest of this process.",
                        e
                    );
                }
            }
        }
    }

    /// Schedules the renewal task for one credential generation.
    ///
    /// The previous task (if any) is aborted first, so at most one renewal
    /// timer is live at a time. Should a superseded task fire regardless,
    /// the generation check makes it bail out without touching the state.
    fn schedule_renewal(self: &Arc<Self>, generation: u64, expires_in_secs: u64) {
        let delay = Duration::from_secs(expires_in_secs.saturating_sub(RENEWAL_MARGIN_SECS));

        let manager = Arc::clone(self);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if manager.generation.load(Ordering::SeqCst) != generation {
                return; // superseded by a newer acquisition
            }
            manager.renew().await;
        });

        let mut slot = self.renewal.lock().expect("renewal handle lock poisoned");
        if let Some(previous) = slot.replace(handle) {
            previous.abort();
        }
    }

    /// Boxed re-acquisition used by the renewal task (breaks the async
    /// recursion acquire → schedule → acquire at the type level).
    fn renew(self: Arc<Self>) -> Pin<Box<dyn Future<Output = ()> + Send>> {
        Box::pin(async move {
            self.acquire().await;
        })
    }

    fn swap_state(&self, next: CredentialState) {
        let mut state = self.state.write().expect("credential state lock poisoned");
        *state = next;
    }
}

impl Drop for CredentialManager {
    /// Cancels the pending renewal with the manager; the task holds no
    /// resources beyond its timer.
    fn drop(&mut self) {
        if let Ok(mut slot) = self.renewal.lock() {
            if let Some(handle) = slot.take() {
                handle.abort();
            }
        }
    }
}
