//! Mood-Based Music Recommendation Service Library
//!
//! This library recommends tracks and playlists for a user-selected mood. Live
//! data comes from the Spotify Web API via an app-level client-credentials
//! grant; whenever the provider is unconfigured, unauthenticated, or failing,
//! recommendation requests transparently degrade to a deterministic local
//! catalog instead of surfacing an error.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints served by the `serve` command
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Provider and search error taxonomy
//! - `fallback` - Static per-mood catalog used in degraded mode
//! - `moods` - Mood key to provider parameter translation
//! - `provider` - Spotify Web API client, credentials, and normalization
//! - `recommend` - Recommendation orchestration (live-then-fallback)
//! - `server` - HTTP server wiring for the JSON API
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use moodtune::{config, provider::CredentialManager, recommend::RecommendationClient};
//!
//! #[tokio::main]
//! async fn main() {
//!     config::load_env().await;
//!     let credentials = Arc::new(CredentialManager::new(config::provider_config()));
//!     credentials.initialize().await;
//!     let client = RecommendationClient::new(config::provider_config(), credentials);
//!     let tracks = client.recommend_by_mood("happy", 10).await;
//!     assert!(!tracks.is_empty()); // fallback guarantees results
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod fallback;
pub mod moods;
pub mod provider;
pub mod recommend;
pub mod server;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern at the outer edges of the
/// application using a boxed dynamic error trait object, while keeping
/// Send + Sync bounds for async contexts. The provider layer uses the
/// concrete enums in [`error`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Accepts the same arguments as `println!`. Used for general status updates,
/// including the one-time startup notice when no provider credentials are
/// configured (degraded mode is expected, not an error).
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Accepts the same arguments as `println!`.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Accepts the same arguments as `println!`. Terminates with exit code 1, so
/// it must only be used for fatal CLI-level conditions; the recommendation
/// path never calls it, since provider failures are absorbed into fallback.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Accepts the same arguments as `println!`. Used for recoverable issues,
/// most prominently provider failures that were absorbed by the fallback
/// catalog and renewal failures of the credential manager.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
