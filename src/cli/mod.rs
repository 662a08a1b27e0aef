//! # CLI Module
//!
//! User-facing command implementations for the moodtune binary. Each command
//! delegates to [`crate::recommend::RecommendationClient`] and handles
//! presentation: spinners during network fetches, tabled output, and colored
//! status lines.
//!
//! ## Commands
//!
//! - [`recommend`] - mood-based track or playlist recommendations; always
//!   prints results, falling back to the local catalog in degraded mode
//! - [`search`] - provider search across tracks, artists, and albums; the
//!   only command that can visibly fail on provider errors
//! - [`playlists`] - featured playlists
//! - [`serve`] - runs the JSON API server

mod playlists;
mod recommend;
mod search;
mod serve;

pub use playlists::playlists;
pub use recommend::recommend;
pub use search::search;
pub use serve::serve;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while a network fetch is in flight.
pub(crate) fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
