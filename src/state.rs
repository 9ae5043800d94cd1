//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the player store behind a trait object (Postgres in production,
//! in-memory otherwise), the listing limits, and the pre-rendered welcome
//! page.

use std::sync::Arc;

use crate::config::ListingConfig;
use crate::pages::welcome;
use crate::store::PlayerStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PlayerStore>,
    pub listing: ListingConfig,
    /// Welcome document, rendered once at startup.
    pub welcome_page: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn PlayerStore>, listing: ListingConfig) -> Self {
        Self { store, listing, welcome_page: Arc::from(welcome::render_welcome_document()) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
