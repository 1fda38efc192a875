//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use tank_db::Database;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Database instance (None until loaded)
    pub db: Signal<Option<Database>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Currently selected municipality; empty means no selection
    pub selected_region: Signal<String>,
    /// Available municipalities, sorted
    pub regions: Signal<Vec<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_region: Signal::new(String::new()),
            regions: Signal::new(Vec::new()),
        }
    }

    /// The selected municipality, `None` for the "no selection" option.
    pub fn selection(&self) -> Option<String> {
        selection_of(&self.selected_region.read())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Map the selector value to a region scope.
pub fn selection_of(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
