//! Application state managed via Dioxus context.
//!
//! `AppState` wraps the dashboard reducer and the API client in signals and
//! is provided once via `use_context_provider`. Components retrieve it with
//! `use_context::<AppState>()` and route every user event through
//! [`AppState::dispatch`].

use dioxus::prelude::*;
use report_core::api::ReportClient;
use report_core::effects;
use report_core::state::{Action, DashboardState};

/// Shared application state for the report dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Filters, records, form draft and notification.
    pub dashboard: Signal<DashboardState>,
    /// Client for the report backend.
    pub client: Signal<ReportClient>,
}

impl AppState {
    /// Create a new AppState with an empty dashboard and the default backend.
    pub fn new() -> Self {
        Self {
            dashboard: Signal::new(DashboardState::new()),
            client: Signal::new(ReportClient::default()),
        }
    }

    /// Apply `action` now; if it asks for a request, spawn the request and
    /// every follow-up it triggers (e.g. the refresh after a save).
    ///
    /// Spawned chains are independent: nothing is cancelled or serialized.
    pub fn dispatch(self, action: Action) {
        let mut dashboard = self.dashboard;
        let Some(effect) = dashboard.write().reduce(action) else {
            return;
        };
        let client = self.client.peek().clone();
        spawn(async move {
            effects::run_chain(&client, move |next| dashboard.write().reduce(next), effect).await;
        });
    }
}
