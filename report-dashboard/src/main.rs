//! Report Data Visualization
//!
//! Single-page client for the report backend: filter and sort report rows,
//! add/edit/delete them inline, plot credit score against tenure on a
//! dual-axis D3.js bar chart, and export the visible rows as CSV.
//!
//! Data flow:
//! 1. On mount: load the chart script and issue the first fetch.
//! 2. Every filter change dispatches a fetch with the merged criteria.
//! 3. Each successful write dispatches a refresh fetch.
//! 4. Whenever the record set changes: re-render the chart via D3.js.

use dioxus::prelude::*;
use report_core::state::Action;
use report_core::view::{self, CHART_TITLE, CREDIT_SCORE_LABEL, TENURE_LABEL};
use report_ui::components::{
    ChartContainer, ChartHeader, FilterBar, LoadingSpinner, NotificationBanner, RecordForm,
    RecordTable,
};
use report_ui::js_bridge;
use report_ui::state::AppState;

/// DOM id for the D3 chart container div.
const CHART_CONTAINER_ID: &str = "report-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("report-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);

    // ─── Effect 1: load chart script and fetch once on mount ───
    // Only writes (never subscribes to) the dashboard, so it runs once.
    use_effect(move || {
        js_bridge::init_charts();
        state.dispatch(Action::Search);
    });

    // Memo notifies only when the record set itself changes, not on draft,
    // filter or notice writes to the dashboard.
    let records = use_memo(move || state.dashboard.read().records().to_vec());

    // ─── Effect 2: render chart whenever the record set changes ───
    use_effect(move || {
        let chart = view::chart_data(&records.read());

        if chart.is_empty() {
            js_bridge::destroy_chart(CHART_CONTAINER_ID);
            return;
        }

        log::info!("Rendering chart for {} records", chart.labels.len());
        let data_json = serde_json::to_string(&chart).unwrap_or_default();
        let config_json = view::chart_config().to_string();
        js_bridge::render_dual_axis_chart(CHART_CONTAINER_ID, &data_json, &config_json);
    });

    let dashboard = state.dashboard.read();
    let notice = dashboard.notice().cloned();
    let initial_load = dashboard.is_initial_load();
    let loading = dashboard.is_loading();
    let empty = dashboard.records().is_empty();
    drop(dashboard);

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 900px; margin: 2rem auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",
            h1 { "Report Data Visualization" }

            if let Some(notice) = notice {
                NotificationBanner { notice }
            }

            FilterBar {}

            if initial_load {
                LoadingSpinner {}
            }

            ChartHeader {
                title: CHART_TITLE.to_string(),
                left_axis: CREDIT_SCORE_LABEL.to_string(),
                right_axis: TENURE_LABEL.to_string(),
            }
            ChartContainer {
                id: CHART_CONTAINER_ID.to_string(),
                loading: loading && empty,
                empty: !loading && empty,
            }

            RecordForm {}

            RecordTable {}
        }
    }
}
