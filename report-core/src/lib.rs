//! Core types and REST client for the report dashboard.
//!
//! This crate is target-independent: it compiles for the browser (WASM) and
//! for native test runs. It provides:
//! - `model`: the `Record` row served by the report API
//! - `filter`: `FilterCriteria` and the query it produces
//! - `draft`: the add/edit `FormDraft` and the payload it submits
//! - `response`: decoding of bare-array and paginated-envelope responses
//! - `api`: the `ReportApi` trait and its `reqwest` implementation
//! - `state`: `DashboardState`, a reducer that turns actions into effects
//! - `effects`: the runner that executes effects against a `ReportApi`
//! - `view`: table rows and dual-axis chart data derived from the record set
//! - `export`: CSV serialization of the record set
//!
//! # Usage
//!
//! ```rust,no_run
//! use report_core::api::ReportClient;
//! use report_core::config::ClientConfig;
//! use report_core::effects;
//! use report_core::state::{Action, DashboardState};
//!
//! # async fn demo() {
//! let client = ReportClient::new(ClientConfig::default());
//! let mut state = DashboardState::new();
//! effects::settle(&client, |action| state.reduce(action), Action::Search).await;
//! println!("{} records", state.records().len());
//! # }
//! ```

pub mod api;
pub mod config;
pub mod draft;
pub mod effects;
pub mod export;
pub mod filter;
pub mod model;
pub mod response;
pub mod state;
pub mod view;

pub use model::Record;
