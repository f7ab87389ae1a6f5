//! Shared Dioxus components and D3.js bridge for the report dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js dual-axis chart via `js_sys::eval()`
//! - `download`: client-side file download of the CSV export
//! - `state`: reactive AppState with Dioxus Signals
//! - `components`: RSX components (filter bar, record form, table, chart, banners)

pub mod components;
pub mod download;
pub mod js_bridge;
pub mod state;
