//! Reusable Dioxus RSX components for the report dashboard.

mod chart_container;
mod chart_header;
mod filter_bar;
mod loading_spinner;
mod notification_banner;
mod record_form;
mod record_table;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use filter_bar::FilterBar;
pub use loading_spinner::LoadingSpinner;
pub use notification_banner::NotificationBanner;
pub use record_form::RecordForm;
pub use record_table::RecordTable;
