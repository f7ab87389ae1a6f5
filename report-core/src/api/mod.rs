//! The report REST collaborator.
//!
//! `ReportApi` is the seam between dashboard state and the network. The
//! dashboard drives it through [`crate::effects`]; tests substitute a mock.

use crate::draft::RecordPayload;
use crate::filter::FilterCriteria;
use crate::model::Record;

pub(crate) mod client;
pub use client::ReportClient;
pub mod error;

pub use error::ApiError;

#[cfg(test)]
use mockall::automock;

/// CRUD + query operations of `/api/report`.
///
/// Futures are not `Send`: in the browser the transport is `fetch`, which
/// is bound to the single UI thread.
#[cfg_attr(test, automock)]
#[async_trait::async_trait(?Send)]
pub trait ReportApi {
    /// `GET /api/report` with the non-empty criteria, sort and page size.
    async fn list(&self, criteria: &FilterCriteria) -> Result<Vec<Record>, ApiError>;

    /// `GET /api/report/{id}`.
    async fn get(&self, id: i64) -> Result<Record, ApiError>;

    /// `POST /api/report`.
    async fn create(&self, payload: &RecordPayload) -> Result<(), ApiError>;

    /// `PUT /api/report/{id}`.
    async fn update(&self, id: i64, payload: &RecordPayload) -> Result<(), ApiError>;

    /// `DELETE /api/report/{id}`.
    async fn delete(&self, id: i64) -> Result<(), ApiError>;
}
