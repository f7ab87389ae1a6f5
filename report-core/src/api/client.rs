//! Report API Client
//!
//! A `reqwest` client for `/api/report`. In the browser `reqwest` issues
//! requests through `fetch`; natively it uses its own connector. No timeout
//! is configured beyond the transport default and nothing is retried.

use crate::api::error::ApiError;
use crate::api::ReportApi;
use crate::config::ClientConfig;
use crate::draft::RecordPayload;
use crate::filter::FilterCriteria;
use crate::model::Record;
use crate::response::decode_records;
use reqwest::{Client, RequestBuilder, Response};

#[derive(Debug, Clone)]
pub struct ReportClient {
    client: Client,
    config: ClientConfig,
}

impl ReportClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `GET /api/report` carrying the non-empty criteria plus sort and size.
    fn list_request(&self, criteria: &FilterCriteria) -> RequestBuilder {
        let query = criteria.query_pairs(self.config.page_size);
        self.client.get(self.config.collection_url()).query(&query)
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }
}

impl Default for ReportClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

#[async_trait::async_trait(?Send)]
impl ReportApi for ReportClient {
    async fn list(&self, criteria: &FilterCriteria) -> Result<Vec<Record>, ApiError> {
        let url = self.config.collection_url();
        log::info!("GET {} {:?}", url, criteria);
        let response = self.list_request(criteria).send().await?;

        let response = Self::handle_response_status(response).await?;
        let body = response.bytes().await?;
        let records = decode_records(&body)?;
        log::info!("GET {} returned {} records", url, records.len());
        Ok(records)
    }

    async fn get(&self, id: i64) -> Result<Record, ApiError> {
        let url = self.config.record_url(id);
        log::info!("GET {}", url);
        let response = self.client.get(&url).send().await?;

        let response = Self::handle_response_status(response).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn create(&self, payload: &RecordPayload) -> Result<(), ApiError> {
        let url = self.config.collection_url();
        log::info!("POST {}", url);
        let response = self.client.post(&url).json(payload).send().await?;

        Self::handle_response_status(response).await?;
        Ok(())
    }

    async fn update(&self, id: i64, payload: &RecordPayload) -> Result<(), ApiError> {
        let url = self.config.record_url(id);
        log::info!("PUT {}", url);
        let response = self.client.put(&url).json(payload).send().await?;

        Self::handle_response_status(response).await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let url = self.config.record_url(id);
        log::info!("DELETE {}", url);
        let response = self.client.delete(&url).send().await?;

        Self::handle_response_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Accept one connection, answer it with `status` and `body`, and hand
    /// back the request head that was received.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let n = socket.read(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).to_string();
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });
        (base_url, handle)
    }

    fn request_line(request: &str) -> &str {
        request.lines().next().unwrap_or("")
    }

    #[test]
    fn client_keeps_its_config() {
        let client = ReportClient::new(ClientConfig::new("http://backend:9000").with_page_size(5));
        assert_eq!(client.config().collection_url(), "http://backend:9000/api/report");
        assert_eq!(client.config().page_size, 5);
    }

    #[test]
    fn list_request_encodes_criteria_as_query() {
        let client = ReportClient::default();
        let mut criteria = FilterCriteria::new();
        criteria.name = "o'neil & co".to_string();

        let request = client.list_request(&criteria).build().unwrap();

        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(
            request.url().as_str(),
            "http://localhost:8080/api/report?name=o%27neil+%26+co&sortBy=id&order=asc&size=1000"
        );
    }

    #[tokio::test]
    async fn list_sends_query_and_unwraps_envelope() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"content":[{"id":4,"name":"Dee","phoneNumber":"555","location":"Oslo","creditScore":690,"tenure":6}],"totalElements":1}"#,
        )
        .await;
        let client = ReportClient::new(ClientConfig::new(base_url).with_page_size(20));
        let mut criteria = FilterCriteria::new();
        criteria.location = "Oslo".to_string();

        let records = client.list(&criteria).await.unwrap();
        let request = server.await.unwrap();

        assert_eq!(
            request_line(&request),
            "GET /api/report?location=Oslo&sortBy=id&order=asc&size=20 HTTP/1.1"
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Dee");
        assert_eq!(records[0].credit_score, 690);
    }

    #[tokio::test]
    async fn list_accepts_bare_array() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"[{"id":1,"name":"A","phoneNumber":"555","location":"X","creditScore":700,"tenure":3}]"#,
        )
        .await;
        let client = ReportClient::new(ClientConfig::new(base_url));

        let records = client.list(&FilterCriteria::new()).await.unwrap();
        server.await.unwrap();

        assert_eq!(records[0].id, 1);
    }

    #[tokio::test]
    async fn list_rejects_undecodable_body() {
        let (base_url, server) = serve_once("200 OK", r#"{"rows":[]}"#).await;
        let client = ReportClient::new(ClientConfig::new(base_url));

        let err = client.list(&FilterCriteria::new()).await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn delete_maps_404_to_status_error() {
        let (base_url, server) = serve_once("404 Not Found", "").await;
        let client = ReportClient::new(ClientConfig::new(base_url));

        let err = client.delete(77).await.unwrap_err();
        let request = server.await.unwrap();

        assert_eq!(request_line(&request), "DELETE /api/report/77 HTTP/1.1");
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn closed_port_is_a_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let client = ReportClient::new(ClientConfig::new(base_url));
        let err = client.delete(1).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
