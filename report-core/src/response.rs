//! Decoding of the list response.
//!
//! The backend answers `GET /api/report` either with a bare JSON array of
//! rows or with a paginated envelope whose rows live under `content`. Both
//! shapes normalize to the same `Vec<Record>`.

use crate::model::Record;
use serde::Deserialize;

/// The two accepted list response shapes.
///
/// `Envelope` is tried first so an object carrying `content` always wins.
/// Any other envelope fields (page number, totals) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ReportPage {
    Envelope { content: Vec<Record> },
    Bare(Vec<Record>),
}

impl ReportPage {
    pub fn into_records(self) -> Vec<Record> {
        match self {
            ReportPage::Envelope { content } => content,
            ReportPage::Bare(records) => records,
        }
    }
}

/// Decode a list response body into the ordered record set.
pub fn decode_records(body: &[u8]) -> Result<Vec<Record>, serde_json::Error> {
    let page: ReportPage = serde_json::from_slice(body)?;
    Ok(page.into_records())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROW_A: &str = r#"{"id":1,"name":"A","phoneNumber":"555","location":"X","creditScore":700,"tenure":3}"#;
    const ROW_B: &str = r#"{"id":2,"name":"B","phoneNumber":"556","location":"Y","creditScore":640,"tenure":9}"#;

    #[test]
    fn bare_array_is_the_record_set() {
        let body = format!("[{},{}]", ROW_A, ROW_B);
        let records = decode_records(body.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "A");
        assert_eq!(records[1].id, 2);
    }

    #[test]
    fn envelope_content_is_the_record_set() {
        let body = format!(
            r#"{{"content":[{},{}],"totalElements":2,"number":0,"size":1000,"last":true}}"#,
            ROW_B, ROW_A
        );
        let records = decode_records(body.as_bytes()).unwrap();
        let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn empty_shapes_decode_to_no_rows() {
        assert!(decode_records(b"[]").unwrap().is_empty());
        assert!(decode_records(br#"{"content":[]}"#).unwrap().is_empty());
    }

    #[test]
    fn object_without_content_is_rejected() {
        assert!(decode_records(br#"{"rows":[]}"#).is_err());
        assert!(decode_records(b"not json").is_err());
    }
}
