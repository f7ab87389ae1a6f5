//! CSV export of the record set.
//!
//! Fields are written verbatim and joined with commas. Embedded commas,
//! quotes and newlines are not escaped, so such values produce a malformed
//! file; this matches what the dashboard has always downloaded.

use crate::model::Record;
use csv::{QuoteStyle, Terminator, WriterBuilder};

/// Name of the downloaded file.
pub const EXPORT_FILENAME: &str = "report-data.csv";

/// MIME type of the downloaded file.
pub const EXPORT_MIME: &str = "text/csv";

/// First line of every export.
pub const CSV_HEADER: [&str; 5] = ["Name", "Phone Number", "Location", "Credit Score", "Tenure"];

/// Serialize `records` as header line plus one line per record, `\n`
/// separated, without a trailing newline.
pub fn to_csv(records: &[Record]) -> anyhow::Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for record in records {
        let credit_score = record.credit_score.to_string();
        let tenure = record.tenure.to_string();
        writer.write_record([
            record.name.as_str(),
            record.phone_number.as_str(),
            record.location.as_str(),
            credit_score.as_str(),
            tenure.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV: {}", e.error()))?;
    let mut text = String::from_utf8(bytes)?;
    if text.ends_with('\n') {
        text.pop();
    }
    log::info!("exported {} records to CSV", records.len());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_record_matches_expected_text() {
        let records = vec![Record {
            id: 1,
            name: "A".to_string(),
            phone_number: "555".to_string(),
            location: "X".to_string(),
            credit_score: 700,
            tenure: 3,
        }];
        assert_eq!(
            to_csv(&records).unwrap(),
            "Name,Phone Number,Location,Credit Score,Tenure\nA,555,X,700,3"
        );
    }

    #[test]
    fn empty_set_exports_header_only() {
        assert_eq!(to_csv(&[]).unwrap(), "Name,Phone Number,Location,Credit Score,Tenure");
    }

    #[test]
    fn delimiters_are_not_escaped() {
        let records = vec![Record {
            id: 2,
            name: "Doe, Jane".to_string(),
            phone_number: "\"1\"".to_string(),
            location: "Y".to_string(),
            credit_score: 1,
            tenure: 2,
        }];
        let csv = to_csv(&records).unwrap();
        assert_eq!(csv.lines().nth(1), Some("Doe, Jane,\"1\",Y,1,2"));
    }

    #[test]
    fn rows_keep_record_order() {
        let records = vec![
            crate::model::sample(2, "B", 600, 1),
            crate::model::sample(1, "A", 700, 3),
        ];
        let csv = to_csv(&records).unwrap();
        let names: Vec<&str> = csv.lines().skip(1).map(|l| l.split(',').next().unwrap_or("")).collect();
        assert_eq!(names, vec!["B", "A"]);
    }
}
