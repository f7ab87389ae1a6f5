//! The report row served by the backend.

use serde::{Deserialize, Deserializer, Serialize};

/// A single report row.
///
/// `id` is assigned by the backend and never generated client-side. The
/// backend stores every other column as nullable, so a `null` in the JSON
/// decodes to the type's default instead of failing the whole response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub credit_score: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tenure: i32,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
pub(crate) fn sample(id: i64, name: &str, credit_score: i32, tenure: i32) -> Record {
    Record {
        id,
        name: name.to_string(),
        phone_number: format!("555-01{:02}", id),
        location: "Austin".to_string(),
        credit_score,
        tenure,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_fields() {
        let json = r#"{"id":3,"name":"Ada","phoneNumber":"555","location":"X","creditScore":710,"tenure":4}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 3);
        assert_eq!(record.phone_number, "555");
        assert_eq!(record.credit_score, 710);
        assert_eq!(record.tenure, 4);
    }

    #[test]
    fn null_columns_decode_as_defaults() {
        let json = r#"{"id":9,"name":null,"phoneNumber":null,"location":"X","creditScore":null}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "");
        assert_eq!(record.phone_number, "");
        assert_eq!(record.credit_score, 0);
        assert_eq!(record.tenure, 0);
    }

    #[test]
    fn missing_id_is_rejected() {
        let json = r#"{"name":"Ada"}"#;
        assert!(serde_json::from_str::<Record>(json).is_err());
    }
}
