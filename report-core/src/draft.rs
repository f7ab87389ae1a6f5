//! The add/edit form and the JSON payload it submits.

use crate::model::Record;
use serde::Serialize;

/// One input of the record form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    PhoneNumber,
    Location,
    CreditScore,
    Tenure,
}

impl DraftField {
    pub const ALL: [DraftField; 5] = [
        DraftField::Name,
        DraftField::PhoneNumber,
        DraftField::Location,
        DraftField::CreditScore,
        DraftField::Tenure,
    ];

    pub fn placeholder(self) -> &'static str {
        match self {
            DraftField::Name => "Name",
            DraftField::PhoneNumber => "Phone Number",
            DraftField::Location => "Location",
            DraftField::CreditScore => "Credit Score",
            DraftField::Tenure => "Tenure",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, DraftField::CreditScore | DraftField::Tenure)
    }
}

/// In-progress form values, shared by create and edit.
///
/// `edit_target` is `Some(id)` while editing an existing row and `None`
/// while composing a new one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormDraft {
    pub name: String,
    pub phone_number: String,
    pub location: String,
    pub credit_score: String,
    pub tenure: String,
    pub edit_target: Option<i64>,
}

impl FormDraft {
    /// Load a row into the form and mark it as the edit target.
    pub fn from_record(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            phone_number: record.phone_number.clone(),
            location: record.location.clone(),
            credit_score: record.credit_score.to_string(),
            tenure: record.tenure.to_string(),
            edit_target: Some(record.id),
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::PhoneNumber => &self.phone_number,
            DraftField::Location => &self.location,
            DraftField::CreditScore => &self.credit_score,
            DraftField::Tenure => &self.tenure,
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::Name => &mut self.name,
            DraftField::PhoneNumber => &mut self.phone_number,
            DraftField::Location => &mut self.location,
            DraftField::CreditScore => &mut self.credit_score,
            DraftField::Tenure => &mut self.tenure,
        };
        *slot = value;
    }

    pub fn is_editing(&self) -> bool {
        self.edit_target.is_some()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Body for `POST` (no edit target) or `PUT` (edit target as `id`).
    pub fn to_payload(&self) -> RecordPayload {
        RecordPayload {
            id: self.edit_target,
            name: non_empty(&self.name),
            phone_number: non_empty(&self.phone_number),
            location: non_empty(&self.location),
            credit_score: NumericInput::parse(&self.credit_score),
            tenure: NumericInput::parse(&self.tenure),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// A numeric form value: a number when it parses, the typed text otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(i64),
    Text(String),
}

impl NumericInput {
    fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(match trimmed.parse::<i64>() {
            Ok(number) => NumericInput::Number(number),
            Err(_) => NumericInput::Text(raw.to_string()),
        })
    }
}

/// JSON body for create and update requests. Unset fields are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_score: Option<NumericInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenure: Option<NumericInput>,
}
