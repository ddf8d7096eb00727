//! Request and response bodies for the name routes.

use std::fmt;

use chrono::{DateTime, Utc};
use namelist_core::Record;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

/// Body of `POST /insert`.
#[derive(Debug, Deserialize)]
pub struct InsertRequest {
    pub name: String,
}

/// A record ID as clients send it: a JSON number, or text taken from a
/// `data-id` attribute or a form field.
///
/// Any other JSON value is accepted and later fails to parse as an ID, so
/// the update answers `success: false` instead of rejecting the body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawRecordId {
    Number(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

impl fmt::Display for RawRecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Other(_) => Ok(()),
        }
    }
}

/// Body of `PATCH /update`. A missing or `null` ID is kept as `None`.
#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    #[serde(default)]
    pub id: Option<RawRecordId>,
    pub name: String,
}

impl UpdateRequest {
    /// The ID as text for the lenient parser; empty when absent.
    pub fn raw_id(&self) -> String {
        self.id.as_ref().map(ToString::to_string).unwrap_or_default()
    }
}

/// A stored row, as returned by `/getAll` and `/search`.
#[derive(Debug, Serialize)]
pub struct RecordDto {
    pub id: i64,
    pub name: String,
    pub date_added: DateTime<Utc>,
}

impl From<Record> for RecordDto {
    fn from(record: Record) -> Self {
        Self {
            id: record.id,
            name: record.name,
            date_added: record.date_added,
        }
    }
}

/// The record echoed back by `/insert`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedRecordDto {
    pub id: i64,
    pub name: String,
    pub date_added: DateTime<Utc>,
}

impl From<Record> for CreatedRecordDto {
    fn from(record: Record) -> Self {
        Self {
            id: record.id,
            name: record.name,
            date_added: record.date_added,
        }
    }
}

/// `{ "data": ... }` envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub const fn new(data: T) -> Self {
        Self { data }
    }
}

/// `{ "success": bool }` envelope for update and delete.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use namelist_core::NewRecord;

    fn update(body: &str) -> UpdateRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_raw_id_accepts_number_and_text() {
        let n = update(r#"{"id":11,"name":"a"}"#);
        assert_eq!(n.id, Some(RawRecordId::Number(11)));
        assert_eq!(n.raw_id(), "11");

        let t = update(r#"{"id":"11","name":"a"}"#);
        assert_eq!(t.id, Some(RawRecordId::Text("11".to_string())));
        assert_eq!(t.raw_id(), "11");
    }

    #[test]
    fn test_float_id_renders_without_fraction_noise() {
        assert_eq!(update(r#"{"id":1.0,"name":"a"}"#).raw_id(), "1");
        assert_eq!(update(r#"{"id":7.5,"name":"a"}"#).raw_id(), "7.5");
    }

    #[test]
    fn test_missing_or_odd_id_is_accepted_as_empty() {
        assert_eq!(update(r#"{"name":"a"}"#).raw_id(), "");
        assert_eq!(update(r#"{"id":null,"name":"a"}"#).raw_id(), "");
        assert_eq!(update(r#"{"id":true,"name":"a"}"#).raw_id(), "");
        assert_eq!(update(r#"{"id":[1],"name":"a"}"#).raw_id(), "");
    }

    #[test]
    fn test_created_record_uses_camel_case() {
        let record = NewRecord::now("Hasan").into_record(11);
        let json = serde_json::to_value(DataResponse::new(CreatedRecordDto::from(record))).unwrap();
        assert_eq!(json["data"]["id"], 11);
        assert_eq!(json["data"]["name"], "Hasan");
        assert!(json["data"]["dateAdded"].is_string());
        assert!(json["data"].get("date_added").is_none());
    }

    #[test]
    fn test_row_keeps_snake_case() {
        let record = NewRecord::now("Hasan").into_record(3);
        let json = serde_json::to_value(RecordDto::from(record)).unwrap();
        assert!(json["date_added"].is_string());
    }
}
