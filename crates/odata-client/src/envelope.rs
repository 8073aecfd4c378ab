//! # OData v2 Envelope
//!
//! OData v2 JSON responses wrap their payload in a `d` object. Collections
//! put the entities under `d.results`; a single-entity read puts the entity
//! directly under `d`:
//!
//! ```json
//! { "d": { "results": [ { "ProfitCenter": "YB200" } ] } }
//! { "d": { "ProfitCenter": "YB200" } }
//! ```
//!
//! [`parse_results`] accepts both and always yields a `Vec<T>`. An empty `d`
//! object carries no entity and yields an empty sequence.

use crate::error::ParseError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
struct Envelope {
    d: Value,
}

/// Decodes an OData v2 response body into a sequence of records.
pub fn parse_results<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>, ParseError> {
    let Envelope { d } = serde_json::from_slice(body)?;
    match d {
        Value::Object(mut map) if map.contains_key("results") => {
            let results = map.remove("results").unwrap_or(Value::Null);
            Ok(serde_json::from_value(results)?)
        }
        Value::Object(map) if map.is_empty() => Ok(Vec::new()),
        single => Ok(vec![serde_json::from_value(single)?]),
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: String,
    message: ErrorMessage,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorMessage {
    Localized { value: String },
    Plain(String),
}

/// Extracts `code: message` from an OData error body, if it is one.
pub fn error_detail(body: &[u8]) -> Option<String> {
    let ErrorEnvelope { error } = serde_json::from_slice(body).ok()?;
    let message = match error.message {
        ErrorMessage::Localized { value } => value,
        ErrorMessage::Plain(value) => value,
    };
    if error.code.is_empty() {
        Some(message)
    } else {
        Some(format!("{}: {}", error.code, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "PascalCase")]
    struct Row {
        profit_center: String,
    }

    #[test]
    fn parses_collection() {
        let body = br#"{"d":{"results":[{"ProfitCenter":"YB200"},{"ProfitCenter":"YB201"}]}}"#;
        let rows: Vec<Row> = parse_results(body).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].profit_center, "YB201");
    }

    #[test]
    fn parses_empty_collection() {
        let rows: Vec<Row> = parse_results(br#"{"d":{"results":[]}}"#).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn parses_single_entity() {
        let rows: Vec<Row> = parse_results(br#"{"d":{"ProfitCenter":"YB200"}}"#).unwrap();
        assert_eq!(
            rows,
            vec![Row {
                profit_center: "YB200".into()
            }]
        );
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct DefaultedRow {
        #[allow(dead_code)]
        profit_center: String,
    }

    #[test]
    fn empty_entity_is_empty_sequence() {
        let rows: Vec<DefaultedRow> = parse_results(br#"{"d":{}}"#).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn rejects_missing_envelope() {
        assert!(parse_results::<Row>(br#"{"results":[]}"#).is_err());
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(parse_results::<Row>(b"<html>gateway timeout</html>").is_err());
    }

    #[test]
    fn rejects_shape_mismatch() {
        assert!(parse_results::<Row>(br#"{"d":{"results":{"ProfitCenter":"YB200"}}}"#).is_err());
    }

    #[test]
    fn extracts_error_detail() {
        let body = br#"{"error":{"code":"SY/530","message":{"lang":"en","value":"Resource not found"}}}"#;
        assert_eq!(
            error_detail(body).as_deref(),
            Some("SY/530: Resource not found")
        );
        assert_eq!(error_detail(b"not json"), None);
    }
}
