//! Reading term records from the translation service's JSON exports.
//!
//! Two shapes are accepted: the bare array produced by a JSON export, and the API
//! envelope `{"result": {"terms": [...]}}` returned when listing terms.

use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use serde_json::Value;

use crate::{error::Error, types::TermRecord};

/// Reads term records from a JSON file.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<TermRecord>, Error> {
    let file = File::open(path).map_err(Error::Io)?;
    records_from_reader(BufReader::new(file))
}

/// Reads term records from any reader.
pub fn records_from_reader<R: Read>(reader: R) -> Result<Vec<TermRecord>, Error> {
    let value: Value = serde_json::from_reader(reader)?;
    records_from_value(value)
}

pub fn records_from_str(s: &str) -> Result<Vec<TermRecord>, Error> {
    let value: Value = serde_json::from_str(s)?;
    records_from_value(value)
}

fn records_from_value(mut value: Value) -> Result<Vec<TermRecord>, Error> {
    let terms = match value {
        Value::Array(_) => value,
        Value::Object(_) => match value.pointer_mut("/result/terms") {
            Some(terms) => terms.take(),
            None => {
                return Err(Error::InvalidRecords(
                    "expected an array of terms or a `result.terms` field".to_string(),
                ));
            }
        },
        other => {
            return Err(Error::InvalidRecords(format!(
                "expected an array of terms, found {}",
                json_kind(&other)
            )));
        }
    };
    let records: Vec<TermRecord> = serde_json::from_value(terms)?;
    tracing::debug!(count = records.len(), "loaded term records");
    Ok(records)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Definition;

    #[test]
    fn test_reads_export_array() {
        let json = r#"[
            {"term": "hello", "definition": "World", "context": "en.lproj/Localizable.strings"},
            {"term": "apples", "definition": {"one": "1 apple", "other": "%d apples"}}
        ]"#;
        let records = records_from_str(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].definition, Some(Definition::from("World")));
        assert!(records[1].definition.as_ref().unwrap().as_plural().is_some());
    }

    #[test]
    fn test_reads_api_envelope() {
        let json = r#"{
            "response": {"status": "success", "code": "200"},
            "result": {"terms": [{"term": "bye", "definition": "Goodbye"}]}
        }"#;
        let records = records_from_str(json).unwrap();
        assert_eq!(records, vec![TermRecord::new("bye", "Goodbye")]);
    }

    #[test]
    fn test_rejects_other_shapes() {
        let err = records_from_str(r#"{"terms": []}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidRecords(_)));

        let err = records_from_str("42").unwrap_err();
        assert!(err.to_string().contains("found a number"));

        assert!(matches!(records_from_str("[{"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_load_records_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("terms.json");
        std::fs::write(&path, r#"[{"term": "a", "definition": "b"}]"#).unwrap();
        assert_eq!(load_records(&path).unwrap().len(), 1);
        assert!(matches!(
            load_records(dir.path().join("missing.json")),
            Err(Error::Io(_))
        ));
    }
}
