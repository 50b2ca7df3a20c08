//! Typed accessors over loosely-typed Web API payloads.
//!
//! Every entity is built from a JSON object through these helpers. Required
//! fields fail with [`MappingError::MissingField`] only when the key is
//! absent; a required key that is present but `null` reads as the empty
//! value (Spotify sends `"id": null` for local files). Optional fields fall
//! back to a default when absent or `null`. A field of the wrong JSON type is
//! always an error. Keys nobody asks for are ignored.

use std::{collections::BTreeMap, fmt};

use serde_json::Value;

use crate::types::Payload;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    MissingField(&'static str),
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingError::MissingField(field) => write!(f, "missing required field `{field}`"),
            MappingError::InvalidField { field, expected } => {
                write!(f, "field `{field}` is not {expected}")
            }
        }
    }
}

impl std::error::Error for MappingError {}

/// Returns the raw value of a field that must be present.
pub fn require<'a>(payload: &'a Payload, field: &'static str) -> Result<&'a Value, MappingError> {
    payload.get(field).ok_or(MappingError::MissingField(field))
}

pub fn required_str(payload: &Payload, field: &'static str) -> Result<String, MappingError> {
    match payload.get(field) {
        None => Err(MappingError::MissingField(field)),
        Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(invalid(field, "a string")),
    }
}

pub fn required_u64(payload: &Payload, field: &'static str) -> Result<u64, MappingError> {
    match payload.get(field) {
        None => Err(MappingError::MissingField(field)),
        Some(Value::Null) => Ok(0),
        Some(v) => v.as_u64().ok_or_else(|| invalid(field, "a non-negative integer")),
    }
}

pub fn required_object(payload: &Payload, field: &'static str) -> Result<Payload, MappingError> {
    match payload.get(field) {
        None => Err(MappingError::MissingField(field)),
        Some(Value::Null) => Ok(Payload::new()),
        Some(Value::Object(o)) => Ok(o.clone()),
        Some(_) => Err(invalid(field, "an object")),
    }
}

pub fn optional_str(payload: &Payload, field: &'static str) -> Result<Option<String>, MappingError> {
    match payload.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(invalid(field, "a string")),
    }
}

pub fn string_or(
    payload: &Payload,
    field: &'static str,
    default: &str,
) -> Result<String, MappingError> {
    Ok(optional_str(payload, field)?.unwrap_or_else(|| default.to_string()))
}

pub fn u64_or(payload: &Payload, field: &'static str, default: u64) -> Result<u64, MappingError> {
    match payload.get(field) {
        None | Some(Value::Null) => Ok(default),
        Some(v) => v.as_u64().ok_or_else(|| invalid(field, "a non-negative integer")),
    }
}

pub fn optional_u64(payload: &Payload, field: &'static str) -> Result<Option<u64>, MappingError> {
    match payload.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v
            .as_u64()
            .map(Some)
            .ok_or_else(|| invalid(field, "a non-negative integer")),
    }
}

pub fn bool_or(payload: &Payload, field: &'static str, default: bool) -> Result<bool, MappingError> {
    match payload.get(field) {
        None | Some(Value::Null) => Ok(default),
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(invalid(field, "a boolean")),
    }
}

pub fn object_or_empty(payload: &Payload, field: &'static str) -> Result<Payload, MappingError> {
    match payload.get(field) {
        None | Some(Value::Null) => Ok(Payload::new()),
        Some(Value::Object(o)) => Ok(o.clone()),
        Some(_) => Err(invalid(field, "an object")),
    }
}

/// Returns every element of an array field as an object. An absent array is
/// empty.
pub fn objects_or_empty(
    payload: &Payload,
    field: &'static str,
) -> Result<Vec<Payload>, MappingError> {
    match payload.get(field) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Object(o) => Ok(o.clone()),
                _ => Err(invalid(field, "a list of objects")),
            })
            .collect(),
        Some(_) => Err(invalid(field, "a list")),
    }
}

/// Reads the `external_urls` object, link type to URL.
pub fn external_urls(payload: &Payload) -> Result<BTreeMap<String, String>, MappingError> {
    object_or_empty(payload, "external_urls")?
        .into_iter()
        .map(|(kind, url)| match url {
            Value::String(url) => Ok((kind, url)),
            _ => Err(invalid("external_urls", "a map of strings")),
        })
        .collect()
}

/// Flattens a play-history envelope into a track payload.
///
/// The nested `track` object is taken as the base and every other key of the
/// envelope (such as `played_at`) is layered on top of it, overwriting a
/// track key of the same name.
pub fn merge_envelope(envelope: &Payload) -> Result<Payload, MappingError> {
    let mut merged = required_object(envelope, "track")?;
    for (key, value) in envelope {
        if key != "track" {
            merged.insert(key.clone(), value.clone());
        }
    }
    Ok(merged)
}

fn invalid(field: &'static str, expected: &'static str) -> MappingError {
    MappingError::InvalidField { field, expected }
}
