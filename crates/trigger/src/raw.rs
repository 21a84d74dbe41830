// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Field access helpers for raw trigger JSON
//!
//! Required fields fail with a located [`ParseError`]; optional fields
//! treat `null` the same as absent.

use crate::error::ParseError;
use serde_json::{Map, Value};

/// Path of a named child, e.g. `triggers[0]` + `title`.
pub(crate) fn child(location: &str, key: &str) -> String {
    format!("{}.{}", location, key)
}

/// Path of an array element, e.g. `triggers[0]`.
pub(crate) fn element(location: &str, key: &str, index: usize) -> String {
    format!("{}.{}[{}]", location, key, index)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn invalid(location: &str, expected: &str, found: &Value) -> ParseError {
    ParseError::InvalidFormat {
        location: location.to_string(),
        message: format!("expected {}, found {}", expected, json_type(found)),
    }
}

fn present<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|v| !v.is_null())
}

pub(crate) fn as_object<'a>(
    value: &'a Value,
    location: &str,
) -> Result<&'a Map<String, Value>, ParseError> {
    value
        .as_object()
        .ok_or_else(|| invalid(location, "an object", value))
}

/// The `type` discriminant. Absent or null is a missing discriminant.
pub(crate) fn discriminant<'a>(
    map: &'a Map<String, Value>,
    location: &str,
) -> Result<&'a str, ParseError> {
    match present(map, "type") {
        None => Err(ParseError::MissingDiscriminant {
            location: location.to_string(),
        }),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(other) => Err(invalid(&child(location, "type"), "a string", other)),
    }
}

pub(crate) fn required_str(
    map: &Map<String, Value>,
    key: &'static str,
    location: &str,
) -> Result<String, ParseError> {
    match present(map, key) {
        None => Err(ParseError::MissingRequiredField {
            location: location.to_string(),
            field: key,
        }),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(invalid(&child(location, key), "a string", other)),
    }
}

pub(crate) fn required_i64(
    map: &Map<String, Value>,
    key: &'static str,
    location: &str,
) -> Result<i64, ParseError> {
    match present(map, key) {
        None => Err(ParseError::MissingRequiredField {
            location: location.to_string(),
            field: key,
        }),
        Some(value) => value
            .as_i64()
            .ok_or_else(|| invalid(&child(location, key), "an integer", value)),
    }
}

pub(crate) fn optional_str(
    map: &Map<String, Value>,
    key: &str,
    location: &str,
) -> Result<Option<String>, ParseError> {
    match present(map, key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(invalid(&child(location, key), "a string", other)),
    }
}

pub(crate) fn optional_bool(
    map: &Map<String, Value>,
    key: &str,
    location: &str,
) -> Result<Option<bool>, ParseError> {
    match present(map, key) {
        None => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(other) => Err(invalid(&child(location, key), "a boolean", other)),
    }
}

/// An optional array; absent or null reads as empty.
pub(crate) fn optional_array<'a>(
    map: &'a Map<String, Value>,
    key: &str,
    location: &str,
) -> Result<&'a [Value], ParseError> {
    match present(map, key) {
        None => Ok(&[]),
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(other) => Err(invalid(&child(location, key), "an array", other)),
    }
}

/// An optional object; absent or null reads as `None`.
pub(crate) fn optional_object<'a>(
    map: &'a Map<String, Value>,
    key: &str,
    location: &str,
) -> Result<Option<&'a Map<String, Value>>, ParseError> {
    match present(map, key) {
        None => Ok(None),
        Some(Value::Object(obj)) => Ok(Some(obj)),
        Some(other) => Err(invalid(&child(location, key), "an object", other)),
    }
}

#[cfg(test)]
#[path = "raw_tests.rs"]
mod tests;
