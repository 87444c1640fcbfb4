//! Strict decoding of write payloads
//!
//! A payload is a JSON object of attributes. Decoding happens in three steps:
//!
//! 1. [`check_payload`] rejects keys outside the record's [`Schema`]
//!    (`DecodeError::UnrecognisedFields`), then values whose shape does not
//!    match the declared [`FieldKind`] (`DecodeError::TypeMismatch`). Both
//!    short-circuit.
//! 2. [`Attributes`] converts each field into its typed form. Problems inside
//!    a well-shaped value (a bad UUID, a route entry with extra keys) are
//!    recorded as field errors rather than aborting.
//! 3. The record's own validation runs over the typed result.
//!
//! `null` is accepted for every field and means "not supplied".

use crate::document::{RedirectEntry, RouteEntry};
use crate::error::{DecodeError, FieldErrors};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Declared shape of a recognised field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// JSON string
    String,
    /// RFC 3339 timestamp carried as a string
    Timestamp,
    /// UUID carried as a string
    Uuid,
    /// JSON array
    Array,
    /// JSON object
    Object,
}

impl FieldKind {
    /// Wire name used in type-mismatch messages
    pub fn name(self) -> &'static str {
        match self {
            FieldKind::String | FieldKind::Timestamp | FieldKind::Uuid => "string",
            FieldKind::Array => "array",
            FieldKind::Object => "object",
        }
    }

    fn accepts(self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Null) => true,
            (FieldKind::String | FieldKind::Timestamp | FieldKind::Uuid, Value::String(_)) => true,
            (FieldKind::Array, Value::Array(_)) => true,
            (FieldKind::Object, Value::Object(_)) => true,
            _ => false,
        }
    }
}

/// Recognised fields of a record, in declaration order
pub type Schema = &'static [(&'static str, FieldKind)];

/// JSON type name of a value
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// View a parsed JSON value as an attribute map
pub fn as_attribute_map(value: &Value) -> Result<&Map<String, Value>, DecodeError> {
    value.as_object().ok_or(DecodeError::NotAnObject {
        actual: json_kind(value),
    })
}

/// Reject unknown keys, then mis-shaped values
///
/// Unknown keys are reported together, in input order. Only the first
/// mis-shaped field (in input order) is reported.
pub fn check_payload(schema: Schema, attributes: &Map<String, Value>) -> Result<(), DecodeError> {
    let unknown: Vec<String> = attributes
        .keys()
        .filter(|key| !schema.iter().any(|(name, _)| name == key))
        .cloned()
        .collect();
    if !unknown.is_empty() {
        return Err(DecodeError::UnrecognisedFields { fields: unknown });
    }

    for (key, value) in attributes {
        let kind = schema
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, kind)| *kind);
        if let Some(kind) = kind {
            if !kind.accepts(value) {
                return Err(DecodeError::TypeMismatch {
                    field: key.clone(),
                    expected: kind.name(),
                    actual: json_kind(value),
                });
            }
        }
    }
    Ok(())
}

/// Typed field access over a shape-checked attribute map
///
/// Conversion problems are collected into [`Attributes::into_errors`].
pub struct Attributes<'a> {
    map: &'a Map<String, Value>,
    errors: FieldErrors,
}

impl<'a> Attributes<'a> {
    /// Wrap an attribute map that already passed [`check_payload`]
    pub fn new(map: &'a Map<String, Value>) -> Self {
        Self {
            map,
            errors: FieldErrors::new(),
        }
    }

    fn value(&self, name: &str) -> Option<&'a Value> {
        self.map.get(name).filter(|v| !v.is_null())
    }

    /// True if the field was supplied with a non-null value
    pub fn contains(&self, name: &str) -> bool {
        self.value(name).is_some()
    }

    /// String field
    pub fn string(&self, name: &str) -> Option<String> {
        self.value(name).and_then(Value::as_str).map(str::to_string)
    }

    /// RFC 3339 timestamp field
    pub fn timestamp(&mut self, name: &str) -> Option<DateTime<Utc>> {
        let raw = self.value(name).and_then(Value::as_str)?;
        match DateTime::parse_from_rfc3339(raw) {
            Ok(ts) => Some(ts.with_timezone(&Utc)),
            Err(_) => {
                self.errors.add(name, "is not a valid timestamp");
                None
            }
        }
    }

    /// UUID field
    pub fn uuid(&mut self, name: &str) -> Option<Uuid> {
        let raw = self.value(name).and_then(Value::as_str)?;
        match Uuid::parse_str(raw) {
            Ok(id) => Some(id),
            Err(_) => {
                self.errors.add(name, "must be a UUID");
                None
            }
        }
    }

    /// Array of strings
    pub fn string_list(&mut self, name: &str) -> Vec<String> {
        let Some(items) = self.value(name).and_then(Value::as_array) else {
            return Vec::new();
        };
        let strings: Vec<String> = items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect();
        if strings.len() != items.len() {
            self.errors.add(name, "must be a list of strings");
        }
        strings
    }

    /// Arbitrary JSON object, empty when absent
    pub fn object(&self, name: &str) -> Value {
        self.value(name)
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()))
    }

    /// Route entries; each may carry only `path` and `type`
    pub fn routes(&mut self, name: &str) -> Vec<RouteEntry> {
        let entries = self.entries(name, &["path", "type"]);
        entries
            .into_iter()
            .map(|entry| RouteEntry::new(entry_str(entry, "path"), entry_str(entry, "type")))
            .collect()
    }

    /// Redirect entries; each may carry only `path`, `type` and `destination`
    pub fn redirects(&mut self, name: &str) -> Vec<RedirectEntry> {
        let entries = self.entries(name, &["path", "type", "destination"]);
        entries
            .into_iter()
            .map(|entry| {
                RedirectEntry::new(
                    entry_str(entry, "path"),
                    entry_str(entry, "type"),
                    entry_str(entry, "destination"),
                )
            })
            .collect()
    }

    fn entries(&mut self, name: &str, permitted: &[&str]) -> Vec<&'a Map<String, Value>> {
        let Some(items) = self.value(name).and_then(Value::as_array) else {
            return Vec::new();
        };
        let mut invalid = false;
        let mut entries = Vec::with_capacity(items.len());
        for item in items {
            match item.as_object() {
                Some(entry) => {
                    if entry.keys().any(|key| !permitted.contains(&key.as_str())) {
                        invalid = true;
                    }
                    // Non-string values are not carried into the route set.
                    if entry.values().all(|v| v.is_string() || v.is_null()) {
                        entries.push(entry);
                    } else {
                        invalid = true;
                    }
                }
                None => invalid = true,
            }
        }
        if invalid {
            self.errors.add(name, "are invalid");
        }
        entries
    }

    /// Link map from link type to lists of content ids
    pub fn links(&mut self, name: &str) -> BTreeMap<String, Vec<Uuid>> {
        let Some(map) = self.value(name).and_then(Value::as_object) else {
            return BTreeMap::new();
        };
        let mut links = BTreeMap::new();
        let mut bad_values = false;
        for (link_type, targets) in map {
            let ids = targets.as_array().map(|items| {
                items
                    .iter()
                    .map(|item| item.as_str().and_then(|s| Uuid::parse_str(s).ok()))
                    .collect::<Option<Vec<Uuid>>>()
            });
            match ids {
                Some(Some(ids)) => {
                    links.insert(link_type.clone(), ids);
                }
                _ => {
                    bad_values = true;
                    links.insert(link_type.clone(), Vec::new());
                }
            }
        }
        if bad_values {
            self.errors.add(name, "must map to lists of UUIDs");
        }
        links
    }

    /// Errors recorded during conversion
    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }
}

fn entry_str(entry: &Map<String, Value>, key: &str) -> String {
    entry
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Join words the way a sentence lists them: `a`, `a and b`, `a, b and c`
pub fn to_sentence(words: &[String]) -> String {
    match words {
        [] => String::new(),
        [one] => one.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}
