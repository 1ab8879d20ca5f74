//! Typed plist values.
//!
//! Every value in a loaded document is one of the [`PlistValue`] variants.
//! Callers pull typed data out by matching on the variant or through the
//! `as_*` accessors, which return `None` on a kind mismatch instead of
//! panicking.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A string-keyed plist dictionary. Sorted so printed output is stable.
pub type PlistDocument = BTreeMap<String, PlistValue>;

/// A single plist value.
///
/// Integers and reals both land in `Number`, matching how the editing tool
/// prints and accepts them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PlistValue {
    String(String),
    Boolean(bool),
    Number(f64),
    Date(DateTime<Utc>),
    Data(Vec<u8>),
    Array(Vec<PlistValue>),
    Dictionary(PlistDocument),
}

impl PlistValue {
    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            PlistValue::String(_) => "string",
            PlistValue::Boolean(_) => "boolean",
            PlistValue::Number(_) => "number",
            PlistValue::Date(_) => "date",
            PlistValue::Data(_) => "data",
            PlistValue::Array(_) => "array",
            PlistValue::Dictionary(_) => "dictionary",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PlistValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PlistValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PlistValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            PlistValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_data(&self) -> Option<&[u8]> {
        match self {
            PlistValue::Data(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[PlistValue]> {
        match self {
            PlistValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_dictionary(&self) -> Option<&PlistDocument> {
        match self {
            PlistValue::Dictionary(dict) => Some(dict),
            _ => None,
        }
    }
}

impl From<&str> for PlistValue {
    fn from(value: &str) -> Self {
        PlistValue::String(value.to_string())
    }
}

impl From<String> for PlistValue {
    fn from(value: String) -> Self {
        PlistValue::String(value)
    }
}

impl From<bool> for PlistValue {
    fn from(value: bool) -> Self {
        PlistValue::Boolean(value)
    }
}

impl From<f64> for PlistValue {
    fn from(value: f64) -> Self {
        PlistValue::Number(value)
    }
}

impl From<i64> for PlistValue {
    fn from(value: i64) -> Self {
        PlistValue::Number(value as f64)
    }
}

impl From<i32> for PlistValue {
    fn from(value: i32) -> Self {
        PlistValue::Number(f64::from(value))
    }
}

impl From<u32> for PlistValue {
    fn from(value: u32) -> Self {
        PlistValue::Number(f64::from(value))
    }
}

impl From<DateTime<Utc>> for PlistValue {
    fn from(value: DateTime<Utc>) -> Self {
        PlistValue::Date(value)
    }
}

impl From<Vec<PlistValue>> for PlistValue {
    fn from(value: Vec<PlistValue>) -> Self {
        PlistValue::Array(value)
    }
}

impl From<PlistDocument> for PlistValue {
    fn from(value: PlistDocument) -> Self {
        PlistValue::Dictionary(value)
    }
}

/// Resolve a colon-separated key path such as `dictionary_key:inner_key` or
/// `array_key:1`, the same addressing PlistBuddy uses. A leading `:` is
/// accepted. Array segments must be decimal indexes.
pub fn lookup<'a>(document: &'a PlistDocument, path: &str) -> Option<&'a PlistValue> {
    let path = path.strip_prefix(':').unwrap_or(path);
    let mut segments = path.split(':');
    let mut current = document.get(segments.next()?)?;

    for segment in segments {
        current = match current {
            PlistValue::Dictionary(dict) => dict.get(segment)?,
            PlistValue::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    Some(current)
}
