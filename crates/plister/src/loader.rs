//! Plist loader: file bytes → [`PlistDocument`].
//!
//! Decoding is delegated to the `plist` crate, which detects XML and binary
//! encodings on its own. This module only enforces the dictionary root and
//! maps the codec's value tree onto [`PlistValue`].

use std::io::Cursor;
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::{PlistError, Result};
use crate::types::{PlistDocument, PlistValue};

/// Load a plist file as a string-keyed dictionary.
///
/// Each call reads the file fresh; nothing is cached. Values keep their
/// native kind and callers check the kind of any key they care about.
pub fn load(path: impl AsRef<Path>) -> Result<PlistDocument> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| PlistError::CouldNotLoadData {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_bytes(&bytes, path)
}

/// Decode an in-memory plist. `path` is only used to label errors.
pub fn load_from_bytes(bytes: &[u8], path: impl AsRef<Path>) -> Result<PlistDocument> {
    let path = path.as_ref();
    let root = plist::Value::from_reader(Cursor::new(bytes)).map_err(|source| {
        PlistError::MalformedDocument {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let plist::Value::Dictionary(dict) = root else {
        return Err(PlistError::CouldNotTransformToDictionary {
            path: path.to_path_buf(),
        });
    };

    let document = convert_dictionary(dict, path)?;
    debug!(path = %path.display(), keys = document.len(), "loaded plist");
    Ok(document)
}

fn convert_dictionary(dict: plist::Dictionary, path: &Path) -> Result<PlistDocument> {
    dict.into_iter()
        .map(|(key, value)| Ok((key, convert_value(value, path)?)))
        .collect()
}

fn convert_value(value: plist::Value, path: &Path) -> Result<PlistValue> {
    let converted = match value {
        plist::Value::String(s) => PlistValue::String(s),
        plist::Value::Boolean(b) => PlistValue::Boolean(b),
        plist::Value::Real(n) => PlistValue::Number(n),
        plist::Value::Integer(n) => match (n.as_signed(), n.as_unsigned()) {
            (Some(signed), _) => PlistValue::Number(signed as f64),
            (None, Some(unsigned)) => PlistValue::Number(unsigned as f64),
            (None, None) => return Err(unsupported(path, "integer")),
        },
        plist::Value::Date(date) => {
            PlistValue::Date(DateTime::<Utc>::from(SystemTime::from(date)))
        }
        plist::Value::Data(bytes) => PlistValue::Data(bytes),
        plist::Value::Array(items) => PlistValue::Array(
            items
                .into_iter()
                .map(|item| convert_value(item, path))
                .collect::<Result<Vec<_>>>()?,
        ),
        plist::Value::Dictionary(dict) => PlistValue::Dictionary(convert_dictionary(dict, path)?),
        plist::Value::Uid(_) => return Err(unsupported(path, "uid")),
        _ => return Err(unsupported(path, "unknown")),
    };
    Ok(converted)
}

fn unsupported(path: &Path, kind: &'static str) -> PlistError {
    PlistError::UnsupportedValue {
        path: path.to_path_buf(),
        kind,
    }
}
