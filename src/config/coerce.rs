//! Coercion of loosely-typed JSON values into typed configuration fields
//!
//! Every helper takes the field name so that failures name the offending
//! field. Coercion is forgiving about representation (a count may arrive as
//! `20`, `20.0`, or `"20"`) but strict about meaning: nothing is silently
//! truncated or defaulted on error.

use crate::error::ConfigError;
use anyhow::Result;
use serde_json::{Map, Value};
use std::path::PathBuf;

/// The untyped input mapping type (insertion-ordered via `preserve_order`)
pub type JsonMap = Map<String, Value>;

/// Require a value to be a JSON object, for nested parameter blocks
pub(crate) fn require_object<'a>(field: &str, value: &'a Value) -> Result<&'a JsonMap> {
    value.as_object().ok_or_else(|| {
        ConfigError::invalid_value(field, format!("expected a mapping, got: {value}")).into()
    })
}

/// Coerce a value to boolean
///
/// Accepts JSON booleans, the strings true/false/yes/no/1/0
/// (case-insensitive), and integer numbers (nonzero is true).
pub(crate) fn coerce_bool(field: &str, value: &Value) -> Result<bool> {
    match *value {
        Value::Bool(b) => Ok(b),
        Value::String(ref s) => match s.to_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(true),
            "false" | "no" | "0" => Ok(false),
            _ => Err(ConfigError::invalid_value(
                field,
                format!("cannot coerce '{s}' to boolean (expected true/false/yes/no/1/0)"),
            )
            .into()),
        },
        Value::Number(ref n) => n.as_i64().map(|i| i != 0).ok_or_else(|| {
            ConfigError::invalid_value(field, format!("cannot coerce {n} to boolean")).into()
        }),
        Value::Null | Value::Array(_) | Value::Object(_) => {
            Err(ConfigError::invalid_value(field, format!("cannot coerce {value} to boolean")).into())
        }
    }
}

/// Coerce a value to a non-negative count
///
/// Accepts non-negative integer numbers, floats with no fractional part, and
/// strings parseable as an integer. Negative or fractional input is rejected
/// rather than truncated.
pub(crate) fn coerce_count(field: &str, value: &Value) -> Result<usize> {
    match *value {
        Value::Number(ref n) => {
            if let Some(u) = n.as_u64() {
                return Ok(usize::try_from(u).map_err(|_| {
                    ConfigError::invalid_value(field, format!("{u} is out of range"))
                })?);
            }
            if let Some(f) = n.as_f64() {
                if f.fract() == 0.0 && f >= 0.0 && f <= usize::MAX as f64 {
                    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    return Ok(f as usize);
                }
            }
            Err(ConfigError::invalid_value(
                field,
                format!("expected a non-negative integer, got: {n}"),
            )
            .into())
        }
        Value::String(ref s) => s.trim().parse::<usize>().map_err(|_| {
            ConfigError::invalid_value(field, format!("cannot coerce '{s}' to an integer")).into()
        }),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => Err(
            ConfigError::invalid_value(field, format!("cannot coerce {value} to an integer")).into(),
        ),
    }
}

/// Coerce a value to a float
pub(crate) fn coerce_float(field: &str, value: &Value) -> Result<f64> {
    match *value {
        Value::Number(ref n) => n.as_f64().ok_or_else(|| {
            ConfigError::invalid_value(field, format!("cannot coerce {n} to a float")).into()
        }),
        Value::String(ref s) => s.trim().parse::<f64>().map_err(|_| {
            ConfigError::invalid_value(field, format!("cannot coerce '{s}' to a float")).into()
        }),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => Err(
            ConfigError::invalid_value(field, format!("cannot coerce {value} to a float")).into(),
        ),
    }
}

/// Coerce a value to a string (JSON strings only, no stringification)
pub(crate) fn coerce_string(field: &str, value: &Value) -> Result<String> {
    value.as_str().map(str::to_owned).ok_or_else(|| {
        ConfigError::invalid_value(field, format!("expected a string, got: {value}")).into()
    })
}

/// Coerce a value to a filesystem path
pub(crate) fn coerce_path(field: &str, value: &Value) -> Result<PathBuf> {
    coerce_string(field, value).map(PathBuf::from)
}

/// Coerce a value to an optional filesystem path
///
/// `null` and the empty string both mean "unset".
pub(crate) fn coerce_optional_path(field: &str, value: &Value) -> Result<Option<PathBuf>> {
    if value.is_null() {
        return Ok(None);
    }
    let s = coerce_string(field, value)?;
    if s.is_empty() {
        return Ok(None);
    }
    Ok(Some(PathBuf::from(s)))
}

/// Coerce a value to a list of strings
pub(crate) fn coerce_string_list(field: &str, value: &Value) -> Result<Vec<String>> {
    let items = value.as_array().ok_or_else(|| {
        ConfigError::invalid_value(field, format!("expected a list of strings, got: {value}"))
    })?;
    items
        .iter()
        .map(|item| coerce_string(field, item))
        .collect()
}

/// Reject keys in a mapping that are not part of the declared schema
///
/// `context` is the parameter-block name used in the error ("idr_params",
/// or the block name for the top level).
pub(crate) fn reject_unknown_keys(context: &str, map: &JsonMap, known: &[&str]) -> Result<()> {
    for key in map.keys() {
        if !known.contains(&key.as_str()) {
            return Err(ConfigError::invalid_value(
                key.clone(),
                format!("unrecognized key in {context} (expected one of: {})", known.join(", ")),
            )
            .into());
        }
    }
    Ok(())
}
