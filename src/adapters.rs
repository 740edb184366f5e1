//! JSON type adapters
//!
//! Models implement `serde` traits whose deserializers route through the same
//! constructors and builders callers use, so a model parsed from the wire is
//! held to the same invariants as one built by hand. This module wraps those
//! traits in a [`TypeAdapter`] value that requests carry to parse responses,
//! and maps `serde_json` failures onto [`ApiError::Parse`].
//!
//! # Examples
//!
//! ```
//! use yandex_money_api::adapters::{JsonAdapter, TypeAdapter};
//! use yandex_money_api::types::Avatar;
//!
//! # fn example() -> yandex_money_api::Result<()> {
//! let adapter = JsonAdapter::<Avatar>::new();
//! let avatar = adapter.from_json(r#"{"url":"https://a.example/1.png","ts":"2015-03-14T09:26:53+03:00"}"#)?;
//! let json = adapter.to_json(&avatar)?;
//! # Ok(())
//! # }
//! ```

use crate::error::{ApiError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

/// Bidirectional mapping between wire JSON and a model
pub trait TypeAdapter<T> {
    /// Parse a model from JSON text
    fn from_json(&self, json: &str) -> Result<T>;

    /// Parse a model from an already decoded JSON value
    fn from_value(&self, value: Value) -> Result<T>;

    /// Write a model as JSON text
    fn to_json(&self, model: &T) -> Result<String>;

    /// Write a model as a JSON value
    fn to_value(&self, model: &T) -> Result<Value>;
}

/// [`TypeAdapter`] for any model implementing the `serde` traits
pub struct JsonAdapter<T> {
    _model: PhantomData<fn() -> T>,
}

impl<T> JsonAdapter<T> {
    /// Create a new adapter
    pub const fn new() -> Self {
        Self {
            _model: PhantomData,
        }
    }
}

impl<T> Default for JsonAdapter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for JsonAdapter<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for JsonAdapter<T> {}

impl<T> fmt::Debug for JsonAdapter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JsonAdapter<{}>", short_type_name::<T>())
    }
}

impl<T> TypeAdapter<T> for JsonAdapter<T>
where
    T: Serialize + DeserializeOwned,
{
    fn from_json(&self, json: &str) -> Result<T> {
        parse(json)
    }

    fn from_value(&self, value: Value) -> Result<T> {
        serde_json::from_value(value).map_err(parse_error::<T>)
    }

    fn to_json(&self, model: &T) -> Result<String> {
        serialize(model)
    }

    fn to_value(&self, model: &T) -> Result<Value> {
        serde_json::to_value(model).map_err(ApiError::Serialize)
    }
}

/// Parse a model from JSON text
pub fn parse<T: DeserializeOwned>(json: &str) -> Result<T> {
    let model = serde_json::from_str(json).map_err(parse_error::<T>)?;
    tracing::debug!("Parsed {}", short_type_name::<T>());
    Ok(model)
}

/// Write a model as JSON text
pub fn serialize<T: Serialize>(model: &T) -> Result<String> {
    serde_json::to_string(model).map_err(ApiError::Serialize)
}

fn parse_error<T>(source: serde_json::Error) -> ApiError {
    let target = short_type_name::<T>();
    tracing::warn!("Failed to parse {}: {}", target, source);
    ApiError::parse(target, source)
}

/// Type name with module paths stripped from every segment, generic
/// arguments included (`Vec<Avatar>` rather than `alloc::vec::Vec<...>`)
fn short_type_name<T>() -> String {
    let name = type_name::<T>();
    let mut short = String::with_capacity(name.len());
    let mut path_start = 0;

    for (index, c) in name.char_indices() {
        if !(c.is_alphanumeric() || c == '_' || c == ':') {
            short.push_str(last_segment(&name[path_start..index]));
            short.push(c);
            path_start = index + c.len_utf8();
        }
    }
    short.push_str(last_segment(&name[path_start..]));
    short
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Avatar, DigitalGoods, MoneySource};
    use serde_json::json;

    #[test]
    fn test_adapter_round_trip() {
        let adapter = JsonAdapter::<MoneySource>::new();
        let source = adapter.from_json(r#"{"id":"card-1"}"#).unwrap();
        assert_eq!(source.id(), "card-1");

        let value = adapter.to_value(&source).unwrap();
        assert_eq!(value, json!({ "id": "card-1" }));
        assert_eq!(adapter.from_value(value).unwrap(), source);
    }

    #[test]
    fn test_parse_malformed_json() {
        let err = parse::<Avatar>("{\"url\":").unwrap_err();
        assert!(err.is_parse());
        assert!(matches!(&err, ApiError::Parse { target, .. } if target == "Avatar"));
    }

    #[test]
    fn test_parse_error_names_generic_target() {
        let err = parse::<Vec<Avatar>>("{").unwrap_err();
        assert!(matches!(&err, ApiError::Parse { target, .. } if target == "Vec<Avatar>"));
        assert!(err.to_string().starts_with("Failed to parse Vec<Avatar>:"));
    }

    #[test]
    fn test_parse_invariant_violation_is_parse_error() {
        let adapter = JsonAdapter::<Avatar>::default();
        let err = adapter
            .from_value(json!({ "url": "", "ts": "2015-03-14T09:26:53+03:00" }))
            .unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("url"));
    }

    #[test]
    fn test_serialize() {
        let json = serialize(&DigitalGoods::default()).unwrap();
        assert_eq!(json, r#"{"article":[],"bonus":[]}"#);
    }

    #[test]
    fn test_adapter_debug() {
        let adapter = JsonAdapter::<Avatar>::new();
        assert_eq!(format!("{:?}", adapter), "JsonAdapter<Avatar>");

        let adapter = JsonAdapter::<Option<Vec<MoneySource>>>::new();
        assert_eq!(
            format!("{:?}", adapter),
            "JsonAdapter<Option<Vec<MoneySource>>>"
        );
    }
}
