//! Conversion between [`Values`] and plain JSON documents.
//!
//! The document is a nested object keyed by parameter and group names:
//!
//! ```json
//! {
//!   "PID Controller": { "Kp": 2.0, "Ki": 0.5 },
//!   "Enabled": true,
//!   "Reset": null
//! }
//! ```

use serde_json::{Map, Number, Value};

use super::ConfigError;
use crate::group::{ValueEntry, Values};
use crate::param::ParamValue;

/// Converts values to a JSON object, preserving key order.
///
/// Non-finite floats have no JSON representation and are written as `null`.
pub fn to_json(values: &Values) -> Value {
    let map: Map<String, Value> = values
        .iter()
        .map(|(name, entry)| (name.to_owned(), entry_to_json(entry)))
        .collect();
    Value::Object(map)
}

fn entry_to_json(entry: &ValueEntry) -> Value {
    match entry {
        ValueEntry::Group(values) => to_json(values),
        ValueEntry::Value(ParamValue::Float(v)) => {
            Number::from_f64(*v).map(Value::Number).unwrap_or(Value::Null)
        }
        ValueEntry::Value(ParamValue::Bool(v)) => Value::Bool(*v),
        ValueEntry::Value(ParamValue::Text(v)) => Value::String(v.clone()),
        ValueEntry::Value(ParamValue::None) => Value::Null,
    }
}

/// Converts a JSON object into values.
///
/// Numbers become floats, `null` becomes the "no value" sentinel and nested
/// objects become nested groups. Arrays are not supported.
pub fn from_json(json: &Value) -> Result<Values, ConfigError> {
    match json {
        Value::Object(map) => object_to_values(map, ""),
        _ => Err(ConfigError::NotAnObject),
    }
}

fn object_to_values(map: &Map<String, Value>, prefix: &str) -> Result<Values, ConfigError> {
    let mut values = Values::new();
    for (name, json) in map {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}/{}", prefix, name)
        };
        let entry = match json {
            Value::Object(nested) => ValueEntry::Group(object_to_values(nested, &path)?),
            Value::Number(n) => match n.as_f64() {
                Some(v) => ValueEntry::Value(ParamValue::Float(v)),
                None => return Err(ConfigError::UnsupportedValue { path }),
            },
            Value::Bool(v) => ValueEntry::Value(ParamValue::Bool(*v)),
            Value::String(v) => ValueEntry::Value(ParamValue::Text(v.clone())),
            Value::Null => ValueEntry::Value(ParamValue::None),
            Value::Array(_) => return Err(ConfigError::UnsupportedValue { path }),
        };
        values.insert(name.clone(), entry);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Values {
        Values::new()
            .with("PID Controller", Values::new().with("Kp", 2.0).with("Ki", 0.5))
            .with("Enabled", true)
            .with("Mode", "band")
            .with("Reset", ParamValue::None)
    }

    #[test]
    fn test_to_json() {
        assert_eq!(
            to_json(&sample()),
            json!({
                "PID Controller": { "Kp": 2.0, "Ki": 0.5 },
                "Enabled": true,
                "Mode": "band",
                "Reset": null
            })
        );
    }

    #[test]
    fn test_key_order_is_preserved() {
        let values = Values::new().with("zeta", 1.0).with("alpha", 2.0).with("mid", 3.0);
        let text = serde_json::to_string(&to_json(&values)).unwrap();
        assert_eq!(text, r#"{"zeta":1.0,"alpha":2.0,"mid":3.0}"#);

        let parsed: Value = serde_json::from_str(&text).unwrap();
        let decoded = from_json(&parsed).unwrap();
        assert_eq!(decoded.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_from_json() {
        let json = json!({
            "PID Controller": { "Kp": 2, "Ki": 0.5 },
            "Enabled": true,
            "Mode": "band",
            "Reset": null
        });
        assert_eq!(from_json(&json).unwrap(), sample());
    }

    #[test]
    fn test_non_finite_float_becomes_null() {
        let values = Values::new().with("x", f64::INFINITY);
        assert_eq!(to_json(&values), json!({ "x": null }));
    }

    #[test]
    fn test_rejects_arrays_and_non_objects() {
        let err = from_json(&json!({ "Filter": { "Taps": [1, 2, 3] } })).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedValue { ref path } if path == "Filter/Taps"));

        assert!(matches!(from_json(&json!([1, 2])), Err(ConfigError::NotAnObject)));
        assert!(matches!(from_json(&json!(3.0)), Err(ConfigError::NotAnObject)));
    }
}
