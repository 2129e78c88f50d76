//! JSON helpers.
//!
//! Thin wrappers over `serde_json`. [`from_json_onto`] rebuilds a value on top
//! of a base value: fields the JSON names replace the base's, the rest are
//! kept.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::errors::JsonError;

pub fn to_json<T: Serialize>(value: &T) -> Result<String, JsonError> {
    Ok(serde_json::to_string(value)?)
}

pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, JsonError> {
    Ok(serde_json::from_str(json)?)
}

/// Deserializes `json` onto `base`. Both must be JSON objects.
///
/// # Examples
///
/// ```rust
/// use cssel::json::from_json_onto;
/// use cssel::shapes::Rectangle;
/// let base = Rectangle::new(1.0, 1.0);
/// let r: Rectangle = from_json_onto(&base, r#"{"width": 5}"#).unwrap();
/// assert_eq!(r, Rectangle::new(5.0, 1.0));
/// ```
pub fn from_json_onto<T>(base: &T, json: &str) -> Result<T, JsonError>
where
    T: Serialize + DeserializeOwned,
{
    let Value::Object(mut fields) = serde_json::to_value(base)? else {
        return Err(JsonError::NotAnObject {
            role: "base",
            found: "a non-object value",
        });
    };
    match serde_json::from_str::<Value>(json)? {
        Value::Object(patch) => fields.extend(patch),
        other => {
            return Err(JsonError::NotAnObject {
                role: "input",
                found: json_type_name(&other),
            })
        }
    }
    Ok(serde_json::from_value(Value::Object(fields))?)
}

fn json_type_name(value: &Value) -> &'static str {
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
    use crate::shapes::Rectangle;

    #[test]
    fn to_json_writes_fields() {
        let json = to_json(&Rectangle::new(2.0, 3.0)).unwrap();
        assert_eq!(json, r#"{"width":2.0,"height":3.0}"#);
    }

    #[test]
    fn from_json_reads_fields() {
        let r: Rectangle = from_json(r#"{"width":2,"height":3}"#).unwrap();
        assert_eq!(r.area(), 6.0);
    }

    #[test]
    fn from_json_onto_keeps_missing_fields() {
        let base = Rectangle::new(1.0, 7.0);
        let r = from_json_onto(&base, r#"{"width":3}"#).unwrap();
        assert_eq!(r, Rectangle::new(3.0, 7.0));
    }

    #[test]
    fn from_json_onto_rejects_non_objects() {
        let err = from_json_onto(&Rectangle::default(), "[1, 2]").unwrap_err();
        assert!(matches!(
            err,
            JsonError::NotAnObject {
                role: "input",
                found: "an array"
            }
        ));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = from_json::<Rectangle>("{width:").unwrap_err();
        assert!(matches!(err, JsonError::Malformed(_)));
    }
}
