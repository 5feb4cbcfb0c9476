//! JSON view of a property list.
//!
//! A property list maps onto a flat JSON object. Scalars travel as the
//! matching JSON scalar, dates and timestamps as strings, and a tagged value
//! as the two-member object `{"tag": .., "value": ..}`. Nothing else nests:
//! arrays and any other objects are rejected.

use serde_json::{Map, Number, Value as Json};

use crate::error::{RecmapError, Result};
use crate::value::Value;

const TAG: &str = "tag";
const VALUE: &str = "value";

pub fn value_to_json(value: &Value) -> Json {
    match value {
        Value::Null => Json::Null,
        Value::Bool(b) => Json::Bool(*b),
        Value::Integer(i) => Json::Number(Number::from(*i)),
        // NaN and infinities have no JSON form
        Value::Float(x) => Number::from_f64(*x).map(Json::Number).unwrap_or(Json::Null),
        Value::String(s) => Json::String(s.clone()),
        Value::Date(d) => Json::String(d.to_string()),
        Value::DateTime(d) => Json::String(d.to_string()),
        Value::Tagged(tag, inner) => {
            let mut object = Map::new();
            object.insert(TAG.to_owned(), Json::String(tag.clone()));
            object.insert(VALUE.to_owned(), value_to_json(inner));
            Json::Object(object)
        }
    }
}

pub fn value_from_json(json: &Json) -> Result<Value> {
    match json {
        Json::Null => Ok(Value::Null),
        Json::Bool(b) => Ok(Value::Bool(*b)),
        Json::Number(n) => match n.as_i64() {
            Some(i) => Ok(Value::Integer(i)),
            None => n
                .as_f64()
                .map(Value::Float)
                .ok_or_else(|| RecmapError::Json(format!("number {} is out of range", n))),
        },
        Json::String(s) => Ok(Value::String(s.clone())),
        Json::Object(object) => match (object.len(), object.get(TAG), object.get(VALUE)) {
            (2, Some(Json::String(tag)), Some(inner)) => Ok(Value::tagged(tag.clone(), value_from_json(inner)?)),
            _ => Err(RecmapError::Json(format!("nested object {} is not a tagged value", json))),
        },
        Json::Array(_) => Err(RecmapError::Json(format!("arrays are not supported: {}", json))),
    }
}

/// Builds a JSON object from a property list. A repeated name keeps its
/// first position and its last value.
pub fn to_object<I>(properties: I) -> Map<String, Json>
where
    I: IntoIterator<Item = (String, Value)>,
{
    properties
        .into_iter()
        .map(|(name, value)| (name, value_to_json(&value)))
        .collect()
}

/// Reads the members of a JSON object as a property list, in document order.
pub fn from_object(json: &Json) -> Result<Vec<(String, Value)>> {
    let object = json
        .as_object()
        .ok_or_else(|| RecmapError::Json(format!("expected an object, found {}", json)))?;
    object
        .iter()
        .map(|(name, member)| -> Result<(String, Value)> { Ok((name.clone(), value_from_json(member)?)) })
        .collect()
}

pub fn to_string<I>(properties: I) -> Result<String>
where
    I: IntoIterator<Item = (String, Value)>,
{
    Ok(serde_json::to_string(&Json::Object(to_object(properties)))?)
}

pub fn from_str(text: &str) -> Result<Vec<(String, Value)>> {
    let json: Json = serde_json::from_str(text)?;
    from_object(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_and_tags() {
        assert_eq!(value_to_json(&Value::from(5)), json!(5));
        assert_eq!(value_to_json(&Value::Float(f64::NAN)), Json::Null);
        assert_eq!(
            value_to_json(&Value::tagged("s", "Netherlands")),
            json!({"tag": "s", "value": "Netherlands"})
        );
        assert_eq!(
            value_from_json(&json!({"tag": "s", "value": 1})).unwrap(),
            Value::tagged("s", 1)
        );
        assert_eq!(value_from_json(&json!(2.5)).unwrap(), Value::Float(2.5));
    }

    #[test]
    fn rejects_nesting() {
        assert!(value_from_json(&json!([1, 2])).is_err());
        assert!(value_from_json(&json!({"a": 1})).is_err());
        assert!(from_object(&json!("flat")).is_err());
    }

    #[test]
    fn object_keeps_document_order() {
        let properties = from_str(r#"{"name": "Netherlands", "country_code": "NL", "population": 17}"#).unwrap();
        let names: Vec<&str> = properties.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["name", "country_code", "population"]);
        assert_eq!(properties[2].1, Value::Integer(17));
    }

    #[test]
    fn repeated_names_keep_last_value() {
        let object = to_object(vec![
            ("a".to_string(), Value::from(1)),
            ("b".to_string(), Value::from(2)),
            ("a".to_string(), Value::from(3)),
        ]);
        assert_eq!(Json::Object(object), json!({"a": 3, "b": 2}));
    }

    #[test]
    fn malformed_text_is_a_json_error() {
        let err = from_str("{not json").unwrap_err();
        assert!(matches!(err, RecmapError::Json(_)));
    }
}
