//! 函数模式派生
//! Function schema derivation
//!
//! Turns a structural self-description (title, description, properties, …)
//! into the `{name, description, parameters}` record a tool-calling API
//! consumes. Pure; caching lives in the [`Action`](crate::Action) contract.

use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Function schema record advertised to an LLM tool-calling API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionSchema {
    /// 函数名称 (唯一标识符)
    /// Function name (unique identifier)
    pub name: String,
    /// 函数描述 (用于 LLM 理解)
    /// Function description (for LLM understanding)
    pub description: String,
    /// 参数 JSON Schema
    /// Parameters JSON Schema
    pub parameters: Value,
}

/// Top-level keys lifted out of the self-description rather than copied
/// into `parameters`.
const LIFTED_KEYS: [&str; 2] = ["title", "description"];

/// Derive a [`FunctionSchema`] from a structural self-description.
///
/// The input is the schema a structural-validation layer produces for an
/// action's input shape: a JSON object carrying at least a `title` and a
/// `description`, alongside the usual JSON-Schema keys (`type`,
/// `properties`, `required`, …).
///
/// `name` and `description` are lifted from the top level; every other key
/// is shallow-copied into `parameters` unchanged. Per-property `title` keys
/// are left in place.
///
/// # Errors
///
/// [`SchemaError::NotAnObject`] if the input is not a JSON object;
/// [`SchemaError::MissingField`] if `title` or `description` is absent or
/// not a string.
pub fn derive_schema(description: &Value) -> Result<FunctionSchema, SchemaError> {
    let object = description.as_object().ok_or(SchemaError::NotAnObject)?;

    let name = object
        .get("title")
        .and_then(Value::as_str)
        .ok_or(SchemaError::MissingField("title"))?;
    let doc = object
        .get("description")
        .and_then(Value::as_str)
        .ok_or(SchemaError::MissingField("description"))?;

    let parameters: Map<String, Value> = object
        .iter()
        .filter(|(key, _)| !LIFTED_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Ok(FunctionSchema {
        name: name.to_string(),
        description: doc.to_string(),
        parameters: Value::Object(parameters),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sleep_description() -> Value {
        json!({
            "title": "Sleep",
            "description": "Pause for a number of seconds.",
            "type": "object",
            "properties": {
                "duration": {
                    "title": "Duration",
                    "type": "integer",
                    "description": "Time to sleep in seconds"
                }
            },
            "required": ["duration"]
        })
    }

    #[test]
    fn lifts_title_and_description() {
        let schema = derive_schema(&sleep_description()).unwrap();
        assert_eq!(schema.name, "Sleep");
        assert_eq!(schema.description, "Pause for a number of seconds.");
    }

    #[test]
    fn parameters_exclude_top_level_title_and_description() {
        let schema = derive_schema(&sleep_description()).unwrap();
        let params = schema.parameters.as_object().unwrap();
        assert!(!params.contains_key("title"));
        assert!(!params.contains_key("description"));
        assert_eq!(params["type"], json!("object"));
        assert_eq!(params["required"], json!(["duration"]));
    }

    #[test]
    fn per_property_titles_are_preserved() {
        let schema = derive_schema(&sleep_description()).unwrap();
        assert_eq!(
            schema.parameters["properties"]["duration"]["title"],
            json!("Duration")
        );
    }

    #[test]
    fn missing_title_is_an_error() {
        let description = json!({"description": "No name here.", "type": "object"});
        assert_eq!(
            derive_schema(&description),
            Err(SchemaError::MissingField("title"))
        );
    }

    #[test]
    fn missing_description_is_an_error() {
        let description = json!({"title": "Nameless", "type": "object"});
        assert_eq!(
            derive_schema(&description),
            Err(SchemaError::MissingField("description"))
        );
    }

    #[test]
    fn non_object_input_is_an_error() {
        assert_eq!(derive_schema(&json!([1, 2])), Err(SchemaError::NotAnObject));
        assert_eq!(derive_schema(&json!(null)), Err(SchemaError::NotAnObject));
    }

    #[test]
    fn record_round_trips_through_serde() {
        let schema = derive_schema(&sleep_description()).unwrap();
        let wire = serde_json::to_value(&schema).unwrap();
        assert_eq!(wire["name"], "Sleep");
        let back: FunctionSchema = serde_json::from_value(wire).unwrap();
        assert_eq!(back, schema);
    }
}
