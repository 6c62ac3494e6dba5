//! Self-description bridge for `schemars`-derived input shapes.
//!
//! The core contract only consumes a structural self-description as a
//! `serde_json::Value`; this module produces one from any type deriving
//! `schemars::JsonSchema`, so action input shapes can be declared as plain
//! structs with doc comments.

use schemars::{schema_for, JsonSchema};
use serde_json::Value;

/// Produce the structural self-description of `T`.
///
/// The generator's own `$schema` and `definitions` keys are dropped; the
/// remaining object matches the deriver's input contract: `title` from the
/// type name, `description` from the type's doc comment, and `properties`
/// carrying the per-field metadata.
pub fn self_description_of<T: JsonSchema>() -> Value {
    let mut description = serde_json::to_value(schema_for!(T)).unwrap_or(Value::Null);
    if let Some(object) = description.as_object_mut() {
        object.remove("$schema");
        object.remove("definitions");
    }
    description
}
