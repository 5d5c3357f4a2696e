// Readers for parsed object content returned by the JSON-RPC `showContent`
// option. Nested structs arrive as `{ "type": ..., "fields": { ... } }`,
// integers wider than 32 bits as strings, and `UID` as `{ "id": "0x.." }`.

use msend_types::{ObjectId, StructTag};
use serde_json::Value;

use crate::error::{BindingError, Result};

/// `type` and `fields` of a parsed struct value.
pub fn struct_parts(item: &Value) -> Result<(StructTag, &Value)> {
    let type_str = item
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| BindingError::field("type", "missing or not a string"))?;
    let fields = item
        .get("fields")
        .ok_or_else(|| BindingError::field("fields", "missing"))?;
    Ok((type_str.parse()?, fields))
}

/// Unwrap `{ "type", "fields" }` when present, otherwise the value itself.
pub fn unwrap_fields(value: &Value) -> &Value {
    value.get("fields").unwrap_or(value)
}

pub fn field<'a>(fields: &'a Value, name: &str) -> Result<&'a Value> {
    fields
        .get(name)
        .ok_or_else(|| BindingError::field(name, "missing"))
}

pub fn u64_value(value: &Value, name: &str) -> Result<u64> {
    match value {
        Value::String(s) => s
            .parse()
            .map_err(|_| BindingError::field(name, format!("`{}` is not a u64", s))),
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| BindingError::field(name, format!("`{}` is not a u64", n))),
        other => Err(BindingError::field(name, format!("expected u64, got {}", other))),
    }
}

pub fn u64_field(fields: &Value, name: &str) -> Result<u64> {
    u64_value(field(fields, name)?, name)
}

/// An object id held either as a bare string or as a `UID` wrapper.
pub fn id_value(value: &Value, name: &str) -> Result<ObjectId> {
    let value = unwrap_fields(value);
    let literal = match value {
        Value::String(s) => s.as_str(),
        Value::Object(map) => map
            .get("id")
            .map(unwrap_fields)
            .and_then(|inner| match inner {
                Value::String(s) => Some(s.as_str()),
                Value::Object(inner) => inner.get("bytes").and_then(Value::as_str),
                _ => None,
            })
            .ok_or_else(|| BindingError::field(name, "expected an object id"))?,
        other => return Err(BindingError::field(name, format!("expected id, got {}", other))),
    };
    literal
        .parse()
        .map_err(|_| BindingError::field(name, format!("`{}` is not an object id", literal)))
}
