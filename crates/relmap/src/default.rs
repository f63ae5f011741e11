use crate::{NativeType, Value};

use relmap_core::schema::DefaultValue;

/// Maps a raw column default onto a literal of the field's native type.
///
/// Returns `None` when the default has no safe representation in that type;
/// the field is then generated without a default. The returned literal
/// always matches `native`.
pub fn coerce_default(raw: &DefaultValue, native: NativeType) -> Option<Value> {
    match native {
        NativeType::Array => match raw {
            DefaultValue::List(items) => Some(Value::List(items.iter().map(literal).collect())),
            _ => None,
        },
        NativeType::Boolean => match raw {
            DefaultValue::Bool(value) => Some(Value::Bool(*value)),
            _ => None,
        },
        NativeType::Integer => match raw {
            DefaultValue::Int(value) => Some(Value::I64(*value)),
            DefaultValue::String(value) if is_integer(value) => Some(integer(value)),
            _ => None,
        },
        NativeType::Float => match raw {
            DefaultValue::Int(value) => Some(Value::F64(*value as f64)),
            DefaultValue::Float(value) => Some(Value::F64(*value)),
            DefaultValue::String(value) if is_integer(value) => value.parse().ok().map(Value::F64),
            _ => None,
        },
        NativeType::String => Some(Value::String(render(raw))),
        NativeType::Object | NativeType::DateTime | NativeType::Other => None,
    }
}

/// Matches `^-?\d+$`
fn is_integer(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// `value` must match `^-?\d+$`.
fn integer(value: &str) -> Value {
    match value.parse() {
        Ok(value) => Value::I64(value),
        Err(_) => Value::BigInt(value.to_string()),
    }
}

fn literal(raw: &DefaultValue) -> Value {
    match raw {
        DefaultValue::Bool(value) => Value::Bool(*value),
        DefaultValue::Int(value) => Value::I64(*value),
        DefaultValue::Float(value) => Value::F64(*value),
        DefaultValue::String(value) => Value::String(value.clone()),
        DefaultValue::List(items) => Value::List(items.iter().map(literal).collect()),
    }
}

fn render(raw: &DefaultValue) -> String {
    match raw {
        DefaultValue::Bool(value) => value.to_string(),
        DefaultValue::Int(value) => value.to_string(),
        DefaultValue::Float(value) => value.to_string(),
        DefaultValue::String(value) => value.clone(),
        DefaultValue::List(items) => items.iter().map(render).collect::<Vec<_>>().join(","),
    }
}
