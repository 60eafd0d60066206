use crate::error::{Error, Result};
use serde_json::Value;
use std::fmt::Display;

/// Shape of the value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Optional free text, `null` when unanswered.
    Text,
    /// Yes/no answer.
    Flag,
    /// Ordered list of strings.
    List,
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FieldKind::Text => "string or null",
            FieldKind::Flag => "boolean",
            FieldKind::List => "array of strings",
        };
        write!(f, "{s}")
    }
}

/// One row of the field table: the token name and the kind of value behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// Conversion between a field's Rust type and its JSON representation.
pub trait AnswerValue: Sized {
    const KIND: FieldKind;

    fn to_value(&self) -> Value;

    /// Converts a decoded JSON value into the field type, coercing where the
    /// intent is unambiguous.
    ///
    /// # Arguments
    /// * `field` - Token name, used in the error message
    /// * `value` - Decoded JSON value
    fn from_value(field: &str, value: Value) -> Result<Self>;
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn invalid<T: AnswerValue>(field: &str, found: &Value) -> Error {
    Error::InvalidAnswer {
        field: field.to_string(),
        expected: T::KIND.to_string(),
        found: json_type_name(found).to_string(),
    }
}

impl AnswerValue for Option<String> {
    const KIND: FieldKind = FieldKind::Text;

    fn to_value(&self) -> Value {
        match self {
            Some(s) => Value::String(s.clone()),
            None => Value::Null,
        }
    }

    fn from_value(field: &str, value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s)),
            // e.g. `"copyrightYear": 2024`
            Value::Number(n) => Ok(Some(n.to_string())),
            other => Err(invalid::<Self>(field, &other)),
        }
    }
}

impl AnswerValue for bool {
    const KIND: FieldKind = FieldKind::Flag;

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(field: &str, value: Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            Value::String(ref s) if s == "true" => Ok(true),
            Value::String(ref s) if s == "false" => Ok(false),
            other => Err(invalid::<Self>(field, &other)),
        }
    }
}

impl AnswerValue for Vec<String> {
    const KIND: FieldKind = FieldKind::List;

    fn to_value(&self) -> Value {
        Value::Array(self.iter().cloned().map(Value::String).collect())
    }

    fn from_value(field: &str, value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Vec::new()),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s),
                    other => Err(Error::InvalidAnswer {
                        field: field.to_string(),
                        expected: Self::KIND.to_string(),
                        found: format!("array containing {}", json_type_name(&other)),
                    }),
                })
                .collect(),
            other => Err(invalid::<Self>(field, &other)),
        }
    }
}
