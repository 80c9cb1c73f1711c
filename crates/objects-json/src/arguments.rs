use std::collections::VecDeque;

use objects_common::warning::warn_once;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::JsonError;

/// The positional values of a parsed JSON document, in encoding order.
///
/// An object contributes its values (keys are dropped), an array its
/// elements. Scalars contribute nothing.
#[derive(Debug, Clone, Default)]
pub struct Arguments {
    values: VecDeque<Value>,
    position: usize,
}

impl Arguments {
    /// Flatten a parsed document into positional values.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        let values = match value {
            Value::Object(map) => map.into_values().collect(),
            Value::Array(items) => items.into(),
            scalar => {
                warn_once(
                    "JSON",
                    &format!("top-level {} has no positional values", describe(&scalar)),
                );
                VecDeque::new()
            }
        };
        Self {
            values,
            position: 0,
        }
    }

    /// Take the next positional value and convert it to `A`.
    ///
    /// Running past the end behaves like an omitted argument: the conversion
    /// sees `null`, so `Option` parameters come out as `None`.
    ///
    /// # Errors
    ///
    /// Returns [`JsonError::Argument`] if the value cannot be converted.
    pub fn take<A: DeserializeOwned>(&mut self) -> Result<A, JsonError> {
        let position = self.position;
        self.position += 1;
        let value = self.values.pop_front().unwrap_or(Value::Null);
        serde_json::from_value(value).map_err(|source| JsonError::Argument { position, source })
    }

    /// Number of values not yet taken.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether every value has been taken.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Position of the next value to be taken.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Drop whatever the constructor did not consume.
    pub(crate) fn finish(self) {
        if !self.values.is_empty() {
            warn_once(
                "JSON",
                &format!(
                    "ignoring {} surplus positional value(s) after position {}",
                    self.values.len(),
                    self.position
                ),
            );
        }
    }
}

const fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
