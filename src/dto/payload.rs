use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::errors::AppError;

/// A JSON object request body with field-level typed access.
#[derive(Debug, Clone, Default)]
pub struct Payload {
    fields: Map<String, Value>,
}

impl Payload {
    pub fn from_json(body: Value) -> Result<Self, AppError> {
        match body {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(AppError::invalid_shape("request body must be a JSON object")),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// The key must be present. For nullable columns ask for `Option<T>`,
    /// which accepts an explicit `null`.
    pub fn required<T: DeserializeOwned>(&self, field: &str) -> Result<T, AppError> {
        match self.fields.get(field) {
            Some(value) => parse(field, value),
            None => Err(AppError::MissingField {
                field: field.to_string(),
            }),
        }
    }

    /// `None` when the key is absent. `optional::<Option<T>>` yields
    /// `Some(None)` for an explicit `null`.
    pub fn optional<T: DeserializeOwned>(&self, field: &str) -> Result<Option<T>, AppError> {
        self.fields
            .get(field)
            .map(|value| parse(field, value))
            .transpose()
    }

    /// Reject any key not in `allowed`.
    pub fn only(&self, allowed: &[&str]) -> Result<(), AppError> {
        match self.fields.keys().find(|key| !allowed.contains(&key.as_str())) {
            Some(key) => Err(AppError::InvalidField { field: key.clone() }),
            None => Ok(()),
        }
    }
}

fn parse<T: DeserializeOwned>(field: &str, value: &Value) -> Result<T, AppError> {
    T::deserialize(value)
        .map_err(|e| AppError::invalid_shape(format!("invalid value for `{field}`: {e}")))
}
