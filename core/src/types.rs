//! The record type handed to renderers.
//!
//! # Design
//! The server owns the schema. `TodoRecord` wraps whatever JSON value came
//! back without looking inside it, so a field added on the server shows up
//! in the renderer with no change here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One opaque item of the fetched list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoRecord(Value);

impl TodoRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Field lookup for object-shaped records. `None` for missing keys and
    /// for records that are not objects.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for TodoRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
