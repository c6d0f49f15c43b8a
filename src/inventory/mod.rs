pub mod catalog;
pub mod normalize;

pub use catalog::{payload_key, LibraryCatalog, NOT_INSTALLED};
pub use normalize::normalize;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CheckError;

/// Host inventory snapshot as returned by `/sysinfo/check`.
///
/// Kept as a raw JSON object: any field may be absent or of an unexpected
/// type, and unknown keys are preserved for `--json` output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventoryPayload(Map<String, Value>);

impl InventoryPayload {
    /// Parse a response body. Anything but a JSON object is rejected.
    pub fn from_json(body: &str) -> Result<Self, CheckError> {
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            Ok(other) => Err(CheckError::parse(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
            Err(e) => Err(CheckError::parse(e.to_string())),
        }
    }

    /// Top-level value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Value nested one level down, e.g. `field("cpu", "brand")`
    pub fn field(&self, group: &str, key: &str) -> Option<&Value> {
        self.0.get(group)?.as_object()?.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for InventoryPayload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
