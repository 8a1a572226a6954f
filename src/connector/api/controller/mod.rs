pub mod custom_activity_controller;
pub mod ideas_controller;
pub mod team_dynamics_controller;

pub use custom_activity_controller::CustomActivityController;
pub use ideas_controller::IdeasController;
pub use team_dynamics_controller::TeamDynamicsController;

use crate::domain::{DomainError, StructuredData};

/// Parse a command-line JSON argument that must be an object.
pub(crate) fn parse_structured_data(
    input: &str,
    field: &str,
) -> Result<StructuredData, DomainError> {
    let value: serde_json::Value = serde_json::from_str(input)
        .map_err(|e| DomainError::invalid_input(format!("{field} is not valid JSON: {e}")))?;

    match value {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(DomainError::invalid_input(format!(
            "{field} must be a JSON object, got {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
