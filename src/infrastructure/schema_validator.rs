use anyhow::{anyhow, Result};
use jsonschema::{Draft, JSONSchema};
use once_cell::sync::Lazy;
use serde_json::Value;

static CALCULATE_REQUEST_SCHEMA: Lazy<JSONSchema> = Lazy::new(|| {
    let schema_content = include_str!("../../schemas/calculate_request_schema.json");
    let schema: Value =
        serde_json::from_str(schema_content).expect("Invalid calculate request schema");
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema)
        .expect("Failed to compile calculate request schema")
});

/// Validate a calculate payload: `{ "edges": [[str|null, str|null], ...] }`.
///
/// `null` endpoints pass; rejecting them is the graph's job.
pub fn validate_calculate_request(payload: &Value) -> Result<()> {
    match CALCULATE_REQUEST_SCHEMA.validate(payload) {
        Ok(()) => Ok(()),
        Err(errors) => {
            let error_list: Vec<String> = errors.map(|e| e.to_string()).collect();
            Err(anyhow!(
                "Calculate request validation failed:\n{}",
                error_list.join("\n")
            ))
        }
    }
}
