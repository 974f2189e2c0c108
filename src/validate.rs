//! Schema gate in front of every write
//!
//! Validation fails closed: an unreadable schema is as fatal as a
//! document that does not match it.

use std::fs;
use std::path::Path;

use jsonschema::JSONSchema;
use serde_json::Value;
use tracing::{debug, error};

use crate::document::LocaleDataDocument;
use crate::error::{ExemplarError, Result};

/// Compiled JSON Schema for [`LocaleDataDocument`]
pub struct SchemaValidator {
    compiled: JSONSchema,
}

impl SchemaValidator {
    /// Read and compile a schema file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let load_error = |reason: String| ExemplarError::SchemaLoad {
            path: path.display().to_string(),
            reason,
        };

        let content = fs::read_to_string(path).map_err(|e| load_error(e.to_string()))?;
        let schema: Value = serde_json::from_str(&content).map_err(|e| load_error(e.to_string()))?;
        let compiled = JSONSchema::compile(&schema).map_err(|e| load_error(e.to_string()))?;

        debug!(path = %path.display(), "Compiled schema");
        Ok(Self { compiled })
    }

    /// Compile an in-memory schema
    pub fn from_value(schema: &Value) -> Result<Self> {
        let compiled = JSONSchema::compile(schema).map_err(|e| ExemplarError::SchemaLoad {
            path: "<inline>".to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { compiled })
    }

    pub fn validate(&self, document: &LocaleDataDocument) -> Result<()> {
        self.validate_value(&document.to_value()?)
    }

    /// Check arbitrary JSON against the schema, collecting every violation
    pub fn validate_value(&self, instance: &Value) -> Result<()> {
        if let Err(errors) = self.compiled.validate(instance) {
            let messages: Vec<String> = errors
                .map(|e| format!("{} (at {})", e, e.instance_path))
                .collect();
            for message in &messages {
                error!(%message, "Schema violation");
            }
            return Err(ExemplarError::SchemaViolation(messages));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collects_all_violations() {
        let validator = SchemaValidator::from_value(&json!({
            "type": "object",
            "required": ["a", "b"],
            "properties": { "a": { "type": "string" }, "b": { "type": "string" } }
        }))
        .unwrap();

        assert!(validator.validate_value(&json!({"a": "x", "b": "y"})).is_ok());
        match validator.validate_value(&json!({"a": 1})) {
            Err(ExemplarError::SchemaViolation(messages)) => assert_eq!(messages.len(), 2),
            other => panic!("Expected SchemaViolation, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_schema_file() {
        let err = SchemaValidator::load("does/not/exist/schema.json").err().unwrap();
        assert!(matches!(err, ExemplarError::SchemaLoad { .. }));
        assert!(err.is_schema_error());
    }

    #[test]
    fn test_unparseable_schema_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(SchemaValidator::load(&path), Err(ExemplarError::SchemaLoad { .. })));
    }
}
