//! JSON Schema (Draft-07) for `.justify/targets.json`.

use serde_json::{json, Value};

/// Generates the registry file schema for editor validation.
pub struct SchemaGenerator;

impl SchemaGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate the complete schema document.
    pub fn generate(&self) -> Value {
        json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "title": "justify targets",
            "description": "Debug/run targets for a project",
            "type": "object",
            "properties": {
                "version": {
                    "type": ["integer", "null"],
                    "minimum": 0,
                    "default": 1,
                    "description": "Registry format version (0 is read as 1)"
                },
                "targets": {
                    "type": ["array", "null"],
                    "items": self.target_schema()
                }
            }
        })
    }

    fn target_schema(&self) -> Value {
        json!({
            "type": "object",
            "required": ["name", "kind", "program"],
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Unique target name"
                },
                "kind": {
                    "type": "string",
                    "enum": ["rust", "go", "cpp", "node"]
                },
                "program": {
                    "type": "string",
                    "description": "Program path, or \"attach:node\" to attach to a dev server"
                },
                "cwd": { "type": "string" },
                "args": {
                    "type": "array",
                    "items": { "type": "string" }
                },
                "env": {
                    "type": "object",
                    "additionalProperties": { "type": "string" }
                },
                "request": {
                    "type": "string",
                    "enum": ["launch", "attach"],
                    "default": "launch"
                },
                "port": {
                    "type": "integer",
                    "minimum": 0,
                    "maximum": 65535,
                    "description": "Debugger port (0 means unset)"
                }
            }
        })
    }
}

impl Default for SchemaGenerator {
    fn default() -> Self {
        Self::new()
    }
}
