//! Node-definition input types.
//!
//! A definition is the caller-supplied value a node assembler is constructed
//! from. Definitions are plain data: they parse from the host system's JSON
//! and are validated once, at node construction time.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::ConfigurationError;
use crate::model::is_legal_id;

/// Maps an input-variable name to the namespace of the upstream node that
/// produces it. Ordered so that its canonical JSON encoding is deterministic.
pub type NamespaceMap = BTreeMap<String, String>;

/// Configuration bundle for a run-ingestion-pipeline node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestionPipelineConfig {
    /// Whether the executor blocks until the pipeline reports completion.
    pub wait_for_completion: bool,
    /// Wall-clock bound on the wait, in seconds. Must be non-negative.
    pub timeout_seconds: i64,
}

/// Definition of a single run-ingestion-pipeline node.
///
/// The `name` doubles as the sub-process id and as the namespace every
/// derived element id is prefixed with, so it must be unique within the
/// enclosing workflow and legal in the engine's id space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunIngestionPipelineTaskDefinition {
    pub name: String,
    pub config: IngestionPipelineConfig,
    #[serde(default)]
    pub input_namespace_map: NamespaceMap,
}

impl RunIngestionPipelineTaskDefinition {
    /// Checks the construction-time preconditions.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.name.is_empty() {
            return Err(ConfigurationError::EmptyNodeName);
        }
        if !is_legal_id(&self.name) {
            return Err(ConfigurationError::IllegalNodeName {
                name: self.name.clone(),
            });
        }
        if self.config.timeout_seconds < 0 {
            return Err(ConfigurationError::NegativeTimeout(
                self.config.timeout_seconds,
            ));
        }
        Ok(())
    }

    /// Renders the input namespace map in its canonical textual encoding,
    /// the same JSON form used across the host system. An empty map renders
    /// as `{}`.
    pub fn encoded_namespace_map(&self) -> Result<String, ConfigurationError> {
        serde_json::to_string(&self.input_namespace_map).map_err(|e| {
            ConfigurationError::NamespaceMapEncoding {
                cause: e.to_string(),
            }
        })
    }
}
