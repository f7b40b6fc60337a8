//! Task file types
//!
//! This module defines the data structures that represent a `_tasks.yml` file
//! exactly as it is written on disk. They are turned into a [`Config`] by
//! [`finalize`](crate::config::finalize).
//!
//! [`Config`]: crate::config::Config

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Top-level task file structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TaskFile {
    /// Tasks keyed by name
    #[serde(default)]
    pub tasks: BTreeMap<String, TaskDefinition>,

    /// Variables visible to every template
    #[serde(
        default,
        skip_serializing_if = "HashMap::is_empty",
        deserialize_with = "deserialize_variables"
    )]
    pub variables: HashMap<String, String>,

    /// Runner settings
    #[serde(default)]
    pub config: SettingsBlock,
}

/// A task definition
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TaskDefinition {
    /// Help text, may contain placeholders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// A single shell command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Shell command lines run in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pipeline: Vec<String>,
}

/// The `config` block
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SettingsBlock {
    /// Placeholder delimiters, `[open, close]`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub delimiters: Vec<String>,

    /// Interpreter used to run commands (e.g., ["bash", "-c"])
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpreter: Option<Vec<String>>,

    /// Whether command strings go through the template renderer
    #[serde(rename = "render-commands", default = "default_render_commands")]
    pub render_commands: bool,
}

impl Default for SettingsBlock {
    fn default() -> Self {
        SettingsBlock {
            delimiters: Vec::new(),
            interpreter: None,
            render_commands: default_render_commands(),
        }
    }
}

fn default_render_commands() -> bool {
    true
}

/// Custom deserializer for variables that accepts any scalar value
fn deserialize_variables<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    use serde_yaml::Value;

    let value = Value::deserialize(deserializer)?;

    match value {
        Value::Mapping(map) => {
            let mut vars = HashMap::new();
            for (key, value) in map {
                let key = scalar_to_string(key)
                    .ok_or_else(|| D::Error::custom("variable names must be scalars"))?;
                let value = scalar_to_string(value).ok_or_else(|| {
                    D::Error::custom(format!("variable '{}' must be a scalar value", key))
                })?;
                vars.insert(key, value);
            }
            Ok(vars)
        }
        // Null or not present
        Value::Null => Ok(HashMap::new()),
        _ => Err(D::Error::custom("variables must be a mapping")),
    }
}

fn scalar_to_string(value: serde_yaml::Value) -> Option<String> {
    use serde_yaml::Value;

    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        _ => None,
    }
}
