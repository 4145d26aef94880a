use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::CompilerError;
use crate::registry::ComponentRegistry;

/// Compile-time configuration. Immutable while a template is being resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompileOptions {
    pub components: ComponentRegistry,
    /// Lowercase tag → correctly cased component name, used for warning text.
    pub component_name_map: Option<HashMap<String, String>>,
    /// Emit developer warnings. Off in release builds unless asked for.
    pub diagnostics: bool,
    /// Attribute-name prefixes that mark a bound (runtime) attribute.
    pub bind_prefixes: Vec<String>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            components: ComponentRegistry::default(),
            component_name_map: None,
            diagnostics: cfg!(debug_assertions),
            bind_prefixes: vec![":".to_string(), "v-bind:".to_string()],
        }
    }
}

impl CompileOptions {
    /// Options over `components`, with the case-correction map derived from it.
    pub fn with_components(components: ComponentRegistry) -> Self {
        let component_name_map = Some(components.component_name_map());
        CompileOptions {
            components,
            component_name_map,
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, CompilerError> {
        let mut options: CompileOptions = serde_json::from_str(json)
            .map_err(|e| CompilerError::invalid_options(&format!("Invalid options: {}", e)))?;
        if options.component_name_map.is_none() && options.diagnostics {
            options.component_name_map = Some(options.components.component_name_map());
        }
        Ok(options)
    }

    pub fn diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics = enabled;
        self
    }
}
