//! Component registry.
//!
//! Ids are looked up as written,
//! then camelized, then capitalized, so `my-widget` finds a component registered
//! as `myWidget` or `MyWidget`.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::CompilerError;
use crate::tags::{is_common_tag, is_reserved_tag};

lazy_static! {
    static ref CAMELIZE_RE: Regex = Regex::new(r"-(\w)").unwrap();
    static ref HYPHENATE_RE: Regex = Regex::new(r"([^-])([A-Z])").unwrap();
}

// ═══════════════════════════════════════════════════════════════════════════════
// LOOKUP CAPABILITY
// ═══════════════════════════════════════════════════════════════════════════════

/// Registry capability consumed by the resolver. Any `Some` counts as found;
/// the descriptor contents are not inspected during resolution.
pub trait ComponentLookup {
    fn lookup(&self, id: &str) -> Option<&ComponentDescriptor>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDescriptor {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub path: String,
}

impl ComponentDescriptor {
    pub fn new(name: &str, path: &str) -> Self {
        ComponentDescriptor {
            name: name.to_string(),
            path: path.to_string(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// REGISTRY
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "HashMap<String, ComponentDescriptor>",
    into = "HashMap<String, ComponentDescriptor>"
)]
pub struct ComponentRegistry {
    components: HashMap<String, ComponentDescriptor>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `id`. Built-in and reserved tag names are refused since a
    /// template could never reach them.
    pub fn register(
        &mut self,
        id: &str,
        descriptor: ComponentDescriptor,
    ) -> Result<(), CompilerError> {
        if is_common_tag(id) || is_reserved_tag(id) {
            return Err(CompilerError::reserved_component_id(id));
        }
        self.components.insert(id.to_string(), descriptor);
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lookup(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(|k| k.as_str())
    }

    /// Lowercase-without-hyphens id to the kebab-case form a template should
    /// use. Only feeds the mis-cased tag warning.
    pub fn component_name_map(&self) -> HashMap<String, String> {
        self.components
            .keys()
            .map(|id| (id.replace('-', "").to_lowercase(), hyphenate(id)))
            .collect()
    }
}

impl ComponentLookup for ComponentRegistry {
    fn lookup(&self, id: &str) -> Option<&ComponentDescriptor> {
        if let Some(found) = self.components.get(id) {
            return Some(found);
        }
        let camelized = camelize(id);
        if let Some(found) = self.components.get(&camelized) {
            return Some(found);
        }
        self.components.get(&capitalize(&camelized))
    }
}

impl From<HashMap<String, ComponentDescriptor>> for ComponentRegistry {
    fn from(map: HashMap<String, ComponentDescriptor>) -> Self {
        let mut registry = ComponentRegistry::new();
        for (id, descriptor) in map {
            if let Err(e) = registry.register(&id, descriptor) {
                tracing::warn!(id = id.as_str(), "{}", e.message);
            }
        }
        registry
    }
}

impl From<ComponentRegistry> for HashMap<String, ComponentDescriptor> {
    fn from(registry: ComponentRegistry) -> Self {
        registry.components
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// NAME CASING
// ═══════════════════════════════════════════════════════════════════════════════

/// `my-widget` → `myWidget`
pub fn camelize(s: &str) -> String {
    CAMELIZE_RE
        .replace_all(s, |caps: &regex::Captures| caps[1].to_uppercase())
        .to_string()
}

/// `myWidget` → `MyWidget`
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `MyWidget` → `my-widget`
pub fn hyphenate(s: &str) -> String {
    // Twice, so runs of capitals ("ABWidget") split on every letter.
    let once = HYPHENATE_RE.replace_all(s, "$1-$2");
    HYPHENATE_RE.replace_all(&once, "$1-$2").to_lowercase()
}
