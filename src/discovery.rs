//! Discovery Module
//!
//! Recursively scans a directory for component files and builds the registry
//! the resolver consults. Each file registers under its file stem, plus the
//! `name` its script declares, so recursive components can refer to themselves.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{CompilerError, ERR_DISCOVERY};
use crate::registry::{ComponentDescriptor, ComponentRegistry};

lazy_static! {
    static ref SCRIPT_RE: Regex = Regex::new(r"(?is)<script\b[^>]*>([\s\S]*?)</script>").unwrap();
    static ref NAME_OPTION_RE: Regex =
        Regex::new(r#"\bname\s*:\s*(?:"([^"]+)"|'([^']+)')"#).unwrap();
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiscoveryOptions {
    /// File extensions (without the dot) treated as components.
    pub extensions: Vec<String>,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        DiscoveryOptions {
            extensions: vec!["vue".to_string()],
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// COMPONENT DISCOVERY
// ═══════════════════════════════════════════════════════════════════════════════

/// Discover all components under `base_dir`. A missing directory yields an
/// empty registry; unreadable files and reserved ids are skipped.
pub fn discover_components(
    base_dir: &Path,
    options: &DiscoveryOptions,
) -> Result<ComponentRegistry, CompilerError> {
    let mut registry = ComponentRegistry::new();
    if !base_dir.exists() {
        return Ok(registry);
    }
    if !base_dir.is_dir() {
        return Err(CompilerError::new(
            ERR_DISCOVERY,
            "Discovery root is not a directory",
            &base_dir.to_string_lossy(),
            0,
            0,
        ));
    }

    for file_path in find_component_files(base_dir, &options.extensions) {
        let source = match fs::read_to_string(&file_path) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(path = %file_path.display(), "Failed to read component: {}", e);
                continue;
            }
        };

        let Some(stem) = file_path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let path_str = file_path.to_string_lossy().to_string();

        let mut ids = vec![stem.to_string()];
        if let Some(declared) = declared_name(&source) {
            if declared != stem {
                ids.push(declared);
            }
        }

        for id in ids {
            let descriptor = ComponentDescriptor::new(&id, &path_str);
            if let Err(e) = registry.register(&id, descriptor) {
                tracing::warn!(path = path_str.as_str(), "{}", e.message);
            }
        }
    }

    Ok(registry)
}

/// Recursively find all files with one of `extensions` in a directory
fn find_component_files(dir: &Path, extensions: &[String]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| extensions.iter().any(|e| e == ext))
                .unwrap_or(false)
        })
        .collect();
    // Deterministic registration order when two files share a stem
    files.sort();
    files
}

/// The `name: '...'` option from the component's script block, if any.
fn declared_name(source: &str) -> Option<String> {
    let script = SCRIPT_RE.captures(source)?.get(1)?.as_str();
    let caps = NAME_OPTION_RE.captures(script)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().to_string())
}
