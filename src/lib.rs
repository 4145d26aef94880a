//! # Component tag resolution
//!
//! Classifies every element of a parsed template before codegen:
//!
//! - **Native / reserved** tags (`div`, `slot`, ...) stay plain markup unless
//!   an `is` attribute overrides their type.
//! - **Custom** tags resolve to a registered component, else fall back to the
//!   `is` override, else stay unresolved (with a developer warning).
//!
//! The outcome is a [`Resolution`]: `None`, `Static(id)` for an identity known
//! at compile time, or `Dynamic(expr)` for one chosen at runtime.

#[cfg(feature = "napi")]
use napi_derive::napi;

mod binding;
mod compile;
mod diagnostics;
mod discovery;
mod error;
mod host;
mod ir;
mod options;
mod parse;
mod registry;
mod resolver;
mod tags;

#[cfg(test)]
mod discovery_tests;
#[cfg(test)]
mod registry_tests;

pub use binding::get_bind_attr;
pub use compile::{compile_template, compile_templates, resolve_nodes};
pub use diagnostics::{CollectingSink, NullSink, TracingSink, Warning, WarningSink};
pub use discovery::{discover_components, DiscoveryOptions};
pub use error::CompilerError;
pub use host::{ElementHeuristic, Html5Heuristic, PermissiveHeuristic};
pub use ir::{
    AttributeIR, CommentNode, ElementNode, SourceLocation, TemplateIR, TemplateNode, TextNode,
};
pub use options::CompileOptions;
pub use parse::parse_template;
pub use registry::{ComponentDescriptor, ComponentLookup, ComponentRegistry};
pub use resolver::{Resolution, TagResolver};
pub use tags::{classify_tag, is_common_tag, is_reserved_tag, TagCategory};

// ═══════════════════════════════════════════════════════════════════════════════
// NATIVE BRIDGE
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(feature = "napi")]
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Resolve one element given as JSON. Returns `{ resolution, element }` so the
/// caller sees whether a literal `is` was consumed.
#[cfg(feature = "napi")]
#[napi]
pub fn resolve_tag_native(element_json: String, options_json: String) -> napi::Result<String> {
    let mut element: ElementNode = serde_json::from_str(&element_json).map_err(to_napi_error)?;
    let options = CompileOptions::from_json(&options_json).map_err(to_napi_error)?;

    let resolution = TagResolver::default().resolve(&mut element, &options);

    serde_json::to_string(&serde_json::json!({
        "resolution": resolution,
        "element": element,
    }))
    .map_err(to_napi_error)
}

#[cfg(feature = "napi")]
#[napi]
pub fn compile_template_native(
    html: String,
    file_path: String,
    options_json: String,
) -> napi::Result<String> {
    let options = CompileOptions::from_json(&options_json).map_err(to_napi_error)?;
    let ir = compile_template(&html, &file_path, &options, &TagResolver::default())
        .map_err(to_napi_error)?;
    serde_json::to_string(&ir).map_err(to_napi_error)
}

#[cfg(feature = "napi")]
#[napi]
pub fn discover_components_native(base_dir: String) -> napi::Result<String> {
    let registry = discover_components(
        std::path::Path::new(&base_dir),
        &DiscoveryOptions::default(),
    )
    .map_err(to_napi_error)?;
    serde_json::to_string(&registry).map_err(to_napi_error)
}
