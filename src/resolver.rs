//! Tag Resolution
//!
//! Decides, once per element and before codegen, whether an element is plain
//! markup or a component, and if a component whether its identity is known now
//! (`Static`) or only at runtime (`Dynamic`).
//!
//! ## Decision order
//!
//! 1. Tags outside the native and reserved tables are looked up in the
//!    registry. A miss falls back to the `is` override, then to `None`.
//! 2. Native and reserved tags are only ever components through `is`, and only
//!    when they carry attributes at all.
//!
//! A literal `is` naming a registered component is consumed (removed from the
//! element) so later attribute passes do not see it again. That is the only
//! mutation performed here.

use serde::{Deserialize, Serialize};

use crate::binding::get_bind_attr;
use crate::diagnostics::{TracingSink, Warning, WarningSink};
use crate::host::{ElementHeuristic, Html5Heuristic};
use crate::ir::ElementNode;
use crate::options::CompileOptions;
use crate::registry::ComponentLookup;
use crate::tags::{classify_tag, TagCategory};

const IS_ATTR: &str = "is";

// ═══════════════════════════════════════════════════════════════════════════════
// RESOLUTION
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "camelCase")]
pub enum Resolution {
    /// Plain markup, or an unresolved custom tag.
    #[default]
    None,
    /// Component id known at compile time.
    Static(String),
    /// Component chosen at runtime by evaluating this expression.
    Dynamic(String),
}

impl Resolution {
    pub fn is_component(&self) -> bool {
        !matches!(self, Resolution::None)
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, Resolution::Dynamic(_))
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Resolution::None => None,
            Resolution::Static(id) | Resolution::Dynamic(id) => Some(id),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// RESOLVER
// ═══════════════════════════════════════════════════════════════════════════════

/// Resolver over an injected warning sink and host heuristic.
#[derive(Clone, Copy)]
pub struct TagResolver<'a> {
    sink: &'a dyn WarningSink,
    host: &'a dyn ElementHeuristic,
}

impl Default for TagResolver<'static> {
    fn default() -> Self {
        TagResolver {
            sink: &TracingSink,
            host: &Html5Heuristic,
        }
    }
}

impl<'a> TagResolver<'a> {
    pub fn new(sink: &'a dyn WarningSink, host: &'a dyn ElementHeuristic) -> Self {
        TagResolver { sink, host }
    }

    pub fn with_sink(sink: &'a dyn WarningSink) -> Self {
        TagResolver {
            sink,
            host: &Html5Heuristic,
        }
    }

    /// Resolve `element` against the registry carried by `options`.
    pub fn resolve(&self, element: &mut ElementNode, options: &CompileOptions) -> Resolution {
        self.resolve_with(element, &options.components, options)
    }

    /// Resolve `element` against an arbitrary registry.
    ///
    /// Only resolution consults `registry`. The mis-cased tag hint still comes
    /// from `options.component_name_map`, so callers injecting their own lookup
    /// supply the matching map there (or leave it `None`).
    pub fn resolve_with(
        &self,
        element: &mut ElementNode,
        registry: &dyn ComponentLookup,
        options: &CompileOptions,
    ) -> Resolution {
        let tag = element.tag.to_lowercase();
        if tag.is_empty() {
            return Resolution::None;
        }
        let has_attrs = element.has_attributes();

        let resolution = match classify_tag(&tag) {
            TagCategory::Custom => {
                if registry.lookup(&tag).is_some() {
                    Resolution::Static(tag.clone())
                } else {
                    let is = if has_attrs {
                        is_binding(element, registry, options)
                    } else {
                        None
                    };
                    match is {
                        Some(resolution) => resolution,
                        None => {
                            if options.diagnostics {
                                self.report_unknown(&tag, element, options);
                            }
                            Resolution::None
                        }
                    }
                }
            }
            TagCategory::Native | TagCategory::Reserved if !has_attrs => Resolution::None,
            TagCategory::Native | TagCategory::Reserved => {
                is_binding(element, registry, options).unwrap_or_default()
            }
        };

        tracing::debug!(tag = tag.as_str(), ?resolution, "resolved tag");
        resolution
    }

    fn report_unknown(&self, tag: &str, element: &ElementNode, options: &CompileOptions) {
        let expected = options
            .component_name_map
            .as_ref()
            .and_then(|map| map.get(tag));

        if let Some(expected) = expected {
            self.sink.warn(
                Warning::MisCasedComponent {
                    tag: tag.to_string(),
                    expected: expected.clone(),
                },
                &element.location,
            );
        } else if self.host.is_unknown_element(tag) {
            self.sink.warn(
                Warning::UnknownElement {
                    tag: tag.to_string(),
                },
                &element.location,
            );
        }
    }
}

/// The `is` override. A literal value wins over a bound one, and an
/// unregistered literal hides the bound form entirely.
fn is_binding(
    element: &mut ElementNode,
    registry: &dyn ComponentLookup,
    options: &CompileOptions,
) -> Option<Resolution> {
    if let Some(literal) = element.get_attribute(IS_ATTR) {
        if literal.is_empty() || registry.lookup(literal).is_none() {
            return None;
        }
        let id = literal.to_string();
        element.remove_attribute(IS_ATTR);
        return Some(Resolution::Static(id));
    }

    get_bind_attr(element, IS_ATTR, &options.bind_prefixes)
        .map(|expr| Resolution::Dynamic(expr.to_string()))
}
