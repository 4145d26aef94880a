use serde::{Deserialize, Serialize};

use crate::resolver::Resolution;

// ═══════════════════════════════════════════════════════════════════════════════
// IR TYPES
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SourceLocation {
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum TemplateNode {
    Element(ElementNode),
    Text(TextNode),
    Comment(CommentNode),
}

/// An element as produced by the template parser.
///
/// The tag keeps whatever casing the parser delivered; the resolver
/// lowercases it before classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementNode {
    pub tag: String,
    #[serde(default)]
    pub attributes: Vec<AttributeIR>,
    #[serde(default)]
    pub children: Vec<TemplateNode>,
    #[serde(default)]
    pub location: SourceLocation,
    /// Filled in by the compile pass.
    #[serde(default)]
    pub resolution: Resolution,
}

impl ElementNode {
    pub fn new(tag: &str) -> Self {
        ElementNode {
            tag: tag.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
            location: SourceLocation::default(),
            resolution: Resolution::None,
        }
    }

    /// Builder-style helper, mostly for tests and the native bridge.
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.push(AttributeIR {
            name: name.to_string(),
            value: value.to_string(),
            location: self.location.clone(),
        });
        self
    }

    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }

    /// Literal attribute lookup by exact name. Bound forms (`:is`) are
    /// distinct attributes and never match here.
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Removing an absent attribute is a no-op.
    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.retain(|a| a.name != name);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeIR {
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextNode {
    pub value: String,
    #[serde(default)]
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentNode {
    pub value: String,
    #[serde(default)]
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateIR {
    pub raw: String,
    pub nodes: Vec<TemplateNode>,
}

impl TemplateIR {
    /// Every element that resolved to a component, in document order.
    pub fn components(&self) -> Vec<(&str, &Resolution)> {
        fn collect<'a>(nodes: &'a [TemplateNode], out: &mut Vec<(&'a str, &'a Resolution)>) {
            for node in nodes {
                if let TemplateNode::Element(el) = node {
                    if el.resolution.is_component() {
                        out.push((el.tag.as_str(), &el.resolution));
                    }
                    collect(&el.children, out);
                }
            }
        }

        let mut out = Vec::new();
        collect(&self.nodes, &mut out);
        out
    }
}
