//! Parse Module
//!
//! HTML5-compliant template parsing into the element IR the resolver works on.
//! Tag and attribute names come out lowercased, exactly as a browser DOM
//! would hand them to the compiler.

use html5ever::parse_document;
use lazy_static::lazy_static;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use regex::Regex;
use tendril::TendrilSink;

use crate::error::{CompilerError, ERR_PARSE};
use crate::ir::{
    AttributeIR, CommentNode, ElementNode, SourceLocation, TemplateIR, TemplateNode, TextNode,
};
use crate::resolver::Resolution;

lazy_static! {
    /// `<MyWidget />` and `<my-widget/>`. Plain HTML void tags are left alone.
    static ref SELF_CLOSING_RE: Regex =
        Regex::new(r#"<([A-Z][A-Za-z0-9.]*|[a-z][a-z0-9]*-[A-Za-z0-9-]*)(\s(?:"[^"]*"|'[^']*'|[^<>"'])*?)?\s*/>"#)
            .unwrap();
}

// ═══════════════════════════════════════════════════════════════════════════════
// PRE-PASSES
// ═══════════════════════════════════════════════════════════════════════════════

/// Convert self-closing component tags to properly closed tags.
/// html5ever treats `<my-widget />` as an opening tag, which would nest every
/// following sibling inside it.
fn convert_self_closing_components(html: &str) -> String {
    SELF_CLOSING_RE
        .replace_all(html, "<${1}${2}></${1}>")
        .to_string()
}

// ═══════════════════════════════════════════════════════════════════════════════
// NODE PARSING
// ═══════════════════════════════════════════════════════════════════════════════

fn parse_dom_node(handle: &Handle) -> Vec<TemplateNode> {
    match &handle.data {
        NodeData::Text { contents } => {
            let text = contents.borrow().to_string();
            if text.trim().is_empty() {
                return vec![];
            }
            vec![TemplateNode::Text(TextNode {
                value: text,
                location: SourceLocation { line: 1, column: 1 },
            })]
        }

        NodeData::Comment { contents } => vec![TemplateNode::Comment(CommentNode {
            value: contents.to_string(),
            location: SourceLocation { line: 1, column: 1 },
        })],

        NodeData::Element {
            name,
            attrs,
            template_contents,
            ..
        } => {
            let attributes = attrs
                .borrow()
                .iter()
                .map(|attr| AttributeIR {
                    name: attr.name.local.to_string(),
                    value: attr.value.to_string(),
                    location: SourceLocation { line: 1, column: 1 },
                })
                .collect();

            // <template> keeps its content in a separate fragment
            let mut children = Vec::new();
            if let Some(fragment) = template_contents.borrow().as_ref() {
                for child in fragment.children.borrow().iter() {
                    children.extend(parse_dom_node(child));
                }
            }
            for child in handle.children.borrow().iter() {
                children.extend(parse_dom_node(child));
            }

            vec![TemplateNode::Element(ElementNode {
                tag: name.local.to_string(),
                attributes,
                children,
                location: SourceLocation { line: 1, column: 1 },
                resolution: Resolution::None,
            })]
        }

        NodeData::Document
        | NodeData::Doctype { .. }
        | NodeData::ProcessingInstruction { .. } => vec![],
    }
}

/// Walk the parsed document, flattening the `html`/`head`/`body` wrappers
/// html5ever inserts unless the source wrote them itself.
fn collect_body_content(handle: &Handle, nodes: &mut Vec<TemplateNode>, has_html_in_src: bool) {
    match &handle.data {
        NodeData::Document => {
            for child in handle.children.borrow().iter() {
                collect_body_content(child, nodes, has_html_in_src);
            }
        }
        NodeData::Element { name, .. } => {
            let tag = name.local.to_string();
            let is_wrapper = tag == "html" || tag == "head" || tag == "body";
            if is_wrapper && !has_html_in_src {
                for child in handle.children.borrow().iter() {
                    collect_body_content(child, nodes, has_html_in_src);
                }
            } else {
                nodes.extend(parse_dom_node(handle));
            }
        }
        NodeData::Text { .. } | NodeData::Comment { .. } => {
            nodes.extend(parse_dom_node(handle));
        }
        _ => {}
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// MAIN PARSING FUNCTION
// ═══════════════════════════════════════════════════════════════════════════════

/// Parse template from HTML string
pub fn parse_template(html: &str, file_path: &str) -> Result<TemplateIR, CompilerError> {
    let expanded = convert_self_closing_components(html);

    let dom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut expanded.as_bytes())
        .map_err(|e| {
            CompilerError::new(
                ERR_PARSE,
                &format!("Failed to parse HTML: {}", e),
                file_path,
                0,
                0,
            )
        })?;

    let has_html_in_src = html.to_lowercase().contains("<html");
    let mut nodes = Vec::new();
    collect_body_content(&dom.document, &mut nodes, has_html_in_src);

    Ok(TemplateIR {
        raw: html.to_string(),
        nodes,
    })
}
