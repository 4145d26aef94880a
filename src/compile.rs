//! Compile pass: parse a template, then resolve every element exactly once,
//! parent before children, recording the outcome on the element for codegen.

use rayon::prelude::*;

use crate::error::CompilerError;
use crate::ir::{TemplateIR, TemplateNode};
use crate::options::CompileOptions;
use crate::parse::parse_template;
use crate::resolver::TagResolver;

pub fn compile_template(
    html: &str,
    file_path: &str,
    options: &CompileOptions,
    resolver: &TagResolver,
) -> Result<TemplateIR, CompilerError> {
    let mut ir = parse_template(html, file_path)?;
    resolve_nodes(&mut ir.nodes, options, resolver);
    tracing::debug!(
        file = file_path,
        components = ir.components().len(),
        "compiled template"
    );
    Ok(ir)
}

/// Compile independent templates in parallel. Results keep input order.
pub fn compile_templates(
    sources: &[(String, String)],
    options: &CompileOptions,
    resolver: &TagResolver,
) -> Vec<Result<TemplateIR, CompilerError>> {
    sources
        .par_iter()
        .map(|(file_path, html)| compile_template(html, file_path, options, resolver))
        .collect()
}

/// Pre-order walk over an already parsed tree.
pub fn resolve_nodes(nodes: &mut [TemplateNode], options: &CompileOptions, resolver: &TagResolver) {
    for node in nodes.iter_mut() {
        if let TemplateNode::Element(el) = node {
            el.resolution = resolver.resolve(el, options);
            resolve_nodes(&mut el.children, options, resolver);
        }
    }
}
