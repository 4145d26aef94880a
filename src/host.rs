//! Host-environment element heuristics.
//!
//! Used only to decide whether an unresolved custom tag deserves the
//! "did you register the component" warning. Never affects resolution.

use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    /// Elements a browser constructs as something other than `HTMLUnknownElement`.
    static ref KNOWN_ELEMENTS: HashSet<&'static str> = {
        let html: &[&str] = &[
            "html", "head", "body", "base", "link", "meta", "style", "title", "script",
            "noscript", "template", "address", "article", "aside", "footer", "header",
            "h1", "h2", "h3", "h4", "h5", "h6", "hgroup", "main", "nav", "section",
            "search", "blockquote", "dd", "div", "dl", "dt", "figcaption", "figure", "hr",
            "li", "menu", "ol", "p", "pre", "ul", "a", "abbr", "b", "bdi", "bdo", "br",
            "cite", "code", "dfn", "em", "i", "kbd", "mark", "q", "rp", "rt", "ruby", "s",
            "samp", "small", "span", "strong", "sub", "sup", "u", "var", "wbr", "area",
            "audio", "img", "map", "track", "video", "embed", "iframe", "object", "param",
            "picture", "portal", "source", "canvas", "del", "ins", "caption", "col",
            "colgroup", "table", "tbody", "td", "tfoot", "th", "thead", "tr", "button",
            "datalist", "fieldset", "form", "input", "label", "legend", "meter",
            "optgroup", "option", "output", "progress", "select", "textarea", "slot",
            "acronym", "applet", "basefont", "big", "blink", "center", "dir", "font",
            "frame", "frameset", "marquee", "nobr", "noembed", "noframes", "plaintext",
            "strike", "tt", "xmp", "listing", "image", "keygen", "menuitem",
        ];
        let svg: &[&str] = &[
            "svg", "path", "circle", "ellipse", "line", "polyline", "polygon", "rect",
            "g", "defs", "use", "symbol", "clippath", "mask", "pattern", "marker",
            "lineargradient", "radialgradient", "stop", "filter", "foreignobject",
            "switch", "text", "tspan", "textpath", "desc", "metadata", "view", "animate",
            "animatemotion", "animatetransform", "set", "mpath",
        ];
        let mathml: &[&str] = &[
            "math", "mi", "mn", "mo", "ms", "mspace", "mtext", "mrow", "mfrac", "msqrt",
            "mroot", "mstyle", "merror", "mpadded", "mphantom", "msub", "msup",
            "msubsup", "munder", "mover", "munderover", "mtable", "mtr", "mtd",
            "semantics", "annotation",
        ];
        html.iter().chain(svg).chain(mathml).copied().collect()
    };

    /// Real HTML5 elements some engines still report as unknown.
    static ref UNKNOWN_EXEMPT: HashSet<&'static str> =
        ["data", "time", "rtc", "rb", "details", "dialog", "summary"]
            .into_iter()
            .collect();
}

/// Decides whether a host would treat `tag` as an element it does not know.
pub trait ElementHeuristic: Send + Sync {
    fn is_unknown_element(&self, tag: &str) -> bool;
}

/// Browser-like behavior: a hyphenated tag is an unregistered custom element,
/// anything else is unknown unless it is a standard HTML, SVG or MathML element.
#[derive(Debug, Clone, Copy, Default)]
pub struct Html5Heuristic;

impl ElementHeuristic for Html5Heuristic {
    fn is_unknown_element(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        if tag.contains('-') {
            return true;
        }
        !KNOWN_ELEMENTS.contains(tag.as_str()) && !UNKNOWN_EXEMPT.contains(tag.as_str())
    }
}

/// For hosts without an element model; never flags anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveHeuristic;

impl ElementHeuristic for PermissiveHeuristic {
    fn is_unknown_element(&self, _tag: &str) -> bool {
        false
    }
}
