//! Reading SVG documents into `Element` trees.

use kstring::KString;
use roxmltree::ParsingOptions;

use crate::markup::{Element, Node};

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[derive(thiserror::Error, Debug)]
pub enum SvgError {
    #[error("SVG parsing error: {0}")]
    Parse(#[from] roxmltree::Error),
    #[error("no svg element in the SVG namespace")]
    NoSvgRoot,
}

/// Parse `text` and return the first `svg` element in the SVG
/// namespace (in document order), with everything below it. The
/// namespace declarations in scope there become `xmlns` attributes
/// in front of its own attributes; descendants get the declarations
/// they add or rebind. Comments and processing instructions are
/// dropped.
pub fn parse_svg_root(text: &str) -> Result<Element, SvgError> {
    let opt = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = roxmltree::Document::parse_with_options(text, opt)?;
    let root = doc.descendants()
        .find(|n| n.has_tag_name((SVG_NS, "svg")))
        .ok_or(SvgError::NoSvgRoot)?;
    Ok(convert_element(root, None))
}

/// The namespaces in scope at `node` that are not in scope, with the
/// same binding, at `parent`.
fn namespace_attrs(
    node: roxmltree::Node,
    parent: Option<roxmltree::Node>
) -> Vec<(KString, KString)> {
    let inherited = |name: Option<&str>, uri: &str| match parent {
        Some(parent) => parent.namespaces().any(|ns| ns.name() == name && ns.uri() == uri),
        None => false,
    };
    let mut attr = Vec::new();
    for ns in node.namespaces() {
        if inherited(ns.name(), ns.uri()) {
            continue;
        }
        match ns.name() {
            // Implicitly bound, never declared.
            Some("xml") => (),
            Some(prefix) => attr.push((KString::from_string(format!("xmlns:{prefix}")),
                                       KString::from_ref(ns.uri()))),
            None => attr.push((KString::from_static("xmlns"),
                               KString::from_ref(ns.uri()))),
        }
    }
    attr
}

fn qualified_name(node: roxmltree::Node, namespace: Option<&str>, local: &str) -> KString {
    match namespace.and_then(|uri| node.lookup_prefix(uri)) {
        Some(prefix) if !prefix.is_empty() =>
            KString::from_string(format!("{prefix}:{local}")),
        _ => KString::from_ref(local),
    }
}

/// `parent` is `None` for the returned root, which declares every
/// namespace in scope.
fn convert_element(node: roxmltree::Node, parent: Option<roxmltree::Node>) -> Element {
    let tag = node.tag_name();
    let tag_name = qualified_name(node, tag.namespace(), tag.name());
    let mut attr = namespace_attrs(node, parent);
    attr.extend(node.attributes()
                .map(|a| (qualified_name(node, a.namespace(), a.name()),
                          KString::from_ref(a.value()))));
    let body = node.children()
        .filter_map(|child| {
            if child.is_element() {
                Some(Node::Element(convert_element(child, Some(node))))
            } else if child.is_text() {
                child.text().map(Node::text)
            } else {
                None
            }
        })
        .collect::<Vec<_>>();
    Element::new(&tag_name, attr, body)
}
