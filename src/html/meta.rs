//! Element metadata for printing and for runtime DOM verification.

use std::collections::HashMap;

use kstring::KString;
use lazy_static::lazy_static;

/// Elements that never take a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link",
    "meta", "source", "track", "wbr",
];

/// Flow content containers; these allow any child element and text.
const FLOW_ELEMENTS: &[&str] = &[
    "a", "div", "span", "header", "footer", "main", "nav", "section",
    "li", "p", "h1", "h2", "h3", "h4", "td", "th", "strong", "em", "small",
];

// (tag, permitted child elements, allows text)
const RESTRICTED_ELEMENTS: &[(&str, &[&str], bool)] = &[
    ("ul", &["li", "script", "template"], false),
    ("ol", &["li", "script", "template"], false),
    ("table", &["caption", "colgroup", "thead", "tbody", "tfoot", "tr"], false),
    ("thead", &["tr"], false),
    ("tbody", &["tr"], false),
    ("tr", &["td", "th"], false),
    ("title", &[], true),
];

// SVG elements we generate ourselves. Elements parsed from icon
// assets are not looked up here, they are never verified.
const SVG_ELEMENTS: &[&str] = &[
    "svg", "path", "circle", "rect", "line", "polyline", "polygon", "g",
];

#[derive(Debug)]
pub struct ElementMeta {
    pub tag_name: KString,
    pub has_closing_tag: bool,
    pub allows_child_text: bool,
    /// `None` means any element is allowed as a child.
    pub child_elements: Option<Vec<KString>>,
}

impl ElementMeta {
    pub fn allows_child_element(&self, tag_name: &str) -> bool {
        match &self.child_elements {
            None => true,
            Some(allowed) => allowed.iter().any(|a| a.as_str() == tag_name),
        }
    }
}

impl PartialEq for ElementMeta {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.tag_name == other.tag_name
    }
}

impl Eq for ElementMeta {}

#[derive(Debug)]
pub struct MetaDb {
    pub elementmeta: HashMap<KString, ElementMeta>,
}

impl MetaDb {
    pub fn get(&self, tag_name: &str) -> Option<&ElementMeta> {
        self.elementmeta.get(tag_name)
    }

    /// Unknown tags (e.g. from parsed SVG) are printed with a closing
    /// tag.
    pub fn has_closing_tag(&self, tag_name: &str) -> bool {
        self.get(tag_name).map(|m| m.has_closing_tag).unwrap_or(true)
    }
}

fn build_meta_db() -> MetaDb {
    let mut elementmeta = HashMap::new();
    let mut add = |tag_name: &str,
                   has_closing_tag: bool,
                   allows_child_text: bool,
                   child_elements: Option<&[&str]>| {
        elementmeta.insert(
            KString::from_ref(tag_name),
            ElementMeta {
                tag_name: KString::from_ref(tag_name),
                has_closing_tag,
                allows_child_text,
                child_elements: child_elements.map(
                    |v| v.iter().map(|s| KString::from_ref(s)).collect()),
            });
    };
    for tag in VOID_ELEMENTS {
        add(*tag, false, false, Some(&[]));
    }
    for tag in FLOW_ELEMENTS {
        add(*tag, true, true, None);
    }
    for (tag, children, text) in RESTRICTED_ELEMENTS {
        add(*tag, true, *text, Some(*children));
    }
    for tag in SVG_ELEMENTS {
        add(*tag, true, false, None);
    }
    MetaDb { elementmeta }
}

lazy_static!{
    pub static ref METADB: MetaDb = build_meta_db();
}
