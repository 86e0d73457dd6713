//! Owned HTML node tree, serialization, and optional runtime checks
//! of the element structure.

use std::{fmt::{self, Display},
          io::Write};

use anyhow::{Result, bail};
use kstring::KString;

use crate::{html::meta::{MetaDb, METADB},
            myfrom::MyFrom};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum MarkupError {
    #[error("unknown element \"{0}\"")]
    UnknownElement(KString),
    #[error("content value #{index}: element \"{child}\" not allowed as a child of \
             element \"{parent}\"")]
    ChildElementNotAllowed { index: usize, child: KString, parent: KString },
    #[error("content value #{index}: text is not allowed as a child of element \"{parent}\"")]
    TextNotAllowed { index: usize, parent: KString },
}

/// Markup that is already serialized and escaped, e.g. a rendered
/// component or an icon read from disk. Printed verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeHtml(KString);

impl SafeHtml {
    /// The caller vouches for `s` being well-formed, escaped HTML.
    pub fn from_trusted<T>(s: T) -> Self
    where KString: MyFrom<T>
    {
        SafeHtml(KString::myfrom(s))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_blank(&self) -> bool {
        all_whitespace(self.0.as_str())
    }
}

impl Display for SafeHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

fn all_whitespace(s: &str) -> bool {
    s.chars().all(|c| c.is_whitespace())
}

/// A string value counts as present if it contains anything but
/// whitespace.
pub fn is_present(s: Option<&str>) -> bool {
    match s {
        Some(s) => !all_whitespace(s),
        None => false,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    String(KString),
    Preserialized(SafeHtml),
    /// Transparent; flattened into the body of the element it is
    /// placed in.
    Fragment(Vec<Node>),
    None,
}

impl Node {
    pub fn text<T>(s: T) -> Node
    where KString: MyFrom<T>
    {
        Node::String(KString::myfrom(s))
    }

    /// Blank nodes are left out by components that only emit a
    /// wrapper when there is content.
    pub fn is_blank(&self) -> bool {
        match self {
            Node::Element(_) => false,
            Node::String(s) => all_whitespace(s.as_str()),
            Node::Preserialized(s) => s.is_blank(),
            Node::Fragment(v) => v.iter().all(Node::is_blank),
            Node::None => true,
        }
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::text(s)
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::text(s)
    }
}

impl From<SafeHtml> for Node {
    fn from(s: SafeHtml) -> Self {
        Node::Preserialized(s)
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Node::Element(e)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag_name: KString,
    pub attr: Vec<(KString, KString)>,
    pub body: Vec<Node>,
}

impl Element {
    /// Unverified construction; see `HtmlBuilder::element` for the
    /// checked variant.
    pub fn new(
        tag_name: &str,
        attr: impl ToAttributes,
        body: impl ToBody
    ) -> Element {
        let mut flat = Vec::new();
        for node in body.to_body() {
            push_flat(&mut flat, node);
        }
        Element {
            tag_name: KString::from_ref(tag_name),
            attr: attr.to_attributes(),
            body: flat,
        }
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attr.iter().find(|(k, _)| k.as_str() == key).map(|(_, v)| v.as_str())
    }

    /// Replace the value of an existing attribute of the same name
    /// (keeping its position), or append it.
    pub fn set_attr<K, V>(&mut self, key: K, val: V)
    where KString: MyFrom<K> + MyFrom<V>
    {
        let key = KString::myfrom(key);
        let val = KString::myfrom(val);
        if let Some(slot) = self.attr.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = val;
        } else {
            self.attr.push((key, val));
        }
    }

    /// Like `set_attr`, but an existing attribute whose name differs
    /// only in ASCII case is replaced, too, and takes the new
    /// spelling. Any further case variants are removed.
    pub fn set_attr_ignore_ascii_case<K, V>(&mut self, key: K, val: V)
    where KString: MyFrom<K> + MyFrom<V>
    {
        let key = KString::myfrom(key);
        let val = KString::myfrom(val);
        let mut replaced = false;
        self.attr.retain_mut(|(k, v)| {
            if k.as_str().eq_ignore_ascii_case(key.as_str()) {
                if replaced {
                    return false
                }
                *k = key.clone();
                *v = val.clone();
                replaced = true;
            }
            true
        });
        if !replaced {
            self.attr.push((key, val));
        }
    }
}

fn push_flat(out: &mut Vec<Node>, node: Node) {
    match node {
        Node::Fragment(nodes) => {
            for n in nodes {
                push_flat(out, n);
            }
        }
        Node::None => (),
        n => out.push(n),
    }
}

fn ks<T>(s: T) -> KString
where KString: MyFrom<T>
{
    KString::myfrom(s)
}

pub fn att<T, U>(key: T, val: U) -> Option<(KString, KString)>
    where KString: MyFrom<T> + MyFrom<U>
{
    Some((ks(key), ks(val)))
}

pub fn opt_att<T, U>(key: T, val: Option<U>) -> Option<(KString, KString)>
    where KString: MyFrom<T> + MyFrom<U>
{
    val.map(|val| (ks(key), ks(val)))
}

pub trait ToAttributes {
    fn to_attributes(self) -> Vec<(KString, KString)>;
}

// Values returned by `att` and `opt_att`:
impl<const N: usize> ToAttributes for [Option<(KString, KString)>; N] {
    fn to_attributes(self) -> Vec<(KString, KString)> {
        self.into_iter().flatten().collect()
    }
}

impl ToAttributes for Vec<(KString, KString)> {
    fn to_attributes(self) -> Vec<(KString, KString)> {
        self
    }
}

pub trait ToBody {
    fn to_body(self) -> Vec<Node>;
}

impl<const N: usize> ToBody for [Node; N] {
    fn to_body(self) -> Vec<Node> {
        self.into_iter().collect()
    }
}

impl ToBody for Vec<Node> {
    fn to_body(self) -> Vec<Node> {
        self
    }
}

impl ToBody for Node {
    fn to_body(self) -> Vec<Node> {
        vec![self]
    }
}

pub trait TryCollectBody {
    fn try_collect_body(&mut self) -> Result<Vec<Node>>;
}

impl<I: Iterator<Item = Result<Node>>> TryCollectBody for I {
    fn try_collect_body(&mut self) -> Result<Vec<Node>> {
        let mut v = Vec::new();
        for item in self {
            v.push(item?);
        }
        Ok(v)
    }
}


/// Builds elements, verifying the DOM structure against a `MetaDb`
/// if one is given.
#[derive(Debug, Clone, Copy)]
pub struct HtmlBuilder {
    metadb: Option<&'static MetaDb>,
}

impl HtmlBuilder {
    pub fn new(verify: bool) -> Self {
        HtmlBuilder {
            metadb: if verify { Some(&*METADB) } else { None }
        }
    }

    pub fn element(
        &self,
        tag_name: &str,
        attr: impl ToAttributes,
        body: impl ToBody
    ) -> Result<Node> {
        let elt = Element::new(tag_name, attr, body);
        if let Some(metadb) = self.metadb {
            let meta = match metadb.get(tag_name) {
                Some(meta) => meta,
                None => bail!(MarkupError::UnknownElement(elt.tag_name)),
            };
            for (index, node) in elt.body.iter().enumerate() {
                match node {
                    Node::Element(child) =>
                        if !meta.allows_child_element(&child.tag_name) {
                            bail!(MarkupError::ChildElementNotAllowed {
                                index,
                                child: child.tag_name.clone(),
                                parent: meta.tag_name.clone(),
                            })
                        },
                    Node::String(s) =>
                        if !meta.allows_child_text && !all_whitespace(s) {
                            bail!(MarkupError::TextNotAllowed {
                                index,
                                parent: meta.tag_name.clone(),
                            })
                        },
                    // Would need re-parsing to verify.
                    Node::Preserialized(_) => (),
                    Node::Fragment(_) | Node::None =>
                        unreachable!("flattened by Element::new"),
                }
            }
        }
        Ok(Node::Element(elt))
    }

    pub fn empty_node(&self) -> Result<Node> {
        Ok(Node::None)
    }

    pub fn text<T>(&self, s: T) -> Result<Node>
    where KString: MyFrom<T>
    {
        Ok(Node::text(s))
    }
}

macro_rules! def_elements {
    ($($name:ident),*) => {
        impl HtmlBuilder {
            $(
                pub fn $name(
                    &self,
                    attr: impl ToAttributes,
                    body: impl ToBody
                ) -> Result<Node> {
                    self.element(stringify!($name), attr, body)
                }
            )*
        }
    }
}

def_elements!(a, div, span, h2, header, ul, li);


pub fn html_escape(out: &mut impl Write, bytes: &[u8]) -> std::io::Result<()> {
    let mut start = 0;
    for (i, b) in bytes.iter().enumerate() {
        let rep: &[u8] = match b {
            b'&' => b"&amp;",
            b'<' => b"&lt;",
            b'>' => b"&gt;",
            b'"' => b"&quot;",
            b'\'' => b"&#39;",
            _ => continue
        };
        out.write_all(&bytes[start..i])?;
        out.write_all(rep)?;
        start = i + 1;
    }
    out.write_all(&bytes[start..])
}

pub trait Print {
    /// Print serialized HTML.
    fn print_html_fragment(&self, out: &mut impl Write) -> Result<()>;

    fn to_html_string(&self) -> String {
        let mut v = Vec::new();
        self.print_html_fragment(&mut v).expect("no I/O errors can happen");
        String::from_utf8(v).expect("built from str values and ASCII literals only")
    }

    fn to_safe_html(&self) -> SafeHtml {
        SafeHtml(KString::from_string(self.to_html_string()))
    }
}

impl Print for (KString, KString) {
    fn print_html_fragment(&self, out: &mut impl Write) -> Result<()> {
        // Names from callers are checked with `is_valid_attr_name`
        // before they get here.
        out.write_all(self.0.as_bytes())?;
        out.write_all(b"=\"")?;
        html_escape(out, self.1.as_bytes())?;
        out.write_all(b"\"")?;
        Ok(())
    }
}

impl Print for Node {
    fn print_html_fragment(&self, out: &mut impl Write) -> Result<()> {
        Ok(match self {
            Node::Element(e) => e.print_html_fragment(out)?,
            Node::String(s) => html_escape(out, s.as_bytes())?,
            Node::Preserialized(ser) => out.write_all(ser.as_str().as_bytes())?,
            Node::Fragment(nodes) => nodes.print_html_fragment(out)?,
            Node::None => (),
        })
    }
}

impl Print for [Node] {
    fn print_html_fragment(&self, out: &mut impl Write) -> Result<()> {
        for node in self {
            node.print_html_fragment(out)?;
        }
        Ok(())
    }
}

impl Print for Vec<Node> {
    fn print_html_fragment(&self, out: &mut impl Write) -> Result<()> {
        self.as_slice().print_html_fragment(out)
    }
}

impl Print for Element {
    fn print_html_fragment(&self, out: &mut impl Write) -> Result<()> {
        out.write_all(b"<")?;
        out.write_all(self.tag_name.as_bytes())?;
        for att in &self.attr {
            out.write_all(b" ")?;
            att.print_html_fragment(out)?;
        }
        out.write_all(b">")?;
        self.body.print_html_fragment(out)?;
        if METADB.has_closing_tag(&self.tag_name) {
            out.write_all(b"</")?;
            out.write_all(self.tag_name.as_bytes())?;
            out.write_all(b">")?;
        }
        Ok(())
    }
}
