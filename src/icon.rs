//! Tabler SVG icons: look up the asset for a name and variant,
//! rewrite size, stroke width, classes and caller attributes on its
//! root `svg` element, serialize it again. Unknown icons become a
//! placeholder glyph, assets without a usable root are passed
//! through as they are. Rendering never fails.

use std::{fmt::{self, Display},
          str::FromStr,
          sync::Arc};

use anyhow::{Result, bail};
use kstring::KString;
use log::warn;

use crate::{attr_name::{dasherize, is_valid_attr_name},
            component::{ClassList, Html, ToHtml},
            config::{self, DEFAULT_ICON_SIZE, DEFAULT_STROKE_WIDTH},
            icon_store::{FsIconStore, IconStore},
            markup::{Element, Node, Print, SafeHtml, att, is_present},
            myfrom::{MyFrom, format_number},
            svg::{SVG_NS, parse_svg_root}};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Stroked line art.
    #[default]
    Outline,
    /// Solid silhouette.
    Filled,
}

impl Variant {
    /// Also the name of the asset subdirectory.
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Outline => "outline",
            Variant::Filled => "filled",
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "outline" => Ok(Variant::Outline),
            "filled" => Ok(Variant::Filled),
            _ => bail!("unknown icon variant {s:?}, expecting \"outline\" or \"filled\""),
        }
    }
}

/// What to render. `name` is lower-cased on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct IconRequest {
    name: KString,
    variant: Variant,
    size: u32,
    stroke_width: f64,
    class: Option<KString>,
    attributes: Vec<(KString, KString)>,
}

impl IconRequest {
    pub fn new(name: &str) -> Self {
        IconRequest {
            name: KString::from_string(name.to_lowercase()),
            variant: Variant::default(),
            size: DEFAULT_ICON_SIZE,
            stroke_width: DEFAULT_STROKE_WIDTH,
            class: None,
            attributes: Vec::new(),
        }
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// 0 means the default size.
    pub fn size(mut self, size: u32) -> Self {
        self.size = if size == 0 { DEFAULT_ICON_SIZE } else { size };
        self
    }

    /// Only used for `Variant::Outline` (and the placeholder). Values
    /// that are not positive and finite mean the default.
    pub fn stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = if stroke_width.is_finite() && stroke_width > 0. {
            stroke_width
        } else {
            DEFAULT_STROKE_WIDTH
        };
        self
    }

    /// Additional CSS class(es), appended after the icon classes.
    pub fn class<T>(mut self, class: Option<T>) -> Self
    where KString: MyFrom<T>
    {
        self.class = class.map(KString::myfrom);
        self
    }

    /// An extra attribute for the `svg` element. Underscores in `key`
    /// become dashes. A `class` key (in any case) is the same as
    /// calling `class`. Keys that are not valid attribute names are
    /// dropped when rendering.
    pub fn attribute<K, V>(mut self, key: K, val: V) -> Self
    where KString: MyFrom<K> + MyFrom<V>
    {
        let key = KString::myfrom(key);
        let val = KString::myfrom(val);
        if dasherize(&key).eq_ignore_ascii_case("class") {
            self.class = Some(val);
        } else {
            self.attributes.push((key, val));
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `icon icon-tabler icon-tabler-<name>` plus the custom class.
    pub fn css_classes(&self) -> String {
        ClassList::new()
            .with("icon")
            .with("icon-tabler")
            .with(format!("icon-tabler-{}", self.name))
            .with_opt(self.class.as_deref())
            .to_string()
    }
}

/// Asset names are used as path components.
fn is_valid_icon_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()
                            || c == '-' || c == '_')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderedIconKind {
    /// The asset, rewritten.
    Asset,
    /// The asset text, unmodified (no SVG root element found).
    Passthrough,
    /// The "icon not found" glyph.
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedIcon {
    kind: RenderedIconKind,
    html: SafeHtml,
}

impl RenderedIcon {
    pub fn kind(&self) -> RenderedIconKind {
        self.kind
    }

    pub fn as_str(&self) -> &str {
        self.html.as_str()
    }

    pub fn into_safe_html(self) -> SafeHtml {
        self.html
    }
}

impl Display for RenderedIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<RenderedIcon> for Node {
    fn from(icon: RenderedIcon) -> Self {
        Node::Preserialized(icon.into_safe_html())
    }
}

/// Renders `IconRequest`s from an `IconStore`. Cheap to clone; the
/// store is shared.
#[derive(Clone)]
pub struct IconRenderer {
    store: Arc<dyn IconStore>,
}

impl IconRenderer {
    pub fn new(store: impl IconStore + 'static) -> Self {
        IconRenderer { store: Arc::new(store) }
    }

    pub fn from_arc(store: Arc<dyn IconStore>) -> Self {
        IconRenderer { store }
    }

    /// Icons from the directory given by `$TABLER_ICONS_DIR`, or the
    /// bundled set.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(FsIconStore::new(config::icons_dir()?)))
    }

    pub fn render(&self, request: &IconRequest) -> RenderedIcon {
        let source = match self.load(request) {
            Some(source) => source,
            None => return placeholder(request),
        };
        match parse_svg_root(&source) {
            Ok(svg) => RenderedIcon {
                kind: RenderedIconKind::Asset,
                html: rewrite(svg, request).to_safe_html(),
            },
            Err(e) => {
                warn!("icon {:?} ({}): {e}, passing it through unmodified",
                      request.name(), request.variant);
                RenderedIcon {
                    kind: RenderedIconKind::Passthrough,
                    html: SafeHtml::from_trusted(source),
                }
            }
        }
    }

    fn load(&self, request: &IconRequest) -> Option<String> {
        let name = request.name();
        if !is_valid_icon_name(name) {
            warn!("invalid icon name {name:?}");
            return None
        }
        match self.store.load(request.variant, name) {
            Ok(Some(source)) => Some(source),
            Ok(None) => {
                warn!("icon not found: {name:?} ({})", request.variant);
                None
            }
            Err(e) => {
                warn!("loading icon {name:?} ({}): {e:#}", request.variant);
                None
            }
        }
    }
}

impl fmt::Debug for IconRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IconRenderer").finish_non_exhaustive()
    }
}

/// Appends `addition` after `existing` with `sep`, unless `existing`
/// is blank.
fn append_to_existing(existing: Option<&str>, sep: &str, addition: String) -> String {
    match existing {
        Some(existing) if is_present(Some(existing)) =>
            format!("{existing}{sep}{addition}"),
        _ => addition,
    }
}

fn rewrite(mut svg: Element, request: &IconRequest) -> Element {
    let size = request.size;
    svg.set_attr("width", size);
    svg.set_attr("height", size);

    // Inline styles, to win over the Tabler CSS.
    let mut styles = vec![format!("width: {size}px"),
                          format!("height: {size}px")];
    if request.variant == Variant::Outline {
        let stroke_width = format_number(request.stroke_width);
        styles.push(format!("stroke-width: {stroke_width}"));
        svg.set_attr("stroke-width", stroke_width);
    }
    let style = append_to_existing(svg.get_attr("style"), "; ", styles.join("; "));
    svg.set_attr("style", style);

    let class = append_to_existing(svg.get_attr("class"), " ", request.css_classes());
    svg.set_attr("class", class);

    for (key, val) in &request.attributes {
        let key = dasherize(key);
        if is_valid_attr_name(&key) {
            svg.set_attr_ignore_ascii_case(key, val);
        } else {
            warn!("icon {:?}: ignoring invalid attribute name {key:?}", request.name());
        }
    }
    svg
}

fn placeholder(request: &IconRequest) -> RenderedIcon {
    let path = |d: &'static str| Node::Element(Element::new("path", [att("d", d)], []));
    let svg = Element::new(
        "svg",
        [
            att("xmlns", SVG_NS),
            att("width", request.size),
            att("height", request.size),
            att("viewBox", "0 0 24 24"),
            att("fill", "none"),
            att("stroke", "currentColor"),
            att("stroke-width", request.stroke_width),
            att("stroke-linecap", "round"),
            att("stroke-linejoin", "round"),
            att("class", request.css_classes()),
        ],
        [
            Node::Element(Element::new(
                "title", [],
                [Node::text(format!("Icon not found: {}", request.name()))])),
            path("M12 12m-9 0a9 9 0 1 0 18 0a9 9 0 1 0 -18 0"),
            path("M9 9l6 6"),
            path("M15 9l-6 6"),
        ]);
    RenderedIcon {
        kind: RenderedIconKind::Placeholder,
        html: svg.to_safe_html(),
    }
}

/// An icon as a component.
#[derive(Debug, Clone, PartialEq)]
pub struct IconComponent(pub IconRequest);

impl IconComponent {
    pub fn new(name: &str) -> Self {
        IconComponent(IconRequest::new(name))
    }
}

impl From<IconRequest> for IconComponent {
    fn from(request: IconRequest) -> Self {
        IconComponent(request)
    }
}

impl ToHtml for IconComponent {
    fn to_html(&self, html: &Html) -> Result<Node> {
        Ok(html.icons().render(&self.0).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon_store::MemoryIconStore;

    fn bundled() -> IconRenderer {
        IconRenderer::new(FsIconStore::new(config::bundled_icons_dir()))
    }

    fn memory(variant: Variant, name: &str, svg: &str) -> IconRenderer {
        let mut store = MemoryIconStore::new();
        store.insert(variant, name, svg);
        IconRenderer::new(store)
    }

    #[test]
    fn t_outline_home() {
        let r = bundled().render(
            &IconRequest::new("home").size(32).stroke_width(1.5));
        assert_eq!(r.kind(), RenderedIconKind::Asset);
        assert!(r.as_str().starts_with(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"32\" height=\"32\" \
             viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"currentColor\" \
             stroke-width=\"1.5\" stroke-linecap=\"round\" stroke-linejoin=\"round\" \
             style=\"width: 32px; height: 32px; stroke-width: 1.5\" \
             class=\"icon icon-tabler icon-tabler-home\">"),
                "{}", r);
        assert!(r.as_str().contains("<path d=\"M5 12l-2 0l9 -9l9 9l-2 0\"></path>"));
        assert!(r.as_str().ends_with("</svg>"));
    }

    #[test]
    fn t_filled_has_no_stroke_width() {
        let r = bundled().render(
            &IconRequest::new("star").variant(Variant::Filled).size(16).stroke_width(3.));
        assert_eq!(r.kind(), RenderedIconKind::Asset);
        assert!(r.as_str().contains(" width=\"16\" height=\"16\" "));
        assert!(r.as_str().contains("style=\"width: 16px; height: 16px\""));
        assert!(!r.as_str().contains("stroke-width"));
        assert!(r.as_str().contains("class=\"icon icon-tabler icon-tabler-star\""));
    }

    #[test]
    fn t_placeholder() {
        let r = bundled().render(&IconRequest::new("does-not-exist"));
        assert_eq!(r.kind(), RenderedIconKind::Placeholder);
        assert_eq!(r.as_str(),
                   "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"24\" height=\"24\" \
                    viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"currentColor\" \
                    stroke-width=\"2\" stroke-linecap=\"round\" stroke-linejoin=\"round\" \
                    class=\"icon icon-tabler icon-tabler-does-not-exist\">\
                    <title>Icon not found: does-not-exist</title>\
                    <path d=\"M12 12m-9 0a9 9 0 1 0 18 0a9 9 0 1 0 -18 0\"></path>\
                    <path d=\"M9 9l6 6\"></path>\
                    <path d=\"M15 9l-6 6\"></path></svg>");
    }

    #[test]
    fn t_placeholder_size_and_class() {
        let r = bundled().render(
            &IconRequest::new("nope").size(40).class(Some("text-danger"))
                .attribute("aria_label", "x"));
        assert!(r.as_str().contains("width=\"40\" height=\"40\""));
        assert!(r.as_str().contains("Icon not found: nope"));
        assert!(r.as_str().contains("class=\"icon icon-tabler icon-tabler-nope text-danger\""));
        // extra attributes are not applied to the placeholder
        assert!(!r.as_str().contains("aria-label"));
    }

    #[test]
    fn t_missing_variant_is_placeholder() {
        // "trash" only exists as outline
        let r = bundled().render(&IconRequest::new("trash").variant(Variant::Filled));
        assert_eq!(r.kind(), RenderedIconKind::Placeholder);
        let r = bundled().render(&IconRequest::new("trash"));
        assert_eq!(r.kind(), RenderedIconKind::Asset);
    }

    #[test]
    fn t_name_is_lowercased_and_checked() {
        let r = bundled().render(&IconRequest::new("HOME"));
        assert_eq!(r.kind(), RenderedIconKind::Asset);
        assert!(r.as_str().contains("icon-tabler-home"));
        for name in ["../outline/home", "", "home.svg", "hö"] {
            let r = bundled().render(&IconRequest::new(name));
            assert_eq!(r.kind(), RenderedIconKind::Placeholder, "{name:?}");
        }
    }

    #[test]
    fn t_merge_existing_style_and_class() {
        let r = memory(
            Variant::Outline, "dot",
            "<svg xmlns=\"http://www.w3.org/2000/svg\" class=\"icon foo\" \
             style=\"color: red\" width=\"12\"><circle r=\"1\"/></svg>");
        let out = r.render(&IconRequest::new("dot").class(Some("me-2")));
        assert_eq!(out.as_str(),
                   "<svg xmlns=\"http://www.w3.org/2000/svg\" \
                    class=\"icon foo icon icon-tabler icon-tabler-dot me-2\" \
                    style=\"color: red; width: 24px; height: 24px; stroke-width: 2\" \
                    width=\"24\" height=\"24\" stroke-width=\"2\">\
                    <circle r=\"1\"></circle></svg>");
    }

    #[test]
    fn t_blank_existing_style_is_replaced() {
        let r = memory(
            Variant::Filled, "dot",
            "<svg xmlns=\"http://www.w3.org/2000/svg\" style=\"  \" class=\"\"/>");
        let out = r.render(&IconRequest::new("dot").variant(Variant::Filled));
        assert_eq!(out.as_str(),
                   "<svg xmlns=\"http://www.w3.org/2000/svg\" \
                    style=\"width: 24px; height: 24px\" \
                    class=\"icon icon-tabler icon-tabler-dot\" \
                    width=\"24\" height=\"24\"></svg>");
    }

    #[test]
    fn t_extra_attributes() {
        let r = memory(
            Variant::Outline, "dot",
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 24 24\" \
             aria-hidden=\"true\"/>");
        let out = r.render(
            &IconRequest::new("dot")
                .attribute("aria_hidden", "false")
                .attribute("data_controller", "icon")
                .attribute("viewbox", "0 0 12 12")
                .attribute("class", "text-primary"));
        assert_eq!(out.as_str(),
                   "<svg xmlns=\"http://www.w3.org/2000/svg\" viewbox=\"0 0 12 12\" \
                    aria-hidden=\"false\" width=\"24\" height=\"24\" stroke-width=\"2\" \
                    style=\"width: 24px; height: 24px; stroke-width: 2\" \
                    class=\"icon icon-tabler icon-tabler-dot text-primary\" \
                    data-controller=\"icon\"></svg>");
    }

    #[test]
    fn t_class_key_in_any_case() {
        let r = bundled().render(&IconRequest::new("home").attribute("CLASS", "text-red"));
        assert!(r.as_str().contains("class=\"icon icon-tabler icon-tabler-home text-red\""),
                "{r}");
        assert!(!r.as_str().contains("CLASS"));
    }

    #[test]
    fn t_invalid_attribute_name_is_skipped() {
        let r = bundled().render(
            &IconRequest::new("home")
                .attribute("x><script>alert(1)</script><svg a", "b")
                .attribute("aria_label", "Home"));
        assert_eq!(r.kind(), RenderedIconKind::Asset);
        assert!(!r.as_str().contains("<script>"));
        assert!(r.as_str().contains(" aria-label=\"Home\""));
    }

    #[test]
    fn t_size_and_stroke_width_fall_back() {
        let req = IconRequest::new("home").size(0).stroke_width(f64::NAN);
        let r = bundled().render(&req);
        assert!(r.as_str().contains(" width=\"24\" height=\"24\" "));
        assert!(r.as_str().contains("stroke-width: 2\""));
        assert!(!r.as_str().contains("NaN"));
        for w in [0., -1.5, f64::INFINITY] {
            assert_eq!(IconRequest::new("home").stroke_width(w),
                       IconRequest::new("home"));
        }
        assert_eq!(IconRequest::new("home").size(0), IconRequest::new("home"));
    }

    #[test]
    fn t_shared_store() {
        let mut store = MemoryIconStore::new();
        store.insert(Variant::Outline, "dot", "<svg xmlns=\"http://www.w3.org/2000/svg\"/>");
        let store: Arc<dyn IconStore> = Arc::new(store);
        let a = IconRenderer::from_arc(store.clone());
        let b = IconRenderer::from_arc(store);
        let req = IconRequest::new("dot");
        assert_eq!(a.render(&req), b.render(&req));
        let html = a.render(&req).into_safe_html();
        assert!(html.as_str().starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"24\""));
    }

    #[test]
    fn t_passthrough() {
        // not in the SVG namespace
        let src = "<svg width=\"10\"><path d=\"M0 0\"/></svg>";
        let out = memory(Variant::Outline, "plain", src).render(&IconRequest::new("plain"));
        assert_eq!(out.kind(), RenderedIconKind::Passthrough);
        assert_eq!(out.as_str(), src);

        let src = "<svg xmlns=\"http://www.w3.org/2000/svg\"><path></svg>";
        let out = memory(Variant::Outline, "broken", src).render(&IconRequest::new("broken"));
        assert_eq!(out.kind(), RenderedIconKind::Passthrough);
        assert_eq!(out.as_str(), src);
    }

    #[test]
    fn t_no_accumulation_across_calls() {
        let r = bundled();
        let a = r.render(&IconRequest::new("settings").size(16).stroke_width(1.));
        let b = r.render(&IconRequest::new("settings").size(48));
        assert!(a.as_str().contains("width: 16px; height: 16px; stroke-width: 1\""));
        assert!(b.as_str().contains("style=\"width: 48px; height: 48px; stroke-width: 2\""));
        assert!(!b.as_str().contains("16px"));
        assert_eq!(b, r.render(&IconRequest::new("settings").size(48)));
    }

    #[test]
    fn t_store_error_is_placeholder() -> Result<()> {
        let dir = tempfile::tempdir()?;
        std::fs::create_dir_all(dir.path().join("outline/home.svg"))?;
        let r = IconRenderer::new(FsIconStore::new(dir.path()));
        assert_eq!(r.render(&IconRequest::new("home")).kind(),
                   RenderedIconKind::Placeholder);
        Ok(())
    }

    #[test]
    fn t_shared_between_threads() {
        let r = bundled();
        std::thread::scope(|s| {
            for size in [12, 24, 36] {
                let r = &r;
                s.spawn(move || {
                    let out = r.render(&IconRequest::new("search").size(size));
                    assert!(out.as_str().contains(&format!("width=\"{size}\"")));
                });
            }
        });
    }

    #[test]
    fn t_icon_component() -> Result<()> {
        use crate::component::{Render, test_html};
        let html = test_html();
        let s = IconComponent::from(IconRequest::new("check").class(Some("text-green")))
            .render(&html)?;
        assert!(s.as_str().starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"24\""));
        assert!(s.as_str().contains("class=\"icon icon-tabler icon-tabler-check text-green\""));
        let inner = html.div([att("class", "d-flex")], [IconComponent::new("nope").to_html(&html)?])?;
        assert!(inner.to_html_string().contains("Icon not found: nope"));
        Ok(())
    }

    #[test]
    fn t_variant_from_str() {
        assert_eq!("filled".parse::<Variant>().unwrap(), Variant::Filled);
        assert_eq!("outline".parse::<Variant>().unwrap(), Variant::Outline);
        assert!("bold".parse::<Variant>().is_err());
        assert_eq!(Variant::default(), Variant::Outline);
    }
}
