//! Horizontal navigation bar.

use anyhow::Result;
use kstring::KString;

use crate::{component::{ClassList, Html, ToHtml},
            icon::IconRequest,
            markup::{Node, att},
            myfrom::{MyFrom, kstring},
            slot::Slots};

/// `header.navbar > div.container-xl > ul.navbar-nav > items`
#[derive(Debug, Clone, PartialEq)]
pub struct NavbarComponent {
    items: Slots<NavbarItemComponent>,
}

impl Default for NavbarComponent {
    fn default() -> Self {
        NavbarComponent { items: Slots::new() }
    }
}

impl NavbarComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item(mut self, item: NavbarItemComponent) -> Self {
        self.items.push(item);
        self
    }
}

impl ToHtml for NavbarComponent {
    fn to_html(&self, html: &Html) -> Result<Node> {
        html.header(
            [att("class", "navbar navbar-expand-md d-print-none")],
            [html.div(
                [att("class", "container-xl")],
                [html.ul([att("class", "navbar-nav")], self.items.to_html(html)?)?])?])
    }
}

/// A single link in a `NavbarComponent`.
#[derive(Debug, Clone, PartialEq)]
pub struct NavbarItemComponent {
    title: KString,
    href: KString,
    active: bool,
    icon: Option<IconRequest>,
}

impl NavbarItemComponent {
    pub fn new<T>(title: T) -> Self
    where KString: MyFrom<T>
    {
        NavbarItemComponent {
            title: kstring(title),
            href: KString::from_static("#"),
            active: false,
            icon: None,
        }
    }

    pub fn href<T>(mut self, href: T) -> Self
    where KString: MyFrom<T>
    {
        self.href = kstring(href);
        self
    }

    /// Marks the item for the current page.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// An icon by name, with default settings.
    pub fn icon(self, name: &str) -> Self {
        self.icon_request(IconRequest::new(name))
    }

    pub fn icon_request(mut self, request: IconRequest) -> Self {
        self.icon = Some(request);
        self
    }
}

impl ToHtml for NavbarItemComponent {
    fn to_html(&self, html: &Html) -> Result<Node> {
        let icon = match &self.icon {
            Some(request) => html.span(
                [att("class", "nav-link-icon d-md-none d-lg-inline-block")],
                [Node::from(html.icons().render(request))])?,
            None => html.empty_node()?,
        };
        let class = ClassList::new().with("nav-item").with_if(self.active, "active");
        html.li(
            [att("class", class.to_string())],
            [html.a(
                [att("class", "nav-link"), att("href", &self.href)],
                [
                    icon,
                    html.span([att("class", "nav-link-title")], [html.text(&self.title)?])?,
                ])?])
    }
}
