//! Tabler page layout: navbars on top, a page wrapper with the
//! content below.

pub mod body;
pub mod content;
pub mod header;

use anyhow::Result;

use crate::{component::{Html, ToHtml},
            markup::{Node, att},
            navbar::NavbarComponent,
            slot::Slots};

pub use self::{body::BodyComponent, content::ContentComponent, header::HeaderComponent};

#[derive(Debug, Clone, PartialEq)]
pub struct PageComponent {
    navbars: Slots<NavbarComponent>,
    content: Node,
}

impl Default for PageComponent {
    fn default() -> Self {
        PageComponent { navbars: Slots::new(), content: Node::None }
    }
}

impl PageComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navbar(mut self, navbar: NavbarComponent) -> Self {
        self.navbars.push(navbar);
        self
    }

    /// Usually a rendered `page::ContentComponent`.
    pub fn content(mut self, content: impl Into<Node>) -> Self {
        self.content = content.into();
        self
    }
}

impl ToHtml for PageComponent {
    fn to_html(&self, html: &Html) -> Result<Node> {
        html.div(
            [att("class", "page")],
            [
                self.navbars.to_html(html)?,
                html.div([att("class", "page-wrapper")], [self.content.clone()])?,
            ])
    }
}
