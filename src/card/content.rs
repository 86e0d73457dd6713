use anyhow::Result;
use kstring::KString;

use crate::{card::{BodyComponent, HeaderComponent, header::text_div, present},
            component::{Html, ToHtml},
            markup::{Node, att, is_present},
            myfrom::{MyFrom, kstring},
            slot::Slot};

/// One body section of a card: an optional header, an optional body,
/// and a plain `div.card-body` for title and free content.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentComponent {
    title: Option<KString>,
    header: Slot<HeaderComponent>,
    body: Slot<BodyComponent>,
    content: Node,
}

impl Default for ContentComponent {
    fn default() -> Self {
        ContentComponent {
            title: None,
            header: Slot::optional("header"),
            body: Slot::optional("body"),
            content: Node::None,
        }
    }
}

impl ContentComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title<T>(mut self, title: T) -> Self
    where KString: MyFrom<T>
    {
        self.title = Some(kstring(title));
        self
    }

    pub fn header(mut self, header: HeaderComponent) -> Self {
        self.header.set(header);
        self
    }

    pub fn body(mut self, body: BodyComponent) -> Self {
        self.body.set(body);
        self
    }

    pub fn content(mut self, content: impl Into<Node>) -> Self {
        self.content = content.into();
        self
    }
}

impl ToHtml for ContentComponent {
    fn to_html(&self, html: &Html) -> Result<Node> {
        const NAME: &str = "card::Content";
        let has_title = is_present(self.title.as_deref());
        let card_body = if has_title || !self.content.is_blank() {
            html.div(
                [att("class", "card-body")],
                [
                    text_div(html, "card-title", self.title.as_ref())?,
                    present(&self.content),
                ])?
        } else {
            html.empty_node()?
        };
        Ok(Node::Fragment(vec![
            self.header.to_html(html, NAME)?,
            self.body.to_html(html, NAME)?,
            card_body,
        ]))
    }
}
