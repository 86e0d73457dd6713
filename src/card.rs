//! Tabler cards: a `div.card` assembled from optional parts.

pub mod body;
pub mod content;
pub mod footer;
pub mod header;
pub mod status;
pub mod table;

use anyhow::Result;
use kstring::KString;

use crate::{component::{ClassList, Html, ToHtml},
            markup::{Node, att},
            myfrom::{MyFrom, kstring},
            slot::{Slot, Slots}};

pub use self::{body::BodyComponent, content::ContentComponent, footer::FooterComponent,
               header::HeaderComponent, status::{StatusComponent, StatusPosition},
               table::TableComponent};

/// Renders, in this order and each only if given: status, header,
/// table, the body sections, free content, footer.
#[derive(Debug, Clone, PartialEq)]
pub struct CardComponent {
    class: Option<KString>,
    status: Slot<StatusComponent>,
    header: Slot<HeaderComponent>,
    table: Slot<TableComponent>,
    bodies: Slots<ContentComponent>,
    content: Node,
    footer: Slot<FooterComponent>,
}

impl Default for CardComponent {
    fn default() -> Self {
        CardComponent {
            class: None,
            status: Slot::optional("status"),
            header: Slot::optional("header"),
            table: Slot::optional("table"),
            bodies: Slots::new(),
            content: Node::None,
            footer: Slot::optional("footer"),
        }
    }
}

impl CardComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extra classes after `card`.
    pub fn class<T>(mut self, class: T) -> Self
    where KString: MyFrom<T>
    {
        self.class = Some(kstring(class));
        self
    }

    pub fn status(mut self, status: StatusComponent) -> Self {
        self.status.set(status);
        self
    }

    pub fn header(mut self, header: HeaderComponent) -> Self {
        self.header.set(header);
        self
    }

    pub fn table(mut self, table: TableComponent) -> Self {
        self.table.set(table);
        self
    }

    /// Appends a body section.
    pub fn body(mut self, body: ContentComponent) -> Self {
        self.bodies.push(body);
        self
    }

    pub fn content(mut self, content: impl Into<Node>) -> Self {
        self.content = content.into();
        self
    }

    pub fn footer(mut self, footer: FooterComponent) -> Self {
        self.footer.set(footer);
        self
    }
}

impl ToHtml for CardComponent {
    fn to_html(&self, html: &Html) -> Result<Node> {
        const NAME: &str = "Card";
        let class = ClassList::new().with("card").with_opt(self.class.as_deref());
        html.div(
            [att("class", class.to_string())],
            [
                self.status.to_html(html, NAME)?,
                self.header.to_html(html, NAME)?,
                self.table.to_html(html, NAME)?,
                self.bodies.to_html(html)?,
                present(&self.content),
                self.footer.to_html(html, NAME)?,
            ])
    }
}

/// `content` unless it is blank.
pub(crate) fn present(content: &Node) -> Node {
    if content.is_blank() {
        Node::None
    } else {
        content.clone()
    }
}
